//! Adds gram equivalents to the ingredient quantities found in free text.
//!
//! Each line is scanned for `<quantity> <unit word(s)> [of] <ingredient>`
//! runs ending at a comma or the end of the line. Every run that converts is
//! followed by ` (<grams>g)`; everything else is left exactly as it was.
//! Running it over already annotated text is not guaranteed to be a no-op.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::conversion::{convert_to_grams, parse_quantity};

static INGREDIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d./\s]+)\s+(\w+(?:\s+\w+)?)\s+(?:of\s+)?(.+?)(,|$)")
        .expect("ingredient pattern should compile")
});

/// One quantity/unit/ingredient run found in a line.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientMatch<'a> {
    /// The text that gets annotated: quantity through ingredient, terminator excluded.
    pub span: &'a str,
    pub quantity: &'a str,
    pub unit: &'a str,
    pub ingredient: &'a str,
}

impl<'a> IngredientMatch<'a> {
    fn from_captures(line: &'a str, caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let ingredient = caps.get(3)?;
        Some(Self {
            span: &line[whole.start()..ingredient.end()],
            quantity: caps.get(1)?.as_str(),
            unit: caps.get(2)?.as_str(),
            ingredient: ingredient.as_str(),
        })
    }

    /// Grams for this run at `temperature_c`, or `None` when the quantity
    /// does not parse or nothing converts.
    pub fn grams(&self, temperature_c: f64) -> Option<f64> {
        let quantity = match parse_quantity(self.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                debug!(text = self.span, error = %e, "skipping unparseable quantity");
                return None;
            }
        };

        // The unit pattern is greedy, so "2 cups granulated sugar" captures
        // "cups granulated" as the unit and does not convert.
        convert_to_grams(quantity, self.unit, self.ingredient, temperature_c)
    }
}

/// Finds every non-overlapping ingredient run in `line`, left to right.
pub fn find_ingredient_matches(line: &str) -> Vec<IngredientMatch<'_>> {
    INGREDIENT_PATTERN
        .captures_iter(line)
        .filter_map(|caps| IngredientMatch::from_captures(line, &caps))
        .collect()
}

/// Annotates a single line. Blank lines and lines without a convertible run
/// come back unchanged.
pub fn annotate_line(line: &str, temperature_c: f64) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }

    let mut annotated = line.to_string();
    for found in find_ingredient_matches(line) {
        let Some(grams) = found.grams(temperature_c) else {
            continue;
        };
        // Only the first occurrence of the span is annotated, even if the
        // same text repeats later in the line.
        let replacement = format!("{} ({})", found.span, format_grams(grams));
        annotated = annotated.replacen(found.span, &replacement, 1);
    }
    annotated
}

/// Annotates every line of `text`, keeping line order and blank lines intact.
pub fn annotate_recipe(text: &str, temperature_c: f64) -> String {
    text.split('\n')
        .map(|line| annotate_line(line, temperature_c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads a recipe file and annotates it.
pub async fn annotate_recipe_file(path: &Path, temperature_c: f64) -> Result<String> {
    let recipe_text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read recipe file '{}'", path.display()))?;
    Ok(annotate_recipe(&recipe_text, temperature_c))
}

/// Formats grams rounded to one decimal place, e.g. `120.0g`.
/// Huge values are written out in full, never in exponent form.
pub fn format_grams(grams: f64) -> String {
    format!("{:.1}g", grams)
}
