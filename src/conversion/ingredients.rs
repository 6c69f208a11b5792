use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::sync::LazyLock;

/// Temperature (°C) at which every density in the table was measured.
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

/// One known ingredient: its density at the reference temperature and how
/// strongly that density drifts with temperature.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct IngredientSpec {
    pub name: &'static str,
    /// Grams per cup at 20°C, or grams per counted unit when `counted_unit` is set.
    pub density_grams_per_cup: f64,
    /// Fractional density change per 10°C away from the reference temperature.
    pub temp_factor: f64,
    /// Non-volume unit (e.g. "each") this ingredient is measured in.
    pub counted_unit: Option<&'static str>,
}

const fn volume(name: &'static str, density_grams_per_cup: f64, temp_factor: f64) -> IngredientSpec {
    IngredientSpec {
        name,
        density_grams_per_cup,
        temp_factor,
        counted_unit: None,
    }
}

const fn counted(
    name: &'static str,
    density_grams_per_unit: f64,
    temp_factor: f64,
    unit: &'static str,
) -> IngredientSpec {
    IngredientSpec {
        name,
        density_grams_per_cup: density_grams_per_unit,
        temp_factor,
        counted_unit: Some(unit),
    }
}

const INGREDIENTS: &[IngredientSpec] = &[
    // Flours
    volume("all-purpose flour", 120.0, 0.02),
    volume("bread flour", 127.0, 0.02),
    volume("cake flour", 112.0, 0.02),
    volume("whole wheat flour", 130.0, 0.02),
    // Sugars
    volume("granulated sugar", 200.0, 0.005),
    volume("brown sugar", 220.0, 0.01),
    volume("powdered sugar", 125.0, 0.005),
    // Fats and liquids
    volume("butter", 227.0, 0.05),
    volume("vegetable oil", 224.0, 0.01),
    volume("milk", 242.0, 0.02),
    volume("heavy cream", 238.0, 0.02),
    volume("water", 237.0, 0.01),
    // Leaveners and seasoning
    volume("salt", 288.0, 0.001),
    volume("baking powder", 192.0, 0.005),
    volume("baking soda", 220.0, 0.005),
    volume("cocoa powder", 106.0, 0.02),
    // Syrups
    volume("honey", 340.0, 0.03),
    volume("maple syrup", 322.0, 0.03),
    // Mix-ins
    volume("rolled oats", 85.0, 0.01),
    volume("chopped nuts", 113.0, 0.01),
    volume("chocolate chips", 170.0, 0.01),
    // Measured per piece / per spoon
    counted("eggs", 50.0, 0.02, "each"),
    counted("vanilla extract", 4.2, 0.01, "teaspoon"),
    counted("yeast", 3.0, 0.005, "teaspoon"),
];

static INGREDIENT_INDEX: LazyLock<HashMap<&'static str, &'static IngredientSpec>> =
    LazyLock::new(|| INGREDIENTS.iter().map(|spec| (spec.name, spec)).collect());

/// Looks up an ingredient by name. The name is trimmed and lowercased first;
/// anything not in the table yields `None`.
pub fn find_ingredient(name: &str) -> Option<&'static IngredientSpec> {
    let key = name.trim().to_lowercase();
    INGREDIENT_INDEX.get(key.as_str()).copied()
}

/// All ingredient names, sorted alphabetically.
pub fn ingredient_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = INGREDIENTS.iter().map(|spec| spec.name).collect();
    names.sort_unstable();
    names
}

#[derive(Debug, Serialize)]
struct IngredientTableRow<'a> {
    #[serde(rename = "Ingredient")]
    ingredient: &'a str,
    #[serde(rename = "Density (g/cup)")]
    density: f64,
    #[serde(rename = "Temp Factor")]
    temp_factor: f64,
    #[serde(rename = "Special Unit")]
    special_unit: &'a str,
}

/// Writes the ingredient reference table as CSV, in table order.
pub fn write_ingredient_table<W: Write>(writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for spec in INGREDIENTS {
        csv_writer.serialize(IngredientTableRow {
            ingredient: spec.name,
            density: spec.density_grams_per_cup,
            temp_factor: spec.temp_factor,
            special_unit: spec.counted_unit.unwrap_or("-"),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
