//! Unit tables. Volume units are expressed in cups (the reference volume
//! unit the ingredient densities use); mass units go straight to grams.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const CUPS_PER_TBSP: f64 = 0.0625;
pub const CUPS_PER_TSP: f64 = 0.0208333;
pub const CUPS_PER_FL_OZ: f64 = 0.125;
pub const CUPS_PER_ML: f64 = 0.00422675;
pub const CUPS_PER_L: f64 = 4.22675;
pub const CUPS_PER_PINT: f64 = 2.0;
pub const CUPS_PER_QUART: f64 = 4.0;
pub const CUPS_PER_GALLON: f64 = 16.0;

pub const GRAMS_PER_KG: f64 = 1000.0;
pub const GRAMS_PER_OZ: f64 = 28.35;
pub const GRAMS_PER_LB: f64 = 453.59;

const VOLUME_ALIASES: &[(&str, f64)] = &[
    ("cup", 1.0),
    ("cups", 1.0),
    ("tablespoon", CUPS_PER_TBSP),
    ("tablespoons", CUPS_PER_TBSP),
    ("tbsp", CUPS_PER_TBSP),
    ("teaspoon", CUPS_PER_TSP),
    ("teaspoons", CUPS_PER_TSP),
    ("tsp", CUPS_PER_TSP),
    ("fluid ounce", CUPS_PER_FL_OZ),
    ("fluid ounces", CUPS_PER_FL_OZ),
    ("fl oz", CUPS_PER_FL_OZ),
    ("milliliter", CUPS_PER_ML),
    ("milliliters", CUPS_PER_ML),
    ("ml", CUPS_PER_ML),
    ("liter", CUPS_PER_L),
    ("liters", CUPS_PER_L),
    ("l", CUPS_PER_L),
    ("pint", CUPS_PER_PINT),
    ("pints", CUPS_PER_PINT),
    ("pt", CUPS_PER_PINT),
    ("quart", CUPS_PER_QUART),
    ("quarts", CUPS_PER_QUART),
    ("qt", CUPS_PER_QUART),
    ("gallon", CUPS_PER_GALLON),
    ("gallons", CUPS_PER_GALLON),
    ("gal", CUPS_PER_GALLON),
];

const MASS_ALIASES: &[(&str, f64)] = &[
    ("gram", 1.0),
    ("g", 1.0),
    ("grams", 1.0),
    ("kilogram", GRAMS_PER_KG),
    ("kg", GRAMS_PER_KG),
    ("kilograms", GRAMS_PER_KG),
    ("ounce", GRAMS_PER_OZ),
    ("oz", GRAMS_PER_OZ),
    ("ounces", GRAMS_PER_OZ),
    ("pound", GRAMS_PER_LB),
    ("lb", GRAMS_PER_LB),
    ("pounds", GRAMS_PER_LB),
];

/// Mass units offered next to the volume aliases when picking a unit by hand.
const SELECTABLE_MASS_UNITS: &[&str] = &["gram", "g", "ounce", "oz", "pound", "lb"];

static VOLUME_INDEX: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| VOLUME_ALIASES.iter().copied().collect());

static MASS_INDEX: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| MASS_ALIASES.iter().copied().collect());

/// How many cups one of `unit` holds, if `unit` is a known volume alias.
pub fn cups_per_unit(unit: &str) -> Option<f64> {
    VOLUME_INDEX.get(unit.trim().to_lowercase().as_str()).copied()
}

/// How many grams one of `unit` weighs, if `unit` is a known mass alias.
pub fn grams_per_mass_unit(unit: &str) -> Option<f64> {
    MASS_INDEX.get(unit.trim().to_lowercase().as_str()).copied()
}

/// Every unit a user can pick for a single-ingredient conversion, sorted.
pub fn selectable_units() -> Vec<&'static str> {
    let mut units: Vec<&'static str> = VOLUME_ALIASES
        .iter()
        .map(|(alias, _)| *alias)
        .chain(SELECTABLE_MASS_UNITS.iter().copied())
        .collect();
    units.sort_unstable();
    units
}
