use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::ingredients::{find_ingredient, IngredientSpec, REFERENCE_TEMPERATURE_C};
use super::units::{cups_per_unit, grams_per_mass_unit};

/// Converts `quantity` of `unit` of `ingredient` into grams, adjusting the
/// ingredient's density for `temperature_c`.
///
/// Returns `None` when the ingredient is not in the table or the unit is
/// neither its counted unit, a volume unit nor a mass unit. That is an
/// ordinary outcome for free text, not an error.
pub fn convert_to_grams(quantity: f64, unit: &str, ingredient: &str, temperature_c: f64) -> Option<f64> {
    let unit = unit.trim().to_lowercase();
    let spec = find_ingredient(ingredient)?;
    let adjusted_density = adjusted_density(spec, temperature_c);

    if let Some(counted_unit) = spec.counted_unit {
        if unit == counted_unit || unit.strip_suffix('s') == Some(counted_unit) {
            return Some(quantity * adjusted_density);
        }
    }

    if let Some(cups_per_unit) = cups_per_unit(&unit) {
        let cups = quantity * cups_per_unit;
        return Some(cups * adjusted_density);
    }

    // Mass units do not depend on density at all
    grams_per_mass_unit(&unit).map(|grams_per_unit| quantity * grams_per_unit)
}

/// Density of `spec` at `temperature_c`, on a linear model around 20°C:
/// every 10°C of deviation shifts the density by `temp_factor` of its value.
pub fn adjusted_density(spec: &IngredientSpec, temperature_c: f64) -> f64 {
    let temp_diff = temperature_c - REFERENCE_TEMPERATURE_C;
    let density_adjustment = 1.0 + (spec.temp_factor * temp_diff / 10.0);
    spec.density_grams_per_cup * density_adjustment
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionRequestError {
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),
    #[error("temperature must be a finite number of degrees Celsius, got {0}")]
    InvalidTemperature(f64),
}

/// A single hand-entered conversion. Unlike quantities pulled out of recipe
/// text, nothing upstream has filtered these, so they are validated here.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ConversionRequest {
    pub quantity: f64,
    pub unit: String,
    pub ingredient: String,
    pub temperature_c: f64,
}

impl ConversionRequest {
    pub fn new(
        quantity: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
        temperature_c: f64,
    ) -> Result<Self, ConversionRequestError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ConversionRequestError::InvalidQuantity(quantity));
        }
        if !temperature_c.is_finite() {
            return Err(ConversionRequestError::InvalidTemperature(temperature_c));
        }
        Ok(Self {
            quantity,
            unit: unit.into(),
            ingredient: ingredient.into(),
            temperature_c,
        })
    }

    /// Same as `new`, at the reference temperature.
    pub fn at_reference_temperature(
        quantity: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Result<Self, ConversionRequestError> {
        Self::new(quantity, unit, ingredient, REFERENCE_TEMPERATURE_C)
    }

    pub fn convert(&self) -> Option<f64> {
        let grams = convert_to_grams(self.quantity, &self.unit, &self.ingredient, self.temperature_c);
        debug!(
            quantity = self.quantity,
            unit = %self.unit,
            ingredient = %self.ingredient,
            temperature_c = self.temperature_c,
            ?grams,
            "single ingredient conversion"
        );
        grams
    }
}

/// Renders the outcome of a single conversion for display.
pub fn describe_conversion(request: &ConversionRequest, grams: Option<f64>) -> String {
    match grams {
        Some(grams) => format!(
            "{} {} of {} = {:.1}g",
            request.quantity, request.unit, request.ingredient, grams
        ),
        None => format!(
            "Cannot convert {} with the selected unit. Please try another unit.",
            request.ingredient
        ),
    }
}
