pub mod converter;
pub mod ingredients;
pub mod quantity;
pub mod units;

// Re-export the common entry points
pub use converter::{convert_to_grams, describe_conversion, ConversionRequest, ConversionRequestError};
pub use ingredients::{
    find_ingredient, ingredient_names, write_ingredient_table, IngredientSpec, REFERENCE_TEMPERATURE_C,
};
pub use quantity::{parse_quantity, QuantityParseError};
pub use units::{cups_per_unit, grams_per_mass_unit, selectable_units};
