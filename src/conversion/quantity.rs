use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityParseError {
    #[error("quantity is empty")]
    Empty,
    #[error("'{0}' is not a number, fraction or mixed number")]
    Malformed(String),
    #[error("'{0}' divides by zero")]
    DivisionByZero(String),
}

/// Parses a recipe quantity: `2`, `0.5`, `3/4` or a mixed number like `1 1/2`.
///
/// Surrounding whitespace is ignored. The sign of the result is not checked.
pub fn parse_quantity(text: &str) -> Result<f64, QuantityParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuantityParseError::Empty);
    }

    if !text.contains('/') {
        return parse_number(text, text);
    }

    match text.split_once(' ') {
        // Mixed number, e.g. "1 1/2"
        Some((whole, fraction)) => {
            let whole = parse_number(whole, text)?;
            Ok(whole + parse_fraction(fraction, text)?)
        }
        None => parse_fraction(text, text),
    }
}

fn parse_fraction(fraction: &str, original: &str) -> Result<f64, QuantityParseError> {
    let mut parts = fraction.split('/');
    let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(QuantityParseError::Malformed(original.to_string()));
    };

    let numerator = parse_number(numerator, original)?;
    let denominator = parse_number(denominator, original)?;
    if denominator == 0.0 {
        return Err(QuantityParseError::DivisionByZero(original.to_string()));
    }
    Ok(numerator / denominator)
}

fn parse_number(part: &str, original: &str) -> Result<f64, QuantityParseError> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QuantityParseError::Malformed(original.to_string()))
}
