use crate::InvalidAmount;
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for numeric coercion
static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());
static RADIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0(?:([xX])([0-9a-fA-F]+)|([oO])([0-7]+)|([bB])([01]+))$").unwrap());
static INFINITY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?Infinity$").unwrap());

/// Coerce free text into a positive whole amount.
///
/// Follows the browser's numeric coercion for form values:
/// - Surrounding whitespace is ignored: " 12 " → 12
/// - Decimal literals with sign, fraction and exponent: "+7", "5.0", "1e2"
/// - Unsigned radix literals: "0x40", "0o17", "0b101"
///
/// The coerced number must then be finite, whole and strictly positive.
/// Amounts past 2^53 keep the nearest `f64`, as the browser does.
///
/// # Examples
/// ```
/// use stack_calculator::utils::parse_amount;
/// assert_eq!(parse_amount("130"), Ok(130.0));
/// assert_eq!(parse_amount("1e2"), Ok(100.0));
/// assert!(parse_amount("5.5").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<f64, InvalidAmount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidAmount::Empty);
    }

    if let Some(captures) = RADIX_REGEX.captures(trimmed) {
        let (radix, digits) = if let Some(d) = captures.get(2) {
            (16, d.as_str())
        } else if let Some(d) = captures.get(4) {
            (8, d.as_str())
        } else {
            (2, captures.get(6).map(|d| d.as_str()).unwrap_or_default())
        };
        let value = radix_value(digits, radix);
        if !value.is_finite() {
            return Err(InvalidAmount::NotFinite);
        }
        if value == 0.0 {
            return Err(InvalidAmount::NotPositive);
        }
        return Ok(value);
    }

    if INFINITY_REGEX.is_match(trimmed) {
        return Err(InvalidAmount::NotFinite);
    }

    if !DECIMAL_REGEX.is_match(trimmed) {
        return Err(InvalidAmount::NotANumber(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InvalidAmount::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InvalidAmount::NotFinite);
    }
    if value.fract() != 0.0 {
        return Err(InvalidAmount::NotAnInteger);
    }
    if value <= 0.0 {
        return Err(InvalidAmount::NotPositive);
    }
    Ok(value)
}

/// Digits already matched `RADIX_REGEX`, so every char is a valid digit.
fn radix_value(digits: &str, radix: u32) -> f64 {
    match u128::from_str_radix(digits, radix) {
        Ok(v) => v as f64,
        // Wider than 128 bits: accumulate in f64
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64),
    }
}

/// Return how many of `n` items fit under `limit`, and the remainder if any.
///
/// `cap_display(70.0, 64)` is `(64, Some(6.0))`; `cap_display(8.0, 64)` is `(8, None)`.
pub fn cap_display(n: f64, limit: usize) -> (usize, Option<f64>) {
    let limit_f64 = limit as f64;
    if n > limit_f64 {
        (limit, Some(n - limit_f64))
    } else {
        (n as usize, None)
    }
}
