//! Numeral conversions between entry text and `f64`
//!
//! Formatting follows the ECMAScript Number-to-String rules: shortest
//! round-tripping digits, plain notation for magnitudes in `[1e-6, 1e21)`,
//! exponent notation with an explicit sign otherwise, and `Infinity`/`NaN`
//! markers for non-finite values.

use super::{CalcError, CalcResult};

/// Smallest magnitude rendered without an exponent
const PLAIN_MIN: f64 = 1e-6;
/// Magnitude from which the exponent form takes over
const PLAIN_MAX: f64 = 1e21;

/// Marker for positive infinity
pub const INFINITY_TEXT: &str = "Infinity";
/// Marker for negative infinity
pub const NEG_INFINITY_TEXT: &str = "-Infinity";
/// Marker for not-a-number
pub const NAN_TEXT: &str = "NaN";

/// Formats a value as its canonical display string
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY_TEXT
        } else {
            NEG_INFINITY_TEXT
        };
        return text.to_string();
    }
    // Covers negative zero as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format!("{value}");
    }

    let exp_form = format!("{value:e}");
    if let Some((mantissa, exponent)) = exp_form.split_once('e') {
        if !exponent.starts_with('-') {
            return format!("{mantissa}e+{exponent}");
        }
    }
    exp_form
}

/// Parses entry text into a value
///
/// Accepts an optional sign, digits with at most one `.`, an optional
/// exponent, and the non-finite markers produced by [`format_number`]. Any of
/// these may carry one trailing `.`, which the decimal key appends even to
/// results such as `1e-7` or `Infinity`.
pub fn parse_number(entry: &str) -> CalcResult<f64> {
    let numeral = entry.strip_suffix('.').unwrap_or(entry);
    match numeral {
        INFINITY_TEXT => return Ok(f64::INFINITY),
        NEG_INFINITY_TEXT => return Ok(f64::NEG_INFINITY),
        NAN_TEXT => return Ok(f64::NAN),
        _ => {}
    }

    // `f64::from_str` also takes "inf"/"nan" spellings; entries only ever
    // carry digits, so anything alphabetic apart from an exponent is rejected.
    let is_numeral = !numeral.ends_with('.')
        && numeral
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !is_numeral {
        return Err(CalcError::parse(entry));
    }

    numeral.parse::<f64>().map_err(|_| CalcError::parse(entry))
}
