use crate::error::ParseError;

/// Parses a finite real number from a single token.
///
/// Infinite and NaN spellings (`inf`, `NaN`, ...) are rejected so that a
/// polynomial can only ever be built from finite literals.
///
/// ## Errors
/// Returns `ParseError::InvalidNumber` if the token is not a finite `f64`.
///
/// ## Example
/// ```
/// use polycalc::{error::ParseError, util::num::parse_real};
///
/// assert_eq!(parse_real("2.5").unwrap(), 2.5);
/// assert_eq!(parse_real("-1e3").unwrap(), -1000.0);
///
/// let err = parse_real("inf").unwrap_err();
/// assert!(matches!(err, ParseError::InvalidNumber { .. }));
/// ```
pub fn parse_real(token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>()
         .ok()
         .filter(|value| value.is_finite())
         .ok_or_else(|| ParseError::InvalidNumber { token: token.to_string() })
}

/// Parses a whitespace-separated list of finite real numbers.
///
/// Returns `None` for an empty list or if any token is not a finite number;
/// the caller decides whether that is an error.
///
/// ## Example
/// ```
/// use polycalc::util::num::parse_real_list;
///
/// assert_eq!(parse_real_list("1 -2 0.5"), Some(vec![1.0, -2.0, 0.5]));
/// assert_eq!(parse_real_list("1 p"), None);
/// assert_eq!(parse_real_list(""), None);
/// ```
#[must_use]
pub fn parse_real_list(source: &str) -> Option<Vec<f64>> {
    let values = source.split_whitespace()
                       .map(|token| parse_real(token).ok())
                       .collect::<Option<Vec<_>>>()?;

    if values.is_empty() { None } else { Some(values) }
}

/// Largest exponent accepted by `^`.
///
/// Powers are computed by repeated multiplication, so the cost grows with
/// the square of the exponent.
pub const MAX_EXPONENT: u32 = 1024;

/// Parses a power exponent: an integer from `0` to [`MAX_EXPONENT`].
///
/// Integral reals such as `3.0` are accepted.
///
/// ## Errors
/// Returns `ParseError::InvalidExponent` if the token is not a number, is
/// negative, fractional or above [`MAX_EXPONENT`].
///
/// ## Example
/// ```
/// use polycalc::{error::ParseError, util::num::parse_exponent};
///
/// assert_eq!(parse_exponent("3").unwrap(), 3);
/// assert_eq!(parse_exponent("2.0").unwrap(), 2);
///
/// assert!(matches!(parse_exponent("-1"), Err(ParseError::InvalidExponent { .. })));
/// assert!(matches!(parse_exponent("1.5"), Err(ParseError::InvalidExponent { .. })));
/// assert!(matches!(parse_exponent("200000"), Err(ParseError::InvalidExponent { .. })));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn parse_exponent(token: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidExponent { token: token.to_string() };

    let value = parse_real(token).map_err(|_| invalid())?;
    if value < 0.0 || value > f64::from(MAX_EXPONENT) || value.fract() != 0.0 {
        return Err(invalid());
    }

    Ok(value as u32)
}

/// Converts a degree to `f64` for use as a power-rule multiplier.
///
/// Degrees above `2^53` would lose precision; no polynomial held in memory
/// gets anywhere near that.
///
/// ## Example
/// ```
/// use polycalc::util::num::degree_to_f64;
///
/// assert_eq!(degree_to_f64(4), 4.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn degree_to_f64(degree: usize) -> f64 {
    degree as f64
}
