/// Numeric token helpers.
///
/// This module reads the numbers that appear in expressions and commands:
/// finite reals, whitespace-separated coefficient lists and integer
/// exponents. None of the helpers panic on bad input, so
/// malformed input never reaches the polynomial engine.
pub mod num;
