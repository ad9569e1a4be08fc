/// The polynomial type and its canonical form.
///
/// Defines `Polynomial`, its constructors, normalization, evaluation,
/// differentiation, equality and display.
pub mod core;

/// Arithmetic operators.
///
/// Implements addition, subtraction, negation, scalar and polynomial
/// multiplication, and integer powers. All operators are available on both
/// owned values and references.
pub mod arithmetic;

/// Polynomial long division.
///
/// Produces quotient and remainder and rejects division by the zero
/// polynomial before any work is done.
pub mod division;

/// Greatest common divisor.
pub mod gcd;

pub use self::core::Polynomial;
