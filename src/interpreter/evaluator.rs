/// Core evaluation logic.
///
/// Contains the `Evaluator`, the binding table type and the ordered
/// resolution of names, coefficient lists, operators and function calls.
pub mod core;

/// Binary operator evaluation.
///
/// Splits an expression at an operator and combines the evaluated sides:
/// sums, differences, scalar and polynomial products, quotients, remainders
/// and powers.
pub mod binary;

/// Function call evaluation.
///
/// Handles `der(name)` and `gcd(a,b)`.
pub mod function;
