use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::binary::BinaryOperator, lexer::normalize},
    polynomial::core::Polynomial,
    util::num::parse_real_list,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// The variable binding table: polynomial names mapped to their values.
///
/// Ordered by name so that listings and saved files are deterministic.
pub type Bindings = BTreeMap<String, Polynomial>;

/// Evaluates polynomial expressions against a read-only binding table.
///
/// Expressions are resolved by trying the following forms in order; the
/// first one that matches wins:
///
/// 1. the exact name of a bound polynomial;
/// 2. a whitespace-separated list of numbers, read as coefficients;
/// 3. `a+b`, `a-b`, `a*b`, `a/b`, `a%b`, `a^n`, checked in that order and
///    split at the first occurrence of the operator;
/// 4. `der(name)`;
/// 5. `gcd(a,b)`.
///
/// Precedence therefore follows the check order rather than the usual
/// arithmetic rules: `2+3*4` splits on `+` first, and `a-b-c` is read as
/// `a-(b-c)`.
pub struct Evaluator<'a> {
    bindings: &'a Bindings,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `bindings`.
    #[must_use]
    pub const fn new(bindings: &'a Bindings) -> Self {
        Self { bindings }
    }

    /// The binding table names are resolved against.
    #[must_use]
    pub const fn bindings(&self) -> &'a Bindings {
        self.bindings
    }

    /// Normalizes `expression` and evaluates it.
    ///
    /// A whole expression that is a plain list of numbers is read as
    /// coefficients before normalization, so `1 -2 3` keeps its negative
    /// coefficient. Inside a larger expression the same text would be split
    /// on `-`.
    ///
    /// # Errors
    /// - `ParseError::InvalidExpression` if no form matches.
    /// - `RuntimeError::UnknownVariable` for an unbound name, alone or in
    ///   `der(name)`.
    /// - `RuntimeError::DivisionByZero` for `/`, `%` by a zero polynomial.
    ///
    /// # Example
    /// ```
    /// use polycalc::{
    ///     interpreter::evaluator::core::{Bindings, Evaluator},
    ///     polynomial::core::Polynomial,
    /// };
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.insert("p".to_string(), Polynomial::from_coefficients(vec![1.0, 1.0]));
    ///
    /// let result = Evaluator::new(&bindings).eval("p * p").unwrap();
    /// assert_eq!(result.coefficients(), &[1.0, 2.0, 1.0]);
    /// ```
    pub fn eval(&self, expression: &str) -> EvalResult<Polynomial> {
        let trimmed = expression.trim();
        if !self.bindings.contains_key(trimmed)
           && let Some(coefficients) = parse_real_list(trimmed)
        {
            debug!(expression = trimmed, "read coefficient list");
            return Ok(Polynomial::from_coefficients(coefficients));
        }

        self.eval_normalized(&normalize(expression))
    }

    /// Evaluates an expression whose whitespace is already normalized.
    pub(crate) fn eval_normalized(&self, expression: &str) -> EvalResult<Polynomial> {
        if let Some(polynomial) = self.bindings.get(expression) {
            debug!(expression, "resolved bound name");
            return Ok(polynomial.clone());
        }

        if let Some(coefficients) = parse_real_list(expression) {
            debug!(expression, "read coefficient list");
            return Ok(Polynomial::from_coefficients(coefficients));
        }

        for op in BinaryOperator::CHECK_ORDER {
            if let Some((left, right)) = expression.split_once(op.symbol()) {
                debug!(expression, ?op, left, right, "split on operator");
                return self.eval_binary(op, left, right);
            }
        }

        if let Some(argument) = call_argument(expression, "der") {
            return self.eval_derivative(argument);
        }

        if let Some(arguments) = call_argument(expression, "gcd") {
            return self.eval_gcd(arguments);
        }

        if looks_like_name(expression) {
            return Err(RuntimeError::UnknownVariable { name: expression.to_string() }.into());
        }

        Err(ParseError::InvalidExpression { expression: expression.to_string() }.into())
    }
}

/// A single token that is neither a number nor a call: an unbound name.
fn looks_like_name(expression: &str) -> bool {
    !expression.is_empty()
    && expression.parse::<f64>().is_err()
    && !expression.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ','))
}

/// Returns the text between `name(` and a final `)`.
fn call_argument<'e>(expression: &'e str, name: &str) -> Option<&'e str> {
    expression.strip_prefix(name)?
              .strip_prefix('(')?
              .strip_suffix(')')
}

/// Evaluates `expression` against `bindings`.
///
/// Shorthand for `Evaluator::new(bindings).eval(expression)`.
///
/// # Errors
/// See [`Evaluator::eval`].
pub fn evaluate(expression: &str, bindings: &Bindings) -> EvalResult<Polynomial> {
    Evaluator::new(bindings).eval(expression)
}
