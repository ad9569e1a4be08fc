use crate::{
    error::{ParseError, RuntimeError},
    interpreter::evaluator::core::{EvalResult, Evaluator},
    polynomial::{core::Polynomial, gcd::gcd},
};

impl Evaluator<'_> {
    /// Evaluates `der(name)`.
    ///
    /// The argument must be the name of a bound polynomial; it is not
    /// evaluated as an expression.
    pub(crate) fn eval_derivative(&self, name: &str) -> EvalResult<Polynomial> {
        self.bindings()
            .get(name)
            .map(Polynomial::derivative)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() }.into())
    }

    /// Evaluates `gcd(left,right)`, splitting the arguments on the first
    /// comma and evaluating both sides as expressions.
    pub(crate) fn eval_gcd(&self, arguments: &str) -> EvalResult<Polynomial> {
        let (left, right) =
            arguments.split_once(',')
                     .ok_or_else(|| ParseError::InvalidExpression { expression:
                                                                        format!("gcd({arguments})") })?;

        let left = self.eval_normalized(left)?;
        let right = self.eval_normalized(right)?;
        Ok(gcd(&left, &right))
    }
}
