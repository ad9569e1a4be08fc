use crate::{
    error::ParseError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    polynomial::core::Polynomial,
    util::num::{parse_exponent, parse_real},
};

/// Binary operators, in the order the evaluator looks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, scalar or polynomial product.
    Mul,
    /// `/`, quotient of long division.
    Div,
    /// `%`, remainder of long division.
    Rem,
    /// `^`, non-negative integer power.
    Pow,
}

impl BinaryOperator {
    /// The order in which operators are searched for. The first operator
    /// present in an expression splits it, which makes this order the
    /// precedence, lowest first.
    pub const CHECK_ORDER: [Self; 6] = [Self::Add,
                                        Self::Sub,
                                        Self::Mul,
                                        Self::Div,
                                        Self::Rem,
                                        Self::Pow];

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }
}

impl Evaluator<'_> {
    /// Evaluates `left op right`, where both sides are unevaluated
    /// sub-expressions and `left` does not contain `op`.
    ///
    /// The right side is split at every further `op`, and the chain groups
    /// to the right: `a-b-c` is `a-(b-c)`. Each piece is free of `op` and of
    /// the operators checked before it, so nesting depth is bounded by the
    /// number of operator kinds however long the chain is. Pieces are evaluated
    /// left to right and the leftmost failure is reported.
    ///
    /// For `*`, a last piece that is a single number selects scalar
    /// multiplication. `^` does not chain: its whole right side must be an
    /// integer literal no larger than `MAX_EXPONENT`.
    pub(crate) fn eval_binary(&self,
                              op: BinaryOperator,
                              left: &str,
                              right: &str)
                              -> EvalResult<Polynomial> {
        use BinaryOperator::{Add, Div, Mul, Pow, Rem, Sub};

        let combine: fn(&Polynomial, &Polynomial) -> EvalResult<Polynomial> = match op {
            Add => |l, r| Ok(l + r),
            Sub => |l, r| Ok(l - r),
            Mul => |l, r| Ok(l * r),
            Div => |l, r| Ok(l.checked_div(r)?),
            Rem => |l, r| Ok(l.checked_rem(r)?),
            Pow => {
                let base = self.eval_normalized(left)?;
                let exponent = parse_exponent(right)?;
                return Ok(base.pow(exponent));
            },
        };

        let mut pieces = std::iter::once(left).chain(right.split(op.symbol()))
                                              .collect::<Vec<_>>();

        let scalar = match pieces.last() {
            Some(last) if op == Mul => parse_real(last).ok(),
            _ => None,
        };
        if scalar.is_some() {
            pieces.pop();
        }

        let mut operands = pieces.into_iter()
                                 .map(|piece| self.eval_normalized(piece))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Some(last) = operands.pop() else {
            return Err(ParseError::InvalidExpression { expression: left.to_string() }.into());
        };
        let mut result = match scalar {
            Some(k) => &last * k,
            None => last,
        };
        for operand in operands.iter().rev() {
            result = combine(operand, &result)?;
        }

        Ok(result)
    }
}
