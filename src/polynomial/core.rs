use std::fmt::Display;

use crate::util::num::degree_to_f64;

/// A univariate polynomial with real coefficients.
///
/// Coefficients are stored most significant first: `[1.0, 2.0, 3.0]` is
/// `x^2 + 2x + 3`. The sequence never starts with a zero; the empty sequence
/// is the zero polynomial. Every constructor and operator upholds this, so a
/// `Polynomial` is always in canonical form and two equal polynomials have
/// identical coefficient sequences.
///
/// Polynomials are values: operators take references or ownership and
/// return a new polynomial.
///
/// Equality compares coefficients with plain `f64` equality and no
/// tolerance, so a polynomial with a NaN coefficient is not equal to
/// itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

/// Strips the leading zeros of a coefficient sequence.
///
/// Both `0.0` and `-0.0` count as zero. Applying it twice is the same as
/// applying it once.
///
/// # Example
/// ```
/// use polycalc::polynomial::core::normalize;
///
/// assert_eq!(normalize(&[0.0, -0.0, 1.0, 0.0]), &[1.0, 0.0]);
/// assert!(normalize(&[0.0, 0.0]).is_empty());
/// ```
#[must_use]
pub fn normalize(coefficients: &[f64]) -> &[f64] {
    let start = coefficients.iter()
                            .position(|c| *c != 0.0)
                            .unwrap_or(coefficients.len());
    &coefficients[start..]
}

impl Polynomial {
    /// Builds a polynomial from a coefficient list, highest degree first.
    ///
    /// Leading zeros are removed.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(vec![0.0, 0.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(p.coefficients(), &[1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    pub fn from_coefficients(coefficients: impl Into<Vec<f64>>) -> Self {
        let mut coefficients = coefficients.into();
        let leading_zeros = coefficients.len() - normalize(&coefficients).len();
        coefficients.drain(..leading_zeros);

        Self { coefficients }
    }

    /// Builds the constant polynomial `value`.
    ///
    /// `constant(0.0)` is the zero polynomial.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::from_coefficients(vec![value])
    }

    /// Builds the monomial `x^degree`: a `1` followed by `degree` zeros.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// assert_eq!(Polynomial::monomial(3).coefficients(), &[1.0, 0.0, 0.0, 0.0]);
    /// assert_eq!(Polynomial::monomial(0), Polynomial::one());
    /// ```
    #[must_use]
    pub fn monomial(degree: usize) -> Self {
        let mut coefficients = vec![0.0; degree + 1];
        coefficients[0] = 1.0;

        Self { coefficients }
    }

    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coefficients: Vec::new() }
    }

    /// The multiplicative identity `[1]`.
    #[must_use]
    pub fn one() -> Self {
        Self { coefficients: vec![1.0] }
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of stored coefficients; `0` for the zero polynomial.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns `true` for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// assert_eq!(Polynomial::from_coefficients(vec![2.0, 0.0, 1.0]).degree(), Some(2));
    /// assert_eq!(Polynomial::constant(7.0).degree(), Some(0));
    /// assert_eq!(Polynomial::zero().degree(), None);
    /// ```
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns the coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<f64> {
        self.coefficients.first().copied()
    }

    /// Evaluates the polynomial at `x` with Horner's scheme.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(vec![1.0, 2.0, 1.0]);
    /// assert_eq!(p.value_at(2.0), 9.0);
    /// assert_eq!(p.value_at(0.0), 1.0);
    /// assert_eq!(Polynomial::zero().value_at(5.0), 0.0);
    /// ```
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, c| acc.mul_add(x, *c))
    }

    /// Returns the derivative by the power rule.
    ///
    /// The constant term is dropped and every other coefficient is multiplied
    /// by its exponent. Constants and the zero polynomial differentiate to
    /// zero.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(p.derivative().coefficients(), &[3.0, 4.0, 3.0]);
    /// assert!(Polynomial::constant(5.0).derivative().is_zero());
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        let Some(degree) = self.degree() else {
            return Self::zero();
        };

        let coefficients = self.coefficients[..degree].iter()
                                                      .enumerate()
                                                      .map(|(i, c)| c * degree_to_f64(degree - i))
                                                      .collect::<Vec<_>>();

        Self::from_coefficients(coefficients)
    }
}

impl Display for Polynomial {
    /// Writes the polynomial as parenthesised terms, e.g. `(1x^2)+(2x)+(3)`.
    ///
    /// Terms with a zero coefficient are skipped and negative coefficients
    /// keep their sign inside the parentheses: `(1x)+(-4)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "(0)");
        };

        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            if *c == 0.0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;

            match degree - i {
                0 => write!(f, "({c})")?,
                1 => write!(f, "({c}x)")?,
                power => write!(f, "({c}x^{power})")?,
            }
        }

        Ok(())
    }
}
