use tracing::trace;

use crate::polynomial::core::Polynomial;

/// Greatest common divisor by the Euclidean algorithm.
///
/// The operand with more coefficients becomes the first dividend. The pair
/// `(f, g)` is then replaced by `(g, f mod g)` until `g` is zero, and `f` is
/// returned. The result is a GCD up to a scalar factor: it is not made
/// monic, so `gcd([2, 2], [4, 4])` is `[4, 4]`.
///
/// `gcd(a, 0)` is `a`, and `gcd(0, 0)` is zero.
///
/// Floating-point cancellation is exact only for well-conditioned inputs; a
/// tiny non-zero remainder keeps the loop going one more step, which can turn
/// a mathematically non-trivial GCD into a constant.
///
/// # Example
/// ```
/// use polycalc::polynomial::{core::Polynomial, gcd::gcd};
///
/// let a = Polynomial::from_coefficients(vec![1.0, 2.0, 1.0]);
/// let b = Polynomial::from_coefficients(vec![1.0, 1.0]);
/// assert_eq!(gcd(&a, &b).coefficients(), &[1.0, 1.0]);
/// ```
#[must_use]
pub fn gcd(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let (mut f, mut g) = if a.len() < b.len() {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };

    while !g.is_zero() {
        let (_, remainder) = f.long_division(&g);
        trace!(dividend = %f, divisor = %g, %remainder, "euclidean step");
        f = g;
        g = remainder;
    }

    f
}

impl Polynomial {
    /// Method form of [`gcd`].
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        gcd(self, other)
    }
}
