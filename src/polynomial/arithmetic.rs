use std::ops;

use crate::polynomial::core::Polynomial;

impl ops::Add for &Polynomial {
    type Output = Polynomial;

    /// Adds coefficientwise after aligning both operands at the constant
    /// term.
    fn add(self, rhs: Self) -> Self::Output {
        let (longer, shorter) = if self.len() >= rhs.len() {
            (self.coefficients(), rhs.coefficients())
        } else {
            (rhs.coefficients(), self.coefficients())
        };
        let offset = longer.len() - shorter.len();

        let mut sum = longer.to_vec();
        for (slot, c) in sum[offset..].iter_mut().zip(shorter) {
            *slot += c;
        }

        Polynomial::from_coefficients(sum)
    }
}

impl ops::Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl ops::Sub for &Polynomial {
    type Output = Polynomial;

    /// `a - b` is computed as `a + b * -1`.
    fn sub(self, rhs: Self) -> Self::Output {
        self + &(rhs * -1.0)
    }
}

impl ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        &self * -1.0
    }
}

impl ops::Mul<f64> for &Polynomial {
    type Output = Polynomial;

    /// Scales every coefficient; multiplying by `0.0` yields zero.
    fn mul(self, scalar: f64) -> Self::Output {
        let scaled = self.coefficients()
                         .iter()
                         .map(|c| c * scalar)
                         .collect::<Vec<_>>();

        Polynomial::from_coefficients(scaled)
    }
}

impl ops::Mul<f64> for Polynomial {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        &self * scalar
    }
}

impl ops::Mul for &Polynomial {
    type Output = Polynomial;

    /// Multiplies by convolution: `result[i + j] += a[i] * b[j]`.
    ///
    /// The product with the zero polynomial is zero.
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }

        let mut product = vec![0.0; self.len() + rhs.len() - 1];
        for (i, a) in self.coefficients().iter().enumerate() {
            for (j, b) in rhs.coefficients().iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial::from_coefficients(product)
    }
}

impl ops::Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl ops::MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = &*self * rhs;
    }
}

impl Polynomial {
    /// Raises the polynomial to a non-negative integer power by repeated
    /// multiplication, starting from `[1]`.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(vec![1.0, 1.0]);
    /// assert_eq!(p.pow(3).coefficients(), &[1.0, 3.0, 3.0, 1.0]);
    /// assert_eq!(p.pow(0), Polynomial::one());
    /// assert_eq!(Polynomial::zero().pow(0), Polynomial::one());
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..exponent {
            if result.is_zero() {
                break;
            }
            result *= self;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::from_coefficients(coefficients.to_vec())
    }

    #[test]
    fn adds_and_subtracts() {
        assert_eq!(&poly(&[1.0, 2.0, 3.0]) + &poly(&[4.0, 5.0, 6.0]),
                   poly(&[5.0, 7.0, 9.0]));
        assert_eq!(&poly(&[4.0, 5.0, 6.0]) - &poly(&[1.0, 2.0, 3.0]),
                   poly(&[3.0, 3.0, 3.0]));
        assert_eq!(&poly(&[1.0, 0.0, 0.0]) + &poly(&[2.0]), poly(&[1.0, 0.0, 2.0]));
        assert_eq!(&poly(&[2.0]) + &poly(&[1.0, 0.0, 0.0]), poly(&[1.0, 0.0, 2.0]));
    }

    #[test]
    fn cancelling_leading_terms_are_normalized() {
        let a = poly(&[1.0, 2.0, 3.0]);
        let b = poly(&[-1.0, 0.0, 1.0]);
        assert_eq!((&a + &b).coefficients(), &[2.0, 4.0]);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(&poly(&[1.0, 2.0, 3.0]) * 2.0, poly(&[2.0, 4.0, 6.0]));
        assert!((&poly(&[1.0, 2.0, 3.0]) * 0.0).is_zero());
        assert_eq!(-poly(&[1.0, -2.0]), poly(&[-1.0, 2.0]));
    }

    #[test]
    fn polynomial_multiplication() {
        assert_eq!(&poly(&[1.0, 1.0]) * &poly(&[1.0, 2.0]), poly(&[1.0, 3.0, 2.0]));
        assert!((&poly(&[1.0, 1.0]) * &Polynomial::zero()).is_zero());
        assert!((&Polynomial::zero() * &poly(&[3.0])).is_zero());
    }

    #[test]
    fn power() {
        assert_eq!(poly(&[1.0, 1.0]).pow(3), poly(&[1.0, 3.0, 3.0, 1.0]));
        assert_eq!(poly(&[2.0]).pow(10), poly(&[1024.0]));
        assert!(Polynomial::zero().pow(4).is_zero());
    }
}
