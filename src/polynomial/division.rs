use crate::{error::RuntimeError, polynomial::core::Polynomial};

impl Polynomial {
    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Classic long division by the ratio of leading coefficients. The
    /// quotient has `len(self) - len(divisor) + 1` coefficients (none if the
    /// dividend is shorter than the divisor) and the remainder is either zero
    /// or of lower degree than the divisor.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `divisor` is the zero
    /// polynomial.
    ///
    /// # Example
    /// ```
    /// use polycalc::polynomial::core::Polynomial;
    ///
    /// let a = Polynomial::from_coefficients(vec![1.0, 2.0, 5.0]);
    /// let b = Polynomial::from_coefficients(vec![1.0, 1.0]);
    ///
    /// let (quotient, remainder) = a.div_rem(&b).unwrap();
    /// assert_eq!(quotient.coefficients(), &[1.0, 1.0]);
    /// assert_eq!(remainder.coefficients(), &[4.0]);
    ///
    /// assert!(a.div_rem(&Polynomial::zero()).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), RuntimeError> {
        if divisor.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(self.long_division(divisor))
    }

    /// Long division by a divisor already known to be non-zero.
    ///
    /// The working buffer holds the live remainder in `rem[start..]`. Each
    /// step cancels `rem[start]` exactly and then skips any further leading
    /// zeros, so `start` strictly increases and the loop runs at most
    /// `len(self) - len(divisor) + 1` times. The quotient slot for a step is
    /// `start` itself: it equals the quotient length minus the current
    /// length gap plus one.
    pub(crate) fn long_division(&self, divisor: &Self) -> (Self, Self) {
        let dividend = self.coefficients();
        let divisor = divisor.coefficients();
        debug_assert!(!divisor.is_empty());

        let n = dividend.len();
        let m = divisor.len();
        if n < m {
            return (Self::zero(), self.clone());
        }

        let lead = divisor[0];
        let mut rem = dividend.to_vec();
        let mut quotient = vec![0.0; n - m + 1];
        let mut start = 0;

        while n - start >= m {
            let q = rem[start] / lead;
            quotient[start] = q;

            rem[start] = 0.0;
            for (slot, d) in rem[start + 1..start + m].iter_mut().zip(&divisor[1..]) {
                *slot -= q * d;
            }

            start += 1;
            while start < n && rem[start] == 0.0 {
                start += 1;
            }
        }

        (Self::from_coefficients(quotient), Self::from_coefficients(rem.split_off(start)))
    }

    /// Returns the quotient of the division by `divisor`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, RuntimeError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Returns the remainder of the division by `divisor`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, RuntimeError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}
