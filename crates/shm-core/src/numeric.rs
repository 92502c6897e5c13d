use num_complex::Complex64;

use crate::ShmError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ShmError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ShmError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ShmError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ShmError::Domain { what })
    }
}

/// Finite and not negative.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, ShmError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ShmError::Domain { what })
    }
}

/// A trajectory sample: real for the iterative methods, complex for the
/// closed-form solution. The physical signal is always the real part.
pub trait RealPart: Copy {
    fn re(self) -> Real;

    /// Every component is finite.
    fn is_finite(self) -> bool;
}

impl RealPart for Real {
    #[inline]
    fn re(self) -> Real {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        Real::is_finite(self)
    }
}

impl RealPart for Complex64 {
    #[inline]
    fn re(self) -> Real {
        self.re
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn positivity_checks() {
        assert_eq!(ensure_positive(2.0, "mass").unwrap(), 2.0);
        assert_eq!(
            ensure_positive(0.0, "mass").unwrap_err(),
            ShmError::Domain { what: "mass" }
        );
        assert!(ensure_non_negative(0.0, "damping").is_ok());
        assert!(ensure_non_negative(-1e-9, "damping").is_err());
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "damping"),
            Err(ShmError::NonFinite { .. })
        ));
    }

    #[test]
    fn complex_real_part() {
        let z = Complex64::new(0.25, -3.0);
        assert_eq!(z.re(), 0.25);
        assert!(RealPart::is_finite(z));
        assert!(!RealPart::is_finite(Complex64::new(1.0, Real::NAN)));
        assert!(!RealPart::is_finite(Real::INFINITY));
    }
}
