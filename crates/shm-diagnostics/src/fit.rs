//! Goodness of fit between index-aligned series.

use shm_core::{Real, ShmError, ShmResult};

fn check_aligned(what: &'static str, a: &[Real], b: &[Real]) -> ShmResult<()> {
    if a.len() != b.len() {
        return Err(ShmError::LengthMismatch {
            what,
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Pearson chi-squared `Σ (y_i - model_i)² / model_i`.
///
/// A zero model value is rejected with [`ShmError::Domain`] rather than
/// producing an infinite term. The statistic is only non-negative for
/// positive models, such as energy series.
pub fn chi_square(observed: &[Real], model: &[Real]) -> ShmResult<Real> {
    check_aligned("chi-square observed vs model", observed, model)?;
    let mut sum = 0.0;
    for (y, m) in observed.iter().zip(model) {
        if *m == 0.0 {
            return Err(ShmError::Domain {
                what: "chi-square model value is zero",
            });
        }
        let d = y - m;
        sum += d * d / m;
    }
    Ok(sum)
}

/// Root-mean-square difference.
pub fn rms_error(a: &[Real], b: &[Real]) -> ShmResult<Real> {
    check_aligned("rms error operands", a, b)?;
    if a.is_empty() {
        return Err(ShmError::Domain {
            what: "rms error of empty series",
        });
    }
    let sum: Real = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok((sum / a.len() as Real).sqrt())
}

pub fn max_abs_error(a: &[Real], b: &[Real]) -> ShmResult<Real> {
    check_aligned("max abs error operands", a, b)?;
    if a.is_empty() {
        return Err(ShmError::Domain {
            what: "max abs error of empty series",
        });
    }
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, Real::max))
}

/// Empirical convergence order between two step sizes,
/// `ln(e_coarse / e_fine) / ln(h_coarse / h_fine)`.
pub fn observed_order(
    e_coarse: Real,
    e_fine: Real,
    h_coarse: Real,
    h_fine: Real,
) -> ShmResult<Real> {
    if e_coarse <= 0.0 || e_fine <= 0.0 || h_coarse <= 0.0 || h_fine <= 0.0 {
        return Err(ShmError::Domain {
            what: "observed order needs positive errors and steps",
        });
    }
    if h_coarse == h_fine {
        return Err(ShmError::Domain {
            what: "observed order needs two distinct steps",
        });
    }
    let order = (e_coarse / e_fine).ln() / (h_coarse / h_fine).ln();
    shm_core::ensure_finite(order, "observed order")
}
