//! Mechanical energy `E = ½·k·x² + ½·m·v²`.

use shm_core::{Real, RealPart, ShmError, ShmResult};
use shm_sim::{OscillatorParameters, Trajectory};

/// Energy per sample, index-aligned with the trajectory it came from.
pub type EnergySeries = Vec<Real>;

/// Element-wise energy. Only the real parts are used, so analytic
/// (complex) trajectories are accepted as-is.
pub fn energy<T: RealPart>(
    k: Real,
    positions: &[T],
    m: Real,
    velocities: &[T],
) -> ShmResult<EnergySeries> {
    if positions.len() != velocities.len() {
        return Err(ShmError::LengthMismatch {
            what: "energy positions vs velocities",
            left: positions.len(),
            right: velocities.len(),
        });
    }
    Ok(positions
        .iter()
        .zip(velocities)
        .map(|(x, v)| {
            let (x, v) = (x.re(), v.re());
            0.5 * k * x * x + 0.5 * m * v * v
        })
        .collect())
}

/// [`energy`] of a whole trajectory.
pub fn trajectory_energy<T: RealPart>(
    params: &OscillatorParameters,
    traj: &Trajectory<T>,
) -> ShmResult<EnergySeries> {
    energy(params.k, traj.positions(), params.m, traj.velocities())
}

/// Largest deviation from the first sample, `max |E_i - E_0| / E_0`.
/// Absolute when `E_0` is zero.
pub fn relative_energy_drift(series: &[Real]) -> ShmResult<Real> {
    let Some(&e0) = series.first() else {
        return Err(ShmError::Domain {
            what: "energy drift of an empty series",
        });
    };
    let max_dev = series
        .iter()
        .map(|e| (e - e0).abs())
        .fold(0.0, Real::max);
    if e0 == 0.0 {
        Ok(max_dev)
    } else {
        Ok(max_dev / e0.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shm_core::Complex64;

    #[test]
    fn energy_of_simple_states() {
        let e = energy(2.0, &[1.0, 0.0, 3.0], 4.0, &[0.0, 1.0, -1.0]).unwrap();
        assert_eq!(e, vec![1.0, 2.0, 11.0]);
    }

    #[test]
    fn complex_samples_use_real_part() {
        let x = [Complex64::new(1.0, 5.0)];
        let v = [Complex64::new(2.0, -7.0)];
        let e = energy(1.0, &x, 1.0, &v).unwrap();
        assert_eq!(e, vec![2.5]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = energy(1.0, &[1.0, 2.0], 1.0, &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            ShmError::LengthMismatch {
                left: 2,
                right: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_is_empty_series() {
        let e = energy::<Real>(1.0, &[], 1.0, &[]).unwrap();
        assert!(e.is_empty());
    }

    #[test]
    fn drift_is_relative_to_first_sample() {
        assert_eq!(relative_energy_drift(&[2.0, 2.5, 1.0]).unwrap(), 0.5);
        assert_eq!(relative_energy_drift(&[0.0, 0.25]).unwrap(), 0.25);
        assert_eq!(relative_energy_drift(&[1.0]).unwrap(), 0.0);
        assert!(relative_energy_drift(&[]).is_err());
    }
}
