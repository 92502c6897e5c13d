//! Per-method accuracy metrics against the closed-form reference.

use serde::{Deserialize, Serialize};
use shm_core::ShmError;
use shm_diagnostics::{
    EnergySeries, chi_square, max_abs_error, relative_energy_drift, rms_error, trajectory_energy,
};
use shm_sim::{Method, OscillatorParameters, Trajectory};

use crate::error::AppResult;

/// How one integration scheme compares with the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodMetrics {
    pub method: Method,
    pub label: String,
    pub samples: usize,
    pub final_position: f64,
    pub final_energy: f64,
    /// RMS position error against the reference
    pub rms_error: f64,
    /// Largest absolute position error against the reference
    pub max_abs_error: f64,
    /// max |E_i - E_0| / E_0 of this method's own energy series
    pub energy_drift: f64,
    /// Chi-squared of this method's energy against the reference energy;
    /// `None` when the reference energy has a zero sample
    pub energy_chi_square: Option<f64>,
}

pub fn compute_method_metrics(
    method: Method,
    params: &OscillatorParameters,
    traj: &Trajectory,
    reference: &Trajectory,
    reference_energy: &EnergySeries,
) -> AppResult<MethodMetrics> {
    let energy = trajectory_energy(params, traj)?;

    let energy_chi_square = match chi_square(&energy, reference_energy) {
        Ok(chi) => Some(chi),
        Err(ShmError::Domain { .. }) => {
            tracing::debug!(%method, "reference energy has a zero sample, chi-square skipped");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let (final_position, _) = traj.last().unwrap_or_default();

    Ok(MethodMetrics {
        method,
        label: method.label().to_string(),
        samples: traj.len(),
        final_position,
        final_energy: energy.last().copied().unwrap_or_default(),
        rms_error: rms_error(traj.positions(), reference.positions())?,
        max_abs_error: max_abs_error(traj.positions(), reference.positions())?,
        energy_drift: relative_energy_drift(&energy)?,
        energy_chi_square,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shm_sim::{InitialState, TimeGrid};

    #[test]
    fn reference_against_itself_is_exact() {
        let params = OscillatorParameters::new(0.0, 1.0, 1.0).unwrap();
        let state = InitialState::new(1.0, 0.0).unwrap();
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
        let reference = Method::Analytic.run(&params, &state, &grid, None).unwrap();
        let e_ref = trajectory_energy(&params, &reference).unwrap();

        let m = compute_method_metrics(Method::Analytic, &params, &reference, &reference, &e_ref)
            .unwrap();
        assert_eq!(m.samples, 10);
        assert_eq!(m.rms_error, 0.0);
        assert_eq!(m.max_abs_error, 0.0);
        assert_eq!(m.energy_chi_square, Some(0.0));
        assert_eq!(m.label, "Exact Solution");
    }

    #[test]
    fn zero_reference_energy_skips_chi_square() {
        let params = OscillatorParameters::new(0.0, 1.0, 1.0).unwrap();
        let state = InitialState::new(0.0, 0.0).unwrap();
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
        let reference = Method::Analytic.run(&params, &state, &grid, None).unwrap();
        let e_ref = trajectory_energy(&params, &reference).unwrap();
        let traj = Method::ExplicitEuler.run(&params, &state, &grid, None).unwrap();

        let m = compute_method_metrics(Method::ExplicitEuler, &params, &traj, &reference, &e_ref)
            .unwrap();
        assert_eq!(m.energy_chi_square, None);
        assert_eq!(m.energy_drift, 0.0);
    }
}
