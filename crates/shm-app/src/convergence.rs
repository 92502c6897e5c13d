//! Step-size refinement studies.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shm_diagnostics::{observed_order, rms_error};
use shm_scenario::Scenario;
use shm_sim::Method;

use crate::error::{AppError, AppResult};
use crate::scenario_service::prepare;

/// Halving sequence used when the caller gives no steps.
pub const DEFAULT_STEPS: [f64; 4] = [0.1, 0.05, 0.025, 0.0125];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergencePoint {
    pub step: f64,
    pub samples: usize,
    /// RMS position error against the analytic solution on the same grid
    pub rms_error: f64,
    /// Order observed between the previous step and this one
    pub observed_order: Option<f64>,
}

/// Rerun `method` on the scenario interval with each step in `steps`.
/// Forcing is left out so the closed form stays an exact reference.
pub fn convergence(
    scenario: &Scenario,
    method: Method,
    steps: &[f64],
) -> AppResult<Vec<ConvergencePoint>> {
    if steps.is_empty() {
        return Err(AppError::InvalidInput(
            "convergence study needs at least one step".to_string(),
        ));
    }
    let inputs = prepare(scenario)?;

    let errors: Vec<(f64, usize, f64)> = steps
        .par_iter()
        .map(|&h| -> AppResult<(f64, usize, f64)> {
            let grid = inputs.grid.with_step(h)?;
            let exact = Method::Analytic.run(&inputs.params, &inputs.state, &grid, None)?;
            let traj = method.run(&inputs.params, &inputs.state, &grid, None)?;
            let err = rms_error(traj.positions(), exact.positions())?;
            tracing::debug!(%method, step = h, samples = grid.len(), rms = err, "refinement level");
            Ok((h, grid.len(), err))
        })
        .collect::<AppResult<_>>()?;

    let mut points = Vec::with_capacity(errors.len());
    let mut previous: Option<(f64, f64)> = None;
    for (step, samples, err) in errors {
        let order = previous
            .and_then(|(h_prev, e_prev)| observed_order(e_prev, err, h_prev, step).ok());
        points.push(ConvergencePoint {
            step,
            samples,
            rms_error: err,
            observed_order: order,
        });
        previous = Some((step, err));
    }
    Ok(points)
}
