//! Side-by-side comparison of integration schemes on one scenario.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shm_diagnostics::trajectory_energy;
use shm_scenario::Scenario;
use shm_sim::{DampingRegime, Method};

use crate::error::AppResult;
use crate::metrics::{MethodMetrics, compute_method_metrics};
use crate::scenario_service::prepare;

/// Half, critical and twice critical damping coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DampingMarkers {
    pub half: f64,
    pub critical: f64,
    pub twice: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub scenario: String,
    pub regime: DampingRegime,
    pub damping: f64,
    pub markers: DampingMarkers,
    pub samples: usize,
    pub step: f64,
    pub forced: bool,
    pub methods: Vec<MethodMetrics>,
}

impl ComparisonReport {
    pub fn get(&self, method: Method) -> Option<&MethodMetrics> {
        self.methods.iter().find(|m| m.method == method)
    }

    /// Method with the smallest RMS error, the reference excluded.
    pub fn most_accurate(&self) -> Option<&MethodMetrics> {
        self.methods
            .iter()
            .filter(|m| m.method != Method::Analytic)
            .min_by(|a, b| a.rms_error.total_cmp(&b.rms_error))
    }
}

/// Run every selected method and measure it against the unforced analytic
/// reference. Methods run concurrently; they share only immutable inputs.
pub fn compare(scenario: &Scenario) -> AppResult<ComparisonReport> {
    let inputs = prepare(scenario)?;
    let methods = scenario.selected_methods();
    let forcing = inputs.forcing.as_ref();

    if forcing.is_some() {
        tracing::warn!(
            scenario = %scenario.name,
            "forcing is ignored by the analytic reference; errors include the impulse response"
        );
    }

    let reference = Method::Analytic.run(&inputs.params, &inputs.state, &inputs.grid, None)?;
    let reference_energy = trajectory_energy(&inputs.params, &reference)?;

    let metrics: Vec<MethodMetrics> = methods
        .par_iter()
        .map(|&method| -> AppResult<MethodMetrics> {
            let started = Instant::now();
            let traj = method.run(&inputs.params, &inputs.state, &inputs.grid, forcing)?;
            tracing::info!(
                %method,
                samples = traj.len(),
                elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
                "method finished"
            );
            compute_method_metrics(
                method,
                &inputs.params,
                &traj,
                &reference,
                &reference_energy,
            )
        })
        .collect::<AppResult<_>>()?;

    let [half, critical, twice] = inputs.params.damping_markers();
    Ok(ComparisonReport {
        scenario: scenario.name.clone(),
        regime: inputs.params.regime(),
        damping: inputs.params.b,
        markers: DampingMarkers {
            half,
            critical,
            twice,
        },
        samples: inputs.grid.len(),
        step: inputs.grid.step(),
        forced: forcing.is_some(),
        methods: metrics,
    })
}
