//! Scenario loading, validation, and introspection.

use std::path::Path;

use serde::Serialize;
use shm_scenario::{Scenario, ScenarioFormat};
use shm_sim::{
    DampingRegime, ForcingSpec, InitialState, Method, OscillatorParameters, TimeGrid,
};

use crate::error::{AppError, AppResult};

/// Engine inputs derived from a scenario.
#[derive(Debug, Clone, Copy)]
pub struct EngineInputs {
    pub params: OscillatorParameters,
    pub state: InitialState,
    pub grid: TimeGrid,
    pub forcing: Option<ForcingSpec>,
}

/// Summary of a scenario for listing.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub regime: DampingRegime,
    pub damping_ratio: f64,
    pub natural_frequency: f64,
    pub samples: usize,
    pub step: f64,
    pub methods: Vec<Method>,
    /// Step receiving the forcing impulse, if it lands on the grid.
    pub impulse_step: Option<usize>,
}

/// Load a `.yaml`, `.yml` or `.json` scenario file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let format = ScenarioFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario = format.parse(&content)?;
    tracing::info!(name = %scenario.name, path = %path.display(), "scenario loaded");

    Ok(scenario)
}

/// Validate the file-level rules and the engine's own entry checks.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    shm_scenario::validate_scenario(scenario)?;
    prepare(scenario)?;
    Ok(())
}

pub fn prepare(scenario: &Scenario) -> AppResult<EngineInputs> {
    Ok(EngineInputs {
        params: scenario.params()?,
        state: scenario.initial_state()?,
        grid: scenario.time_grid()?,
        forcing: scenario.forcing_spec()?,
    })
}

pub fn summarize(scenario: &Scenario) -> AppResult<ScenarioSummary> {
    let inputs = prepare(scenario)?;
    let impulse_step = inputs
        .forcing
        .and_then(|f| f.impulse_step(inputs.grid.step()))
        .filter(|n| *n < inputs.grid.len());

    Ok(ScenarioSummary {
        name: scenario.name.clone(),
        regime: inputs.params.regime(),
        damping_ratio: inputs.params.damping_ratio(),
        natural_frequency: inputs.params.natural_frequency(),
        samples: inputs.grid.len(),
        step: inputs.grid.step(),
        methods: scenario.selected_methods(),
        impulse_step,
    })
}
