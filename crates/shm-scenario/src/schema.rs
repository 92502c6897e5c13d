//! Scenario schema definitions.

use serde::{Deserialize, Serialize};
use shm_core::ShmResult;
use shm_sim::{ForcingSpec, InitialState, Method, OscillatorParameters, TimeGrid};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub oscillator: OscillatorDef,
    pub initial: InitialDef,
    pub grid: GridDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forcing: Option<ForcingDef>,
    /// Methods to run; all of them when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Method>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OscillatorDef {
    /// b, kg/s
    pub damping: f64,
    /// m, kg
    pub mass: f64,
    /// k, N/m
    pub stiffness: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InitialDef {
    /// x0, m
    pub displacement: f64,
    /// v0, m/s
    #[serde(default)]
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    #[serde(default)]
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForcingDef {
    /// Impulse force, N
    pub magnitude: f64,
    /// Seconds after the grid start
    pub onset: f64,
}

impl Scenario {
    pub fn params(&self) -> ShmResult<OscillatorParameters> {
        let o = &self.oscillator;
        OscillatorParameters::new(o.damping, o.mass, o.stiffness)
    }

    pub fn initial_state(&self) -> ShmResult<InitialState> {
        InitialState::new(self.initial.displacement, self.initial.velocity)
    }

    pub fn time_grid(&self) -> ShmResult<TimeGrid> {
        TimeGrid::new(self.grid.start, self.grid.stop, self.grid.step)
    }

    pub fn forcing_spec(&self) -> ShmResult<Option<ForcingSpec>> {
        self.forcing
            .map(|f| ForcingSpec::new(f.magnitude, f.onset))
            .transpose()
    }

    /// Selected methods in file order, or [`Method::ALL`].
    pub fn selected_methods(&self) -> Vec<Method> {
        match &self.methods {
            Some(methods) => methods.clone(),
            None => Method::ALL.to_vec(),
        }
    }
}
