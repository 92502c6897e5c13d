//! Scenario validation logic.

use std::collections::HashSet;

use shm_sim::{Method, TimeGrid};

use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate method: {method}")]
    DuplicateMethod { method: Method },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let o = &scenario.oscillator;
    finite("oscillator.damping", o.damping)?;
    finite("oscillator.mass", o.mass)?;
    finite("oscillator.stiffness", o.stiffness)?;
    if o.mass <= 0.0 {
        return Err(invalid("oscillator.mass", o.mass, "must be positive"));
    }
    if o.damping < 0.0 {
        return Err(invalid("oscillator.damping", o.damping, "must be non-negative"));
    }
    if o.stiffness < 0.0 {
        return Err(invalid(
            "oscillator.stiffness",
            o.stiffness,
            "must be non-negative",
        ));
    }

    finite("initial.displacement", scenario.initial.displacement)?;
    finite("initial.velocity", scenario.initial.velocity)?;

    let g = &scenario.grid;
    finite("grid.start", g.start)?;
    finite("grid.stop", g.stop)?;
    finite("grid.step", g.step)?;
    if g.step <= 0.0 {
        return Err(invalid("grid.step", g.step, "must be positive"));
    }
    if g.stop <= g.start {
        return Err(invalid("grid.stop", g.stop, "must exceed grid.start"));
    }
    if (g.stop - g.start) / g.step > TimeGrid::MAX_LEN as f64 {
        return Err(invalid(
            "grid.step",
            g.step,
            &format!("grid would exceed {} samples", TimeGrid::MAX_LEN),
        ));
    }

    if let Some(forcing) = &scenario.forcing {
        finite("forcing.magnitude", forcing.magnitude)?;
        finite("forcing.onset", forcing.onset)?;
    }

    if let Some(methods) = &scenario.methods {
        let mut seen = HashSet::new();
        for method in methods {
            if !seen.insert(*method) {
                return Err(ValidationError::DuplicateMethod { method: *method });
            }
        }
    }

    Ok(())
}
