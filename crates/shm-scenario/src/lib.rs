//! shm-scenario: scenario file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_scenario};

use std::path::Path;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown scenario format: {path} (expected .yaml, .yml or .json)")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_yaml::from_str(content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn from_json_str(content: &str) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_json::from_str(content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn to_yaml_string(scenario: &Scenario) -> ScenarioResult<String> {
    validate_scenario(scenario)?;
    Ok(serde_yaml::to_string(scenario)?)
}

pub fn load_yaml(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    let content = to_yaml_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// On-disk scenario encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ScenarioError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Parse and validate `content` in this encoding.
    pub fn parse(self, content: &str) -> ScenarioResult<Scenario> {
        match self {
            Self::Yaml => from_yaml_str(content),
            Self::Json => from_json_str(content),
        }
    }
}

/// Load by file extension.
pub fn load(path: &Path) -> ScenarioResult<Scenario> {
    let format = ScenarioFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    format.parse(&content)
}
