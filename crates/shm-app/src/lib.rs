//! Shared application service layer for the oscillator engine.
//!
//! This crate gives frontends one interface for loading scenarios,
//! comparing integration schemes, running step refinement studies, and
//! exporting sample tables.

pub mod compare_service;
pub mod convergence;
pub mod error;
pub mod metrics;
pub mod query;
pub mod scenario_service;

// Re-export key types for convenience
pub use compare_service::{ComparisonReport, DampingMarkers, compare};
pub use convergence::{ConvergencePoint, DEFAULT_STEPS, convergence};
pub use error::{AppError, AppResult};
pub use metrics::{MethodMetrics, compute_method_metrics};
pub use query::{SeriesRow, SeriesTable, series_table, write_csv};
pub use scenario_service::{
    EngineInputs, ScenarioSummary, load_scenario, prepare, summarize, validate_scenario,
};
