//! Diagnostics over trajectories: energy, chi-squared goodness of fit, and
//! the error metrics used to compare a scheme with the closed-form
//! reference.

pub mod energy;
pub mod fit;

pub use energy::{EnergySeries, energy, relative_energy_drift, trajectory_energy};
pub use fit::{chi_square, max_abs_error, observed_order, rms_error};
