//! Damped, optionally forced, harmonic oscillator engine.
//!
//! Provides:
//! - Closed-form (complex-valued) reference solution
//! - Fixed-step integrators: explicit Euler, corrected Euler, two-step
//!   position recurrence (Verlet) and semi-implicit Euler (Euler-Cromer)
//! - Discretized point-impulse forcing
//!
//! Every engine operation is a pure function of its arguments; callers may
//! run any number of them concurrently.

pub mod analytic;
pub mod forcing;
pub mod grid;
pub mod integrator;
pub mod method;
pub mod params;
pub mod trajectory;

// Re-exports for public API
pub use analytic::analytic;
pub use forcing::{Forcing, ForcingSpec, should_force};
pub use grid::TimeGrid;
pub use integrator::{
    Analytic, CorrectedEuler, ExplicitEuler, Integrator, PositionRecurrence, SemiImplicit,
};
pub use method::{Method, ParseMethodError};
pub use params::{DampingRegime, InitialState, OscillatorParameters};
pub use trajectory::Trajectory;
