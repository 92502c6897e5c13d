//! shm-core: stable foundation for the oscillator engine.
//!
//! Contains:
//! - error (shared error taxonomy for every engine crate)
//! - numeric (Real + finiteness/sign checks + real/complex samples)
//! - units (uom SI types + constructors)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ShmError, ShmResult};
pub use num_complex::Complex64;
pub use numeric::*;
pub use units::*;
