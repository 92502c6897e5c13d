//! Discretized impulse forcing.
//!
//! A [`ForcingSpec`] is a single point impulse, not a sustained force. The
//! step that produces sample `n` from sample `n - 1` is "step n"; the impulse
//! adds `magnitude / m` to the acceleration of exactly one step, the `n >= 1`
//! whose window `((n·h) - h, (n·h) + h)` contains the onset and whose time
//! `n·h` is nearest to it. Times are measured from the grid start.

use shm_core::{Real, ShmResult, ensure_finite};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcingSpec {
    /// Impulse force
    pub magnitude: Real,
    /// Onset, in time elapsed since the grid start
    pub onset_time: Real,
}

impl ForcingSpec {
    pub fn new(magnitude: Real, onset_time: Real) -> ShmResult<Self> {
        let spec = Self {
            magnitude,
            onset_time,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> ShmResult<()> {
        ensure_finite(self.magnitude, "forcing magnitude")?;
        ensure_finite(self.onset_time, "forcing onset time")?;
        Ok(())
    }

    /// The single step that receives the impulse for step size `h`, if any.
    pub fn impulse_step(&self, h: Real) -> Option<usize> {
        let ratio = self.onset_time / h;
        if !ratio.is_finite() || ratio <= 0.0 {
            return None;
        }

        let in_window = |n: Real| n >= 1.0 && (n - ratio).abs() < 1.0;
        let lower = ratio.floor();
        let upper = ratio.ceil();

        // Ties at the exact midpoint go to the earlier step.
        let chosen = match (in_window(lower), in_window(upper)) {
            (true, true) if (upper - ratio) < (ratio - lower) => upper,
            (true, _) => lower,
            (false, true) => upper,
            (false, false) => return None,
        };
        Some(chosen as usize)
    }
}

/// Per-run forcing query: resolves the impulse step once, then answers
/// `should force at step n` without any accumulator.
#[derive(Clone, Copy, Debug)]
pub struct Forcing {
    impulse: Option<(usize, Real)>,
}

impl Forcing {
    /// No external force at any step.
    pub const NONE: Forcing = Forcing { impulse: None };

    pub fn new(spec: Option<&ForcingSpec>, h: Real, m: Real) -> Self {
        let impulse = spec.and_then(|s| s.impulse_step(h).map(|n| (n, s.magnitude / m)));
        Self { impulse }
    }

    /// Acceleration added at step `n`, `None` when the step is unforced.
    #[inline]
    pub fn contribution(&self, n: usize) -> Option<Real> {
        match self.impulse {
            Some((step, accel)) if step == n => Some(accel),
            _ => None,
        }
    }

    /// Step index receiving the impulse.
    pub fn step(&self) -> Option<usize> {
        self.impulse.map(|(n, _)| n)
    }
}

/// Acceleration contribution of `spec` at step `n` (`magnitude / m`), or
/// `None` when the step is unforced.
pub fn should_force(n: usize, h: Real, m: Real, spec: Option<&ForcingSpec>) -> Option<Real> {
    Forcing::new(spec, h, m).contribution(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onset_on_grid_point_hits_that_step_only() {
        let spec = ForcingSpec::new(5.0, 10.0).unwrap();
        assert_eq!(spec.impulse_step(0.1), Some(100));
        assert_eq!(should_force(100, 0.1, 2.0, Some(&spec)), Some(2.5));
        assert_eq!(should_force(99, 0.1, 2.0, Some(&spec)), None);
        assert_eq!(should_force(101, 0.1, 2.0, Some(&spec)), None);
    }

    #[test]
    fn onset_between_grid_points_picks_nearest() {
        let spec = ForcingSpec::new(1.0, 0.26).unwrap();
        assert_eq!(spec.impulse_step(0.1), Some(3));
        let spec = ForcingSpec::new(1.0, 0.24).unwrap();
        assert_eq!(spec.impulse_step(0.1), Some(2));
    }

    #[test]
    fn midpoint_goes_to_earlier_step() {
        let spec = ForcingSpec::new(1.0, 2.5).unwrap();
        assert_eq!(spec.impulse_step(1.0), Some(2));
    }

    #[test]
    fn onset_inside_first_window_hits_first_step() {
        // Step 0 is the initial state and is never produced.
        let spec = ForcingSpec::new(1.0, 0.04).unwrap();
        assert_eq!(spec.impulse_step(0.1), Some(1));
    }

    #[test]
    fn onset_at_or_before_start_never_forces() {
        assert_eq!(ForcingSpec::new(1.0, 0.0).unwrap().impulse_step(0.1), None);
        assert_eq!(ForcingSpec::new(1.0, -3.0).unwrap().impulse_step(0.1), None);
    }

    #[test]
    fn absent_spec_never_forces() {
        for n in 0..1000 {
            assert_eq!(should_force(n, 0.1, 1.0, None), None);
        }
        assert_eq!(Forcing::NONE.step(), None);
    }

    #[test]
    fn zero_magnitude_is_distinct_from_absent() {
        let spec = ForcingSpec::new(0.0, 1.0).unwrap();
        let forcing = Forcing::new(Some(&spec), 0.5, 1.0);
        assert_eq!(forcing.step(), Some(2));
        assert_eq!(forcing.contribution(2), Some(0.0));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(ForcingSpec::new(f64::NAN, 1.0).is_err());
        assert!(ForcingSpec::new(1.0, f64::INFINITY).is_err());
    }
}
