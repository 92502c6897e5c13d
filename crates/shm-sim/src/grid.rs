//! Uniform sample times.

use shm_core::{Real, ShmError, ShmResult, Time, ensure_finite, si};

/// Ascending sample times `start + i·step` for `i in 0..len`, with
/// `len = ceil((stop - start) / step)`; `stop` itself is excluded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    start: Real,
    stop: Real,
    step: Real,
    len: usize,
}

impl TimeGrid {
    /// Upper bound on the number of samples a grid may hold.
    pub const MAX_LEN: usize = 5_000_000;

    pub fn new(start: Real, stop: Real, step: Real) -> ShmResult<Self> {
        ensure_finite(start, "grid start")?;
        ensure_finite(stop, "grid stop")?;
        ensure_finite(step, "grid step")?;
        if step <= 0.0 {
            return Err(ShmError::Domain {
                what: "grid step h must be positive",
            });
        }
        if stop <= start {
            return Err(ShmError::Domain {
                what: "grid stop must exceed start",
            });
        }

        let span = ((stop - start) / step).ceil();
        if !span.is_finite() || span > Self::MAX_LEN as Real {
            return Err(ShmError::Domain {
                what: "grid holds more than TimeGrid::MAX_LEN samples",
            });
        }
        // a span far below one step can round to zero; the start sample always exists
        let len = (span as usize).max(1);

        Ok(Self {
            start,
            stop,
            step,
            len,
        })
    }

    pub fn from_si(start: Time, stop: Time, step: Time) -> ShmResult<Self> {
        Self::new(si::s(start), si::s(stop), si::s(step))
    }

    /// Same interval, different step.
    pub fn with_step(&self, step: Real) -> ShmResult<Self> {
        Self::new(self.start, self.stop, step)
    }

    #[inline]
    pub fn start(&self) -> Real {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> Real {
        self.stop
    }

    /// Step size h.
    #[inline]
    pub fn step(&self) -> Real {
        self.step
    }

    /// Number of samples N (always >= 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Absolute time of sample `i`.
    #[inline]
    pub fn time(&self, i: usize) -> Real {
        self.start + i as Real * self.step
    }

    /// Time of sample `i` measured from the grid start.
    #[inline]
    pub fn elapsed(&self, i: usize) -> Real {
        i as Real * self.step
    }

    pub fn times(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.len).map(|i| self.time(i))
    }
}
