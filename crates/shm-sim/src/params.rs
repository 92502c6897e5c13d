//! Oscillator parameters and initial conditions.

use shm_core::{
    Damping, Length, Mass, Real, ShmResult, Velocity, ensure_finite, ensure_non_negative,
    ensure_positive, si,
};

/// Physical constants of `m x'' = -b x' - k x (+ F)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OscillatorParameters {
    /// Damping coefficient (damping force = b·v), must be >= 0
    pub b: Real,
    /// Mass, must be positive
    pub m: Real,
    /// Spring constant, must be >= 0
    pub k: Real,
}

/// How the free response decays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DampingRegime {
    /// b == 0: oscillates forever
    Undamped,
    /// 0 < b < b_cr: oscillatory decay
    Underdamped,
    /// b == b_cr: fastest non-oscillating return
    Critical,
    /// b > b_cr: sum of two real decaying exponentials
    Overdamped,
}

impl OscillatorParameters {
    /// Create validated parameters.
    pub fn new(b: Real, m: Real, k: Real) -> ShmResult<Self> {
        let params = Self { b, m, k };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters from SI quantities; `k` is in N/m.
    pub fn from_si(damping: Damping, mass: Mass, k: Real) -> ShmResult<Self> {
        Self::new(si::kgps(damping), si::kg(mass), k)
    }

    /// Check the physical constraints. Fields are public, so every engine
    /// operation calls this at entry.
    pub fn validate(&self) -> ShmResult<()> {
        ensure_non_negative(self.b, "damping coefficient b must be finite and >= 0")?;
        ensure_positive(self.m, "mass m must be finite and > 0")?;
        ensure_non_negative(self.k, "spring constant k must be finite and >= 0")?;
        Ok(())
    }

    /// Damping rate γ = b/m.
    #[inline]
    pub fn gamma(&self) -> Real {
        self.b / self.m
    }

    /// Undamped natural frequency sqrt(k/m).
    #[inline]
    pub fn natural_frequency(&self) -> Real {
        (self.k / self.m).sqrt()
    }

    /// Critical damping b_cr = 2·sqrt(k·m).
    #[inline]
    pub fn critical_damping(&self) -> Real {
        2.0 * (self.k * self.m).sqrt()
    }

    /// ζ = b / b_cr. Infinite for a damped system without a spring.
    pub fn damping_ratio(&self) -> Real {
        let b_cr = self.critical_damping();
        if b_cr == 0.0 {
            if self.b == 0.0 { 0.0 } else { Real::INFINITY }
        } else {
            self.b / b_cr
        }
    }

    pub fn regime(&self) -> DampingRegime {
        if self.b == 0.0 {
            return DampingRegime::Undamped;
        }
        // Same discriminant the closed-form solution uses: k/m - b²/4m².
        let discriminant = self.k / self.m - self.b * self.b / (4.0 * self.m * self.m);
        if discriminant > 0.0 {
            DampingRegime::Underdamped
        } else if discriminant == 0.0 {
            DampingRegime::Critical
        } else {
            DampingRegime::Overdamped
        }
    }

    /// Half-critical, critical and twice-critical damping levels.
    pub fn damping_markers(&self) -> [Real; 3] {
        let b_cr = self.critical_damping();
        [0.5 * b_cr, b_cr, 2.0 * b_cr]
    }
}

/// Displacement and velocity at the first grid sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialState {
    pub x0: Real,
    pub v0: Real,
}

impl InitialState {
    pub fn new(x0: Real, v0: Real) -> ShmResult<Self> {
        let state = Self { x0, v0 };
        state.validate()?;
        Ok(state)
    }

    pub fn from_si(displacement: Length, velocity: Velocity) -> ShmResult<Self> {
        Self::new(si::m(displacement), si::mps(velocity))
    }

    pub fn validate(&self) -> ShmResult<()> {
        ensure_finite(self.x0, "initial displacement x0")?;
        ensure_finite(self.v0, "initial velocity v0")?;
        Ok(())
    }
}
