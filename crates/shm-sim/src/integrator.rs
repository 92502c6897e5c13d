//! Fixed-step time integrators.
//!
//! Every integrator is a pure function of its inputs: state `(x_n, v_n)`
//! starts at `(x0, v0)`, the update rule is applied until the trajectory
//! holds one sample per grid point, and nothing is shared between runs.

use shm_core::{Real, ShmError, ShmResult};

use crate::analytic::analytic;
use crate::forcing::{Forcing, ForcingSpec};
use crate::grid::TimeGrid;
use crate::method::Method;
use crate::params::{InitialState, OscillatorParameters};
use crate::trajectory::Trajectory;

/// Trait for time integrators.
pub trait Integrator {
    /// Which scheme this is.
    fn method(&self) -> Method;

    /// Produce the trajectory on `grid` starting from `state`.
    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory>;
}

/// Validated per-run constants shared by the update rules.
struct StepContext {
    x0: Real,
    v0: Real,
    h: Real,
    b_over_m: Real,
    k_over_m: Real,
    n: usize,
    forcing: Forcing,
}

impl StepContext {
    fn new(
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Self> {
        params.validate()?;
        state.validate()?;
        if let Some(spec) = forcing {
            spec.validate()?;
        }
        let h = grid.step();
        if h.is_nan() || h <= 0.0 {
            return Err(ShmError::Domain {
                what: "grid step h must be positive",
            });
        }
        Ok(Self {
            x0: state.x0,
            v0: state.v0,
            h,
            b_over_m: params.b / params.m,
            k_over_m: params.k / params.m,
            n: grid.len(),
            forcing: Forcing::new(forcing, h, params.m),
        })
    }

    /// `a_n = -(b/m) v_n - (k/m) x_n`
    #[inline]
    fn acceleration(&self, x: Real, v: Real) -> Real {
        -self.b_over_m * v - self.k_over_m * x
    }

    /// Acceleration plus the impulse of step `n`, if any.
    #[inline]
    fn forced_acceleration(&self, n: usize, x: Real, v: Real) -> Real {
        let a = self.acceleration(x, v);
        match self.forcing.contribution(n) {
            Some(impulse) => a + impulse,
            None => a,
        }
    }

    fn start(&self, what: &'static str) -> ShmResult<Trajectory> {
        let mut traj = Trajectory::with_capacity(self.n);
        traj.push(self.x0, self.v0, what)?;
        Ok(traj)
    }
}

/// Forward (explicit) Euler, first order. The position update uses the old
/// velocity; energy of an undamped system grows every step.
///
/// ```text
/// a_n     = -(b/m) v_n - (k/m) x_n + F_n/m
/// v_{n+1} = v_n + h a_n
/// x_{n+1} = x_n + h v_n
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn method(&self) -> Method {
        Method::ExplicitEuler
    }

    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        const WHAT: &str = "explicit Euler state";
        let ctx = StepContext::new(params, state, grid, forcing)?;
        let mut traj = ctx.start(WHAT)?;

        let (mut x, mut v) = (ctx.x0, ctx.v0);
        for n in 1..ctx.n {
            let a = ctx.forced_acceleration(n, x, v);
            (x, v) = (x + ctx.h * v, v + ctx.h * a);
            traj.push(x, v, WHAT)?;
        }
        Ok(traj)
    }
}

/// "Improved Euler": explicit Euler with a second-order Taylor term in the
/// position update. Acceleration is evaluated once per step; this is not
/// Heun's predictor-corrector.
///
/// ```text
/// v_{n+1} = v_n + h a_n
/// x_{n+1} = x_n + h v_n + (h²/2) a_n
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CorrectedEuler;

impl Integrator for CorrectedEuler {
    fn method(&self) -> Method {
        Method::CorrectedEuler
    }

    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        const WHAT: &str = "corrected Euler state";
        let ctx = StepContext::new(params, state, grid, forcing)?;
        let mut traj = ctx.start(WHAT)?;

        let half_h2 = 0.5 * ctx.h * ctx.h;
        let (mut x, mut v) = (ctx.x0, ctx.v0);
        for n in 1..ctx.n {
            let a = ctx.forced_acceleration(n, x, v);
            (x, v) = (x + ctx.h * v + half_h2 * a, v + ctx.h * a);
            traj.push(x, v, WHAT)?;
        }
        Ok(traj)
    }
}

/// Two-step position recurrence ("Verlet") with velocity eliminated:
///
/// ```text
/// D       = 2m + bh
/// A       = 2(2m - kh²) / D
/// B       = (bh - 2m) / D
/// x_1     = x_0 + v_0 h                       (bootstrap, no x_{-1})
/// x_{n+1} = A x_n + B x_{n-1} + (F_{n+1}/m) h²
/// ```
///
/// Velocities are reconstructed by central difference and reported one
/// sample late: `v[0] = v[1] = v0`, `v[n] = (x[n] - x[n-2]) / 2h`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionRecurrence;

impl PositionRecurrence {
    /// Recurrence coefficients `(A, B)`; fails when `D = 2m + bh` is zero.
    pub fn coefficients(params: &OscillatorParameters, h: Real) -> ShmResult<(Real, Real)> {
        let (m, b, k) = (params.m, params.b, params.k);
        let d = 2.0 * m + b * h;
        if d == 0.0 || !d.is_finite() {
            return Err(ShmError::Domain {
                what: "position recurrence denominator D = 2m + bh is degenerate",
            });
        }
        Ok((2.0 * (2.0 * m - k * h * h) / d, (b * h - 2.0 * m) / d))
    }
}

impl Integrator for PositionRecurrence {
    fn method(&self) -> Method {
        Method::PositionRecurrence
    }

    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        const WHAT: &str = "position recurrence state";
        let ctx = StepContext::new(params, state, grid, forcing)?;
        let (a_coef, b_coef) = Self::coefficients(params, ctx.h)?;
        let mut traj = ctx.start(WHAT)?;
        if ctx.n < 2 {
            return Ok(traj);
        }

        let mut prev = ctx.x0;
        let mut curr = ctx.x0 + ctx.v0 * ctx.h;
        traj.push(curr, ctx.v0, WHAT)?;

        let h2 = ctx.h * ctx.h;
        for n in 2..ctx.n {
            let mut next = a_coef * curr + b_coef * prev;
            if let Some(impulse) = ctx.forcing.contribution(n) {
                next += impulse * h2;
            }
            // Central difference of the previous sample.
            let v = (next - prev) / (2.0 * ctx.h);
            traj.push(next, v, WHAT)?;
            (prev, curr) = (curr, next);
        }
        Ok(traj)
    }
}

/// Semi-implicit ("Euler-Cromer") update: the position step uses the new
/// velocity. For oscillatory systems the energy error stays bounded instead
/// of growing every step as it does with [`ExplicitEuler`] at equal cost.
///
/// ```text
/// v_{n+1} = v_n + (-(k/m) x_n - (b/m) v_n) h + (F_{n+1}/m) h
/// x_{n+1} = x_n + v_{n+1} h
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SemiImplicit;

impl Integrator for SemiImplicit {
    fn method(&self) -> Method {
        Method::SemiImplicit
    }

    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        const WHAT: &str = "semi-implicit state";
        let ctx = StepContext::new(params, state, grid, forcing)?;
        let mut traj = ctx.start(WHAT)?;

        let (mut x, mut v) = (ctx.x0, ctx.v0);
        for n in 1..ctx.n {
            v += ctx.forced_acceleration(n, x, v) * ctx.h;
            x += v * ctx.h;
            traj.push(x, v, WHAT)?;
        }
        Ok(traj)
    }
}

/// The closed-form reference as an [`Integrator`]; yields the real part.
/// Forcing is not part of the closed form and is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Analytic;

impl Integrator for Analytic {
    fn method(&self) -> Method {
        Method::Analytic
    }

    fn integrate(
        &self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        _forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        Ok(analytic(params, state, grid)?.real())
    }
}
