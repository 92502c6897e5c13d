//! Closed-form solution of the unforced damped oscillator.
//!
//! With `γ = b/m` and the complex angular frequency
//! `ω = sqrt(k/m - b²/4m²)`:
//!
//! ```text
//! x(t) = A·e^{(iω - γ/2)t} + B·e^{(-iω - γ/2)t}
//! A    = (v0 + x0·γ/2) / (2iω) + x0/2
//! B    = x0 - A
//! ```
//!
//! A real ω gives oscillatory decay, an imaginary ω turns both exponentials
//! into real decaying ones, so under- and over-damped systems share one
//! formula. At exactly critical damping ω = 0 is a removable singularity and
//! the limit `x(t) = (x0 + (v0 + x0·γ/2)·t)·e^{-γt/2}` is used.
//!
//! Time is measured from the grid start, so sample 0 is the initial state.

use num_complex::Complex64;
use shm_core::ShmResult;

use crate::grid::TimeGrid;
use crate::params::{InitialState, OscillatorParameters};
use crate::trajectory::Trajectory;

const POSITION: &str = "analytic position";

/// Complex-valued trajectory; its real part is the physical signal.
pub fn analytic(
    params: &OscillatorParameters,
    state: &InitialState,
    grid: &TimeGrid,
) -> ShmResult<Trajectory<Complex64>> {
    params.validate()?;
    state.validate()?;

    let solution = ClosedForm::new(params, state);
    let mut traj = Trajectory::with_capacity(grid.len());
    for i in 0..grid.len() {
        let (x, v) = solution.at(grid.elapsed(i));
        traj.push(x, v, POSITION)?;
    }
    Ok(traj)
}

/// Coefficients of the closed form for one parameter set.
#[derive(Clone, Copy, Debug)]
enum ClosedForm {
    /// Two distinct exponents λ± = ±iω - γ/2.
    Modes {
        a: Complex64,
        b: Complex64,
        lambda_plus: Complex64,
        lambda_minus: Complex64,
    },
    /// ω = 0: repeated root -γ/2.
    Repeated { x0: f64, c: f64, half_gamma: f64 },
}

impl ClosedForm {
    fn new(params: &OscillatorParameters, state: &InitialState) -> Self {
        let gamma = params.gamma();
        let half_gamma = gamma / 2.0;
        let omega = Complex64::new(
            params.k / params.m - params.b * params.b / (4.0 * params.m * params.m),
            0.0,
        )
        .sqrt();

        let (x0, v0) = (state.x0, state.v0);
        if omega.norm() == 0.0 {
            return ClosedForm::Repeated {
                x0,
                c: v0 + x0 * half_gamma,
                half_gamma,
            };
        }

        let i_omega = Complex64::i() * omega;
        let a = (v0 + x0 * half_gamma) / (2.0 * i_omega) + x0 / 2.0;
        let b = x0 - a;
        ClosedForm::Modes {
            a,
            b,
            lambda_plus: i_omega - half_gamma,
            lambda_minus: -i_omega - half_gamma,
        }
    }

    /// Displacement and velocity at elapsed time `t`.
    fn at(&self, t: f64) -> (Complex64, Complex64) {
        match *self {
            ClosedForm::Modes {
                a,
                b,
                lambda_plus,
                lambda_minus,
            } => {
                let plus = a * (lambda_plus * t).exp();
                let minus = b * (lambda_minus * t).exp();
                (plus + minus, lambda_plus * plus + lambda_minus * minus)
            }
            ClosedForm::Repeated { x0, c, half_gamma } => {
                let decay = (-half_gamma * t).exp();
                let x = (x0 + c * t) * decay;
                let v = c * decay - half_gamma * x;
                (Complex64::new(x, 0.0), Complex64::new(v, 0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shm_core::ShmError;
    use std::f64::consts::PI;

    fn run(b: f64, m: f64, k: f64, x0: f64, v0: f64, stop: f64, h: f64) -> Trajectory<Complex64> {
        let params = OscillatorParameters::new(b, m, k).unwrap();
        let state = InitialState::new(x0, v0).unwrap();
        let grid = TimeGrid::new(0.0, stop, h).unwrap();
        analytic(&params, &state, &grid).unwrap()
    }

    #[test]
    fn undamped_reduces_to_cos_and_sin() {
        let (m, k, x0, v0): (f64, f64, f64, f64) = (2.0, 8.0, 0.5, 1.5);
        let w = (k / m).sqrt();
        let h = 0.05;
        let traj = run(0.0, m, k, x0, v0, 5.0, h);
        for (i, (x, v)) in traj.iter().enumerate() {
            let t = i as f64 * h;
            let x_ref = x0 * (w * t).cos() + v0 / w * (w * t).sin();
            let v_ref = -x0 * w * (w * t).sin() + v0 * (w * t).cos();
            assert!((x.re - x_ref).abs() < 1e-12, "x at {t}");
            assert!((v.re - v_ref).abs() < 1e-12, "v at {t}");
            assert!(x.im.abs() < 1e-12);
        }
    }

    #[test]
    fn unit_oscillator_is_cosine() {
        let traj = run(0.0, 1.0, 1.0, 1.0, 0.0, 2.0 * PI, 0.01);
        assert_eq!(traj.len(), 629);
        for (i, x) in traj.positions().iter().enumerate() {
            assert!((x.re - (i as f64 * 0.01).cos()).abs() < 1e-9);
        }
    }

    #[test]
    fn reproduces_initial_state() {
        for b in [0.0, 0.3, 2.0, 5.0] {
            let traj = run(b, 1.0, 1.0, 0.7, -0.4, 1.0, 0.1);
            let (x, v) = (traj.positions()[0], traj.velocities()[0]);
            assert!((x.re - 0.7).abs() < 1e-12, "b={b}");
            assert!((v.re + 0.4).abs() < 1e-12, "b={b}");
        }
    }

    #[test]
    fn overdamped_is_real_and_monotone() {
        let traj = run(5.0, 1.0, 1.0, 1.0, 0.0, 5.0, 0.1);
        let xs: Vec<f64> = traj.positions().iter().map(|z| z.re).collect();
        for z in traj.positions() {
            assert!(z.im.abs() < 1e-9);
        }
        assert!(xs.windows(2).all(|w| w[1] <= w[0]));
        assert!(xs.iter().all(|x| *x > 0.0));
    }

    #[test]
    fn critical_damping_uses_limit_form() {
        // b = 2 sqrt(km) with k = m = 1
        let traj = run(2.0, 1.0, 1.0, 1.0, 0.0, 1.1, 0.5);
        let expected = [1.0, 1.5 * (-0.5_f64).exp(), 2.0 * (-1.0_f64).exp()];
        for (z, x) in traj.positions().iter().zip(expected) {
            assert!((z.re - x).abs() < 1e-12);
        }
        // Continuity with a barely under-critical system.
        let near = run(2.0 - 1e-7, 1.0, 1.0, 1.0, 0.0, 1.1, 0.5);
        for (a, b) in traj.positions().iter().zip(near.positions()) {
            assert!((a.re - b.re).abs() < 1e-6);
        }
    }

    #[test]
    fn free_particle_without_spring() {
        let traj = run(0.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.25);
        let xs: Vec<f64> = traj.positions().iter().map(|z| z.re).collect();
        assert_eq!(xs, vec![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn overflow_is_reported() {
        // k/m is not representable.
        let params = OscillatorParameters::new(0.0, 1e-300, 1e300).unwrap();
        let state = InitialState::new(1.0, 1e300).unwrap();
        let grid = TimeGrid::new(0.0, 1.0, 0.5).unwrap();
        let err = analytic(&params, &state, &grid).unwrap_err();
        assert!(matches!(err, ShmError::NumericOverflow { .. }));
    }

    #[test]
    fn rejects_zero_mass() {
        let params = OscillatorParameters { b: 0.0, m: 0.0, k: 1.0 };
        let state = InitialState { x0: 1.0, v0: 0.0 };
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
        assert!(matches!(
            analytic(&params, &state, &grid),
            Err(ShmError::Domain { .. })
        ));
    }
}
