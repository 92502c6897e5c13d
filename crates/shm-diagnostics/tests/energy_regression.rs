//! Integration test: energy and chi-squared diagnostics distinguish the
//! energy-conserving schemes from explicit Euler.

use std::f64::consts::PI;

use shm_diagnostics::{chi_square, relative_energy_drift, rms_error, trajectory_energy};
use shm_sim::{InitialState, Method, OscillatorParameters, TimeGrid, analytic};

fn unit() -> (OscillatorParameters, InitialState) {
    (
        OscillatorParameters::new(0.0, 1.0, 1.0).unwrap(),
        InitialState::new(1.0, 0.0).unwrap(),
    )
}

#[test]
fn analytic_energy_is_half_at_every_sample() {
    let (params, state) = unit();
    let grid = TimeGrid::new(0.0, 2.0 * PI, 0.01).unwrap();
    // Complex trajectory straight from the solver.
    let traj = analytic(&params, &state, &grid).unwrap();
    let e = trajectory_energy(&params, &traj).unwrap();
    assert_eq!(e.len(), 629);
    assert!(e.iter().all(|e| (e - 0.5).abs() < 1e-6));
    assert!(relative_energy_drift(&e).unwrap() < 1e-9);
}

#[test]
fn euler_drifts_where_euler_cromer_does_not() {
    let (params, state) = unit();
    let grid = TimeGrid::new(0.0, 20.0 * PI, 0.01).unwrap();

    let drift = |method: Method| {
        let traj = method.run(&params, &state, &grid, None).unwrap();
        relative_energy_drift(&trajectory_energy(&params, &traj).unwrap()).unwrap()
    };

    let euler = drift(Method::ExplicitEuler);
    let cromer = drift(Method::SemiImplicit);
    assert!(euler > 0.5, "euler drift {euler}");
    assert!(cromer < 0.01, "euler-cromer drift {cromer}");
}

#[test]
fn chi_square_against_reference_energy_ranks_methods() {
    let (params, state) = unit();
    let grid = TimeGrid::new(0.0, 2.0 * PI, 0.01).unwrap();
    let reference = Method::Analytic.run(&params, &state, &grid, None).unwrap();
    let e_ref = trajectory_energy(&params, &reference).unwrap();

    let chi = |method: Method| {
        let traj = method.run(&params, &state, &grid, None).unwrap();
        chi_square(&trajectory_energy(&params, &traj).unwrap(), &e_ref).unwrap()
    };

    assert!(chi(Method::Analytic) < 1e-20);
    assert!(chi(Method::SemiImplicit) < chi(Method::ExplicitEuler));
}

#[test]
fn chi_square_on_positions_hits_zero_model() {
    // A free particle starting at the origin has x_0 = 0.
    let params = OscillatorParameters::new(0.0, 1.0, 0.0).unwrap();
    let state = InitialState::new(0.0, 1.0).unwrap();
    let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
    let reference = Method::Analytic.run(&params, &state, &grid, None).unwrap();
    let euler = Method::ExplicitEuler.run(&params, &state, &grid, None).unwrap();

    assert!(chi_square(euler.positions(), reference.positions()).is_err());
    // Without a spring or damping explicit Euler is exact.
    assert!(rms_error(euler.positions(), reference.positions()).unwrap() < 1e-12);
}
