//! Unit tests for the explicit Euler stepper

use approx::assert_relative_eq;
use dampsim_core::integrator::{step, State};
use dampsim_core::params::PhysicalParameters;

fn undamped() -> PhysicalParameters {
    PhysicalParameters::new(1.0, 0.5, 0.0)
}

#[test]
fn test_first_step_of_undamped_oscillator() {
    let params = undamped();
    let start = State::from_force_law(1.0, 0.0, &params, 1.0);
    assert_relative_eq!(start.acceleration, -0.5);

    let next = step(start, 0.1, &params, 1.0);

    // v1 = 0 + (-0.5)(0.1), x1 = 1 + 0*0.1, a1 = -0.5*1
    assert_relative_eq!(next.velocity, -0.05);
    assert_relative_eq!(next.position, 1.0);
    assert_relative_eq!(next.acceleration, -0.5);
}

#[test]
fn test_position_uses_pre_step_velocity() {
    let params = PhysicalParameters::new(1.0, 1.0, 0.0);
    let start = State {
        position: 0.0,
        velocity: 2.0,
        acceleration: -10.0,
    };

    let next = step(start, 0.5, &params, 1.0);

    // x advances with the old velocity (2.0), not the updated one (-3.0)
    assert_relative_eq!(next.position, 1.0);
    assert_relative_eq!(next.velocity, -3.0);
}

#[test]
fn test_acceleration_is_recomputed_not_carried() {
    let params = PhysicalParameters::new(2.0, 4.0, 1.0);
    let start = State {
        position: 1.0,
        velocity: 1.0,
        acceleration: 123.0,
    };

    let next = step(start, 0.1, &params, 1.0);
    let expected = State::from_force_law(next.position, next.velocity, &params, 1.0);

    assert_eq!(next, expected);
}

#[test]
fn test_quadratic_damping_opposes_negative_velocity() {
    let params = PhysicalParameters::new(1.0, 0.0, 0.5);
    let start = State::from_force_law(0.0, -2.0, &params, 2.0);

    // -(b/m)·sign(v)·|v|^2 = -0.5·(-1)·4
    assert_relative_eq!(start.acceleration, 2.0);

    let next = step(start, 0.1, &params, 2.0);
    assert!(next.velocity > start.velocity, "damping should slow the mass down");
}

#[test]
fn test_stepper_is_pure() {
    let params = PhysicalParameters::new(1.5, 0.7, 0.3);
    let state = State::from_force_law(0.4, -1.2, &params, 2.0);

    let a = step(state, 0.05, &params, 2.0);
    let b = step(state, 0.05, &params, 2.0);

    assert_eq!(a.position.to_bits(), b.position.to_bits());
    assert_eq!(a.velocity.to_bits(), b.velocity.to_bits());
    assert_eq!(a.acceleration.to_bits(), b.acceleration.to_bits());
}

#[test]
fn test_zero_mass_propagates_non_finite_values() {
    let params = PhysicalParameters::new(0.0, 0.5, 0.25);
    let state = State::from_force_law(1.0, 0.0, &params, 1.0);

    assert!(!state.acceleration.is_finite());

    let next = step(state, 0.1, &params, 1.0);
    assert!(!next.velocity.is_finite());
}
