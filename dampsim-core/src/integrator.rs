use crate::engine::acceleration;
use crate::params::PhysicalParameters;

/// Position, velocity and acceleration of the mass at one time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl State {
    /// Build a state whose acceleration is derived from the force law
    pub fn from_force_law(
        position: f64,
        velocity: f64,
        params: &PhysicalParameters,
        damping_exponent: f64,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration: acceleration(position, velocity, params, damping_exponent),
        }
    }
}

/// Advance one step of length dt using explicit Euler integration
///
/// Velocity and position are both advanced from the values at step n
/// (v += a*dt, x += v_old*dt), then the acceleration is recomputed at the
/// new state. The position update deliberately uses the pre-step velocity.
pub fn step(
    state: State,
    dt: f64,
    params: &PhysicalParameters,
    damping_exponent: f64,
) -> State {
    let velocity = state.velocity + state.acceleration * dt;
    let position = state.position + state.velocity * dt;
    State::from_force_law(position, velocity, params, damping_exponent)
}
