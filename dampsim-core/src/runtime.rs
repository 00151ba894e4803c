use crate::config::{ConfigError, SimulationConfig};
use crate::engine::mechanical_energy;
use crate::integrator::{step, State};
use crate::params::PhysicalParameters;
use crate::render::{Quantity, TrajectoryRenderer};
use std::fmt;
use tracing::{debug, warn};

/// Number of stored steps for a run: floor(t_max / dt)
pub fn step_count(t_max: f64, dt: f64) -> usize {
    // `as` saturates, so negative or NaN ratios give an empty run
    (t_max / dt).floor() as usize
}

/// Time series produced by one run. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    position: Vec<f64>,
    velocity: Vec<f64>,
    acceleration: Vec<f64>,
    parameters: PhysicalParameters,
    damping_exponent: f64,
    dt: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.parameters
    }

    pub fn damping_exponent(&self) -> f64 {
        self.damping_exponent
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// State stored at step `n`
    pub fn state(&self, n: usize) -> Option<State> {
        Some(State {
            position: *self.position.get(n)?,
            velocity: *self.velocity.get(n)?,
            acceleration: *self.acceleration.get(n)?,
        })
    }

    pub fn series(&self, quantity: Quantity) -> &[f64] {
        match quantity {
            Quantity::Position => &self.position,
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
        }
    }

    /// (time, value) pairs ready for plotting
    pub fn points(&self, quantity: Quantity) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(self.series(quantity))
            .map(|(&t, &y)| [t, y])
            .collect()
    }

    /// Mechanical energy at every step
    pub fn energy(&self) -> Vec<f64> {
        self.position
            .iter()
            .zip(&self.velocity)
            .map(|(&x, &v)| mechanical_energy(x, v, &self.parameters))
            .collect()
    }

    /// Condensed view of the run, `None` when no steps were stored
    pub fn summary(&self) -> Option<RunSummary> {
        let initial = self.state(0)?;
        let last = self.len() - 1;
        let final_state = self.state(last)?;
        let peak_displacement = self
            .position
            .iter()
            .fold(0.0_f64, |peak, x| peak.max(x.abs()));

        Some(RunSummary {
            steps: self.len(),
            final_time: self.time[last],
            initial_acceleration: initial.acceleration,
            final_state,
            initial_energy: mechanical_energy(initial.position, initial.velocity, &self.parameters),
            final_energy: mechanical_energy(
                final_state.position,
                final_state.velocity,
                &self.parameters,
            ),
            peak_displacement,
        })
    }
}

/// Headline numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub final_time: f64,
    pub initial_acceleration: f64,
    pub final_state: State,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub peak_displacement: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "steps = {}", self.steps)?;
        writeln!(f, "final_time = {}", self.final_time)?;
        writeln!(f, "initial_acceleration = {}", self.initial_acceleration)?;
        writeln!(f, "final_position = {}", self.final_state.position)?;
        writeln!(f, "final_velocity = {}", self.final_state.velocity)?;
        writeln!(f, "final_acceleration = {}", self.final_state.acceleration)?;
        writeln!(f, "initial_energy = {}", self.initial_energy)?;
        writeln!(f, "final_energy = {}", self.final_energy)?;
        write!(f, "peak_displacement = {}", self.peak_displacement)
    }
}

/// Main entry point: integrate the oscillator over the configured duration
///
/// No validation happens here: a zero mass fills the trajectory with NaN/Inf
/// and a huge t_max/dt ratio allocates accordingly. Use [`run_checked`] for
/// untrusted input.
pub fn run_simulation(config: &SimulationConfig) -> Trajectory {
    let params = config.parameters;
    let exponent = config.damping_exponent;
    let dt = config.dt;
    let steps = step_count(config.t_max, dt);

    debug!(steps, dt, t_max = config.t_max, damping_exponent = exponent, "starting run");

    let mut position = vec![0.0; steps];
    let mut velocity = vec![0.0; steps];
    let mut acceleration = vec![0.0; steps];

    if steps > 0 {
        let initial = config.initial_state;
        let mut state = State::from_force_law(initial.position, initial.velocity, &params, exponent);
        position[0] = state.position;
        velocity[0] = state.velocity;
        acceleration[0] = state.acceleration;

        for n in 1..steps {
            state = step(state, dt, &params, exponent);
            position[n] = state.position;
            velocity[n] = state.velocity;
            acceleration[n] = state.acceleration;
        }

        debug!(
            position = state.position,
            velocity = state.velocity,
            acceleration = state.acceleration,
            "run finished"
        );
    }

    let time = (0..steps).map(|n| n as f64 * dt).collect();

    Trajectory {
        time,
        position,
        velocity,
        acceleration,
        parameters: params,
        damping_exponent: exponent,
        dt,
    }
}

/// Validate the configuration, then run it
pub fn run_checked(config: &SimulationConfig) -> Result<Trajectory, ConfigError> {
    if let Err(e) = config.validate() {
        warn!(error = %e, "rejected simulation config");
        return Err(e);
    }
    Ok(run_simulation(config))
}

/// Run the simulation and hand the result to a renderer
pub fn simulate_and_render<R: TrajectoryRenderer>(
    config: &SimulationConfig,
    renderer: &mut R,
) -> Result<(), R::Error> {
    let trajectory = run_simulation(config);
    renderer.render(trajectory)
}
