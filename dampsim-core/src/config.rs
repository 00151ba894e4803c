//! Run configuration and its validation

use crate::params::{default_initial_state, default_parameters, InitialState, PhysicalParameters};
use crate::runtime::step_count;
use thiserror::Error;

pub const DEFAULT_DT: f64 = 0.1;
pub const DEFAULT_T_MAX: f64 = 100.0;
pub const DEFAULT_DAMPING_EXPONENT: f64 = crate::params::LINEAR_DAMPING;

/// Upper bound on the number of steps a checked run will allocate
pub const MAX_STEPS: usize = 50_000_000;

/// Rejected run configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("duration must be non-negative and finite, got {0}")]
    InvalidDuration(f64),
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("run would need {requested} steps, limit is {limit}")]
    TooManySteps { requested: f64, limit: usize },
}

/// Everything a single run needs. Unset fields fall back to the defaults.
///
/// ```
/// use dampsim_core::{SimulationConfig, PhysicalParameters};
///
/// let config = SimulationConfig::new()
///     .with_parameters(PhysicalParameters::new(2.0, 0.25, 0.5))
///     .with_dt(0.01)
///     .with_damping_exponent(2.0);
/// assert_eq!(config.t_max, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub parameters: PhysicalParameters,
    pub initial_state: InitialState,
    /// Time step in seconds
    pub dt: f64,
    /// Simulated duration in seconds
    pub t_max: f64,
    pub damping_exponent: f64,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            parameters: default_parameters(),
            initial_state: default_initial_state(),
            dt: DEFAULT_DT,
            t_max: DEFAULT_T_MAX,
            damping_exponent: DEFAULT_DAMPING_EXPONENT,
        }
    }

    pub fn with_parameters(mut self, parameters: PhysicalParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    pub fn with_damping_exponent(mut self, damping_exponent: f64) -> Self {
        self.damping_exponent = damping_exponent;
        self
    }

    /// Number of entries the trajectory will hold
    pub fn steps(&self) -> usize {
        step_count(self.t_max, self.dt)
    }

    /// Check that the run is physically meaningful and bounded in memory
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mass = self.parameters.mass;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::InvalidMass(mass));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if !(self.t_max.is_finite() && self.t_max >= 0.0) {
            return Err(ConfigError::InvalidDuration(self.t_max));
        }

        let finite_fields = [
            ("spring constant", self.parameters.spring_constant),
            ("damping coefficient", self.parameters.damping_coefficient),
            ("damping exponent", self.damping_exponent),
            ("initial position", self.initial_state.position),
            ("initial velocity", self.initial_state.velocity),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let requested = (self.t_max / self.dt).floor();
        if requested > MAX_STEPS as f64 {
            return Err(ConfigError::TooManySteps {
                requested,
                limit: MAX_STEPS,
            });
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
