//! Physical parameters and initial conditions for a single run

/// Damping force proportional to speed (viscous / internal friction)
pub const LINEAR_DAMPING: f64 = 1.0;

/// Damping force proportional to speed squared (air drag on the bob)
pub const QUADRATIC_DAMPING: f64 = 2.0;

/// Mass, spring constant and damping coefficient of the oscillator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    pub mass: f64,             // kg
    pub spring_constant: f64,  // N/m
    pub damping_coefficient: f64,
}

impl PhysicalParameters {
    pub const fn new(mass: f64, spring_constant: f64, damping_coefficient: f64) -> Self {
        Self {
            mass,
            spring_constant,
            damping_coefficient,
        }
    }

    /// Squared natural angular frequency k/m
    pub fn omega_squared(&self) -> f64 {
        self.spring_constant / self.mass
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        default_parameters()
    }
}

/// Starting position and velocity of the mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub position: f64,
    pub velocity: f64,
}

impl InitialState {
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }
}

impl Default for InitialState {
    fn default() -> Self {
        default_initial_state()
    }
}

/// Parameters used when the caller does not supply any: 1 kg, 0.5 N/m, b = 0.25
pub const fn default_parameters() -> PhysicalParameters {
    PhysicalParameters::new(1.0, 0.5, 0.25)
}

/// Released from rest one meter out
pub const fn default_initial_state() -> InitialState {
    InitialState::new(1.0, 0.0)
}
