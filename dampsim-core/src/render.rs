//! What a renderer needs to draw a finished run
//!
//! The core never draws anything itself. A [`TrajectoryRenderer`] receives the
//! finished [`Trajectory`] and turns it into three plots (position, velocity
//! and acceleration against time), each annotated with [`annotations`].

use crate::params::PhysicalParameters;
use crate::runtime::Trajectory;

/// Horizontal axis label shared by every plot
pub const TIME_LABEL: &str = "Time [s]";

/// One of the three plotted state series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
}

impl Quantity {
    /// Plot order
    pub const ALL: [Quantity; 3] = [Quantity::Position, Quantity::Velocity, Quantity::Acceleration];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Position => "Position",
            Quantity::Velocity => "Velocity",
            Quantity::Acceleration => "Acceleration",
        }
    }

    /// Vertical axis label with unit
    pub fn axis_label(&self) -> &'static str {
        match self {
            Quantity::Position => "Position [m]",
            Quantity::Velocity => "Velocity [m/s]",
            Quantity::Acceleration => "Acceleration [m/s^2]",
        }
    }
}

/// Consumer of a finished run
pub trait TrajectoryRenderer {
    type Error;

    fn render(&mut self, trajectory: Trajectory) -> Result<(), Self::Error>;
}

/// Format a number the way it is shown in annotations (`1.0`, `0.25`)
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

/// Text lines printed next to every plot
pub fn annotations(params: &PhysicalParameters, damping_exponent: f64) -> [String; 4] {
    [
        format!("Spring constant: {} N/m", format_value(params.spring_constant)),
        format!("Mass: {} kg", format_value(params.mass)),
        format!("Damping coefficient: {}", format_value(params.damping_coefficient)),
        format!("Velocity dependence: v^{}", format_value(damping_exponent)),
    ]
}
