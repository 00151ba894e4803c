//! Diagnostics and error reporting for dampsim
//!
//! This module turns configuration and rendering failures into messages
//! for the command line.

use crate::config::{ConfigError, SimulationConfig};

/// Format a configuration error, naming the offending run when it helps
pub fn format_config_error(error: &ConfigError, config: &SimulationConfig) -> String {
    let mut msg = format!("Configuration error: {}", error);

    match error {
        ConfigError::InvalidTimeStep(_)
        | ConfigError::InvalidDuration(_)
        | ConfigError::TooManySteps { .. } => {
            msg.push_str(&format!(
                "\n  with dt = {} and t_max = {}",
                config.dt, config.t_max
            ));
        }
        _ => {}
    }

    msg
}

/// Format a rendering error
pub fn format_render_error(error: &dyn std::error::Error) -> String {
    format!("Render error: {}", error)
}
