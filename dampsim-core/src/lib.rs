pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod params;
pub mod render;
pub mod runtime;

pub use config::{ConfigError, SimulationConfig, MAX_STEPS};
pub use diagnostics::{format_config_error, format_render_error};
pub use engine::{acceleration, mechanical_energy, sign};
pub use integrator::{step, State};
pub use params::{
    default_initial_state, default_parameters, InitialState, PhysicalParameters, LINEAR_DAMPING,
    QUADRATIC_DAMPING,
};
pub use render::{annotations, Quantity, TrajectoryRenderer, TIME_LABEL};
pub use runtime::{
    run_checked, run_simulation, simulate_and_render, step_count, RunSummary, Trajectory,
};
