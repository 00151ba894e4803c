use clap::{Args, Parser, Subcommand};
use dampsim_core::{
    annotations, format_config_error, format_render_error, simulate_and_render, InitialState,
    PhysicalParameters, SimulationConfig, Trajectory, TrajectoryRenderer,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod plot_app;

use plot_app::PlotRenderer;

#[derive(Parser)]
#[command(name = "dampsim")]
#[command(about = "dampsim - Euler integration of a damped harmonic oscillator", long_about = None)]
struct Cli {
    /// Log run details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate and print a summary of the run
    Run(SimArgs),
    /// Integrate and show position, velocity and acceleration plots
    Plot(SimArgs),
}

/// Run parameters. Anything left out uses the built-in default.
#[derive(Args, Debug, Clone, Default, PartialEq)]
struct SimArgs {
    /// Mass in kg [default: 1.0]
    #[arg(long)]
    mass: Option<f64>,

    /// Spring constant in N/m [default: 0.5]
    #[arg(long, allow_negative_numbers = true)]
    spring_constant: Option<f64>,

    /// Damping coefficient [default: 0.25]
    #[arg(long, allow_negative_numbers = true)]
    damping: Option<f64>,

    /// Initial position in m [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    position: Option<f64>,

    /// Initial velocity in m/s [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    velocity: Option<f64>,

    /// Time step in s [default: 0.1]
    #[arg(long)]
    dt: Option<f64>,

    /// Simulated duration in s [default: 100.0]
    #[arg(long)]
    t_max: Option<f64>,

    /// Damping exponent p: 1 for viscous, 2 for air drag [default: 1.0]
    #[arg(short = 'p', long)]
    exponent: Option<f64>,
}

impl SimArgs {
    fn into_config(self) -> SimulationConfig {
        let defaults = SimulationConfig::new();
        let params = defaults.parameters;
        let initial = defaults.initial_state;

        SimulationConfig::new()
            .with_parameters(PhysicalParameters::new(
                self.mass.unwrap_or(params.mass),
                self.spring_constant.unwrap_or(params.spring_constant),
                self.damping.unwrap_or(params.damping_coefficient),
            ))
            .with_initial_state(InitialState::new(
                self.position.unwrap_or(initial.position),
                self.velocity.unwrap_or(initial.velocity),
            ))
            .with_dt(self.dt.unwrap_or(defaults.dt))
            .with_t_max(self.t_max.unwrap_or(defaults.t_max))
            .with_damping_exponent(self.exponent.unwrap_or(defaults.damping_exponent))
    }
}

/// Prints the annotations and run summary as `name = value` lines
struct SummaryRenderer<W: Write> {
    out: W,
}

impl<W: Write> TrajectoryRenderer for SummaryRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, trajectory: Trajectory) -> Result<(), Self::Error> {
        for line in annotations(trajectory.parameters(), trajectory.damping_exponent()) {
            writeln!(self.out, "# {}", line)?;
        }

        match trajectory.summary() {
            Some(summary) => writeln!(self.out, "{}", summary),
            None => writeln!(self.out, "steps = 0"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let (args, plot) = match command {
        Commands::Run(args) => (args, false),
        Commands::Plot(args) => (args, true),
    };

    let config = args.into_config();
    config
        .validate()
        .map_err(|e| format_config_error(&e, &config))?;

    tracing::info!(steps = config.steps(), plot, "simulating");

    if plot {
        simulate_and_render(&config, &mut PlotRenderer).map_err(|e| format_render_error(&e))?;
    } else {
        let mut renderer = SummaryRenderer { out: io::stdout().lock() };
        simulate_and_render(&config, &mut renderer).map_err(|e| format_render_error(&e))?;
    }

    Ok(())
}
