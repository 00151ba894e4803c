//! Plot window for a finished dampsim run
//!
//! Shows position, velocity and acceleration against time, stacked
//! vertically, each with the run parameters written above it.

use dampsim_core::{annotations, Quantity, Trajectory, TrajectoryRenderer, TIME_LABEL};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Opens a native window and blocks until it is closed
pub struct PlotRenderer;

impl TrajectoryRenderer for PlotRenderer {
    type Error = eframe::Error;

    fn render(&mut self, trajectory: Trajectory) -> Result<(), Self::Error> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 900.0])
                .with_min_inner_size([500.0, 600.0])
                .with_title("dampsim"),
            ..Default::default()
        };

        eframe::run_native(
            "dampsim",
            native_options,
            Box::new(move |_cc| Ok(Box::new(PlotApp::new(trajectory)))),
        )
    }
}

struct PlotApp {
    trajectory: Trajectory,
    annotations: [String; 4],
}

impl PlotApp {
    fn new(trajectory: Trajectory) -> Self {
        let annotations = annotations(trajectory.parameters(), trajectory.damping_exponent());
        Self {
            trajectory,
            annotations,
        }
    }

    fn plot_quantity(&self, ui: &mut egui::Ui, quantity: Quantity, height: f32) {
        ui.heading(quantity.name());
        ui.horizontal_wrapped(|ui| {
            for line in &self.annotations {
                ui.label(line);
                ui.separator();
            }
        });

        let points: PlotPoints = self.trajectory.points(quantity).into();

        Plot::new(quantity.name())
            .height(height)
            .show_axes(true)
            .show_grid(true)
            .x_axis_label(TIME_LABEL)
            .y_axis_label(quantity.axis_label())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).name(quantity.name()).width(1.5));
            });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("run_info").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Steps: {}", self.trajectory.len()));
                ui.separator();
                ui.label(format!("dt: {} s", self.trajectory.dt()));
                if let Some(&t_end) = self.trajectory.time().last() {
                    ui.separator();
                    ui.label(format!("t_end: {:.3} s", t_end));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.trajectory.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("Run has no steps: t_max is shorter than dt");
                });
                return;
            }

            // Heading and annotation row take roughly 50 points per plot
            let height = (ui.available_height() / 3.0 - 50.0).max(120.0);
            for quantity in Quantity::ALL {
                self.plot_quantity(ui, quantity, height);
            }
        });
    }
}
