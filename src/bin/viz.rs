use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use orbit_sim::sim::{run_simulation, SimConfig, SimulationRun};
use orbit_sim::system::presets;

fn main() -> eframe::Result {
    let system = presets::inner_solar_system();
    let config = SimConfig::default();
    let run = run_simulation(&system, &config).expect("preset system simulates");

    let app = OrbitViz { run, system_name: system.name.clone() };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Orbital Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    run: SimulationRun,
    system_name: String,
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("System: {}", self.system_name));
            let span = self.run.time.last().copied().unwrap_or(0.0);
            ui.label(format!(
                "Entries: {}  |  Steps: {}  |  Span: {:.2} yr",
                self.run.traces.len(),
                self.run.num_steps(),
                span,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let full_h = available.y - 8.0;

            ui.horizontal(|ui| {
                // Orbit tracks (y vs x)
                ui.vertical(|ui| {
                    ui.label("Orbit tracks (AU)");
                    Plot::new("tracks")
                        .width(half_w)
                        .height(full_h)
                        .x_axis_label("x (AU)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            for trace in &self.run.traces {
                                let points: PlotPoints =
                                    trace.positions.iter().map(|p| [p.x, p.y]).collect();
                                plot_ui.line(Line::new(trace.name.clone(), points));
                            }
                        });
                });

                // X position vs time
                ui.vertical(|ui| {
                    ui.label("X position (AU)");
                    Plot::new("x_pos")
                        .width(half_w)
                        .height(full_h)
                        .x_axis_label("Time (yr)")
                        .show(ui, |plot_ui| {
                            for trace in &self.run.traces {
                                let points: PlotPoints = self
                                    .run
                                    .time
                                    .iter()
                                    .zip(&trace.positions)
                                    .map(|(t, p)| [*t, p.x])
                                    .collect();
                                plot_ui.line(Line::new(trace.name.clone(), points));
                            }
                        });
                });
            });
        });
    }
}
