mod model;

use eframe::egui;
use egui_plot::{Line, LineStyle, Plot, PlotBounds, Points};

use model::{HoverSample, CLASSES_MAX, CLASSES_MIN, LOSS_MAX, LOSS_MIN};

/// Marker and curve color.
const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(52, 152, 219);

/// Chart primitives: one fixed curve, three static references, one dynamic
/// random-guess baseline. All owned here and mutated in place.
struct LossChart {
    curve: Vec<[f64; 2]>,
    target_refs: Vec<Vec<[f64; 2]>>,
    random_line: Vec<[f64; 2]>,
}

impl LossChart {
    fn new(num_classes: u32) -> Self {
        Self {
            curve: model::loss_curve(),
            target_refs: model::target_ref_losses()
                .iter()
                .map(|&x| model::vertical_segment(x))
                .collect(),
            random_line: model::vertical_segment(model::random_guess_loss(num_classes)),
        }
    }

    /// Rebuild the random-guess baseline for a new class count. For large N
    /// the segment lands beyond the visible axis and the plot clips it.
    fn update_random_line(&mut self, num_classes: u32) {
        self.random_line = model::vertical_segment(model::random_guess_loss(num_classes));
    }
}

struct ExplorerApp {
    num_classes: u32,
    chart: LossChart,
}

impl Default for ExplorerApp {
    fn default() -> Self {
        Self {
            num_classes: CLASSES_MIN,
            chart: LossChart::new(CLASSES_MIN),
        }
    }
}

impl ExplorerApp {
    fn draw_formula_banner(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Loss Basis:").strong().size(18.0));
                ui.label(egui::RichText::new("L = -ln(P_target)").size(18.0));
                ui.add_space(30.0);
                ui.label(egui::RichText::new("Average of Others:").strong().size(18.0));
                ui.label(
                    egui::RichText::new("P_others_avg = (1 - P_target) / (N - 1)").size(18.0),
                );
            });
        });
    }

    fn draw_classes_control(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Classes (N):").strong());
            let resp = ui.add(
                egui::DragValue::new(&mut self.num_classes)
                    .range(CLASSES_MIN..=CLASSES_MAX)
                    .speed(1),
            );
            if resp.changed() {
                self.chart.update_random_line(self.num_classes);
                log::debug!(
                    "classes set to {}, random baseline at loss {:.4}",
                    self.num_classes,
                    model::random_guess_loss(self.num_classes)
                );
            }
        });
    }

    fn draw_chart(&mut self, ui: &mut egui::Ui) {
        let num_classes = self.num_classes;
        let plot = Plot::new("xent_chart")
            .x_axis_label("Loss")
            .y_axis_label("Probability")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false);

        let resp = plot.show(ui, |plot_ui| {
            // Bounds stay pinned so an off-axis baseline cannot re-scale the
            // axes; anything outside is clipped.
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([LOSS_MIN, 0.0], [LOSS_MAX, 1.0]));

            plot_ui.line(
                Line::new(self.chart.curve.clone())
                    .color(CURVE_COLOR)
                    .width(2.0),
            );
            for seg in &self.chart.target_refs {
                plot_ui.line(
                    Line::new(seg.clone())
                        .color(egui::Color32::GRAY)
                        .width(2.0)
                        .style(LineStyle::Dashed { length: 8.0 }),
                );
            }
            plot_ui.line(
                Line::new(self.chart.random_line.clone())
                    .color(egui::Color32::RED)
                    .width(4.0)
                    .style(LineStyle::Dashed { length: 12.0 }),
            );

            // Cross-hair: snap the pointer's x onto the curve.
            plot_ui.pointer_coordinate().map(|coord| {
                let sample = HoverSample::at(coord.x, num_classes);
                plot_ui.points(
                    Points::new(vec![[sample.loss, sample.target_prob]])
                        .radius(6.0)
                        .color(CURVE_COLOR),
                );
                sample
            })
        });

        if let Some(sample) = resp.inner {
            resp.response.on_hover_ui_at_pointer(|ui| {
                for (label, value) in sample.tooltip_lines() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(label).strong());
                        ui.label(value);
                    });
                }
            });
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Cross-Entropy Analysis");
            self.draw_formula_banner(ui);
            ui.separator();
            self.draw_classes_control(ui);
            self.draw_chart(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 1000.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cross-Entropy Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::default()))),
    )
}
