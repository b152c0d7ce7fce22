#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Demo application: every chart-oxide operation behind a control panel

use std::f64::consts::TAU;

use eframe::egui::{self, CentralPanel, Color32, ComboBox, SidePanel};

use chart_oxide::{ChartError, ChartView, ConnectMode, PlotPoint};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("chart-oxide demo"),
        ..Default::default()
    };
    eframe::run_native(
        "chart-oxide demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}

struct DemoApp {
    chart: ChartView,

    // Control panel state
    background: Color32,
    axis_x: bool,
    axis_y: bool,
    log_x: bool,
    log_y: bool,
    wave_mode: ConnectMode,
    wave_width: f64,
    wave_color: Color32,
    show_noise: bool,
    status_message: String,
}

impl DemoApp {
    fn new() -> Self {
        let mut chart = ChartView::new();

        chart.add_chart("wave", wave_points());
        chart.set_chart_connect("wave", ConnectMode::Line);
        chart.set_chart_color("wave", Color32::from_rgb(31, 119, 180));
        chart.set_chart_width("wave", 2.0);

        chart.add_chart("loop", ring_points(6, 0.0, -1.5, 0.8));
        chart.set_chart_connect("loop", ConnectMode::Cycle);
        chart.set_chart_color("loop", Color32::from_rgb(44, 160, 44));

        chart.add_chart("web", ring_points(5, -1.5, 1.5, 1.0));
        chart.set_chart_connect("web", ConnectMode::Complete);
        chart.set_chart_color("web", Color32::from_rgb(148, 103, 189));

        chart.add_chart("star", ring_points(5, 1.5, 1.5, 1.0));
        chart.set_chart_connect("star", ConnectMode::Edges);
        chart.set_chart_edges("star", vec![(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)]);
        chart.set_chart_color("star", Color32::from_rgb(214, 39, 40));

        chart.add_chart("noise", noise_points(80));
        chart.set_chart_color("noise", Color32::from_rgb(127, 127, 127));

        Self {
            chart,
            background: Color32::WHITE,
            axis_x: true,
            axis_y: true,
            log_x: false,
            log_y: false,
            wave_mode: ConnectMode::Line,
            wave_width: 2.0,
            wave_color: Color32::from_rgb(31, 119, 180),
            show_noise: true,
            status_message: String::new(),
        }
    }

    fn copy_view_json(&self) -> Result<(), ChartError> {
        let json = serde_json::to_string_pretty(&self.chart.config())?;
        arboard::Clipboard::new()?.set_text(json)?;
        Ok(())
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("View");
        if ui.checkbox(&mut self.axis_x, "X axis").changed()
            || ui.checkbox(&mut self.axis_y, "Y axis").changed()
        {
            self.chart.show_axes(self.axis_x, self.axis_y);
        }
        if ui.checkbox(&mut self.log_x, "log X").changed()
            || ui.checkbox(&mut self.log_y, "log Y").changed()
        {
            self.chart.set_log_scale(self.log_x, self.log_y);
        }
        ui.horizontal(|ui| {
            ui.label("Background:");
            if ui.color_edit_button_srgba(&mut self.background).changed() {
                self.chart.set_background(self.background);
            }
        });
        if ui.button("Reset view").clicked() {
            self.chart.set_center(0.0, 0.0);
            self.chart.set_scale(100.0, 100.0);
            self.chart.refresh();
        }

        ui.separator();
        ui.heading("Wave chart");
        let mode_before = self.wave_mode;
        ComboBox::from_label("connect")
            .selected_text(format!("{:?}", self.wave_mode))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.wave_mode, ConnectMode::None, "None");
                ui.selectable_value(&mut self.wave_mode, ConnectMode::Line, "Line");
                ui.selectable_value(&mut self.wave_mode, ConnectMode::Cycle, "Cycle");
                ui.selectable_value(&mut self.wave_mode, ConnectMode::Complete, "Complete");
            });
        if self.wave_mode != mode_before {
            self.chart.set_chart_connect("wave", self.wave_mode);
        }
        if ui
            .add(egui::Slider::new(&mut self.wave_width, 0.0..=8.0).text("width"))
            .changed()
        {
            self.chart.set_chart_width("wave", self.wave_width);
        }
        ui.horizontal(|ui| {
            ui.label("Color:");
            if ui.color_edit_button_srgba(&mut self.wave_color).changed() {
                self.chart.set_chart_color("wave", self.wave_color);
            }
        });

        ui.separator();
        ui.heading("Charts");
        if ui.checkbox(&mut self.show_noise, "noise scatter").changed() {
            if self.show_noise {
                self.chart.add_chart("noise", noise_points(80));
                self.chart
                    .set_chart_color("noise", Color32::from_rgb(127, 127, 127));
            } else {
                self.chart.remove_chart("noise");
            }
        }

        ui.separator();
        if ui.button("Copy view JSON").clicked() {
            self.status_message = match self.copy_view_json() {
                Ok(()) => "View copied to clipboard".to_string(),
                Err(e) => e.user_message(),
            };
        }
        if !self.status_message.is_empty() {
            ui.label(&self.status_message);
        }

        ui.separator();
        ui.small("Drag: pan | Right-drag: quadrant zoom | Wheel: zoom");
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("controls")
            .default_width(190.0)
            .show(ctx, |ui| self.controls(ui));
        CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.chart.show(ui);
            });
    }
}

fn wave_points() -> Vec<PlotPoint> {
    (0..=120)
        .map(|i| {
            let x = -3.0 + f64::from(i) * 0.05;
            PlotPoint::new(x, x.sin())
        })
        .collect()
}

fn ring_points(n: usize, cx: f64, cy: f64, r: f64) -> Vec<PlotPoint> {
    (0..n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            PlotPoint::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

/// Deterministic scatter via a low-discrepancy sequence; no RNG dependency
fn noise_points(n: usize) -> Vec<PlotPoint> {
    (0..n)
        .map(|i| {
            let x = ((i as f64 * 0.618_033_988_749) % 1.0) * 5.0 - 2.5;
            let y = ((i as f64 * 0.414_213_562_373) % 1.0) * 4.0 - 2.0;
            PlotPoint::new(x, y)
        })
        .collect()
}
