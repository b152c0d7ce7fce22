//! Turnkey native window for hosts that don't embed the widget themselves

use eframe::egui::{self, CentralPanel};

use crate::constants::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;
use crate::ui::ChartView;

/// Minimal `eframe` application wrapping a [`ChartView`]
pub struct ChartApp {
    chart: ChartView,
}

impl ChartApp {
    pub fn new(chart: ChartView) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.chart.show(ui);
            });
    }
}

/// Open a default-size native window showing the given chart view
///
/// Blocks until the window closes. Hosts that want their own panels around
/// the chart should embed [`ChartView::show`] in their own `eframe::App`
/// instead.
pub fn launch(title: &str, chart: ChartView) -> Result<()> {
    log::debug!("launching native window '{}'", title);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WIDTH, DEFAULT_HEIGHT])
            .with_title(title),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(chart)))),
    )?;
    Ok(())
}
