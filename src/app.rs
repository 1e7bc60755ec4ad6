use eframe::egui;

use crate::data::model::NobelDataset;
use crate::state::{AppState, ChartKind};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NobelApp {
    pub state: AppState,
}

impl NobelApp {
    pub fn new(dataset: NobelDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for NobelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active chart ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.chart {
            ChartKind::CountryPie => plot::country_pie(ui, &self.state),
            ChartKind::GenderBars => plot::gender_bars(ui, &self.state),
            ChartKind::AgeBoxPlot => plot::age_box_plot(ui, &self.state),
        });
    }
}
