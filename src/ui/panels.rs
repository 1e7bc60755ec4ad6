use eframe::egui::{self, Ui};

use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart tabs and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for chart in ChartKind::ALL {
            if ui
                .selectable_label(state.chart == chart, chart.label())
                .clicked()
            {
                state.select_chart(chart);
            }
        }

        ui.separator();

        ui.label(format!(
            "{} laureates, {} countries, {} categories",
            state.dataset.len(),
            state.dataset.countries.len(),
            state.dataset.categories.len()
        ));
    });
}
