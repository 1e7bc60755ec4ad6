use crate::charts::ChartData;
use crate::color::ColorMap;
use crate::config::DEFAULT_CHART;
use crate::data::model::NobelDataset;

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

/// The three views; one is on screen at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CountryPie,
    GenderBars,
    AgeBoxPlot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::CountryPie,
        ChartKind::GenderBars,
        ChartKind::AgeBoxPlot,
    ];

    /// Tab label in the top bar.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::CountryPie => "Laureates by country",
            ChartKind::GenderBars => "Gender by category",
            ChartKind::AgeBoxPlot => "Age by category",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The derived table. Never mutated after start-up.
    pub dataset: NobelDataset,

    /// Aggregations for every chart.
    pub charts: ChartData,

    /// Which chart is on screen.
    pub chart: ChartKind,

    /// Colours for pie slices, keyed by slice label.
    pub slice_colors: ColorMap,

    /// Colours for box-plot groups, keyed by group label.
    pub group_colors: ColorMap,
}

impl AppState {
    pub fn new(dataset: NobelDataset) -> Self {
        let charts = ChartData::from_dataset(&dataset);
        let slice_colors = ColorMap::new(charts.slices.iter().map(|s| s.label.as_str()));
        let group_colors = ColorMap::new(charts.age_boxes.iter().map(|(g, _)| g.label.as_str()));

        if dataset.is_empty() {
            log::warn!("No laureates survived cleaning; charts will be empty");
        }
        log::info!(
            "{} laureates across {} countries and {} categories",
            dataset.len(),
            dataset.countries.len(),
            dataset.categories.len()
        );

        Self {
            dataset,
            charts,
            chart: DEFAULT_CHART,
            slice_colors,
            group_colors,
        }
    }

    pub fn select_chart(&mut self, chart: ChartKind) {
        if self.chart != chart {
            log::debug!("Showing {}", chart.label());
            self.chart = chart;
        }
    }
}
