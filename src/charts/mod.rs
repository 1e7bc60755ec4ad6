//! Chart aggregations: pure functions from the derived table to the numbers
//! each chart draws. Rendering lives in `ui::plot`.

pub mod bar;
pub mod boxplot;
pub mod pie;

use crate::config::PIE_MIN_COUNT;
use crate::data::model::NobelDataset;

use bar::GenderCounts;
use boxplot::{AgeGroup, BoxStats};
use pie::Slice;

/// Everything the three charts need, computed once per dataset.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub slices: Vec<Slice>,
    pub gender_counts: GenderCounts,
    /// Groups paired with their summary; empty groups have no box.
    pub age_boxes: Vec<(AgeGroup, Option<BoxStats>)>,
}

impl ChartData {
    pub fn from_dataset(dataset: &NobelDataset) -> Self {
        let laureates = &dataset.laureates;
        let age_boxes = boxplot::age_groups(laureates)
            .into_iter()
            .map(|g| {
                let stats = BoxStats::from_values(&g.ages);
                (g, stats)
            })
            .collect();

        ChartData {
            slices: pie::country_slices(laureates, PIE_MIN_COUNT),
            gender_counts: bar::gender_counts(laureates),
            age_boxes,
        }
    }

    /// Sum of all slice counts.
    pub fn slice_total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}
