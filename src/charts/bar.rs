use std::collections::BTreeMap;

use crate::data::model::{Gender, Laureate};

/// Male and female laureate counts aligned on one category axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderCounts {
    /// Sorted category names; index `i` is axis position `i`.
    pub categories: Vec<String>,
    pub male: Vec<usize>,
    pub female: Vec<usize>,
}

/// Count laureates per category and gender, skipping empty categories.
///
/// A category seen for only one gender still gets a `0` on the other series.
pub fn gender_counts(laureates: &[Laureate]) -> GenderCounts {
    let mut per_category: BTreeMap<&str, [usize; 2]> = BTreeMap::new();
    for l in laureates.iter().filter(|l| !l.category.is_empty()) {
        let slot = per_category.entry(l.category.as_str()).or_default();
        match l.gender {
            Gender::Male => slot[0] += 1,
            Gender::Female => slot[1] += 1,
        }
    }

    let mut counts = GenderCounts::default();
    for (category, [male, female]) in per_category {
        counts.categories.push(category.to_string());
        counts.male.push(male);
        counts.female.push(female);
    }
    counts
}
