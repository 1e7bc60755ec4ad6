use std::collections::HashMap;

use crate::config::ALL_CATEGORIES;
use crate::data::model::Laureate;

/// Ages at award for one category (or for every category together).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroup {
    pub label: String,
    pub ages: Vec<i64>,
}

/// One group per non-empty category in first-appearance order, followed by
/// an [`ALL_CATEGORIES`] group holding every value of the others.
pub fn age_groups(laureates: &[Laureate]) -> Vec<AgeGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AgeGroup> = Vec::new();

    for l in laureates.iter().filter(|l| !l.category.is_empty()) {
        let i = *index.entry(l.category.as_str()).or_insert_with(|| {
            groups.push(AgeGroup {
                label: l.category.clone(),
                ages: Vec::new(),
            });
            groups.len() - 1
        });
        groups[i].ages.push(l.age_of_winning);
    }

    let all: Vec<i64> = groups.iter().flat_map(|g| g.ages.iter().copied()).collect();
    groups.push(AgeGroup {
        label: ALL_CATEGORIES.to_string(),
        ages: all,
    });
    groups
}

// ---------------------------------------------------------------------------
// Box statistics
// ---------------------------------------------------------------------------

/// Five-number summary plus mean and points beyond the whiskers.
///
/// Quartiles interpolate linearly between closest ranks; whiskers reach the
/// furthest value within 1.5 × IQR of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub mean: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` for an empty group.
    pub fn from_values(values: &[i64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let reach = 1.5 * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= lo_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= hi_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lo_fence || v > hi_fence)
            .collect();
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            mean,
            outliers,
        })
    }
}

/// Linear-interpolated quantile of sorted, non-empty data.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Gender;

    fn laureate(category: &str, age: i64) -> Laureate {
        Laureate {
            country_born: "USA".to_string(),
            gender: Gender::Male,
            category: category.to_string(),
            award_year: 1950 + age,
            year_born: 1950,
            age_of_winning: age,
        }
    }

    #[test]
    fn test_all_categories_is_union_of_groups() {
        let laureates = vec![
            laureate("physics", 50),
            laureate("peace", 61),
            laureate("", 99),
            laureate("physics", 45),
            laureate("medicine", 70),
        ];
        let groups = age_groups(&laureates);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["physics", "peace", "medicine", ALL_CATEGORIES]);

        let (all, per_category) = groups.split_last().unwrap();
        let total: usize = per_category.iter().map(|g| g.ages.len()).sum();
        assert_eq!(all.ages.len(), total);
        assert_eq!(all.ages.len(), 4);
        assert_eq!(groups[0].ages, vec![50, 45]);
    }

    #[test]
    fn test_all_categories_present_for_empty_input() {
        let groups = age_groups(&[]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].ages.is_empty());
    }

    #[test]
    fn test_box_stats_quartiles_and_mean() {
        let stats = BoxStats::from_values(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 5.0);
        assert_eq!(stats.mean, 3.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_interpolates_and_flags_outliers() {
        let stats = BoxStats::from_values(&[10, 12, 11, 13, 100]).unwrap();
        assert_eq!(stats.q1, 11.0);
        assert_eq!(stats.q3, 13.0);
        assert_eq!(stats.upper_whisker, 13.0);
        assert_eq!(stats.outliers, vec![100.0]);

        let even = BoxStats::from_values(&[1, 2, 3, 4]).unwrap();
        assert_eq!(even.median, 2.5);
        assert_eq!(even.q1, 1.75);
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_values(&[]).is_none());
    }
}
