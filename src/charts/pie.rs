use std::collections::HashMap;

use crate::config::OTHER_COUNTRIES;
use crate::data::model::Laureate;

/// One pie slice: a country (or the "other" bucket) and its laureate count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
}

impl Slice {
    /// Share of `total` in percent.
    pub fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 * 100.0 / total as f64
        }
    }
}

/// Count values in first-appearance order.
pub fn ordered_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for v in values {
        match index.get(v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v, counts.len());
                counts.push((v, 1));
            }
        }
    }
    counts
}

/// Laureates per birth country. Countries with fewer than `min_count`
/// laureates are relabelled [`OTHER_COUNTRIES`] before recounting.
///
/// Slices follow the first appearance of each label in `laureates`.
pub fn country_slices(laureates: &[Laureate], min_count: usize) -> Vec<Slice> {
    country_slices_of(laureates.iter().map(|l| l.country_born.as_str()), min_count)
}

fn country_slices_of<'a>(
    countries: impl Iterator<Item = &'a str> + Clone,
    min_count: usize,
) -> Vec<Slice> {
    let kept: HashMap<&str, usize> = ordered_counts(countries.clone())
        .into_iter()
        .filter(|&(_, n)| n >= min_count)
        .collect();
    log::info!("Countries with at least {min_count} laureates: {kept:?}");

    let relabelled = countries.map(|c| {
        if kept.contains_key(c) {
            c
        } else {
            OTHER_COUNTRIES
        }
    });

    ordered_counts(relabelled)
        .into_iter()
        .map(|(label, count)| Slice {
            label: label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries(counts: &[(&'static str, usize)]) -> Vec<&'static str> {
        counts
            .iter()
            .flat_map(|&(c, n)| std::iter::repeat(c).take(n))
            .collect()
    }

    #[test]
    fn test_small_countries_fold_into_other() {
        let values = countries(&[("A", 30), ("B", 10), ("C", 25), ("D", 5)]);
        let slices = country_slices_of(values.iter().copied(), 25);
        assert_eq!(
            slices,
            vec![
                Slice { label: "A".to_string(), count: 30 },
                Slice { label: OTHER_COUNTRIES.to_string(), count: 15 },
                Slice { label: "C".to_string(), count: 25 },
            ]
        );
    }

    #[test]
    fn test_order_follows_first_appearance() {
        let values = vec!["B", "A", "B", "A", "C"];
        let slices = country_slices_of(values.into_iter(), 1);
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_no_other_slice_when_everything_is_kept() {
        let values = countries(&[("A", 3), ("B", 3)]);
        let slices = country_slices_of(values.iter().copied(), 3);
        assert!(slices.iter().all(|s| s.label != OTHER_COUNTRIES));
    }

    #[test]
    fn test_percent() {
        let slice = Slice { label: "A".to_string(), count: 15 };
        assert!((slice.percent(60) - 25.0).abs() < 1e-9);
        assert_eq!(slice.percent(0), 0.0);
    }
}
