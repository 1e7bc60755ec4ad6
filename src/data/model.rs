use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the dataset's lowercase gender text. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// RawLaureate – one row as loaded, before and after cleaning
// ---------------------------------------------------------------------------

/// A single laureate row as it comes out of the JSON file.
///
/// Cleaning keeps this shape; after [`crate::data::clean::clean`] every row has
/// a recognised `gender` and a non-empty `country_born`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawLaureate {
    /// `None` when the source value is `null`; `Some("")` when it is blank and
    /// may still be recovered from `affiliation`.
    pub country_born: Option<String>,
    /// Free-text place field, sometimes ending in `", <country>"`.
    pub affiliation: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub award_year: i64,
    /// Empty when the source has no category.
    pub category: String,
}

// ---------------------------------------------------------------------------
// Laureate – fully derived record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Laureate {
    pub country_born: String,
    pub gender: Gender,
    pub category: String,
    pub award_year: i64,
    pub year_born: i64,
    /// `award_year - year_born`, unfiltered.
    pub age_of_winning: i64,
}

// ---------------------------------------------------------------------------
// NobelDataset – the complete derived table
// ---------------------------------------------------------------------------

/// The derived table with distinct-value indices in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct NobelDataset {
    pub laureates: Vec<Laureate>,
    pub countries: Vec<String>,
    /// Non-empty categories only.
    pub categories: Vec<String>,
}

impl NobelDataset {
    pub fn from_laureates(laureates: Vec<Laureate>) -> Self {
        let countries = distinct(laureates.iter().map(|l| l.country_born.as_str()));
        let categories = distinct(
            laureates
                .iter()
                .map(|l| l.category.as_str())
                .filter(|c| !c.is_empty()),
        );
        NobelDataset {
            laureates,
            countries,
            categories,
        }
    }

    /// Number of laureates.
    pub fn len(&self) -> usize {
        self.laureates.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.laureates.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
