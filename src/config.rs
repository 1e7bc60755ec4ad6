use std::path::PathBuf;

use crate::state::ChartKind;

// ---------------------------------------------------------------------------
// Dataset location
// ---------------------------------------------------------------------------

/// Local cache directory, relative to the working directory.
pub const DATA_DIR: &str = "./Data";

/// Cache file holding the raw downloaded JSON verbatim.
pub const CACHE_FILE_NAME: &str = "Nobel_laureates.json";

/// Where the dataset is published.
pub const DATASET_URL: &str = "https://www.dropbox.com/s/m6ld4vaq2sz3ovd/nobel_laureates.json?dl=1";

// ---------------------------------------------------------------------------
// Cleaning policy
// ---------------------------------------------------------------------------

/// Exact-match substitutions applied to the born-in country.
pub const COUNTRY_SYNONYMS: &[(&str, &str)] = &[
    ("US", "USA"),
    ("United States", "USA"),
    ("U.S.", "USA"),
    ("United Kingdom", "UK"),
];

// ---------------------------------------------------------------------------
// Chart policy
// ---------------------------------------------------------------------------

/// Countries with fewer laureates than this are folded into [`OTHER_COUNTRIES`].
pub const PIE_MIN_COUNT: usize = 25;

pub const OTHER_COUNTRIES: &str = "Other countries";

/// Slices from this index on are pulled out of the pie.
pub const PIE_EXPLODE_FROM: usize = 3;

/// Pull-out distance as a fraction of the radius.
pub const PIE_EXPLODE: f64 = 0.08;

/// Horizontal offset of each gender's bar from the category position.
pub const BAR_OFFSET: f64 = 0.2;

pub const BAR_WIDTH: f64 = 0.4;

/// Label of the synthetic box-plot group spanning every category.
pub const ALL_CATEGORIES: &str = "All categories";

/// Chart shown when the window opens.
pub const DEFAULT_CHART: ChartKind = ChartKind::AgeBoxPlot;

// ---------------------------------------------------------------------------
// LoaderConfig
// ---------------------------------------------------------------------------

/// Where the loader keeps its cache and where it downloads from.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
    pub url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            file_name: CACHE_FILE_NAME.to_string(),
            url: DATASET_URL.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Full path of the cache file.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
