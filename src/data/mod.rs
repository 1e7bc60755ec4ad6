//! Data layer: record types, loading, cleaning and age derivation.
//!
//! Architecture:
//! ```text
//!  ./Data/Nobel_laureates.json  (downloaded on first run)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse JSON → Vec<RawLaureate>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  clean    │  drop rows, recover + normalise country
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  age      │  birth year, age at award → Vec<Laureate>
//!   └──────────┘
//!        │
//!        ▼
//!   NobelDataset
//! ```

pub mod age;
pub mod clean;
pub mod error;
pub mod loader;
pub mod model;

use anyhow::Result;

use crate::config::LoaderConfig;
use model::NobelDataset;

/// Run load → clean → derive-age.
pub fn build_dataset(config: &LoaderConfig) -> Result<NobelDataset> {
    let raw = loader::load(config)?;
    let cleaned = clean::clean(raw);
    let laureates = age::derive_age(cleaned)?;
    Ok(NobelDataset::from_laureates(laureates))
}
