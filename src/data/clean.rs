use super::model::{Gender, RawLaureate};
use crate::config::COUNTRY_SYNONYMS;

// ---------------------------------------------------------------------------
// Cleaning report
// ---------------------------------------------------------------------------

/// What a cleaning pass removed or rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub dropped_gender: usize,
    pub dropped_country: usize,
    pub recovered_country: usize,
    pub substituted: usize,
}

// ---------------------------------------------------------------------------
// Cleaning pipeline
// ---------------------------------------------------------------------------

/// Drop rows without a usable gender or birth country and normalise country
/// names.
pub fn clean(records: Vec<RawLaureate>) -> Vec<RawLaureate> {
    clean_with_report(records).0
}

/// [`clean`], also returning counts of what changed.
///
/// Stages, in order:
/// 1. drop rows whose gender is missing or not "male"/"female"
/// 2. fill a blank country from the text after the last comma of the
///    affiliation; rows with no such text lose their country
/// 3. drop rows still missing a country
/// 4. apply [`COUNTRY_SYNONYMS`] (exact match)
pub fn clean_with_report(records: Vec<RawLaureate>) -> (Vec<RawLaureate>, CleanReport) {
    let mut report = CleanReport::default();

    let total = records.len();
    let with_gender: Vec<RawLaureate> = records
        .into_iter()
        .filter(|r| r.gender.as_deref().and_then(Gender::parse).is_some())
        .collect();
    report.dropped_gender = total - with_gender.len();

    let total = with_gender.len();
    let mut cleaned = Vec::with_capacity(total);
    for record in with_gender {
        let was_blank = record.country_born.as_deref() == Some("");
        let mut record = resolve_country(record);
        let Some(country) = record.country_born.as_deref() else {
            continue;
        };
        if was_blank {
            report.recovered_country += 1;
        }
        if let Some(canonical) = canonical_country(country) {
            record.country_born = Some(canonical.to_string());
            report.substituted += 1;
        }
        cleaned.push(record);
    }
    report.dropped_country = total - cleaned.len();

    log::info!(
        "Cleaning kept {} rows: dropped {} without gender, {} without country; \
         recovered {} countries, normalised {}",
        cleaned.len(),
        report.dropped_gender,
        report.dropped_country,
        report.recovered_country,
        report.substituted
    );

    (cleaned, report)
}

/// Fill a blank country from the affiliation text, or mark it missing.
fn resolve_country(mut record: RawLaureate) -> RawLaureate {
    if record.country_born.as_deref() == Some("") {
        record.country_born = record
            .affiliation
            .as_deref()
            .and_then(country_from_affiliation);
    }
    record
}

/// The trimmed text after the last comma. `None` without a comma or when
/// nothing follows it.
pub fn country_from_affiliation(text: &str) -> Option<String> {
    text.rsplit_once(',')
        .map(|(_, tail)| tail.trim())
        .filter(|tail| !tail.is_empty())
        .map(str::to_string)
}

/// Canonical spelling for a synonym, `None` if `country` is not a synonym.
pub fn canonical_country(country: &str) -> Option<&'static str> {
    COUNTRY_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == country)
        .map(|(_, canonical)| *canonical)
}
