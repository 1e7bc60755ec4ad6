use super::error::DataError;
use super::model::{Gender, Laureate, RawLaureate};

/// Read the birth year out of the dataset's date formats:
///
/// * `"May 3, 1950"` – text after the last comma
/// * `"1920-01-01"`  – text before the first hyphen
/// * `"circa 1975"`  – last whitespace-separated token
///
/// Returns `None` when the selected token is not an integer.
pub fn parse_birth_year(date: &str) -> Option<i64> {
    let token = if let Some((_, year)) = date.rsplit_once(',') {
        year.trim()
    } else if let Some((year, _)) = date.split_once('-') {
        year
    } else {
        date.split_whitespace().last().unwrap_or("")
    };
    token.parse().ok()
}

/// Turn cleaned rows into [`Laureate`]s with `year_born` and `age_of_winning`.
///
/// Any row whose birth year cannot be read fails the whole batch. Implausible
/// ages are kept as computed.
pub fn derive_age(records: Vec<RawLaureate>) -> Result<Vec<Laureate>, DataError> {
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| derive_one(row, record))
        .collect()
}

fn derive_one(row: usize, record: RawLaureate) -> Result<Laureate, DataError> {
    let date = record
        .date_of_birth
        .as_deref()
        .ok_or(DataError::MissingBirthDate { row })?;
    let year_born = parse_birth_year(date).ok_or_else(|| DataError::BirthDate {
        row,
        value: date.to_string(),
    })?;

    let gender = record
        .gender
        .as_deref()
        .and_then(Gender::parse)
        .ok_or(DataError::MissingField { row, field: "gender" })?;
    let country_born = record
        .country_born
        .filter(|c| !c.is_empty())
        .ok_or(DataError::MissingField { row, field: "country_born" })?;

    let age_of_winning = record
        .award_year
        .checked_sub(year_born)
        .ok_or(DataError::AgeOverflow { row })?;

    Ok(Laureate {
        country_born,
        gender,
        category: record.category,
        award_year: record.award_year,
        year_born,
        age_of_winning,
    })
}
