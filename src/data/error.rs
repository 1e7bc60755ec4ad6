use thiserror::Error;

/// Record-level conditions that abort the pipeline.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("row {row}: cannot read a birth year from '{value}'")]
    BirthDate { row: usize, value: String },

    #[error("row {row}: missing date of birth")]
    MissingBirthDate { row: usize },

    #[error("row {row}: age at award does not fit in an integer")]
    AgeOverflow { row: usize },

    #[error("row {row}: missing {field} after cleaning")]
    MissingField { row: usize, field: &'static str },
}
