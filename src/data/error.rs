use thiserror::Error;

/// Failures of the cleaning pipeline. Every variant is shown to the user
/// verbatim, so messages are phrased for the status line.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("the file is empty: no columns to parse")]
    Empty,

    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("row {row}: column '{column}' holds '{value}', which is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("invalid elevation range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
}
