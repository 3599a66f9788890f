//! Decode and extraction errors.

use std::path::PathBuf;

/// Why a single line failed to decode.
///
/// These are recorded and counted; they never abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("expected at most {expected} fields, found {found}")]
    TooManyFields { expected: usize, found: usize },

    #[error("invalid year '{0}'")]
    InvalidYear(String),

    #[error("TO year {to} is before FROM year {from}")]
    YearRange { from: i32, to: i32 },

    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("invalid day '{0}'")]
    InvalidDay(String),

    #[error("invalid time suffix '{0}'")]
    InvalidSuffix(char),

    #[error("missing time")]
    MissingTime,
}

/// Fatal errors while reading the tz database.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
