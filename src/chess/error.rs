//! Error types for header extraction.
//!
//! Record-level failures (`MappingError`) are collected by the loader and
//! never abort a batch. Stream-level failures (`LoadError`) and output
//! failures (`OutputError`) propagate to the caller.

use super::fields::HeaderField;
use super::types::RawHeaders;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single game's headers could not become a `HeaderRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingCause {
    #[error("missing required header {field}")]
    MissingField { field: HeaderField },

    #[error("header {field} is not an integer: '{value}'")]
    InvalidInteger { field: HeaderField, value: String },
}

impl MappingCause {
    pub fn field(&self) -> HeaderField {
        match self {
            Self::MissingField { field } | Self::InvalidInteger { field, .. } => *field,
        }
    }
}

/// A failed mapping, carrying the headers verbatim for inspection.
#[derive(Debug, Clone, Error)]
#[error("{cause}")]
pub struct MappingError {
    pub headers: RawHeaders,
    #[source]
    pub cause: MappingCause,
}

impl MappingError {
    pub fn into_parts(self) -> (RawHeaders, MappingCause) {
        (self.headers, self.cause)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialize zstd decoder for {path}: {source}")]
    Decoder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read game {game_index}: {source}")]
    Read {
        game_index: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output next to {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize damaged headers: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to move output into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("damaged headers and causes are misaligned ({headers} headers, {causes} causes)")]
    Misaligned { headers: usize, causes: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_column_and_tag() {
        let cause = MappingCause::MissingField {
            field: HeaderField::WhiteElo,
        };
        assert_eq!(
            cause.to_string(),
            "missing required header white_elo (WhiteElo)"
        );
    }

    #[test]
    fn test_invalid_integer_message_includes_value() {
        let cause = MappingCause::InvalidInteger {
            field: HeaderField::BlackEloDiff,
            value: "abc".to_string(),
        };
        assert_eq!(
            cause.to_string(),
            "header black_elo_diff (BlackRatingDiff) is not an integer: 'abc'"
        );
        assert_eq!(cause.field(), HeaderField::BlackEloDiff);
    }

    #[test]
    fn test_mapping_error_into_parts_returns_headers_verbatim() {
        let headers: RawHeaders = [("Event", "Rated Blitz game")].into_iter().collect();
        let error = MappingError {
            headers: headers.clone(),
            cause: MappingCause::MissingField {
                field: HeaderField::Result,
            },
        };

        assert_eq!(error.to_string(), "missing required header result (Result)");
        let (raw, cause) = error.into_parts();
        assert_eq!(raw, headers);
        assert_eq!(cause.field(), HeaderField::Result);
    }
}
