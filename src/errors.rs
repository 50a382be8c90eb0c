//! Error types for mscmap operations.
//!
//! Caller input errors (`UnknownSource`, `InvalidThreshold`, `InvalidSortKey`)
//! are reported before any computation starts, so a failed request never
//! yields partial output. Dataset integrity errors are raised while loading
//! and abort the whole load.
//!
//! # Error Codes
//!
//! - E001-E009: caller input errors
//! - E010-E019: dataset integrity errors
//! - E020-E029: configuration errors
//! - E030-E039: I/O and CSV errors

use crate::core::{Method, SourceKey};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mscmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Source key is not one of the recognized reference sources
    #[error("Unknown reference source '{key}' (expected one of: zb1, mr1)")]
    UnknownSource { key: String },

    /// Minimum support is not a non-negative integer
    #[error("Invalid minimum support '{raw}': {reason}")]
    InvalidThreshold { raw: String, reason: String },

    /// Sort key is not in the fixed method list
    #[error("Invalid sort key '{key}': not a known method")]
    InvalidSortKey { key: String },

    /// A record file header lacks a method score column
    #[error("Dataset '{dataset}' has no score column for method '{method}'")]
    MissingMethodColumn { dataset: String, method: String },

    /// A record has an empty score for a method
    #[error("Dataset '{dataset}': class '{code}' has no score for method '{method}'")]
    MissingMethod {
        dataset: String,
        code: String,
        method: String,
    },

    /// A score lies outside [0, 1] or is not finite
    #[error(
        "Dataset '{dataset}': class '{code}' has score {value} for method '{method}' outside [0, 1]"
    )]
    ScoreOutOfRange {
        dataset: String,
        code: String,
        method: String,
        value: f64,
    },

    /// A row could not be parsed
    #[error("Malformed row {row} in {file}: {message}")]
    MalformedRecord {
        file: String,
        row: usize,
        message: String,
    },

    /// The same (true, predicted) pair occurs more than once in the count data
    #[error("Duplicate count entry for pair ({true_code}, {predicted_code})")]
    DuplicateCount {
        true_code: String,
        predicted_code: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors with path context
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-row error
    pub fn malformed(file: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            file: file.into(),
            row,
            message: message.into(),
        }
    }

    /// Create a score range error for `code` in the records of `source`
    pub fn score_out_of_range(source: SourceKey, code: &str, method: Method, value: f64) -> Self {
        Self::ScoreOutOfRange {
            dataset: source.key().to_string(),
            code: code.to_string(),
            method: method.key().to_string(),
            value,
        }
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownSource { .. } => "E001",
            Self::InvalidThreshold { .. } => "E002",
            Self::InvalidSortKey { .. } => "E003",
            Self::MissingMethodColumn { .. } => "E010",
            Self::MissingMethod { .. } => "E011",
            Self::ScoreOutOfRange { .. } => "E012",
            Self::MalformedRecord { .. } => "E013",
            Self::DuplicateCount { .. } => "E014",
            Self::Config(_) => "E020",
            Self::Io { .. } => "E030",
            Self::Csv(_) => "E031",
        }
    }

    /// Whether the error was caused by request parameters rather than data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSource { .. } | Self::InvalidThreshold { .. } | Self::InvalidSortKey { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
