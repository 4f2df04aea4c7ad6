//! # keydiff
//!
//! Key-based row diff for tabular datasets: rows unique to either side and
//! rows whose common columns changed, reported per surrogate key.

pub mod cli;
pub mod error;
pub mod dataset;
pub mod reader;
pub mod schema;
pub mod key;
pub mod partition;
pub mod compare;
pub mod report;
pub mod summary;
pub mod engine;
pub mod writer;
pub mod hash;
pub mod config;
pub mod discover;
pub mod commands;
pub mod output;
pub mod progress;

pub use dataset::{Dataset, Row};
pub use engine::{diff_datasets, diff_files, DatasetDiff, DiffOptions, DiffOutcome};
pub use error::{KeydiffError, Result};
pub use report::{DiffRecord, DiffReport, FailedColumns};
pub use summary::Summary;

/// Current format version for keydiff config files
pub const FORMAT_VERSION: &str = "1.0.0";

/// Separator between normalized key components in a surrogate key
pub const SURROGATE_KEY_SEPARATOR: &str = "|";

/// `failed_columns` marker for rows present in only one dataset
pub const UNIQUE_ROW: &str = "UNIQUE ROW";

/// Separator between column names in a rendered `failed_columns` field
pub const FAILED_COLUMNS_SEPARATOR: &str = "| - |";
