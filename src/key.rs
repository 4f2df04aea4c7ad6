//! Cell normalization and surrogate key construction

use crate::dataset::{Dataset, Row};
use crate::error::Result;
use crate::SURROGATE_KEY_SEPARATOR;

/// Canonical form of a cell: null and empty string collapse to the same empty token.
/// No trimming or re-typing is applied.
pub fn normalize(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

/// Component-wise normalized key of a row, used for matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyTuple(Vec<String>);

impl KeyTuple {
    /// Joined display form; this is the row's surrogate key
    pub fn surrogate(&self) -> String {
        self.0.join(SURROGATE_KEY_SEPARATOR)
    }
}

/// Extracts keys from the rows of one dataset
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    positions: Vec<usize>,
}

impl KeyBuilder {
    /// Resolve key columns against a dataset's header
    pub fn for_dataset(dataset: &Dataset, key_columns: &[String]) -> Result<Self> {
        Ok(Self {
            positions: dataset.positions(key_columns)?,
        })
    }

    pub fn key_tuple(&self, row: &Row) -> KeyTuple {
        KeyTuple(
            self.positions
                .iter()
                .map(|&p| normalize(row.cell(p)).to_string())
                .collect(),
        )
    }
}
