//! Diff records and report assembly

use crate::compare::ModifiedPair;
use crate::dataset::{Dataset, Row};
use crate::error::Result;
use crate::partition::{KeyedRow, Partition};
use crate::schema::ReconciledSchema;
use crate::{FAILED_COLUMNS_SEPARATOR, UNIQUE_ROW};
use serde::Serialize;
use std::fmt;

/// Outcome of comparing one key across the two datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum FailedColumns {
    Identical,
    Unique,
    Modified(Vec<String>),
}

impl FailedColumns {
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique)
    }

    /// Differing column names; empty for unique and identical rows
    pub fn columns(&self) -> &[String] {
        match self {
            Self::Modified(columns) => columns,
            _ => &[],
        }
    }
}

impl fmt::Display for FailedColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identical => Ok(()),
            Self::Unique => f.write_str(UNIQUE_ROW),
            Self::Modified(columns) => f.write_str(&columns.join(FAILED_COLUMNS_SEPARATOR)),
        }
    }
}

/// One output row of the diff report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRecord {
    pub surrogate_key: String,
    pub source: String,
    pub failed_columns: FailedColumns,
    /// Values aligned with [`DiffReport::columns`]
    pub values: Vec<Option<String>>,
}

/// Ordered diff records over a fixed column layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    columns: Vec<String>,
    records: Vec<DiffRecord>,
}

impl DiffReport {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full header: fixed leading fields, key columns, other common columns
    pub fn header(&self) -> Vec<String> {
        ["surrogate_key", "source", "failed_columns"]
            .iter()
            .map(|s| s.to_string())
            .chain(self.columns.iter().cloned())
            .collect()
    }

    /// Records rendered as text fields, null cells as empty strings
    pub fn rendered_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records.iter().map(|record| {
            let mut row = Vec::with_capacity(3 + record.values.len());
            row.push(record.surrogate_key.clone());
            row.push(record.source.clone());
            row.push(record.failed_columns.to_string());
            row.extend(record.values.iter().map(|v| v.clone().unwrap_or_default()));
            row
        })
    }

    /// Records for one surrogate key
    pub fn records_for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DiffRecord> + 'a {
        self.records.iter().filter(move |r| r.surrogate_key == key)
    }

    /// Value of a named column in a record
    pub fn value<'a>(&self, record: &'a DiffRecord, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| record.values.get(i))
            .and_then(|v| v.as_deref())
    }
}

/// Builds report records projected onto the reconciled column layout
struct Projector<'d> {
    source: &'d str,
    positions: Vec<usize>,
}

impl<'d> Projector<'d> {
    fn new(dataset: &'d Dataset, columns: &[String]) -> Result<Self> {
        Ok(Self {
            source: dataset.name(),
            positions: dataset.positions(columns)?,
        })
    }

    fn record(&self, surrogate_key: String, failed_columns: FailedColumns, row: &Row) -> DiffRecord {
        DiffRecord {
            surrogate_key,
            source: self.source.to_string(),
            failed_columns,
            values: self
                .positions
                .iter()
                .map(|&p| row.cell(p).map(String::from))
                .collect(),
        }
    }

    fn unique(&self, keyed: &KeyedRow<'_>) -> DiffRecord {
        self.record(keyed.key.surrogate(), FailedColumns::Unique, keyed.row)
    }

    fn modified(&self, pair: &ModifiedPair<'_>, row: &Row) -> DiffRecord {
        let failed = FailedColumns::Modified(pair.failed_columns.clone());
        self.record(pair.key.surrogate(), failed, row)
    }
}

/// Merge unique and modified rows into one report sorted by surrogate key.
///
/// Every A-side record (A-only rows, then the A half of each modified pair)
/// is emitted before every B-side record, so the stable sort places A before
/// B among equal surrogate keys.
pub fn assemble(
    a: &Dataset,
    b: &Dataset,
    schema: &ReconciledSchema,
    partition: &Partition<'_>,
    modified: &[ModifiedPair<'_>],
) -> Result<DiffReport> {
    let columns = schema.output_columns();
    let a_side = Projector::new(a, &columns)?;
    let b_side = Projector::new(b, &columns)?;

    let mut records = Vec::with_capacity(
        partition.a_only.len() + partition.b_only.len() + modified.len() * 2,
    );
    records.extend(partition.a_only.iter().map(|r| a_side.unique(r)));
    records.extend(modified.iter().map(|m| a_side.modified(m, m.pair.a)));
    records.extend(partition.b_only.iter().map(|r| b_side.unique(r)));
    records.extend(modified.iter().map(|m| b_side.modified(m, m.pair.b)));

    records.sort_by(|x, y| x.surrogate_key.cmp(&y.surrogate_key));

    log::debug!("Assembled {} diff records", records.len());
    Ok(DiffReport { columns, records })
}
