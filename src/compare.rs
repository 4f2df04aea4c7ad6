//! Column-level comparison of matched rows

use crate::dataset::Dataset;
use crate::error::Result;
use crate::key::{normalize, KeyTuple};
use crate::partition::MatchedPair;
use crate::report::FailedColumns;
use crate::schema::ReconciledSchema;
use rayon::prelude::*;

/// Null-aware cell inequality.
///
/// A cell is null when absent or empty; a null never differs from another null.
pub fn cells_differ(a: Option<&str>, b: Option<&str>) -> bool {
    let a_null = normalize(a).is_empty();
    let b_null = normalize(b).is_empty();
    (a_null != b_null) || (!a_null && !b_null && normalize(a) != normalize(b))
}

/// A matched pair with at least one differing column
#[derive(Debug, Clone)]
pub struct ModifiedPair<'a> {
    pub key: KeyTuple,
    pub pair: MatchedPair<'a>,
    pub failed_columns: Vec<String>,
}

/// Compares matched rows over the common non-key columns
#[derive(Debug, Clone)]
pub struct RowComparator {
    columns: Vec<String>,
    a_positions: Vec<usize>,
    b_positions: Vec<usize>,
}

impl RowComparator {
    pub fn new(a: &Dataset, b: &Dataset, schema: &ReconciledSchema) -> Result<Self> {
        Ok(Self {
            columns: schema.value_columns().to_vec(),
            a_positions: a.positions(schema.value_columns())?,
            b_positions: b.positions(schema.value_columns())?,
        })
    }

    /// Differing columns of one pair, in comparison order
    pub fn compare(&self, pair: &MatchedPair<'_>) -> FailedColumns {
        let failed: Vec<String> = self
            .columns
            .iter()
            .zip(self.a_positions.iter().zip(self.b_positions.iter()))
            .filter(|(_, (pa, pb))| cells_differ(pair.a.cell(**pa), pair.b.cell(**pb)))
            .map(|(column, _)| column.clone())
            .collect();

        if failed.is_empty() {
            FailedColumns::Identical
        } else {
            FailedColumns::Modified(failed)
        }
    }

    /// Compare all matched pairs, keeping only those that differ.
    /// Output order follows input order.
    pub fn compare_matched<'a>(
        &self,
        matched: &[(KeyTuple, MatchedPair<'a>)],
    ) -> Vec<ModifiedPair<'a>> {
        matched
            .par_iter()
            .filter_map(|(key, pair)| match self.compare(pair) {
                FailedColumns::Modified(failed_columns) => Some(ModifiedPair {
                    key: key.clone(),
                    pair: *pair,
                    failed_columns,
                }),
                _ => None,
            })
            .collect()
    }
}
