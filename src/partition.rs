//! Key-based partitioning of two datasets into unique and matched rows

use crate::dataset::{Dataset, Row};
use crate::error::{KeydiffError, Result};
use crate::key::{KeyBuilder, KeyTuple};
use crate::schema::ReconciledSchema;
use indexmap::IndexMap;

/// A pair of rows sharing the same key
#[derive(Debug, Clone, Copy)]
pub struct MatchedPair<'a> {
    pub a: &'a Row,
    pub b: &'a Row,
}

/// Result of splitting A and B by key
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Rows of A with no key counterpart in B, in A order
    pub a_only: Vec<KeyedRow<'a>>,
    /// Rows of B with no key counterpart in A, in B order
    pub b_only: Vec<KeyedRow<'a>>,
    /// Rows present on both sides, in A order
    pub matched: Vec<(KeyTuple, MatchedPair<'a>)>,
}

/// A row together with its normalized key
#[derive(Debug, Clone)]
pub struct KeyedRow<'a> {
    pub key: KeyTuple,
    pub row: &'a Row,
}

/// Index rows by key, failing on the first repeated key
fn index_by_key<'a>(
    dataset: &'a Dataset,
    builder: &KeyBuilder,
) -> Result<IndexMap<KeyTuple, &'a Row>> {
    let mut index = IndexMap::with_capacity(dataset.row_count());
    for row in dataset.rows() {
        let key = builder.key_tuple(row);
        if index.contains_key(&key) {
            return Err(KeydiffError::degenerate_key(dataset.name(), key.surrogate()));
        }
        index.insert(key, row);
    }
    Ok(index)
}

/// Split A and B into A-only, B-only and matched rows.
///
/// Keys compare component-wise on normalized values, so a null component
/// only matches a null (or empty) component in the same position. Keys must
/// be unique within each dataset.
pub fn partition<'a>(
    a: &'a Dataset,
    b: &'a Dataset,
    schema: &ReconciledSchema,
) -> Result<Partition<'a>> {
    let a_keys = KeyBuilder::for_dataset(a, schema.key_columns())?;
    let b_keys = KeyBuilder::for_dataset(b, schema.key_columns())?;

    let a_index = index_by_key(a, &a_keys)?;
    let b_index = index_by_key(b, &b_keys)?;

    let mut result = Partition::default();
    for (key, &row) in &a_index {
        match b_index.get(key) {
            Some(&other) => result
                .matched
                .push((key.clone(), MatchedPair { a: row, b: other })),
            None => result.a_only.push(KeyedRow {
                key: key.clone(),
                row,
            }),
        }
    }
    result.b_only = b_index
        .iter()
        .filter(|(key, _)| !a_index.contains_key(*key))
        .map(|(key, &row)| KeyedRow {
            key: key.clone(),
            row,
        })
        .collect();

    log::debug!(
        "Partitioned: {} only in '{}', {} only in '{}', {} matched",
        result.a_only.len(),
        a.name(),
        result.b_only.len(),
        b.name(),
        result.matched.len()
    );

    Ok(result)
}
