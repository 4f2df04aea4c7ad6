//! Schema reconciliation between two datasets

use crate::dataset::Dataset;
use crate::error::{KeydiffError, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// The column layout shared by every stage of a diff.
///
/// Only columns present in both datasets participate. Key columns keep the
/// caller's order; the remaining common columns are sorted lexicographically
/// so that output layout does not depend on either file's header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledSchema {
    key_columns: Vec<String>,
    value_columns: Vec<String>,
    only_in_a: Vec<String>,
    only_in_b: Vec<String>,
}

impl ReconciledSchema {
    pub fn reconcile(a: &Dataset, b: &Dataset, key_columns: &[String]) -> Result<Self> {
        let common: BTreeSet<&str> = a.columns().filter(|c| b.has_column(c)).collect();
        if common.is_empty() {
            return Err(KeydiffError::schema(
                format!(
                    "datasets '{}' and '{}' have no columns in common",
                    a.name(),
                    b.name()
                ),
                Vec::new(),
            ));
        }

        if key_columns.is_empty() {
            return Err(KeydiffError::schema(
                "at least one key column is required",
                Vec::new(),
            ));
        }

        let blank: Vec<String> = key_columns
            .iter()
            .filter(|k| k.trim().is_empty())
            .cloned()
            .collect();
        if !blank.is_empty() {
            return Err(KeydiffError::schema(
                format!("{} blank key column name(s) given", blank.len()),
                blank,
            ));
        }

        let mut seen = HashSet::new();
        let repeated: Vec<String> = key_columns
            .iter()
            .filter(|k| !seen.insert(k.as_str()))
            .cloned()
            .collect();
        if !repeated.is_empty() {
            return Err(KeydiffError::schema(
                format!("key columns listed more than once: {}", repeated.join(", ")),
                repeated,
            ));
        }

        let missing: Vec<String> = key_columns
            .iter()
            .filter(|k| !common.contains(k.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(KeydiffError::schema(
                format!(
                    "key columns not present in both datasets: {}",
                    missing.join(", ")
                ),
                missing,
            ));
        }

        let value_columns: Vec<String> = common
            .iter()
            .filter(|c| !seen.contains(*c))
            .map(|c| c.to_string())
            .collect();
        let only_in_a: Vec<String> = a
            .columns()
            .filter(|c| !b.has_column(c))
            .map(String::from)
            .collect();
        let only_in_b: Vec<String> = b
            .columns()
            .filter(|c| !a.has_column(c))
            .map(String::from)
            .collect();

        if !only_in_a.is_empty() || !only_in_b.is_empty() {
            log::warn!(
                "Columns excluded from comparison: {} only in '{}', {} only in '{}'",
                only_in_a.len(),
                a.name(),
                only_in_b.len(),
                b.name()
            );
        }
        log::debug!("key_columns: {:?}", key_columns);
        log::debug!("common columns: {:?}", common);
        log::debug!("non-key columns: {:?}", value_columns);

        Ok(Self {
            key_columns: key_columns.to_vec(),
            value_columns,
            only_in_a,
            only_in_b,
        })
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    /// Common non-key columns in comparison order
    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }

    /// Report layout: key columns first, then the other common columns
    pub fn output_columns(&self) -> Vec<String> {
        self.key_columns
            .iter()
            .chain(self.value_columns.iter())
            .cloned()
            .collect()
    }

    pub fn common_count(&self) -> usize {
        self.key_columns.len() + self.value_columns.len()
    }

    pub fn only_in_a(&self) -> &[String] {
        &self.only_in_a
    }

    pub fn only_in_b(&self) -> &[String] {
        &self.only_in_b
    }
}
