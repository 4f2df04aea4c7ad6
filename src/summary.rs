//! Aggregate statistics over a diff report

use crate::report::DiffReport;
use crate::schema::ReconciledSchema;
use serde::{Deserialize, Serialize};

/// Summary returned with every diff, whether or not a report was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_differences: usize,
    pub unique_rows: usize,
    pub modified_rows: usize,
    pub files_compared: [String; 2],
    pub common_columns: usize,
    pub key_columns_used: Vec<String>,
}

impl Summary {
    pub fn from_report(
        report: &DiffReport,
        files_compared: [String; 2],
        schema: &ReconciledSchema,
    ) -> Self {
        let total_differences = report.len();
        let unique_rows = report
            .records()
            .iter()
            .filter(|r| r.failed_columns.is_unique())
            .count();

        Self {
            total_differences,
            unique_rows,
            modified_rows: total_differences - unique_rows,
            files_compared,
            common_columns: schema.common_count(),
            key_columns_used: schema.key_columns().to_vec(),
        }
    }

    pub fn has_differences(&self) -> bool {
        self.total_differences > 0
    }
}
