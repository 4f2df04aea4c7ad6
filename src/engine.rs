//! Diff pipeline: reconcile, partition, compare, assemble, summarize

use crate::compare::RowComparator;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::hash::report_digest;
use crate::partition::partition;
use crate::progress::ProgressReporter;
use crate::reader::DataReader;
use crate::report::{assemble, DiffReport};
use crate::schema::ReconciledSchema;
use crate::summary::Summary;
use crate::writer::ReportWriter;
use serde::Serialize;
use std::path::PathBuf;

/// Everything the pure pipeline produces for one pair of datasets
#[derive(Debug, Clone)]
pub struct DatasetDiff {
    pub schema: ReconciledSchema,
    pub report: DiffReport,
    pub summary: Summary,
}

/// Diff two in-memory datasets on the given key columns.
///
/// Pure: neither dataset is modified and no I/O happens.
pub fn diff_datasets(a: &Dataset, b: &Dataset, key_columns: &[String]) -> Result<DatasetDiff> {
    let schema = ReconciledSchema::reconcile(a, b, key_columns)?;
    let partition = partition(a, b, &schema)?;
    let modified = RowComparator::new(a, b, &schema)?.compare_matched(&partition.matched);
    let report = assemble(a, b, &schema, &partition, &modified)?;
    let summary = Summary::from_report(
        &report,
        [a.name().to_string(), b.name().to_string()],
        &schema,
    );

    log::info!(
        "Compared '{}' and '{}': {} differences ({} unique, {} modified)",
        a.name(),
        b.name(),
        summary.total_differences,
        summary.unique_rows,
        summary.modified_rows
    );

    Ok(DatasetDiff {
        schema,
        report,
        summary,
    })
}

/// Inputs for a file-to-file diff
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub delimiter: u8,
    pub key_columns: Vec<String>,
    pub output: PathBuf,
}

/// Result handed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct DiffOutcome {
    /// True when a report was written
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub summary: Summary,
    pub report_digest: String,
}

/// Load both files, diff them and write the report if there is anything to report
pub fn diff_files(options: &DiffOptions, progress: &mut ProgressReporter) -> Result<DiffOutcome> {
    let reader = DataReader::new(options.delimiter);

    progress.start_load("Loading datasets...");
    let a = reader.load_file(&options.file1)?;
    let b = reader.load_file(&options.file2)?;
    progress.finish_load(&format!(
        "Loaded {} + {} rows",
        a.row_count(),
        b.row_count()
    ));

    progress.start_compare("Comparing rows...");
    let diff = diff_datasets(&a, &b, &options.key_columns)?;
    for (name, ignored) in [
        (a.name(), diff.schema.only_in_a()),
        (b.name(), diff.schema.only_in_b()),
    ] {
        if !ignored.is_empty() {
            log::debug!("Columns only in '{}' not compared: {}", name, ignored.join(", "));
        }
    }
    progress.finish_compare(&format!(
        "Found {} differences",
        diff.summary.total_differences
    ));

    let digest = report_digest(&diff.report);
    if diff.report.is_empty() {
        log::info!("No differences found, nothing written");
        return Ok(DiffOutcome {
            success: false,
            output_path: None,
            summary: diff.summary,
            report_digest: digest,
        });
    }

    progress.start_write("Writing report...");
    ReportWriter::new().write_file(&diff.report, &options.output)?;
    progress.finish_write(&format!("Wrote {}", options.output.display()));

    Ok(DiffOutcome {
        success: true,
        output_path: Some(options.output.clone()),
        summary: diff.summary,
        report_digest: digest,
    })
}
