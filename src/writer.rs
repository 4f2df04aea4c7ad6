//! Serializes diff reports as fully quoted CSV

use crate::error::Result;
use crate::report::DiffReport;
use std::io::Write;
use std::path::Path;

/// Writes diff reports: comma separated, every field quoted
#[derive(Debug, Default)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_file(&self, report: &DiffReport, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(report, std::io::BufWriter::new(file))?;
        log::info!("Differences have been written to '{}'", path.display());
        Ok(())
    }

    pub fn write<W: Write>(&self, report: &DiffReport, sink: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(sink);

        writer.write_record(report.header())?;
        for row in report.rendered_rows() {
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Render a report to an in-memory string
    pub fn render(&self, report: &DiffReport) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(report, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
