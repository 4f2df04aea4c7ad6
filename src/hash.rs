//! Content digests for diff reports

use crate::report::DiffReport;
use blake3::Hasher;

/// A hash value represented as a hex string
pub type HashValue = String;

fn update_fields(hasher: &mut Hasher, values: &[String]) {
    for value in values {
        hasher.update(&(value.len() as u64).to_le_bytes());
        hasher.update(value.as_bytes());
        hasher.update(b"|");
    }
}

/// Digest of a whole report: header plus every rendered record, in order.
/// Equal reports always produce equal digests.
pub fn report_digest(report: &DiffReport) -> HashValue {
    let mut hasher = Hasher::new();
    update_fields(&mut hasher, &report.header());
    hasher.update(b"\n");
    for row in report.rendered_rows() {
        update_fields(&mut hasher, &row);
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}
