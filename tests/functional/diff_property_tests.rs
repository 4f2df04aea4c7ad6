//! Behavioural properties of the diff engine
//!
//! These tests exercise the library API directly:
//! - diffing a dataset against itself reports nothing
//! - swapping inputs swaps sources but not the set of differing keys
//! - repeated runs produce byte-identical reports
//! - every one-sided key is reported exactly once

use keydiff::hash::report_digest;
use keydiff::writer::ReportWriter;
use keydiff::{diff_datasets, Dataset, FailedColumns};
use std::collections::BTreeSet;

fn keys(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

fn inventory_a() -> Dataset {
    Dataset::from_records(
        "A",
        &["sku", "store", "qty", "price", "note"],
        &[
            vec!["s1", "north", "5", "1.00", ""],
            vec!["s1", "south", "7", "1.00", "promo"],
            vec!["s2", "north", "0", "2.50", ""],
            vec!["s3", "north", "9", "3.00", "x"],
            vec!["s4", "east", "1", "4.00", ""],
        ],
    )
    .unwrap()
}

fn inventory_b() -> Dataset {
    Dataset::from_records(
        "B",
        &["store", "sku", "price", "qty", "note", "extra"],
        &[
            vec!["north", "s1", "1.00", "5", "", "e"],
            vec!["south", "s1", "1.10", "8", "promo", "e"],
            vec!["north", "s2", "2.50", "0", "", "e"],
            vec!["west", "s3", "3.00", "9", "x", "e"],
            vec!["east", "s5", "4.00", "1", "", "e"],
        ],
    )
    .unwrap()
}

fn differing_keys(a: &Dataset, b: &Dataset, key: &[&str]) -> BTreeSet<String> {
    diff_datasets(a, b, &keys(key))
        .unwrap()
        .report
        .records()
        .iter()
        .map(|r| r.surrogate_key.clone())
        .collect()
}

#[test]
fn test_self_diff_is_empty() {
    let a = inventory_a();
    let diff = diff_datasets(&a, &a, &keys(&["sku", "store"])).unwrap();
    assert!(diff.report.is_empty());
    assert_eq!(diff.summary.total_differences, 0);
    assert_eq!(diff.summary.common_columns, 5);
}

#[test]
fn test_symmetry_of_differing_keys() {
    let a = inventory_a();
    let b = inventory_b();
    let forward = diff_datasets(&a, &b, &keys(&["sku", "store"])).unwrap();
    let backward = diff_datasets(&b, &a, &keys(&["sku", "store"])).unwrap();

    assert_eq!(
        differing_keys(&a, &b, &["sku", "store"]),
        differing_keys(&b, &a, &["sku", "store"])
    );
    assert_eq!(forward.summary.unique_rows, backward.summary.unique_rows);
    assert_eq!(forward.summary.modified_rows, backward.summary.modified_rows);

    for record in forward.report.records() {
        if record.failed_columns.is_unique() {
            let mirrored: Vec<_> = backward
                .report
                .records_for_key(&record.surrogate_key)
                .collect();
            assert_eq!(mirrored.len(), 1);
            assert_eq!(mirrored[0].source, record.source);
            assert!(mirrored[0].failed_columns.is_unique());
        }
    }
}

#[test]
fn test_determinism_byte_identical() {
    let a = inventory_a();
    let b = inventory_b();
    let writer = ReportWriter::new();

    let first = diff_datasets(&a, &b, &keys(&["sku", "store"])).unwrap();
    let second = diff_datasets(&a, &b, &keys(&["sku", "store"])).unwrap();

    assert_eq!(
        writer.render(&first.report).unwrap(),
        writer.render(&second.report).unwrap()
    );
    assert_eq!(report_digest(&first.report), report_digest(&second.report));
}

#[test]
fn test_completeness_of_unique_rows() {
    let a = inventory_a();
    let b = inventory_b();
    let diff = diff_datasets(&a, &b, &keys(&["sku", "store"])).unwrap();

    let unique: Vec<(String, String)> = diff
        .report
        .records()
        .iter()
        .filter(|r| r.failed_columns.is_unique())
        .map(|r| (r.surrogate_key.clone(), r.source.clone()))
        .collect();

    assert_eq!(
        unique,
        vec![
            ("s3|north".to_string(), "A".to_string()),
            ("s3|west".to_string(), "B".to_string()),
            ("s4|east".to_string(), "A".to_string()),
            ("s5|east".to_string(), "B".to_string()),
        ]
    );
}

#[test]
fn test_modified_pair_shape() {
    let a = inventory_a();
    let b = inventory_b();
    let diff = diff_datasets(&a, &b, &keys(&["sku", "store"])).unwrap();

    let pair: Vec<_> = diff.report.records_for_key("s1|south").collect();
    assert_eq!(pair.len(), 2);
    assert_eq!(pair[0].source, "A");
    assert_eq!(pair[1].source, "B");
    assert_eq!(
        pair[0].failed_columns,
        FailedColumns::Modified(keys(&["price", "qty"]))
    );
    assert_eq!(pair[0].failed_columns, pair[1].failed_columns);
    assert_eq!(diff.report.value(pair[0], "qty"), Some("7"));
    assert_eq!(diff.report.value(pair[1], "qty"), Some("8"));
    assert_eq!(
        diff.report.columns(),
        &keys(&["sku", "store", "note", "price", "qty"])[..]
    );
}

#[test]
fn test_single_column_change_precision() {
    let a = Dataset::from_records(
        "A",
        &["id", "a", "b", "c"],
        &[vec!["1", "x", "y", "z"], vec!["2", "x", "y", "z"]],
    )
    .unwrap();
    let b = Dataset::from_records(
        "B",
        &["id", "a", "b", "c"],
        &[vec!["1", "x", "CHANGED", "z"], vec!["2", "x", "y", "z"]],
    )
    .unwrap();
    let diff = diff_datasets(&a, &b, &keys(&["id"])).unwrap();

    assert_eq!(diff.report.len(), 2);
    for record in diff.report.records() {
        assert_eq!(record.surrogate_key, "1");
        assert_eq!(record.failed_columns.columns(), &keys(&["b"])[..]);
    }
}

#[test]
fn test_null_and_empty_are_equivalent() {
    let reader = keydiff::reader::DataReader::new(b',');
    let a = reader
        .load_reader("A", "id,v,w\n1,,x\n2,\"\",y\n".as_bytes())
        .unwrap();
    let b = Dataset::from_records("B", &["id", "v", "w"], &[vec!["1", "", "x"], vec!["2", "", "y"]])
        .unwrap();
    let diff = diff_datasets(&a, &b, &keys(&["id"])).unwrap();
    assert!(diff.report.is_empty());
}

#[test]
fn test_every_record_has_non_empty_failed_columns() {
    let diff = diff_datasets(&inventory_a(), &inventory_b(), &keys(&["sku", "store"])).unwrap();
    assert!(!diff.report.is_empty());
    for record in diff.report.records() {
        assert!(!record.failed_columns.to_string().is_empty());
        assert_ne!(record.failed_columns, FailedColumns::Identical);
    }
}

#[test]
fn test_report_sorted_by_surrogate_key() {
    let diff = diff_datasets(&inventory_a(), &inventory_b(), &keys(&["sku", "store"])).unwrap();
    let keys: Vec<&str> = diff
        .report
        .records()
        .iter()
        .map(|r| r.surrogate_key.as_str())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
