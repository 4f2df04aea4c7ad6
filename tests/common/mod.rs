//! Common test utilities and helpers

use keydiff::{KeydiffError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture manager for creating temporary test environments
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the fixture
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Create a test CSV file from rows (first row is the header)
    pub fn create_csv(&self, name: &str, data: &[Vec<&str>]) -> Result<PathBuf> {
        self.create_delimited(name, data, ',')
    }

    /// Create a delimited file with a custom delimiter
    pub fn create_delimited(&self, name: &str, data: &[Vec<&str>], delimiter: char) -> Result<PathBuf> {
        let path = self.path(name);
        let mut content = String::new();

        for row in data {
            content.push_str(&row.join(delimiter.to_string().as_str()));
            content.push('\n');
        }

        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a test CSV file with raw string content
    pub fn create_csv_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a written report
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("report should be readable")
    }
}

/// Helper for running CLI commands in tests
pub struct CliTestRunner {
    fixture: TestFixture,
}

impl CliTestRunner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fixture: TestFixture::new()?,
        })
    }

    pub fn fixture(&self) -> &TestFixture {
        &self.fixture
    }

    /// Run a keydiff command inside the fixture directory and return the result
    pub fn run_command(&self, args: &[&str]) -> Result<()> {
        use clap::Parser;
        use keydiff::cli::Cli;
        use keydiff::commands::execute_command_in;

        let mut cmd_args = vec!["keydiff"];
        cmd_args.extend(args);

        let cli = Cli::try_parse_from(cmd_args)
            .map_err(|e| KeydiffError::invalid_input(e.to_string()))?;

        execute_command_in(cli.command, cli.config.as_deref(), self.fixture.root())
    }

    /// Run a command and expect it to succeed
    pub fn expect_success(&self, args: &[&str]) {
        self.run_command(args).expect("Command should succeed");
    }

    /// Run a command and expect it to fail
    pub fn expect_failure(&self, args: &[&str]) -> KeydiffError {
        self.run_command(args).expect_err("Command should fail")
    }
}

/// Sample data generators for testing
pub mod sample_data {
    pub fn people_a() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name"],
            vec!["1", "Alice"],
            vec!["2", "Bob"],
        ]
    }

    pub fn people_b() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name"],
            vec!["1", "Alicia"],
            vec!["3", "Carl"],
        ]
    }

    pub fn orders_a() -> Vec<Vec<&'static str>> {
        vec![
            vec!["order_id", "date", "customer", "amount", "status"],
            vec!["100", "2024-01-01", "acme", "10.00", "open"],
            vec!["101", "2024-01-01", "globex", "25.50", "closed"],
            vec!["101", "2024-01-02", "globex", "30.00", "open"],
            vec!["102", "2024-01-03", "initech", "", "open"],
        ]
    }

    pub fn orders_b() -> Vec<Vec<&'static str>> {
        vec![
            vec!["status", "amount", "customer", "date", "order_id", "region"],
            vec!["open", "10.00", "acme", "2024-01-01", "100", "eu"],
            vec!["closed", "26.00", "globex", "2024-01-01", "101", "us"],
            vec!["open", "", "initech", "2024-01-03", "102", "us"],
            vec!["open", "5.00", "hooli", "2024-01-04", "103", "us"],
        ]
    }
}

/// Assertion helpers for test validation
pub mod assertions {
    use std::path::Path;

    /// Assert that a file exists and is not empty
    pub fn assert_file_exists_and_not_empty(path: &Path) {
        assert!(path.exists(), "File should exist: {}", path.display());
        let metadata = std::fs::metadata(path).expect("Should be able to read file metadata");
        assert!(metadata.len() > 0, "File should not be empty: {}", path.display());
    }

    /// Assert that a report's lines match exactly, ignoring line terminators
    pub fn assert_report_lines(content: &str, expected: &[&str]) {
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, expected, "Report content mismatch:\n{}", content);
    }
}
