//! Command-line interface for keydiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keydiff")]
#[command(about = "Compare two tabular files row by row on a composite key")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./.keydiff.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diff two files on key columns
    Diff {
        /// First file (source A)
        file1: PathBuf,

        /// Second file (source B)
        file2: PathBuf,

        /// Comma-separated key column names, e.g. "id,date"
        #[arg(long)]
        key: Option<String>,

        /// Input field delimiter (single character)
        #[arg(long)]
        delimiter: Option<String>,

        /// Report file to write
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// List the columns two files have in common
    Columns {
        file1: PathBuf,
        file2: PathBuf,

        /// Input field delimiter (single character)
        #[arg(long)]
        delimiter: Option<String>,
    },

    /// List CSV files in a directory
    Discover {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Parse output format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

/// Split a comma-separated key list, trimming names.
/// Blank entries are kept so validation can reject them.
pub fn parse_key_columns(s: &str) -> Vec<String> {
    s.split(',').map(|k| k.trim().to_string()).collect()
}
