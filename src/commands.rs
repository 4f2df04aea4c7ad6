//! Command implementations for keydiff CLI

use crate::cli::{parse_key_columns, Commands, OutputFormat};
use crate::config::{KeydiffConfig, CONFIG_FILE_NAME};
use crate::discover::discover_csv_files;
use crate::engine::{diff_files, DiffOptions};
use crate::error::{KeydiffError, Result};
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::progress::ProgressReporter;
use crate::reader::{parse_delimiter, DataReader};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Execute a command relative to the current directory
pub fn execute_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    execute_command_in(command, config_path, &current_dir)
}

/// Execute a command with `base_dir` standing in for the current directory:
/// the default config file, the config's report path, the default discovery
/// directory and the default `init` target are all resolved against it.
pub fn execute_command_in(
    command: Commands,
    config_path: Option<&Path>,
    base_dir: &Path,
) -> Result<()> {
    let config = || KeydiffConfig::resolve(config_path, base_dir);
    match command {
        Commands::Diff {
            file1,
            file2,
            key,
            delimiter,
            output,
            format,
        } => diff_command(
            config()?,
            base_dir,
            &file1,
            &file2,
            key.as_deref(),
            delimiter.as_deref(),
            output,
            &format,
        ),
        Commands::Columns {
            file1,
            file2,
            delimiter,
        } => columns_command(config()?, &file1, &file2, delimiter.as_deref()),
        Commands::Discover { dir } => {
            discover_command(config()?, dir.as_deref().unwrap_or(base_dir))
        }
        Commands::Init { force } => {
            let path = match config_path {
                Some(p) => p.to_path_buf(),
                None => base_dir.join(CONFIG_FILE_NAME),
            };
            init_command(&path, force)
        }
    }
}

fn resolve_delimiter(flag: Option<&str>, config: &KeydiffConfig) -> Result<u8> {
    match flag {
        Some(d) => parse_delimiter(d),
        None => config.delimiter_byte(),
    }
}

/// Diff two files and report the outcome
fn diff_command(
    config: KeydiffConfig,
    base_dir: &Path,
    file1: &Path,
    file2: &Path,
    key: Option<&str>,
    delimiter: Option<&str>,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(|e| KeydiffError::invalid_input(e))?;

    let key_columns = match key {
        Some(k) => parse_key_columns(k),
        None => config.key_columns.clone(),
    };
    let options = DiffOptions {
        file1: file1.to_path_buf(),
        file2: file2.to_path_buf(),
        delimiter: resolve_delimiter(delimiter, &config)?,
        key_columns,
        output: output.unwrap_or_else(|| base_dir.join(&config.output)),
    };

    let mut progress = match format {
        OutputFormat::Pretty => ProgressReporter::new_for_diff(),
        OutputFormat::Json => ProgressReporter::new_minimal(),
    };
    let outcome = diff_files(&options, &mut progress)?;
    drop(progress);

    match format {
        OutputFormat::Pretty => PrettyPrinter::print_diff_outcome(&outcome),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&outcome)?),
    }
    Ok(())
}

/// Show common columns to help choose key columns
fn columns_command(
    config: KeydiffConfig,
    file1: &Path,
    file2: &Path,
    delimiter: Option<&str>,
) -> Result<()> {
    let reader = DataReader::new(resolve_delimiter(delimiter, &config)?);
    let header1 = reader.read_header(file1)?;
    let header2 = reader.read_header(file2)?;

    let set2: BTreeSet<&str> = header2.iter().map(String::as_str).collect();
    let common: BTreeSet<&str> = header1
        .iter()
        .map(String::as_str)
        .filter(|c| set2.contains(c))
        .collect();
    let excluded = header1.len() + header2.len() - 2 * common.len();
    if excluded > 0 {
        log::info!("{} columns are present in only one file and will not be compared", excluded);
    }

    let common: Vec<&str> = common.into_iter().collect();
    PrettyPrinter::print_common_columns(&common);
    Ok(())
}

/// List candidate CSV files
fn discover_command(config: KeydiffConfig, dir: &Path) -> Result<()> {
    let files = discover_csv_files(dir, &config.exclude_files)?;
    PrettyPrinter::print_file_list(dir, &files);
    Ok(())
}

/// Write a default configuration file
fn init_command(path: &Path, force: bool) -> Result<()> {
    let config = KeydiffConfig {
        created: Some(chrono::Utc::now()),
        ..KeydiffConfig::default()
    };
    if config.write(path, force)? {
        log::info!("Created keydiff config at: {}", path.display());
        println!("✅ Wrote configuration: {}", path.display());
    } else {
        println!("ℹ️  Configuration already exists: {} (use --force to overwrite)", path.display());
    }
    Ok(())
}
