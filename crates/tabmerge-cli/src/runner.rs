use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tabmerge_core::{
    merge_table_files, read_column_values, read_merge_filter_with, write_documents, MatchSet,
    ReadOptions, RowObserver, TraceRows,
};
use tracing::debug;

use crate::{
    constructor::{construct_match_set, construct_read_options, parse_match_arg, parse_mode},
    errors::ConfigError,
    parser::{parse_config, Filter},
    report::StdOutFormatter,
};

/// Prints one line per opened file and forwards rows to the trace observer.
struct Progress<'a> {
    formatter: Option<&'a StdOutFormatter>,
    total: usize,
    current: usize,
    trace: TraceRows,
}

impl RowObserver for Progress<'_> {
    fn on_file_start(&mut self, path: &Path) {
        self.current += 1;
        if let Some(formatter) = self.formatter {
            formatter.print_loading_progress(self.current, self.total, path);
        }
        self.trace.on_file_start(path);
    }

    fn on_row(&mut self, path: &Path, index: usize, row: &[String]) {
        self.trace.on_row(path, index, row);
    }

    fn on_file_end(&mut self, path: &Path, rows: usize) {
        self.trace.on_file_end(path, rows);
    }
}

/// Pipeline job from a TOML file.
pub fn run_config(config_path: &str) -> Result<()> {
    let config = parse_config(config_path)?;
    let options = construct_read_options(&config)?;
    let filter = construct_match_set(&config.filter)?;
    let mode = parse_mode(config.permissions.as_deref())?;
    run_pipeline(&config.inputs, &config.output, &options, &filter, mode)
}

/// Pipeline job from command-line flags.
pub fn run_filter(
    inputs: &[String],
    output: &Option<String>,
    options: &ReadOptions,
    matches: &[String],
    perm: &str,
) -> Result<()> {
    let filters = matches
        .iter()
        .map(|m| parse_match_arg(m))
        .collect::<Result<Vec<Filter>, ConfigError>>()?;
    let filter = construct_match_set(&filters)?;
    let mode = parse_mode(Some(perm))?;
    run_pipeline(inputs, output, options, &filter, mode)
}

fn run_pipeline(
    inputs: &[String],
    output: &Option<String>,
    options: &ReadOptions,
    filter: &MatchSet,
    mode: u32,
) -> Result<()> {
    if inputs.is_empty() {
        return Err(ConfigError::NoInputs.into());
    }
    debug!(inputs = inputs.len(), ?options, "starting read-merge-filter");

    // JSON goes to stdout when no output is given, keep it clean
    let formatter = StdOutFormatter::new(env!("CARGO_PKG_VERSION"));
    let verbose = output.is_some();
    if verbose {
        formatter.print_intro();
        formatter.print_filter(filter);
        println!("Loading data...");
    }

    let mut progress = Progress {
        formatter: verbose.then_some(&formatter),
        total: inputs.len(),
        current: 0,
        trace: TraceRows::after(0),
    };
    let docs = read_merge_filter_with(inputs, options, filter, &mut progress)
        .context("Failed to read, merge and filter input files")?;

    match output {
        Some(output) => {
            let path = output_path(output, Local::now())?;
            write_documents(&docs, &path, mode)
                .with_context(|| format!("Failed to write documents to {}", path.display()))?;
            formatter.print_documents_summary(&docs, Some(&path));
        }
        None => println!("{}", docs.to_json()?),
    }
    Ok(())
}

/// File the documents go to. An existing directory, or a path spelled with a
/// trailing separator, receives `documents_<timestamp>.json`. Parent
/// directories are created as needed.
fn output_path(output: &str, now: DateTime<Local>) -> Result<PathBuf> {
    let target = PathBuf::from(output);
    let names_dir = output.ends_with('/') || output.ends_with(std::path::MAIN_SEPARATOR);
    let (dir, file) = if names_dir || target.is_dir() {
        let name = format!("documents_{}.json", now.format("%Y%m%d-%H%M%S"));
        (target.clone(), target.join(name))
    } else {
        let parent = target.parent().map(Path::to_path_buf).unwrap_or_default();
        (parent, target)
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    Ok(file)
}

pub fn run_merge(files: &[String], options: &ReadOptions) -> Result<()> {
    let formatter = StdOutFormatter::new(env!("CARGO_PKG_VERSION"));
    formatter.print_intro();
    let table = merge_table_files(files, options).context("Failed to merge table files")?;
    let merged = files.iter().filter(|f| !f.trim().is_empty()).count();
    formatter.print_table_summary(&table, merged);
    Ok(())
}

pub fn run_extract(
    files: &[String],
    options: &ReadOptions,
    column: usize,
    unique: bool,
) -> Result<()> {
    let values = read_column_values(files, options, column, unique)
        .with_context(|| format!("Failed to extract column {}", column))?;
    for value in values {
        println!("{}", value);
    }
    Ok(())
}
