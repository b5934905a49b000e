//! The comparison run: origin keys, target universe, difference, output.

pub mod comparator;
pub mod extractor;

pub use comparator::{compare, non_matching};
pub use extractor::{Extraction, KeyExtractor};

use crate::core::config::TargetErrorPolicy;
use crate::core::error::{DataCompareError, Result};
use crate::core::results::{KeySet, KeyType, NonMatchResult, RunContext, RunSummary};
use crate::formats;
use crate::utils::FileProgress;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Inputs of one comparison run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub origin: PathBuf,
    pub target_folder: PathBuf,
    pub output: PathBuf,
    pub key_type: KeyType,
    pub on_target_error: TargetErrorPolicy,
    /// 1-based column for CSV/spreadsheet inputs
    pub column: Option<usize>,
    /// JSON run summary path, kept out of the target scan
    pub summary: Option<PathBuf>,
    pub show_progress: bool,
}

impl RunOptions {
    pub fn new(
        origin: impl Into<PathBuf>,
        target_folder: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        key_type: KeyType,
    ) -> Self {
        Self {
            origin: origin.into(),
            target_folder: target_folder.into(),
            output: output.into(),
            key_type,
            on_target_error: TargetErrorPolicy::default(),
            column: None,
            summary: None,
            show_progress: false,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub result: NonMatchResult,
    pub context: RunContext,
    pub skipped_files: Vec<PathBuf>,
}

impl RunReport {
    pub fn summary(&self, options: &RunOptions) -> RunSummary {
        RunSummary {
            timestamp: Utc::now(),
            key_type: self.result.key_type,
            origin: options.origin.clone(),
            target_folder: options.target_folder.clone(),
            output: options.output.clone(),
            skipped_files: self.skipped_files.clone(),
            statistics: self.context.clone(),
            non_matching: self.result.keys.clone(),
        }
    }
}

/// Union of the key sets of every target file
#[derive(Debug, Default)]
pub struct TargetUniverse {
    pub keys: KeySet,
    pub skipped_files: Vec<PathBuf>,
}

/// Run the whole comparison and write the output file.
///
/// The output is written only after every input has been processed.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    formats::check_output_path(&options.output)?;
    if !options.origin.is_file() {
        return Err(DataCompareError::InputNotFound(options.origin.clone()));
    }
    if !options.target_folder.is_dir() {
        return Err(DataCompareError::InputNotFound(options.target_folder.clone()));
    }

    let extractor = KeyExtractor::new(options.key_type);
    let mut context = RunContext::default();

    info!("Loading origin file {}", options.origin.display());
    let origin = load_keys(&options.origin, &extractor, options.column)?;
    context.origin_records = origin.records;
    context.origin_rejected = origin.rejected;
    context.origin_keys = origin.keys.len();
    if origin.keys.is_empty() {
        warn!(
            "Origin file {} contains no valid {} keys",
            options.origin.display(),
            options.key_type
        );
    }
    debug!("Origin keys: {}", origin.keys.len());
    trace!("Origin values: {:?}", origin.keys.iter().collect::<Vec<_>>());

    let mut exclude = vec![options.origin.as_path(), options.output.as_path()];
    exclude.extend(options.summary.as_deref());
    let files = list_target_files(&options.target_folder, &exclude)?;
    info!("Found {} files in the target folder", files.len());
    context.target_files_found = files.len();

    let progress = FileProgress::new(files.len(), options.show_progress);
    let universe = build_universe(&files, &extractor, options, &mut context, &progress);
    progress.finish();
    let universe = universe?;

    let result = compare(options.key_type, &origin.keys, &universe.keys);
    context.non_matching = result.len();
    debug!("Non-matching values: {}", result.len());

    formats::write_rows(&options.output, &result.header(), &result.keys)?;
    info!("Output saved to {}", options.output.display());

    Ok(RunReport {
        result,
        context,
        skipped_files: universe.skipped_files,
    })
}

/// Read one file and extract its keys
pub fn load_keys(path: &Path, extractor: &KeyExtractor, column: Option<usize>) -> Result<Extraction> {
    let records = formats::read_records(path, column)?;
    Ok(extractor.extract(&records))
}

/// Regular files directly inside `folder`, sorted by name.
///
/// Files that are the same as any path in `exclude` are left out, so the
/// origin, a previous output or a run summary living in the folder is never
/// compared.
pub fn list_target_files(folder: &Path, exclude: &[&Path]) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(DataCompareError::InputNotFound(folder.to_path_buf()));
    }

    let excluded: Vec<PathBuf> = exclude
        .iter()
        .filter_map(|path| fs::canonicalize(path).ok())
        .collect();

    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(canonical) = fs::canonicalize(&path) {
            if excluded.contains(&canonical) {
                info!("Skipping {} (origin, output or summary file)", path.display());
                continue;
            }
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Extract and union the keys of every target file, one at a time.
///
/// A file that cannot be read is skipped or aborts the run per
/// `options.on_target_error`.
pub fn build_universe(
    files: &[PathBuf],
    extractor: &KeyExtractor,
    options: &RunOptions,
    context: &mut RunContext,
    progress: &FileProgress,
) -> Result<TargetUniverse> {
    let mut universe = TargetUniverse::default();

    for path in files {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        progress.set_message(&name);

        match load_keys(path, extractor, options.column) {
            Ok(extraction) => {
                context.target_files_processed += 1;
                context.target_records += extraction.records;
                context.target_rejected += extraction.rejected;
                debug!("Valid target values from {}: {}", name, extraction.keys.len());
                trace!("Target values from {}: {:?}", name, extraction.keys.iter().collect::<Vec<_>>());
                universe.keys.union_with(extraction.keys);
            }
            Err(e) => match options.on_target_error {
                TargetErrorPolicy::Skip => {
                    warn!("Could not process file {}: {}", name, e);
                    context.target_files_skipped += 1;
                    universe.skipped_files.push(path.clone());
                }
                TargetErrorPolicy::Abort => {
                    return Err(DataCompareError::TargetFile {
                        path: path.clone(),
                        source: Box::new(e),
                    });
                }
            },
        }

        progress.inc();
    }

    context.target_keys = universe.keys.len();
    Ok(universe)
}
