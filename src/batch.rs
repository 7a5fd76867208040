//! Batch processing of dataset files.
//!
//! The original use case runs the same selection request over several
//! exported CSVs in a row. Files are fully independent — no state
//! crosses file boundaries — so they may also be processed in parallel
//! (feature `parallel`). A single selection run is never parallelized
//! internally.

use crate::dataset::{load_candidates, ColumnSpec};
use crate::error::SelectError;
use crate::select::{Selection, SelectionConfig, SelectionEngine};
use std::path::{Path, PathBuf};

/// Result of processing one dataset file.
#[derive(Debug)]
pub struct FileOutcome {
    /// The dataset file.
    pub path: PathBuf,
    /// The selection, or the load/configuration error for this file.
    pub result: Result<Selection, SelectError>,
}

/// Runs the same selection request over several dataset files.
///
/// One file failing to load does not abort the others; its error is
/// carried in the corresponding [`FileOutcome`].
pub fn run_files(
    paths: &[PathBuf],
    columns: &ColumnSpec,
    config: &SelectionConfig,
    locks: &[String],
) -> Vec<FileOutcome> {
    paths
        .iter()
        .map(|path| run_one(path, columns, config, locks))
        .collect()
}

/// Same as [`run_files`], processing files in parallel with rayon.
#[cfg(feature = "parallel")]
pub fn run_files_parallel(
    paths: &[PathBuf],
    columns: &ColumnSpec,
    config: &SelectionConfig,
    locks: &[String],
) -> Vec<FileOutcome> {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| run_one(path, columns, config, locks))
        .collect()
}

fn run_one(
    path: &Path,
    columns: &ColumnSpec,
    config: &SelectionConfig,
    locks: &[String],
) -> FileOutcome {
    let result = load_candidates(path, columns)
        .and_then(|candidates| SelectionEngine::run(&candidates, config, locks));
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}
