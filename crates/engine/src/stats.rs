// crates/engine/src/stats.rs
use count_deps_shared_kernel::Counts;
use serde::Serialize;
use std::path::PathBuf;

/// Counts for one corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub counts: Counts,
}

impl FileCount {
    pub fn new(path: impl Into<PathBuf>, counts: Counts) -> Self {
        Self {
            path: path.into(),
            counts,
        }
    }
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub files: Vec<FileCount>,
    pub total: Counts,
}

impl RunResult {
    /// Fold per-file results into a total.
    pub fn from_files(files: Vec<FileCount>) -> Self {
        let total = files.iter().map(|f| f.counts).sum();
        Self { files, total }
    }
}
