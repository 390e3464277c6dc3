// crates/engine/src/config.rs
use crate::options::{Column, MalformedPolicy};
use count_deps_shared_kernel::{DomainError, DomainResult};
use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Marker substring used by the PropBank layer to tag predicate rolesets.
pub const DEFAULT_MARKER: &str = "pb=";

/// Which files make up the corpus: `<dir>/*.<ext>`.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    pub dir: PathBuf,
    pub ext: String,
}

impl CorpusOptions {
    pub fn new(dir: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ext: ext.into(),
        }
    }

    /// Glob for the corpus as shown to users, e.g. `*.dep`.
    pub fn pattern(&self) -> String {
        format!("*.{}", self.ext)
    }
}

/// A data line is marked when `column` contains `marker`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct MarkerRule {
    #[builder(default)]
    pub column: Column,
    #[builder(default = "DEFAULT_MARKER.to_string()")]
    pub marker: String,
}

impl Default for MarkerRule {
    fn default() -> Self {
        Self {
            column: Column::default(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl MarkerRule {
    #[inline]
    pub fn matches(&self, field: &str) -> bool {
        field.contains(self.marker.as_str())
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub corpus: CorpusOptions,
    #[builder(default)]
    pub marker: MarkerRule,
    #[builder(default)]
    pub malformed: MalformedPolicy,
    /// Worker threads for counting; `0` picks one per CPU.
    #[builder(default = "1")]
    pub jobs: usize,
}

impl Config {
    /// Defaults for everything except the corpus location.
    pub fn new(dir: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            corpus: CorpusOptions::new(dir, ext),
            marker: MarkerRule::default(),
            malformed: MalformedPolicy::default(),
            jobs: 1,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.corpus.dir
    }

    /// Reject settings that can never produce a meaningful count.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidConfiguration`] for an empty extension,
    /// an extension containing a path separator, or an empty marker.
    pub fn validate(&self) -> DomainResult<()> {
        let ext = &self.corpus.ext;
        if ext.is_empty() {
            return Err(invalid("extension must not be empty"));
        }
        if ext.contains(['/', std::path::MAIN_SEPARATOR]) {
            return Err(invalid(format!("extension '{ext}' must not contain a path separator")));
        }
        if self.marker.marker.is_empty() {
            return Err(invalid("marker must not be empty"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::InvalidConfiguration { reason: reason.into() }
}
