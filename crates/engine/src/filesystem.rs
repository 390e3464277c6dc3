// crates/engine/src/filesystem.rs
use crate::config::CorpusOptions;
use count_deps_shared_kernel::{InfraResult, InfrastructureError};
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Files selected for one run, sorted by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub dir: PathBuf,
    pub pattern: String,
    pub files: Vec<PathBuf>,
}

impl Corpus {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// List `<dir>/*.<ext>` the way a shell glob would.
///
/// Only the directory itself is searched. Names starting with `.` never
/// match. The extension is taken literally, so glob metacharacters in it
/// (`*`, `?`, `[`, `{`) only match themselves. Matching directories are
/// skipped with a warning; every other match is kept, including broken
/// links, so that a file that cannot be opened fails the run later.
///
/// # Errors
/// Returns an error if the directory exists but cannot be listed. A missing
/// directory is not an error: it yields an empty corpus.
pub fn resolve_corpus(options: &CorpusOptions) -> InfraResult<Corpus> {
    let pattern = options.pattern();
    let matcher = compile(&options.ext)?;
    let dir = options.dir.clone();

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            log::warn!("{} is not a directory; nothing to count", dir.display());
            return Ok(Corpus {
                dir,
                pattern,
                files: Vec::new(),
            });
        }
        Err(source) => return Err(InfrastructureError::DirectoryRead { path: dir, source }),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InfrastructureError::DirectoryRead {
            path: dir.clone(),
            source,
        })?;
        let name = entry.file_name();
        if name.as_encoded_bytes().starts_with(b".") || !matcher.is_match(Path::new(&name)) {
            continue;
        }
        let path = entry.path();
        // fs::metadata follows symlinks; a link to a directory is skipped too
        if fs::metadata(&path).is_ok_and(|meta| meta.is_dir()) {
            log::warn!("skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();

    Ok(Corpus { dir, pattern, files })
}

/// `*.<ext>` with `ext` escaped.
fn compile(ext: &str) -> InfraResult<GlobMatcher> {
    let pattern = format!("*.{}", globset::escape(ext));
    GlobBuilder::new(&pattern)
        .literal_separator(true)
        .backslash_escape(false)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| InfrastructureError::InvalidPattern {
            pattern: pattern.clone(),
            details: e.to_string(),
        })
}
