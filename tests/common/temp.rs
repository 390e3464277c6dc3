// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch corpus directory removed on drop.
#[derive(Debug)]
pub struct TempCorpus {
    dir: tempfile::TempDir,
}

impl TempCorpus {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Path as the binary prints it for a file directly under the corpus.
    pub fn display(&self, rel: &str) -> String {
        self.dir.path().join(rel).display().to_string()
    }
}
