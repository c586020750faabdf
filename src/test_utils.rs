//! In-memory host fake for detector tests

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::probe::Host;

/// A scripted host: paths, symlinks, executables and metadata fields are
/// exactly what the test declares, nothing else exists.
#[derive(Debug, Default)]
pub struct FakeHost {
    paths: HashSet<PathBuf>,
    symlinks: HashSet<PathBuf>,
    executables: HashSet<String>,
    metadata: HashMap<(PathBuf, String), String>,
}

impl FakeHost {
    pub fn new() -> Self {
        FakeHost::default()
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.paths.insert(PathBuf::from(path));
        self
    }

    pub fn with_symlink(mut self, path: &str) -> Self {
        self.symlinks.insert(PathBuf::from(path));
        self.paths.insert(PathBuf::from(path));
        self
    }

    pub fn with_executable(mut self, name: &str) -> Self {
        self.executables.insert(name.to_string());
        self
    }

    pub fn with_metadata(mut self, path: &str, key: &str, value: &str) -> Self {
        self.metadata
            .insert((PathBuf::from(path), key.to_string()), value.to_string());
        self
    }
}

impl Host for FakeHost {
    fn path_exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        self.symlinks.contains(path)
    }

    fn find_executable(&self, name: &str) -> bool {
        self.executables.contains(name)
    }

    fn read_metadata_field(&self, path: &Path, key: &str) -> Option<String> {
        self.metadata
            .get(&(path.to_path_buf(), key.to_string()))
            .cloned()
    }
}
