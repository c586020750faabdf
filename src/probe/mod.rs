//! Host capability layer
//!
//! Every detector probes the operating system through the [`Host`] trait,
//! so tests can substitute an in-memory fake for the real filesystem and
//! search path.

pub mod platform;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::utils::parsing::os_release_value;

/// Read-only capabilities a detector needs from the host. Absence of a
/// signal (missing path, missing executable, unreadable file) is reported
/// as `false`/`None`, never as an error.
pub trait Host: Sync {
    /// Whether a path exists at all.
    fn path_exists(&self, path: &Path) -> bool;

    /// Whether a path is a symbolic link. Missing paths are not symlinks.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Whether an executable with this name is on the search path.
    fn find_executable(&self, name: &str) -> bool;

    /// One value from a `KEY=value` metadata file (os-release convention).
    fn read_metadata_field(&self, path: &Path, key: &str) -> Option<String>;
}

/// The real host, probed through `std::fs` and the process environment.
pub struct SystemHost;

impl Host for SystemHost {
    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn find_executable(&self, name: &str) -> bool {
        match std::env::var_os("PATH") {
            Some(path) => {
                let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
                executable_in_dirs(&dirs, name)
            }
            None => false,
        }
    }

    fn read_metadata_field(&self, path: &Path, key: &str) -> Option<String> {
        read_metadata_field(path, key)
    }
}

/// Search a list of directories for a plain file with this name.
fn executable_in_dirs(dirs: &[PathBuf], name: &str) -> bool {
    dirs.iter().any(|dir| dir.join(name).is_file())
}

/// Scan a metadata file line by line and stop at the first line carrying
/// the wanted key.
fn read_metadata_field(path: &Path, key: &str) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).ok()?;
        if bytes_read == 0 {
            break;
        }
        if let Some(value) = os_release_value(&line, key) {
            return Some(value);
        }
    }
    None
}
