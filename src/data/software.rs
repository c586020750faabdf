//! Software-side report structures and OS family classification

use crate::display::FlagSet;

/// Operating system family, classified from the platform-reported system
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Darwin,
    Windows,
    FreeBsd,
    Unknown,
}

impl OsFamily {
    /// Classify a uname-style system name. Total: every unrecognized name
    /// maps to `Unknown`.
    pub fn classify(system: &str) -> Self {
        match system {
            "Linux" => OsFamily::Linux,
            "Darwin" => OsFamily::Darwin,
            "Windows" | "Windows_NT" => OsFamily::Windows,
            "FreeBSD" => OsFamily::FreeBsd,
            _ => OsFamily::Unknown,
        }
    }
}

/// Software probe output: the raw system identifier plus its flag line.
#[derive(Debug, Clone)]
pub struct SoftwareReport {
    pub system: String,
    pub family: OsFamily,
    pub flags: FlagSet,
}
