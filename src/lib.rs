//! flagfetch library
//!
//! A minimal, textual "fetch"-style probe: what is this host running,
//! and on what hardware.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod probe;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use error::{FlagfetchError, Result};

use data::{HardwareReport, OsFamily, SoftwareReport};
use probe::platform::{self, Platform};
use probe::{Host, SystemHost};

/// Everything one run reports.
#[derive(Debug, Clone)]
pub struct Report {
    pub software: SoftwareReport,
    pub hardware: HardwareReport,
}

/// Run both probes against the real host.
pub fn collect_report() -> Report {
    let platform = platform::probe();
    collect_report_on(&platform, &SystemHost)
}

/// Run both probes against an explicit host capability. The probes are
/// independent; report order is fixed regardless of which finishes first.
pub fn collect_report_on(platform: &Platform, host: &dyn Host) -> Report {
    let (software, hardware) = rayon::join(
        || collectors::software::collect_software_report(&platform.system, host),
        || {
            let family = OsFamily::classify(&platform.system);
            collectors::hardware::collect_hardware_report(platform, family, host)
        },
    );

    Report { software, hardware }
}
