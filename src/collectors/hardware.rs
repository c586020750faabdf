//! Hardware probe: hostname, architecture, core count, boot firmware

use std::path::Path;
use std::thread;

use tracing::debug;

use crate::data::{HardwareReport, OsFamily};
use crate::display::FlagSet;
use crate::probe::platform::Platform;
use crate::probe::Host;

const EFI_FIRMWARE: &str = "/sys/firmware/efi";

/// Compose the hardware flag line. Runs on every family; only the EFI
/// flag is family-gated.
pub fn collect_hardware_report(
    platform: &Platform,
    family: OsFamily,
    host: &dyn Host,
) -> HardwareReport {
    let flags = FlagSet::from(vec![
        present(&platform.hostname),
        present(&platform.machine),
        Some(format!("{} core CPU", logical_cores())),
        efi_flag(family, host),
    ]);

    HardwareReport { flags }
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Logical CPU count as seen by the scheduler.
fn logical_cores() -> usize {
    thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

/// EFI firmware flag. Omitted on every family but Linux, even when the
/// firmware path happens to exist.
fn efi_flag(family: OsFamily, host: &dyn Host) -> Option<String> {
    if family != OsFamily::Linux {
        return None;
    }
    if booted_with_efi(host) {
        Some("EFI".to_string())
    } else {
        None
    }
}

/// The kernel exposes /sys/firmware/efi only when booted through EFI.
fn booted_with_efi(host: &dyn Host) -> bool {
    let exists = host.path_exists(Path::new(EFI_FIRMWARE));
    debug!("efi: {}", exists);
    exists
}
