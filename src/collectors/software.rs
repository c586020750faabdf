//! Software probe: distribution, init system and filesystem layout

use std::path::Path;

use tracing::debug;

use crate::data::{OsFamily, SoftwareReport};
use crate::display::FlagSet;
use crate::probe::Host;
use crate::utils::command::run_command;

/// Init systems recognized by their management executable. Checked in
/// this order, first match wins.
const INIT_SYSTEMS: [(&str, &str); 5] = [
    ("systemctl", "SystemD"),
    ("rc-status", "OpenRC"),
    ("dinitctl", "Dinit"),
    ("runsv", "runit"),
    ("herd", "GNU Shepherd"),
];

const OS_RELEASE: &str = "/etc/os-release";
const INITTAB: &str = "/etc/inittab";
const BSD_RC: &str = "/etc/rc";

/// Run the per-family detectors and compose their flag line. The checks
/// for a family are independent of each other; flag order is fixed by
/// assembly, not by completion.
pub fn collect_software_report(system: &str, host: &dyn Host) -> SoftwareReport {
    let family = OsFamily::classify(system);
    debug!("system {:?} classified as {:?}", system, family);

    let flags = match family {
        OsFamily::Linux | OsFamily::FreeBsd => {
            let ((distro, init), layout) = rayon::join(
                || rayon::join(|| distro_name(host), || init_system(host)),
                || usr_merge(host),
            );
            FlagSet::from(vec![distro, init, Some(layout)])
        }
        OsFamily::Darwin => FlagSet::from(vec![macos_version()]),
        OsFamily::Windows => FlagSet::from(vec![windows_version(), windows_edition()]),
        OsFamily::Unknown => FlagSet::from(vec![Some("Unknown system".to_string())]),
    };

    SoftwareReport {
        system: system.to_string(),
        family,
        flags,
    }
}

/// Distribution display name from the os-release metadata.
fn distro_name(host: &dyn Host) -> Option<String> {
    let name = host.read_metadata_field(Path::new(OS_RELEASE), "PRETTY_NAME");
    debug!("distribution: {:?}", name);
    name
}

/// Identify the init system by its management executable, falling back to
/// the SysV and BSD marker files.
fn init_system(host: &dyn Host) -> Option<String> {
    for (executable, name) in INIT_SYSTEMS {
        debug!("checking {}: {}", executable, name);
        if host.find_executable(executable) {
            return Some(name.to_string());
        }
    }

    debug!("checking for SysV's {}", INITTAB);
    if host.path_exists(Path::new(INITTAB)) {
        return Some("SysV Style Init".to_string());
    }

    debug!("checking for BSD's {}", BSD_RC);
    if host.path_exists(Path::new(BSD_RC)) {
        return Some("BSD Style Init".to_string());
    }

    debug!("giving up trying to determine the init system");
    None
}

/// "Merged usr" when /lib is a symlink into /usr, "Split usr" otherwise.
/// www.freedesktop.org/wiki/Software/systemd/TheCaseForTheUsrMerge
fn usr_merge(host: &dyn Host) -> String {
    let merged = host.is_symlink(Path::new("/lib"));
    debug!("/lib is a symlink: {}", merged);
    let layout = if merged { "Merged usr" } else { "Split usr" };
    layout.to_string()
}

/// Product name plus version, e.g. "macOS 14.5".
fn macos_version() -> Option<String> {
    let product = run_command("sw_vers", &["-productName"]).ok()?;
    let version = run_command("sw_vers", &["-productVersion"]).ok()?;
    Some(format!("{} {}", product, version))
}

/// The version descriptor `ver` prints, e.g.
/// "Microsoft Windows [Version 10.0.19045.3930]".
fn windows_version() -> Option<String> {
    run_command("cmd", &["/C", "ver"])
        .ok()
        .filter(|version| !version.is_empty())
}

/// Edition identifier from the registry, e.g. "Professional".
fn windows_edition() -> Option<String> {
    let output = run_command(
        "reg",
        &[
            "query",
            r"HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion",
            "/v",
            "EditionID",
        ],
    )
    .ok()?;

    output
        .lines()
        .find(|line| line.trim_start().starts_with("EditionID"))
        .and_then(|line| line.split_whitespace().last())
        .map(|edition| edition.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::FakeHost;

    #[test]
    fn first_init_table_match_wins() {
        // Both SystemD and OpenRC executables present: table order, not
        // alphabetical order, breaks the tie.
        let host = FakeHost::new()
            .with_executable("rc-status")
            .with_executable("systemctl");
        assert_eq!(init_system(&host).as_deref(), Some("SystemD"));
    }

    #[test]
    fn executables_outrank_marker_files() {
        let host = FakeHost::new()
            .with_executable("runsv")
            .with_path("/etc/inittab")
            .with_path("/etc/rc");
        assert_eq!(init_system(&host).as_deref(), Some("runit"));
    }

    #[test]
    fn inittab_outranks_bsd_rc() {
        let host = FakeHost::new()
            .with_path("/etc/inittab")
            .with_path("/etc/rc");
        assert_eq!(init_system(&host).as_deref(), Some("SysV Style Init"));
    }

    #[test]
    fn bsd_rc_is_the_last_resort() {
        let host = FakeHost::new().with_path("/etc/rc");
        assert_eq!(init_system(&host).as_deref(), Some("BSD Style Init"));
    }

    #[test]
    fn no_init_signal_reads_as_absent() {
        let host = FakeHost::new();
        assert_eq!(init_system(&host), None);
    }

    #[test]
    fn symlinked_lib_means_merged_usr() {
        let host = FakeHost::new().with_symlink("/lib");
        assert_eq!(usr_merge(&host), "Merged usr");
    }

    #[test]
    fn plain_or_missing_lib_means_split_usr() {
        let host = FakeHost::new().with_path("/lib");
        assert_eq!(usr_merge(&host), "Split usr");
        assert_eq!(usr_merge(&FakeHost::new()), "Split usr");
    }

    #[test]
    fn distro_name_comes_from_pretty_name() {
        let host =
            FakeHost::new().with_metadata("/etc/os-release", "PRETTY_NAME", "Test OS 1.0");
        assert_eq!(distro_name(&host).as_deref(), Some("Test OS 1.0"));
        assert_eq!(distro_name(&FakeHost::new()), None);
    }

    #[test]
    fn linux_flag_line_composes_in_fixed_order() {
        let host = FakeHost::new()
            .with_metadata("/etc/os-release", "PRETTY_NAME", "Test OS 1.0")
            .with_executable("systemctl")
            .with_path("/lib");
        let report = collect_software_report("Linux", &host);

        assert_eq!(report.family, OsFamily::Linux);
        assert_eq!(
            report.flags.render(&Config::default()),
            " + Test OS 1.0 > SystemD > Split usr"
        );
    }

    #[test]
    fn freebsd_takes_the_linux_detectors() {
        let host = FakeHost::new().with_path("/etc/rc");
        let report = collect_software_report("FreeBSD", &host);

        assert_eq!(report.family, OsFamily::FreeBsd);
        assert_eq!(
            report.flags.render(&Config::default()),
            " + BSD Style Init > Split usr"
        );
    }

    #[test]
    fn unrecognized_system_reports_a_single_marker() {
        let report = collect_software_report("PlayStation9", &FakeHost::new());

        assert_eq!(report.family, OsFamily::Unknown);
        assert_eq!(report.system, "PlayStation9");
        assert_eq!(
            report.flags.render(&Config::default()),
            " + Unknown system"
        );
    }

    #[test]
    fn absent_init_flag_leaves_no_hole_in_the_line() {
        // Linux host with no init signals at all: the init flag vanishes
        // instead of rendering as an empty field.
        let host = FakeHost::new();
        let report = collect_software_report("Linux", &host);
        assert_eq!(report.flags.render(&Config::default()), " + Split usr");
    }
}
