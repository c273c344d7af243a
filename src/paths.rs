//! Attribute path table and detection of the driver-dependent attributes.
//!
//! The `samsung-galaxybook` driver has exposed its switches in three places
//! over its lifetime: a udev-managed node under `/dev`, the platform driver's
//! device directory, and the older ACPI `SCAI:00` device. Detection probes
//! them in that order once at startup.

use log::{debug, info};
use nix::unistd::{access, AccessFlags};
use std::fs;
use std::path::{Path, PathBuf};

pub const CHARGE_THRESHOLD_PATH: &str = "/sys/class/power_supply/BAT1/charge_control_end_threshold";
pub const FAN_SPEED_PATH: &str = "/sys/bus/acpi/devices/PNP0C0B:00/fan_speed_rpm";
pub const PLATFORM_PROFILE_PATH: &str = "/sys/firmware/acpi/platform_profile";
pub const PLATFORM_PROFILE_CHOICES_PATH: &str = "/sys/firmware/acpi/platform_profile_choices";
pub const KBD_BACKLIGHT_PATH: &str = "/sys/class/leds/samsung-galaxybook::kbd_backlight/brightness";

const UDEV_DIR: &str = "/dev/samsung-galaxybook";
const DRIVER_DIR: &str = "/sys/bus/platform/drivers/samsung-galaxybook";
const DRIVER_DEVICE_PREFIX: &str = "SAM";
const ACPI_DIR: &str = "/sys/bus/acpi/devices/SCAI:00";

/// Join an absolute system path beneath `root`
pub fn rebase(root: &Path, absolute: &str) -> PathBuf {
    root.join(absolute.trim_start_matches('/'))
}

/// Where the detection tiers look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRoots {
    pub udev_dir: PathBuf,
    pub driver_dir: PathBuf,
    pub acpi_dir: PathBuf,
}

impl ProbeRoots {
    /// Probe locations beneath `root` (`/` on a real system)
    pub fn under(root: &Path) -> Self {
        Self {
            udev_dir: rebase(root, UDEV_DIR),
            driver_dir: rebase(root, DRIVER_DIR),
            acpi_dir: rebase(root, ACPI_DIR),
        }
    }
}

impl Default for ProbeRoots {
    fn default() -> Self {
        Self::under(Path::new("/"))
    }
}

fn is_readable(path: &Path) -> bool {
    access(path, AccessFlags::R_OK).is_ok()
}

/// Find the attribute file for a driver-dependent feature.
///
/// Always returns a path: when neither the udev node nor a `SAM*` device of
/// the platform driver has a readable `attribute`, the ACPI location is
/// returned unchecked and any problem surfaces when it is used.
pub fn detect_feature_path(attribute: &str, roots: &ProbeRoots) -> PathBuf {
    let udev_path = roots.udev_dir.join(attribute);
    if is_readable(&udev_path) {
        debug!("{}: using udev node {}", attribute, udev_path.display());
        return udev_path;
    }

    if let Ok(entries) = fs::read_dir(&roots.driver_dir) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with(DRIVER_DEVICE_PREFIX) {
                continue;
            }
            let candidate = entry.path().join(attribute);
            if is_readable(&candidate) {
                debug!("{}: using platform driver attribute {}", attribute, candidate.display());
                return candidate;
            }
        }
    }

    let fallback = roots.acpi_dir.join(attribute);
    debug!("{}: falling back to ACPI path {}", attribute, fallback.display());
    fallback
}

/// Every attribute file the tool touches. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPaths {
    pub charge_threshold: PathBuf,
    pub fan_speed: PathBuf,
    pub platform_profile: PathBuf,
    pub platform_profile_choices: PathBuf,
    pub kbd_backlight: PathBuf,
    pub allow_recording: PathBuf,
    pub start_on_lid_open: PathBuf,
    pub usb_charge: PathBuf,
}

impl SysfsPaths {
    /// Build the table for a system rooted at `root`, detecting the
    /// driver-dependent attributes.
    pub fn detect(root: &Path) -> Self {
        let roots = ProbeRoots::under(root);
        let paths = Self {
            charge_threshold: rebase(root, CHARGE_THRESHOLD_PATH),
            fan_speed: rebase(root, FAN_SPEED_PATH),
            platform_profile: rebase(root, PLATFORM_PROFILE_PATH),
            platform_profile_choices: rebase(root, PLATFORM_PROFILE_CHOICES_PATH),
            kbd_backlight: rebase(root, KBD_BACKLIGHT_PATH),
            allow_recording: detect_feature_path("allow_recording", &roots),
            start_on_lid_open: detect_feature_path("start_on_lid_open", &roots),
            usb_charge: detect_feature_path("usb_charge", &roots),
        };
        info!("Attribute paths: {:?}", paths);
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebase() {
        assert_eq!(
            rebase(Path::new("/"), FAN_SPEED_PATH),
            PathBuf::from(FAN_SPEED_PATH)
        );
        assert_eq!(
            rebase(Path::new("/tmp/fake"), "/sys/firmware/acpi/platform_profile"),
            PathBuf::from("/tmp/fake/sys/firmware/acpi/platform_profile")
        );
    }

    #[test]
    fn test_falls_back_to_acpi_when_nothing_present() {
        let dir = tempfile::tempdir().unwrap();
        let roots = ProbeRoots::under(dir.path());

        let path = detect_feature_path("usb_charge", &roots);
        assert_eq!(path, dir.path().join("sys/bus/acpi/devices/SCAI:00/usb_charge"));
    }

    #[test]
    fn test_prefers_udev_node() {
        let dir = tempfile::tempdir().unwrap();
        let roots = ProbeRoots::under(dir.path());
        fs::create_dir_all(&roots.udev_dir).unwrap();
        fs::write(roots.udev_dir.join("allow_recording"), "1\n").unwrap();
        let device = roots.driver_dir.join("SAM0430:00");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("allow_recording"), "1\n").unwrap();

        let path = detect_feature_path("allow_recording", &roots);
        assert_eq!(path, roots.udev_dir.join("allow_recording"));
    }

    #[test]
    fn test_uses_sam_device_of_platform_driver() {
        let dir = tempfile::tempdir().unwrap();
        let roots = ProbeRoots::under(dir.path());
        let other = roots.driver_dir.join("module");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("start_on_lid_open"), "0\n").unwrap();
        let device = roots.driver_dir.join("SAM0429:00");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("start_on_lid_open"), "0\n").unwrap();

        let path = detect_feature_path("start_on_lid_open", &roots);
        assert_eq!(path, device.join("start_on_lid_open"));
    }

    #[test]
    fn test_sam_device_without_attribute_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let roots = ProbeRoots::under(dir.path());
        fs::create_dir_all(roots.driver_dir.join("SAM0430:00")).unwrap();

        let path = detect_feature_path("usb_charge", &roots);
        assert_eq!(path, roots.acpi_dir.join("usb_charge"));
    }

    #[test]
    fn test_detect_builds_rooted_table() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SysfsPaths::detect(dir.path());

        assert_eq!(paths.charge_threshold, rebase(dir.path(), CHARGE_THRESHOLD_PATH));
        assert_eq!(paths.kbd_backlight, rebase(dir.path(), KBD_BACKLIGHT_PATH));
        assert_eq!(
            paths.allow_recording,
            dir.path().join("sys/bus/acpi/devices/SCAI:00/allow_recording")
        );
    }
}
