//! Hardware features and their read/set/list handlers

use crate::errors::{CliError, Result};
use crate::paths::SysfsPaths;
use crate::sysfs;
use log::{debug, info, warn};
use std::path::Path;

const SWITCH_CHOICES: &str = "Value must be one of: 0/1, on/off, true/false, yes/no";

/// A laptop feature controllable through one attribute file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Power,
    Fan,
    Performance,
    Recording,
    KeyboardBacklight,
    StartOnLidOpen,
    UsbCharge,
}

/// What to do with a feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Read,
    Set(String),
    List,
}

impl Feature {
    /// Registration order, which is also the order of the help listing
    pub const ALL: [Feature; 7] = [
        Feature::Power,
        Feature::Fan,
        Feature::Performance,
        Feature::Recording,
        Feature::KeyboardBacklight,
        Feature::StartOnLidOpen,
        Feature::UsbCharge,
    ];

    /// Command-line verb
    pub fn verb(self) -> &'static str {
        match self {
            Feature::Power => "power",
            Feature::Fan => "fan",
            Feature::Performance => "perf",
            Feature::Recording => "record",
            Feature::KeyboardBacklight => "kbd",
            Feature::StartOnLidOpen => "start-on-lid-open",
            Feature::UsbCharge => "usb-charge",
        }
    }

    /// Look a feature up by its exact verb
    pub fn from_verb(verb: &str) -> Option<Feature> {
        Self::ALL.into_iter().find(|f| f.verb() == verb)
    }

    /// Name used in subcommand errors
    fn noun(self) -> &'static str {
        match self {
            Feature::Performance => "performance",
            Feature::Recording => "recording",
            Feature::KeyboardBacklight => "keyboard",
            other => other.verb(),
        }
    }

    fn subcommand_choices(self) -> &'static str {
        match self {
            Feature::Fan => "'read'",
            Feature::Performance => "'read', 'set', or 'list'",
            _ => "'read' or 'set'",
        }
    }

    fn can_set(self) -> bool {
        self != Feature::Fan
    }

    fn can_list(self) -> bool {
        self == Feature::Performance
    }

    /// Usage lines, one per subcommand
    pub fn help(self) -> &'static str {
        match self {
            Feature::Power => {
                "  power read    Read the charge threshold\n\
                 \x20 power set <value>  Set the charge threshold (0-100)"
            }
            Feature::Fan => "  fan read      Read current fan speed in RPM",
            Feature::Performance => {
                "  perf read     Read current performance mode\n\
                 \x20 perf set <mode>  Set performance mode (low-power/balanced/performance)\n\
                 \x20 perf list     List available performance modes"
            }
            Feature::Recording => {
                "  record read   Read recording permission status\n\
                 \x20 record set <value>  Set recording permission (0/1, on/off, true/false, yes/no)"
            }
            Feature::KeyboardBacklight => {
                "  kbd read      Read keyboard backlight level\n\
                 \x20 kbd set <0-3> Set keyboard backlight level (0=off, 1-3=brightness)\n\
                 \x20              Note: Backlight may be affected by ambient light sensor\n\
                 \x20              and GNOME's automatic backlight control"
            }
            Feature::StartOnLidOpen => {
                "  start-on-lid-open read   Read start on lid open status\n\
                 \x20 start-on-lid-open set <value>  Set start on lid open (0/1, on/off, true/false, yes/no)"
            }
            Feature::UsbCharge => {
                "  usb-charge read   Read USB charge status\n\
                 \x20 usb-charge set <value>  Set USB charge (0/1, on/off, true/false, yes/no)"
            }
        }
    }

    /// Interpret the words following the verb
    pub fn parse_action(self, args: &[String]) -> Result<Action> {
        let subcommand = args.first().ok_or(CliError::MissingSubcommand {
            feature: self.noun(),
            choices: self.subcommand_choices(),
        })?;

        match subcommand.as_str() {
            "read" => Ok(Action::Read),
            "set" if self.can_set() => match args.get(1) {
                Some(value) => Ok(Action::Set(value.clone())),
                None => Err(CliError::MissingArgument {
                    verb: self.verb(),
                    what: if self == Feature::Performance { "mode" } else { "value" },
                }),
            },
            "list" if self.can_list() => Ok(Action::List),
            other => Err(CliError::UnknownSubcommand {
                feature: self.noun(),
                subcommand: other.to_string(),
            }),
        }
    }

    /// Perform `action` and return the line to show the user
    pub fn execute(self, action: &Action, paths: &SysfsPaths) -> Result<String> {
        debug!("{} {:?}", self.verb(), action);
        match (self, action) {
            (_, Action::Read) => self.read(paths),
            (Feature::Performance, Action::List) => {
                let choices = sysfs::read_line(&paths.platform_profile_choices)?;
                Ok(format!("Available performance modes: {}", choices))
            }
            (Feature::Performance, Action::Set(mode)) => set_performance_mode(paths, mode),
            (Feature::Power, Action::Set(value)) => {
                let level = parse_in_range(value, 0, 100)?;
                sysfs::write_value(&paths.charge_threshold, &level.to_string())?;
                info!("Charge threshold set to {}%", level);
                Ok(format!("Set charge threshold to {}%", level))
            }
            (Feature::KeyboardBacklight, Action::Set(value)) => {
                let level = parse_in_range(value, 0, 3)?;
                sysfs::write_value(&paths.kbd_backlight, &level.to_string())?;
                info!("Keyboard backlight set to {}", level);
                Ok(format!("Set keyboard backlight level to {}", level))
            }
            (Feature::Recording | Feature::StartOnLidOpen | Feature::UsbCharge, Action::Set(value)) => {
                let enabled = parse_switch(value)?;
                let (path, label) = self.switch(paths);
                sysfs::write_value(path, if enabled { "1" } else { "0" })?;
                info!("{} set to {}", label, enabled);
                Ok(format!(
                    "Set {} to {}",
                    lowercase_first(label),
                    enabled_label(enabled)
                ))
            }
            (feature, action) => Err(CliError::UnknownSubcommand {
                feature: feature.noun(),
                subcommand: match action {
                    Action::Read => "read",
                    Action::Set(_) => "set",
                    Action::List => "list",
                }
                .to_string(),
            }),
        }
    }

    fn read(self, paths: &SysfsPaths) -> Result<String> {
        Ok(match self {
            Feature::Power => format!(
                "Current charge threshold: {}%",
                sysfs::read_line(&paths.charge_threshold)?
            ),
            Feature::Fan => format!("Current fan speed: {} RPM", sysfs::read_line(&paths.fan_speed)?),
            Feature::Performance => format!(
                "Current performance mode: {}",
                sysfs::read_line(&paths.platform_profile)?
            ),
            Feature::KeyboardBacklight => format!(
                "Keyboard backlight level: {}",
                sysfs::read_line(&paths.kbd_backlight)?
            ),
            Feature::Recording | Feature::StartOnLidOpen | Feature::UsbCharge => {
                let (path, label) = self.switch(paths);
                let raw = sysfs::read_line(path)?;
                format!("{}: {}", label, enabled_label(raw == "1"))
            }
        })
    }

    /// Attribute and display label of the on/off features
    fn switch(self, paths: &SysfsPaths) -> (&Path, &'static str) {
        match self {
            Feature::Recording => (paths.allow_recording.as_path(), "Recording permission"),
            Feature::StartOnLidOpen => (paths.start_on_lid_open.as_path(), "Start on lid open"),
            _ => (paths.usb_charge.as_path(), "USB charge"),
        }
    }
}

fn set_performance_mode(paths: &SysfsPaths, mode: &str) -> Result<String> {
    let choices = sysfs::read_line(&paths.platform_profile_choices)?;
    // Containment, not token equality: "power" is accepted when the driver
    // offers "low-power".
    if !choices.contains(mode) {
        debug!("'{}' not offered by platform profile choices '{}'", mode, choices);
        return Err(CliError::InvalidValue(format!(
            "Invalid performance mode '{}'",
            mode
        )));
    }
    if !choices.split_whitespace().any(|choice| choice == mode) {
        warn!(
            "'{}' only partially matches the available modes '{}'; writing it anyway",
            mode, choices
        );
    }

    sysfs::write_value(&paths.platform_profile, mode)?;
    info!("Performance mode set to {}", mode);
    Ok(format!("Set performance mode to {}", mode))
}

/// Parse a decimal integer and check it lies in `min..=max`
pub fn parse_in_range(value: &str, min: i64, max: i64) -> Result<i64> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| CliError::InvalidValue(format!("Invalid value '{}'", value)))?;
    if !(min..=max).contains(&parsed) {
        return Err(CliError::InvalidValue(format!(
            "Value must be between {} and {}",
            min, max
        )));
    }
    Ok(parsed)
}

/// Parse an on/off literal. Matching is case-sensitive.
pub fn parse_switch(value: &str) -> Result<bool> {
    match value {
        "0" | "off" | "false" | "no" => Ok(false),
        "1" | "on" | "true" | "yes" => Ok(true),
        _ => Err(CliError::InvalidValue(SWITCH_CHOICES.to_string())),
    }
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

fn lowercase_first(label: &str) -> String {
    // "USB charge" keeps its acronym
    if label.starts_with("USB") {
        return label.to_string();
    }
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
