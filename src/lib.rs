//! Samsung Galaxy Book control
//!
//! Reads and writes the kernel attributes exposed by the `samsung-galaxybook`
//! platform driver and the generic power-supply, ACPI and LED classes.

pub mod args;
pub mod dispatch;
pub mod errors;
pub mod features;
pub mod logging;
pub mod paths;
pub mod sysfs;

// Re-export commonly used types
pub use errors::{CliError, Result};
pub use features::{Action, Feature};
pub use paths::SysfsPaths;
