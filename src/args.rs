//! Command line argument parsing for the Galaxy Book control tool

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Version plus the build metadata stamped in by build.rs
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (git ",
    env!("GIT_DESC"),
    " / ",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

/// Samsung Galaxy Book control
///
/// Reads and writes the kernel attributes behind the battery charge
/// threshold, fan, performance profile, keyboard backlight and related switches.
#[derive(Parser, Debug)]
#[command(name = "samsung-cli")]
#[command(about = "CLI tool to control Samsung Galaxy Book features")]
#[command(version = VERSION)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Look for every attribute beneath DIR instead of the real root
    #[arg(long, value_name = "DIR", default_value = "/")]
    pub root: PathBuf,

    /// Command followed by its subcommand and value, e.g. `power set 80`
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Parse from `itr`, with the command listing appended to `--help`
    pub fn try_parse_with_commands<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .after_help(crate::dispatch::commands_help())
            .try_get_matches_from(itr)?;
        Self::from_arg_matches(&matches)
    }
}
