//! Command dispatch: maps the first word to a feature and reports the outcome

use crate::errors::{CliError, Result};
use crate::features::{Action, Feature};
use crate::paths::SysfsPaths;
use log::{debug, info};
use std::io::{self, Write};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const HELP_VERB: &str = "help";
const HELP_LINE: &str = "  help          Show this help message";

/// A fully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Feature, Action),
}

impl Command {
    /// Parse the command words (verb first). Words after `help` are ignored.
    pub fn parse(words: &[String]) -> Result<Command> {
        let Some((verb, rest)) = words.split_first() else {
            return Err(CliError::Usage("No command given".to_string()));
        };
        if verb == HELP_VERB {
            return Ok(Command::Help);
        }
        let feature =
            Feature::from_verb(verb).ok_or_else(|| CliError::UnknownCommand(verb.clone()))?;
        Ok(Command::Run(feature, feature.parse_action(rest)?))
    }
}

/// The command listing, in registration order
pub fn commands_help() -> String {
    let mut text = String::from("Commands:\n");
    for feature in Feature::ALL {
        text.push_str(feature.help());
        text.push('\n');
    }
    text.push_str(HELP_LINE);
    text.push('\n');
    text
}

/// Full usage text printed by `help`
pub fn usage() -> String {
    format!(
        "Usage: samsung-cli <command> [<args>]\n\
         CLI tool to control Samsung Galaxy Book features.\n\n{}",
        commands_help()
    )
}

/// Run one command and return the process exit code.
///
/// Command output goes to `out`, errors to `err`. Only failures to write to
/// those streams are returned as `Err`.
pub fn run(
    words: &[String],
    paths: &SysfsPaths,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<u8> {
    if words.is_empty() {
        out.write_all(usage().as_bytes())?;
        return Ok(EXIT_FAILURE);
    }

    let command = match Command::parse(words) {
        Ok(command) => command,
        Err(e @ CliError::UnknownCommand(_)) => {
            writeln!(err, "Error: {}", e)?;
            out.write_all(usage().as_bytes())?;
            return Ok(EXIT_FAILURE);
        }
        Err(e) => {
            debug!("Rejected command line {:?}: {}", words, e);
            writeln!(err, "Error: {}", e)?;
            return Ok(EXIT_FAILURE);
        }
    };
    debug!("Dispatching {:?}", command);

    match command {
        Command::Help => {
            out.write_all(usage().as_bytes())?;
            Ok(EXIT_SUCCESS)
        }
        Command::Run(feature, action) => match feature.execute(&action, paths) {
            Ok(message) => {
                writeln!(out, "{}", message)?;
                Ok(EXIT_SUCCESS)
            }
            Err(e @ CliError::InvalidValue(_)) => {
                debug!("{} rejected: {}", feature.verb(), e);
                writeln!(err, "Error: {}", e)?;
                Ok(EXIT_FAILURE)
            }
            Err(e) => {
                info!("{} failed: {:?}", feature.verb(), e);
                writeln!(err, "Error: {}", e)?;
                Ok(EXIT_FAILURE)
            }
        },
    }
}
