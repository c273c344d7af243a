//! Main entry point for the Galaxy Book control tool

use anyhow::Context;
use log::debug;
use samsung_cli::{args::Args, args::VERSION, dispatch, logging, SysfsPaths};
use std::io;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = match Args::try_parse_with_commands(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            e.print().context("failed to print usage")?;
            // Usage mistakes exit 1 like every other failure
            return Ok(if e.use_stderr() {
                ExitCode::from(dispatch::EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    logging::setup(args.verbose).context("failed to initialise logging")?;
    debug!("samsung-cli {}", VERSION);

    let paths = SysfsPaths::detect(&args.root);
    let code = dispatch::run(
        &args.command,
        &paths,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(code))
}
