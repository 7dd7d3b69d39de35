//! untappdctl - query and display information from Untappd APIv4
//!
//! Tables go to stdout; the rate limit and errors go to stderr.

use anyhow::Context;
use untappd::cli::Cli;
use untappd::logger::Logger;
use untappd::{commands, Client};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

/// Main application entry point
fn run() -> i32 {
    let cli = Cli::parse_args();
    let mut log = Logger::stderr();

    match execute(cli, &mut log) {
        Ok(()) => 0,
        Err(err) => {
            log.error(format_args!("{err:#}"));
            1
        }
    }
}

/// Load configuration, build the client and run the requested command
fn execute(cli: Cli, log: &mut Logger) -> anyhow::Result<()> {
    let config = cli
        .load_config()
        .context("failed to load configuration")?;
    let client = Client::from_config(&config).context("failed to construct Untappd client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&client, cli.command, &mut out, log)?;
    Ok(())
}
