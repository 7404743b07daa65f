//! jqurl - URL and JSON parser tool
//!
//! Fetches a JSON document from the first of several URLs that answers,
//! optionally through a local cache, and prints the result of a jq query
//! applied to it.

use std::process::ExitCode;

use clap::Parser;

use jqurl::cli::Cli;
use jqurl::config::Config;
use jqurl::netns::NetnsGuard;
use jqurl::{app, logging, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    // The namespace switch applies to this thread only, so the runtime below
    // must be a current-thread one built after it. Declared first so it is
    // dropped (and the namespace restored) after the runtime shuts down.
    let _netns = match &config.docker {
        Some(container) => Some(NetnsGuard::enter(container)?),
        None => None,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(app::run(&config))?;
    Ok(())
}
