//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rbl_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Plugin output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use rbl_check::initialization::{init_logger_with, init_resolver};
use rbl_check::{
    check_host, render_failure, render_json, render_status_line, Config, HickoryLookup, Status,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap exits with 2 on usage errors, which monitoring systems read as CRITICAL
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(Status::Unknown.exit_code());
        }
    };

    match run(&config).await {
        Ok(status) => process::exit(status.exit_code()),
        Err(e) => {
            println!("CHECK_RBL UNKNOWN - {e:#}");
            process::exit(Status::Unknown.exit_code());
        }
    }
}

async fn run(config: &Config) -> Result<Status> {
    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let resolver = init_resolver(Duration::from_secs(config.query_timeout));
    let service = Arc::new(HickoryLookup::new(resolver));

    match check_host(config, service).await {
        Ok(verdict) => {
            let output = if config.json {
                render_json(&verdict).context("Failed to serialize report")?
            } else {
                render_status_line(&verdict)
            };
            println!("{output}");
            Ok(verdict.status)
        }
        Err(e) => {
            log::error!("Check aborted: {e}");
            println!("{}", render_failure(&e, config.json));
            Ok(Status::Unknown)
        }
    }
}
