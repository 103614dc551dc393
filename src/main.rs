//! logscope - query tab-delimited log directories from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use logscope::app::{Application, Outcome};
use logscope::cli::Cli;
use logscope::config::QueryConfig;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config =
        QueryConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.dir {
        config.log_dir = dir;
    }
    if let Some(glob) = cli.glob {
        config.file_glob = glob;
    }
    log::debug!("effective configuration: {config:?}");

    let app = Application::new(&config);
    let outcome = app.execute(cli.command)?;

    if let Outcome::NotFound(log_id) = &outcome {
        eprintln!("Log entry not found: {log_id}");
        return Ok(ExitCode::FAILURE);
    }

    let rendered = if cli.compact {
        serde_json::to_string(&outcome)
    } else {
        serde_json::to_string_pretty(&outcome)
    }
    .context("Failed to render output")?;
    println!("{rendered}");

    Ok(ExitCode::SUCCESS)
}
