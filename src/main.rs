//! gpuaudiogen CLI
//!
//! Generates CUDA and Metal buffer plumbing from a YAML buffer layout.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use gpuaudiogen::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("gpuaudiogen v{}", env!("CARGO_PKG_VERSION"));

    commands::run(&cli)
        .map_err(|e| {
            for line in commands::failure_report(&e) {
                error!("{}", line);
            }
            e
        })
        .context("code generation failed")?;

    Ok(())
}
