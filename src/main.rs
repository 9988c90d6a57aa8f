//! Layerpaint CLI
//!
//! Command-line driver for scripted layerpaint sessions.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::commands;
use layerpaint::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Layers => commands::list_layers()?,
        Commands::Run {
            style,
            width,
            height,
            config,
            probe,
            timestamp,
            replay,
            ops,
        } => {
            let config =
                commands::resolve_config(config.as_deref(), style.as_deref(), width, height)
                    .context("Failed to build canvas configuration")?;
            let probe = probe.as_deref().map(commands::parse_probe).transpose()?;
            commands::run_script(&config, &ops, probe, timestamp, replay)?;
        }
    }
    Ok(())
}
