// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dscmd - trigger documentation builds on a Docserv² instance

mod commands;
mod env;
mod exit_error;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use commands::{metadata, queue, trigger};
use dscmd_adapters::{HttpBuildService, TracedService};
use dscmd_core::ServerConfig;

#[derive(Parser)]
#[command(
    name = "dscmd",
    version,
    about = "Trigger the documentation server to generate the documentation for the given targets, products, docsets, and languages"
)]
struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Server configuration file (default: ~/.dscmd-server.conf)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check queue status of the Docserv² instance
    #[command(visible_alias = "q")]
    Queue(queue::QueueArgs),
    /// Send a build request for every target/product/docset/lang combination
    #[command(visible_alias = "t")]
    Trigger(trigger::TriggerArgs),
    /// Rebuild metadata for products on the given targets
    #[command(visible_aliases = ["meta", "m"])]
    Metadata(metadata::MetadataArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        let code = exit_error::exit_code(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No subcommand: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let _log = logging::init(cli.verbose);

    let config_path = env::config_path(cli.config.as_deref())?;
    let config = ServerConfig::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), keys = config.len(), "configuration loaded");

    let service = TracedService::new(HttpBuildService::new());
    let mut out = std::io::stdout();

    match command {
        Commands::Queue(args) => queue::handle(args, &config, &service, &mut out).await,
        Commands::Trigger(args) => trigger::handle(args, &config, &service, &mut out).await,
        Commands::Metadata(args) => metadata::handle(args, &config, &service, &mut out).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
