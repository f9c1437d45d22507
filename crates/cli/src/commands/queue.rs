// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dscmd queue`: show the build queue of the Docserv² instance

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use dscmd_adapters::BuildService;
use dscmd_core::{render_summary, Endpoint, Operation, ServerConfig};

#[derive(Args, Debug)]
pub struct QueueArgs {
    /// Show full details of the queue
    #[arg(long)]
    pub full: bool,
}

pub async fn handle<S: BuildService>(
    args: QueueArgs,
    config: &ServerConfig,
    service: &S,
    out: &mut impl Write,
) -> Result<()> {
    let endpoint = Endpoint::from_config(config, Operation::Queue)?;
    let queue = service
        .fetch_queue(&endpoint)
        .await
        .context("failed to fetch queue")?;

    // Full mode stays valid JSON so it can be piped into jq
    if args.full {
        writeln!(out, "{}", serde_json::to_string_pretty(&queue)?)?;
        return Ok(());
    }

    writeln!(out, "Queue status of Docserv² instance:")?;
    for line in render_summary(&queue)? {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
