// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dscmd trigger`: build documentation for every selector combination

use std::io::Write;

use anyhow::Result;
use clap::Args;
use dscmd_adapters::BuildService;
use dscmd_core::{ServerConfig, Submission};

use super::submit;

#[derive(Args, Debug)]
pub struct TriggerArgs {
    /// Target server names (comma, semicolon or space separated)
    #[arg(short, long)]
    pub targets: String,
    /// Products to process
    #[arg(short, long)]
    pub products: String,
    /// Docsets to process
    #[arg(short, long)]
    pub docsets: String,
    /// Languages to process
    #[arg(short, long)]
    pub langs: String,
}

pub async fn handle<S: BuildService>(
    args: TriggerArgs,
    config: &ServerConfig,
    service: &S,
    out: &mut impl Write,
) -> Result<()> {
    let selectors = submit::selectors(
        Some(args.targets.as_str()),
        Some(args.products.as_str()),
        Some(args.docsets.as_str()),
        Some(args.langs.as_str()),
    );
    let plan = submit::plan(config, &selectors, Submission::Trigger)?;
    submit::send(service, &plan, out).await
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
