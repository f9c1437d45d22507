// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dscmd metadata`: rebuild product metadata on one or more targets

use std::io::Write;

use anyhow::Result;
use clap::Args;
use dscmd_adapters::BuildService;
use dscmd_core::{ServerConfig, Submission};

use super::submit;

#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Target server names (comma, semicolon or space separated)
    #[arg(short, long)]
    pub targets: Option<String>,
    /// Products to rebuild (all products if omitted)
    #[arg(short, long)]
    pub products: Option<String>,
    /// Docsets to rebuild (requires --products)
    #[arg(short, long)]
    pub docsets: Option<String>,
    /// Languages to rebuild (defaults to en-us)
    #[arg(short, long)]
    pub langs: Option<String>,
    /// Print the request instead of sending it
    #[arg(long)]
    pub debug: bool,
}

pub async fn handle<S: BuildService>(
    args: MetadataArgs,
    config: &ServerConfig,
    service: &S,
    out: &mut impl Write,
) -> Result<()> {
    let selectors = submit::selectors(
        args.targets.as_deref(),
        args.products.as_deref(),
        args.docsets.as_deref(),
        args.langs.as_deref(),
    );
    let plan = submit::plan(config, &selectors, Submission::Metadata)?;
    if args.debug {
        return submit::preview(&plan, &selectors, out);
    }
    submit::send(service, &plan, out).await
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
