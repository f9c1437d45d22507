// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path for commands that send a job matrix (trigger, metadata).

use std::io::Write;

use anyhow::{Context, Result};
use dscmd_adapters::BuildService;
use dscmd_core::{parse_selector, Endpoint, JobMatrix, Selectors, ServerConfig, Submission};

/// A validated request, ready to send or preview.
#[derive(Debug)]
pub struct Plan {
    pub submission: Submission,
    pub endpoint: Endpoint,
    pub jobs: JobMatrix,
}

/// Parse the raw selector flags.
pub fn selectors(
    targets: Option<&str>,
    products: Option<&str>,
    docsets: Option<&str>,
    langs: Option<&str>,
) -> Selectors {
    Selectors {
        targets: parse_selector(targets),
        products: parse_selector(products),
        docsets: parse_selector(docsets),
        langs: parse_selector(langs),
    }
}

/// Validate `selectors` and resolve the destination.
///
/// Nothing is sent; a validation failure leaves no partial dispatch.
pub fn plan(
    config: &ServerConfig,
    selectors: &Selectors,
    submission: Submission,
) -> Result<Plan> {
    let valid_targets = match submission {
        Submission::Trigger => config.valid_targets()?,
        Submission::Metadata => config.get(ServerConfig::VALID_TARGETS).unwrap_or_default(),
    };
    let jobs = JobMatrix::build(selectors, valid_targets, submission)?;
    let endpoint = Endpoint::from_config(config, submission.into())?;
    tracing::debug!(%submission, jobs = jobs.len(), url = %endpoint, "planned request");
    Ok(Plan {
        submission,
        endpoint,
        jobs,
    })
}

/// Send the plan as one request.
pub async fn send<S: BuildService>(service: &S, plan: &Plan, out: &mut impl Write) -> Result<()> {
    tracing::info!(
        "Sending payload {} to server {}...",
        plan.jobs.to_json()?,
        plan.endpoint
    );
    service
        .submit(&plan.endpoint, &plan.jobs)
        .await
        .with_context(|| format!("failed to send {} request", plan.submission))?;
    writeln!(out, "Data sent successfully.")?;
    Ok(())
}

/// Print what `send` would do without contacting the server.
///
/// Languages are shown as sent, so an omitted `--langs` prints the default.
pub fn preview(plan: &Plan, selectors: &Selectors, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Dry run, nothing sent to {}", plan.endpoint)?;
    writeln!(out, "targets:  {}", selectors.targets.join(" "))?;
    writeln!(out, "products: {}", selectors.products.join(" "))?;
    writeln!(out, "docsets:  {}", selectors.docsets.join(" "))?;
    writeln!(out, "langs:    {}", selectors.langs_or_default().join(" "))?;
    writeln!(out, "payload:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&plan.jobs)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
