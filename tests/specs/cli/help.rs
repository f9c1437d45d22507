//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn dscmd_no_args_shows_usage_and_exits_zero() {
    cli()
        .passes()
        .stdout_has("Usage:")
        .stdout_has("queue")
        .stdout_has("trigger")
        .stdout_has("metadata");
}

#[test]
fn dscmd_version_shows_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(concat!("dscmd ", env!("CARGO_PKG_VERSION")));
}

#[test]
fn trigger_help_lists_selector_flags() {
    cli()
        .args(&["trigger", "--help"])
        .passes()
        .stdout_has("--targets")
        .stdout_has("--products")
        .stdout_has("--docsets")
        .stdout_has("--langs");
}

#[test]
fn metadata_help_shows_dry_run_flag() {
    cli()
        .args(&["meta", "--help"])
        .passes()
        .stdout_has("--debug");
}

#[test]
fn trigger_without_selectors_is_usage_error() {
    cli()
        .args(&["trigger", "-t", "internal"])
        .exits_with(2)
        .stderr_has("--products");
}
