//! CLI error handling specs
//!
//! Verify error messages and exit codes for configuration and validation
//! failures. None of these reach the network.

use crate::prelude::*;

#[test]
fn missing_config_file_exits_1() {
    let ws = Workspace::without_config();
    ws.dscmd()
        .args(&["queue"])
        .exits_with(1)
        .stderr_has("configuration file not found");
}

#[test]
fn config_without_server_exits_1() {
    let ws = Workspace::with_config("port=8080\n");
    ws.dscmd()
        .args(&["queue"])
        .exits_with(1)
        .stderr_has("configuration key 'server' is not set");
}

#[test]
fn config_flag_overrides_default_location() {
    let ws = Workspace::without_config();
    let other = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["metadata", "-t", "internal", "--debug", "--config"])
        .args(&[other.config_path().to_str().unwrap()])
        .passes()
        .stdout_has("Dry run");
}

#[test]
fn trigger_invalid_target_exits_20() {
    let ws = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["trigger", "-t", "staging", "-p", "sles", "-d", "15-SP6", "-l", "en-us"])
        .exits_with(20)
        .stderr_has("invalid target 'staging'");
}

#[test]
fn trigger_with_only_separators_exits_2_without_sending() {
    // Nothing listens on this port; a request would exit 1 instead
    let ws = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["trigger", "-t", ",", "-p", "sles", "-d", "15-SP6", "-l", "en-us"])
        .exits_with(2)
        .stderr_has("no targets given");
}

#[test]
fn metadata_without_targets_exits_100() {
    let ws = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["metadata", "-p", "sles"])
        .exits_with(100)
        .stderr_has("at least one target");
}

#[test]
fn metadata_docsets_without_product_exits_100() {
    let ws = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["m", "-t", "internal", "-d", "15-SP6"])
        .exits_with(100)
        .stderr_has("docsets require at least one product");
}

#[test]
fn unreachable_server_exits_1() {
    let ws = Workspace::with_port(closed_port());
    ws.dscmd()
        .args(&["trigger", "-t", "internal", "-p", "sles", "-d", "15-SP6", "-l", "en-us"])
        .exits_with(1)
        .stderr_has("Error:");
}
