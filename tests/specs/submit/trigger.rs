//! Trigger specs
//!
//! Verify the job matrix reaches the server as one request and that the
//! server's answer decides the exit code.

use crate::prelude::*;

#[test]
fn trigger_posts_full_matrix_once() {
    let server = OneShotServer::respond(200, "");
    let ws = Workspace::with_port(server.port());

    ws.dscmd()
        .args(&[
            "trigger", "-t", "internal,external", "-p", "sles", "-d", "15-SP6", "-l",
            "en-us;de-de",
        ])
        .passes()
        .stdout_eq("Data sent successfully.\n");

    let request = server.request();
    assert!(request.starts_with("POST / HTTP/1.1\r\n"), "got: {request}");
    let body: serde_json::Value = serde_json::from_str(request_body(&request)).unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"target": "internal", "product": "sles", "docset": "15-SP6", "lang": "en-us"},
            {"target": "internal", "product": "sles", "docset": "15-SP6", "lang": "de-de"},
            {"target": "external", "product": "sles", "docset": "15-SP6", "lang": "en-us"},
            {"target": "external", "product": "sles", "docset": "15-SP6", "lang": "de-de"}
        ])
    );
}

#[test]
fn trigger_server_error_exits_with_status() {
    let server = OneShotServer::respond(500, "build queue unavailable");
    let ws = Workspace::with_port(server.port());

    ws.dscmd()
        .args(&["t", "-t", "internal", "-p", "sles", "-d", "15-SP6", "-l", "en-us"])
        .exits_with(500)
        .stderr_has("500")
        .stderr_has("build queue unavailable");

    server.request();
}

#[test]
fn trigger_logs_payload_at_info() {
    let server = OneShotServer::respond(200, "");
    let ws = Workspace::with_port(server.port());

    let run = ws
        .dscmd()
        .args(&["-vv", "trigger", "-t", "internal", "-p", "sles", "-d", "15-SP6", "-l", "en-us"])
        .passes()
        .stderr_has("Sending payload");
    assert_eq!(run.stderr().to_ascii_lowercase().matches("sending payload").count(), 1);

    server.request();
}
