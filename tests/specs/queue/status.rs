//! Queue status specs

use crate::prelude::*;

const QUEUE: &str = r#"[
  {"id": "a1b2c3d4e", "product": "sles", "docset": "15-SP6", "lang": "en-us", "open": true, "building": false},
  {"id": "0123456789a", "product": "suma", "docset": "5.0", "lang": "de-de", "open": false, "building": true}
]"#;

#[test]
fn queue_summary_prints_one_value_per_line() {
    let server = OneShotServer::respond(200, QUEUE);
    let ws = Workspace::with_port(server.port());

    ws.dscmd().args(&["queue"]).passes().stdout_eq(
        "Queue status of Docserv² instance:
---
sles
15-SP6
en-us
true
false
0123456789a
suma
5.0
de-de
false
true
",
    );

    let request = server.request();
    assert!(request.starts_with("GET / HTTP/1.1\r\n"), "got: {request}");
}

#[test]
fn queue_full_prints_json_without_obfuscation() {
    let server = OneShotServer::respond(200, QUEUE);
    let ws = Workspace::with_port(server.port());

    let run = ws.dscmd().args(&["q", "--full"]).passes();
    let stdout = run.stdout();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::from_str::<serde_json::Value>(QUEUE).unwrap());
    assert!(stdout.contains("a1b2c3d4e"));

    server.request();
}

#[test]
fn queue_fetch_failure_exits_with_status() {
    let server = OneShotServer::respond(404, "not found");
    let ws = Workspace::with_port(server.port());

    ws.dscmd()
        .args(&["queue"])
        .exits_with(404)
        .stderr_has("failed to fetch queue");

    server.request();
}
