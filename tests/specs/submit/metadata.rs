//! Metadata rebuild specs

use crate::prelude::*;

#[test]
fn metadata_posts_to_metadata_path_with_default_lang() {
    let server = OneShotServer::respond(200, "");
    let ws = Workspace::with_port(server.port());

    ws.dscmd()
        .args(&["metadata", "-t", "internal"])
        .passes()
        .stdout_eq("Data sent successfully.\n");

    let request = server.request();
    assert!(request.starts_with("POST /metadata HTTP/1.1\r\n"), "got: {request}");
    let body: serde_json::Value = serde_json::from_str(request_body(&request)).unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"target": "internal", "product": null, "docset": null, "lang": "en-us"}
        ])
    );
}

#[test]
fn metadata_dry_run_never_contacts_server() {
    // Nothing listens on this port; any request would fail the run
    let ws = Workspace::with_port(closed_port());

    ws.dscmd()
        .args(&["meta", "-t", "internal", "-p", "sles", "--debug"])
        .passes()
        .stdout_has("Dry run, nothing sent to http://127.0.0.1:")
        .stdout_has("targets:  internal")
        .stdout_has("products: sles")
        .stdout_has("langs:    en-us")
        .stdout_has("\"lang\": \"en-us\"");
}
