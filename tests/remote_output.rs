//! Tests for the remote destination: the capturing client and the bundled
//! JSONL-backed reference client.

use fanlog::{JsonlClient, Log, Logger, MemoryClient, RemoteClient, Severity};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn remote_payload_carries_no_tag_or_timestamp() {
    let client = Arc::new(MemoryClient::new());
    let log = Log::builder().remote(client.clone()).build();

    log.alertf(format_args!("queue depth {}", 10_000));

    let entries = client.entries();
    assert_eq!(entries, vec![(Severity::Alert, "queue depth 10000".to_string())]);
    assert!(!entries[0].1.contains('['));
    assert!(!entries[0].1.contains('/'));
}

#[test]
fn client_outlives_the_logger() {
    let client = Arc::new(MemoryClient::new());

    {
        let log = Log::builder().remote(client.clone()).build();
        log.notice(&[&"from the logger"]);
    }

    // The logger shares the handle; dropping it must not close the client.
    client.log(Severity::Info, "direct");
    assert_eq!(client.len(), 2);
}

#[test]
fn memory_client_starts_empty() {
    let client = MemoryClient::new();
    assert!(client.is_empty());
    assert_eq!(client.entries(), Vec::new());
}

#[test]
fn jsonl_client_appends_one_parseable_object_per_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("remote.jsonl");
    let client = JsonlClient::new(&path);

    client.log(Severity::Error, "boom");
    client.log(Severity::Info, "recovered");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["severity"], "error");
    assert_eq!(first["payload"], "boom");
    // ULIDs are 26 characters of Crockford base32.
    assert_eq!(first["id"].as_str().unwrap().len(), 26);
    assert!(!first["ts"].as_str().unwrap().is_empty());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["severity"], "info");
    assert_eq!(client.write_failures(), 0);
}

#[test]
fn jsonl_client_creates_parent_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("dirs").join("remote.jsonl");
    let client = JsonlClient::new(&path);

    client.log(Severity::Warn, "made it");

    assert!(path.exists());
}

#[test]
fn jsonl_client_swallows_and_counts_failures() {
    let tmp_dir = TempDir::new().unwrap();
    // A regular file where a parent directory would have to be created.
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, b"").unwrap();
    let client = JsonlClient::new(blocker.join("remote.jsonl"));

    client.log(Severity::Emergency, "nowhere to go");

    assert_eq!(client.write_failures(), 1);
}

#[test]
fn jsonl_client_works_behind_the_facade() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("remote.jsonl");

    let log = Log::builder()
        .remote(Arc::new(JsonlClient::new(&path)))
        .build();
    log.info(&[&"via ", &"dispatch"]);

    let content = fs::read_to_string(&path).unwrap();
    let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(entry["payload"], "via dispatch");
}
