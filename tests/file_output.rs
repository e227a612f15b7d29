//! Tests for the buffered file sink: append/flush discipline, the
//! full-replacement write, and concurrent appends.

use fanlog::{FileSink, Message, Severity};
use regex::Regex;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn append_buffers_without_touching_the_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = FileSink::new(&path);

    sink.append(Severity::Info, &Message::Joined(&[&"one"]));

    assert!(sink.buffered_len() > 0);
    assert!(!path.exists());
}

#[test]
fn flush_writes_the_line_shape_and_empties_the_buffer() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = FileSink::new(&path);

    sink.append(
        Severity::Warn,
        &Message::Formatted(format_args!("disk at {}%", 91)),
    );
    sink.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let shape =
        Regex::new(r"^\[WARN\] \d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}\.\d{1,3}: disk at 91%\n$")
            .unwrap();
    assert!(shape.is_match(&content), "unexpected line: {content:?}");
    assert_eq!(sink.buffered_len(), 0);
}

#[test]
fn flush_replaces_file_contents_instead_of_appending() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = FileSink::new(&path);

    sink.append(Severity::Info, &Message::Joined(&[&"first cycle"]));
    sink.flush().unwrap();
    sink.append(Severity::Info, &Message::Joined(&[&"second cycle"]));
    sink.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("second cycle"));
    assert!(!content.contains("first cycle"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn flush_of_empty_buffer_creates_no_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = FileSink::new(&path);

    sink.flush().unwrap();

    assert!(!path.exists());
    assert_eq!(sink.flush_failures(), 0);
}

#[test]
fn flush_without_a_path_discards_buffered_lines() {
    let sink = FileSink::new("");

    sink.append(Severity::Error, &Message::Joined(&[&"lost"]));
    assert!(sink.buffered_len() > 0);

    sink.flush().unwrap();

    assert_eq!(sink.buffered_len(), 0);
    assert_eq!(sink.flush_failures(), 0);
}

#[test]
fn failed_flush_counts_and_still_clears_the_buffer() {
    let tmp_dir = TempDir::new().unwrap();
    // Parent directory does not exist, so the write must fail.
    let path = tmp_dir.path().join("missing").join("app.log");
    let sink = FileSink::new(&path);

    sink.append(Severity::Info, &Message::Joined(&[&"doomed"]));

    assert!(sink.flush().is_err());
    assert_eq!(sink.flush_failures(), 1);
    assert_eq!(sink.buffered_len(), 0);
    assert!(!path.exists());
}

#[test]
fn concurrent_appends_never_interleave_within_lines() {
    const THREADS: usize = 8;
    const LINES_PER_THREAD: usize = 50;

    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let sink = Arc::new(FileSink::new(&path));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    sink.append(
                        Severity::Info,
                        &Message::Formatted(format_args!("writer {t} line {i}")),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    sink.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let shape = Regex::new(
        r"^\[INFO\] \d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}\.\d{1,3}: writer \d+ line \d+$",
    )
    .unwrap();

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in lines {
        assert!(shape.is_match(line), "corrupted line: {line:?}");
    }
}

#[test]
fn tilde_paths_are_expanded() {
    let sink = FileSink::new("~/fanlog-test.log");
    // Expansion happens at construction; nothing is written here. The
    // buffer still accepts appends against the expanded path.
    sink.append(Severity::Trace, &Message::Joined(&[&"x"]));
    assert!(sink.buffered_len() > 0);
}
