mod common;

use common::*;
use core_actions::{Editor, FileGateway, GatewayError, SessionOptions};
use core_state::Mode;
use pretty_assertions::assert_eq;
use std::io;
use std::path::Path;

fn open_editor(path: &Path) -> Editor<FileGateway> {
    let mut gw = FileGateway::open(path).unwrap();
    let (doc, bytes) = gw.read_document().unwrap();
    let mut ed = Editor::new(doc, gw, SessionOptions::default());
    ed.announce_file(path, bytes);
    ed
}

fn write_keys() -> Vec<Stroke> {
    let mut keys = typed(":w");
    keys.push(Stroke::Enter);
    keys
}

#[test]
fn write_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "alpha\nbeta\n\ngamma").unwrap();

    let mut ed = open_editor(&path);
    replay(&mut ed, &write_keys());
    let first = std::fs::read(&path).unwrap();
    assert_eq!(first, b"alpha\nbeta\n\ngamma\n".to_vec());
    drop(ed);

    let mut ed = open_editor(&path);
    replay(&mut ed, &write_keys());
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn open_message_reports_lines_and_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "ab\ncd\n").unwrap();
    let ed = open_editor(&path);
    assert_eq!(ed.render().status, format!("file \"{}\" 2L 6B", path.display()));
}

#[test]
fn empty_file_opens_as_single_empty_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();
    let mut ed = open_editor(&path);
    assert_eq!(document(&ed), vec![""]);
    replay(&mut ed, &write_keys());
    assert_eq!(std::fs::read(&path).unwrap(), b"\n".to_vec());
}

#[test]
fn edits_overwrite_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "a fairly long first line\nsecond\n").unwrap();
    let mut ed = open_editor(&path);
    let mut keys = vec![
        Stroke::Char('j'),
        Stroke::Char('i'),
        Stroke::Backspace,
        Stroke::Esc,
    ];
    keys.extend(write_keys());
    replay(&mut ed, &keys);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "a fairly long first linesecond\n"
    );
    assert_eq!(ed.model().state().status(), Some("31 bytes written to disc"));
}

#[test]
fn failed_write_keeps_session_and_document() {
    let mut ed = editor(&["keep me"]);
    ed.gateway_mut().fail_with = Some(io::ErrorKind::PermissionDenied);
    assert!(!replay(&mut ed, &write_keys()), "session stays open");
    assert_eq!(
        ed.model().state().status(),
        Some("write failed: simulated failure")
    );
    assert_eq!(document(&ed), vec!["keep me"]);
    assert_eq!(ed.model().state().mode, Mode::Normal);

    ed.gateway_mut().fail_with = None;
    replay(&mut ed, &write_keys());
    assert_eq!(ed.model().state().status(), Some("8 bytes written to disc"));
    assert_eq!(ed.gateway().writes, vec![b"keep me\n".to_vec()]);
}

#[test]
fn non_utf8_file_is_refused_and_left_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    let original = b"caf\xe9\n".to_vec();
    std::fs::write(&path, &original).unwrap();

    let mut gw = FileGateway::open(&path).unwrap();
    let err = gw.read_document().unwrap_err();
    assert!(matches!(err, GatewayError::Decode { .. }), "got {err}");
    drop(gw);
    assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test]
fn multibyte_text_survives_unedited_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utf8.txt");
    let original = "café\nnaïve ☕\n".as_bytes().to_vec();
    std::fs::write(&path, &original).unwrap();

    let mut ed = open_editor(&path);
    replay(&mut ed, &write_keys());
    assert_eq!(std::fs::read(&path).unwrap(), original);
    assert_eq!(
        ed.model().state().status(),
        Some(format!("{} bytes written to disc", original.len()).as_str())
    );
}
