use std::path::Path;

use rom_babel_frontend::{EsDeFrontend, Frontend, GameEntry};

fn entries() -> Vec<GameEntry> {
    vec![
        GameEntry {
            rom_filename: "魂斗罗.nes".into(),
            name: "Contra".into(),
        },
        GameEntry {
            rom_filename: "最终幻想7.sfc".into(),
            name: "Final Fantasy VII".into(),
        },
    ]
}

#[test]
fn writes_gamelist_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gamelist.xml");

    EsDeFrontend::new().write_metadata(&entries(), &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("<path>./魂斗罗.nes</path>"));
    assert!(content.contains("<name>Contra</name>"));
    assert!(content.contains("<name>Final Fantasy VII</name>"));
}

#[test]
fn empty_list_writes_valid_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gamelist.xml");

    EsDeFrontend::new().write_metadata(&[], &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "<?xml version=\"1.0\"?>\n<gameList>\n</gameList>\n");
}

#[test]
fn repeated_writes_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.xml");
    let second = dir.path().join("second.xml");

    let frontend = EsDeFrontend::new();
    frontend.write_metadata(&entries(), &first).unwrap();
    frontend.write_metadata(&entries(), &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested").join("out").join("gamelist.xml");

    EsDeFrontend::new().write_metadata(&entries(), &output).unwrap();
    assert!(Path::new(&output).is_file());
}
