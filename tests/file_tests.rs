use inifile::{from_path, Error, IniFile, IniOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.ini");

    let file = IniFile::load(&path, IniOptions::default()).unwrap();
    assert!(file.is_empty());
    assert_eq!(file.path(), Some(path.as_path()));
    assert!(from_path(&path).unwrap().is_empty());
}

#[test]
fn test_directory_loads_empty() {
    let dir = TempDir::new().unwrap();
    let file = IniFile::load(dir.path(), IniOptions::default()).unwrap();
    assert!(file.is_empty());
}

#[test]
fn test_load_modify_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, "; app config\n[window]\nwidth = 640 ; px\n").unwrap();

    let mut file = IniFile::load(&path, IniOptions::default()).unwrap();
    assert_eq!(file.leading_comments("window"), ["app config"]);
    assert_eq!(file.parameter_comment("window", "width"), Some("px"));

    file.section_mut("window").unwrap().insert("width", "800").unwrap();
    file.section_mut("window").unwrap().insert("height", "600").unwrap();
    file.write().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[window]\nwidth = 800\nheight = 600\n\n"
    );
}

#[test]
fn test_write_to_rebinds_path() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.ini");
    let second = dir.path().join("second.ini");

    let mut file = IniFile::load(&first, IniOptions::default()).unwrap();
    file.section_mut("s").unwrap().insert("k", "1").unwrap();
    file.write_to(&second).unwrap();
    assert_eq!(file.path(), Some(second.as_path()));

    file.section_mut("s").unwrap().insert("k", "2").unwrap();
    file.write().unwrap();

    assert!(!first.exists());
    assert_eq!(fs::read_to_string(&second).unwrap(), "[s]\nk = 2\n\n");
}

#[test]
fn test_restore_discards_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("restore.ini");
    fs::write(&path, "[s]\nk = original\n").unwrap();

    let mut file = IniFile::load(&path, IniOptions::default()).unwrap();
    file.section_mut("s").unwrap().insert("k", "changed").unwrap();
    file.section_mut("extra").unwrap();
    file.restore().unwrap();

    assert_eq!(file.section("s").and_then(|s| s.get("k")), Some("original"));
    assert!(!file.has_section("extra"));
}

#[test]
fn test_restore_keeps_frozen_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("frozen.ini");
    fs::write(&path, "[s]\nk = original\n").unwrap();

    let mut file = IniFile::load(&path, IniOptions::default()).unwrap();
    file.freeze();
    fs::write(&path, "[s]\nk = edited on disk\n").unwrap();

    assert_eq!(file.restore(), Err(Error::Frozen));
    assert!(file.is_frozen());
    assert_eq!(file.section("s").and_then(|s| s.get("k")), Some("original"));
    assert_eq!(
        file.section_mut("s").unwrap().insert("k", "changed"),
        Err(Error::Frozen)
    );
}

#[test]
fn test_load_rejects_empty_delimiters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.ini");

    let err = IniFile::load(&path, IniOptions::new().with_separator("")).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn test_options_are_used_for_read_and_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colon.ini");
    fs::write(&path, "# hash comment\n[s]\nk: v\n").unwrap();

    let options = IniOptions::hash_comments().with_separator(":");
    let file = IniFile::load(&path, options).unwrap();
    assert_eq!(file.leading_comments("s"), ["hash comment"]);

    file.write().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[s]\nk : v\n\n");
}

#[test]
fn test_parse_error_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.ini");
    fs::write(&path, "[s]\nk = v\n???\n").unwrap();

    let err = IniFile::load(&path, IniOptions::default()).unwrap_err();
    assert_eq!(err, Error::unrecognized_line(3, "???"));
}

#[test]
fn test_document_without_path_cannot_write() {
    let file = IniFile::from_document(Default::default(), IniOptions::default());
    assert_eq!(file.write(), Err(Error::MissingPath));
}
