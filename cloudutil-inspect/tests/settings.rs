use std::io::Write;

use cloudutil_inspect::settings::{MAX_SETTINGS_BYTES, SavedSettings, SettingsError};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("settings.json");

    let settings = SavedSettings {
        order: Some("last,first".to_owned()),
    };
    settings.save_to(&path).expect("save settings");

    let loaded = SavedSettings::load_from(&path).expect("load settings");
    assert_eq!(loaded, settings);

    // No leftover staging file after the rename.
    assert!(!path.with_extension("json.new").exists());
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("settings.json");

    SavedSettings {
        order: Some("first,last".to_owned()),
    }
    .save_to(&path)
    .expect("first save");
    SavedSettings {
        order: Some("last,first".to_owned()),
    }
    .save_to(&path)
    .expect("second save");

    let loaded = SavedSettings::load_from(&path).expect("load settings");
    assert_eq!(loaded.order.as_deref(), Some("last,first"));
}

#[test]
fn load_refuses_oversized_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("settings.json");

    let mut file = std::fs::File::create(&path).expect("create settings.json");
    file.write_all(&vec![b'a'; (MAX_SETTINGS_BYTES as usize) + 1024])
        .expect("write oversized settings.json");
    drop(file);

    let err = SavedSettings::load_from(&path).expect_err("oversized file should error");
    assert!(matches!(err, SettingsError::Oversized { .. }), "got: {err}");
}

#[test]
fn missing_fields_default() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{}").expect("write empty object");

    let settings = SavedSettings::load_from(&path).expect("empty object parses");
    assert_eq!(settings, SavedSettings::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("does-not-exist.json");
    let err = SavedSettings::load_from(&path).expect_err("missing file should error");
    assert!(matches!(err, SettingsError::Io(_)), "got: {err}");
}
