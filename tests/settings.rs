use screen_loupe::settings::{RenderMode, Settings, SettingsError};

fn temp_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("config.json").to_string_lossy().into_owned()
}

#[test]
fn missing_file_writes_defaults_and_uses_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.hotkey, "ctrl+shift+z");
    assert_eq!(settings.zoom_factor, 2);
    assert_eq!(settings.area_size, 120);

    // The default file now exists and round-trips.
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["hotkey"], "ctrl+shift+z");
    assert_eq!(written["zoom_factor"], 2);
    assert_eq!(written["area_size"], 120);
}

#[test]
fn partial_file_overrides_only_named_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);
    std::fs::write(&path, r#"{"zoom_factor": 4}"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.zoom_factor, 4);
    assert_eq!(settings.area_size, 120);
    assert_eq!(settings.hotkey, "ctrl+shift+z");
    assert_eq!(settings.render_mode, RenderMode::Floating);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);
    std::fs::write(&path, "not json at all").unwrap();

    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn zero_zoom_factor_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);
    std::fs::write(&path, r#"{"zoom_factor": 0}"#).unwrap();

    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::Invalid(_))
    ));
}

#[test]
fn zero_area_size_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);
    std::fs::write(&path, r#"{"area_size": 0}"#).unwrap();

    assert!(matches!(
        Settings::load(&path),
        Err(SettingsError::Invalid(_))
    ));
}

#[test]
fn render_mode_parses_from_lowercase() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);
    std::fs::write(&path, r#"{"render_mode": "panel"}"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.render_mode, RenderMode::Panel);
}
