use super::*;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_config(&dir.path().join("absent.json"));
    assert_eq!(config, CompletionConfig::default());
}

#[test]
fn test_ensure_then_load_round_trips_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("completion.json");

    let written = ensure_config_file(&path).expect("ensure");
    assert_eq!(written, path);
    assert!(path.exists());
    assert_eq!(load_config(&path), CompletionConfig::default());
}

#[test]
fn test_ensure_keeps_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("completion.json");
    std::fs::write(&path, r#"{"ellipsis_marker": "…"}"#).expect("write");

    ensure_config_file(&path).expect("ensure");

    let config = load_config(&path);
    assert_eq!(config.ellipsis_marker, "…");
    assert_eq!(config.max_subword_scan, 200);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("completion.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert_eq!(load_config(&path), CompletionConfig::default());
}
