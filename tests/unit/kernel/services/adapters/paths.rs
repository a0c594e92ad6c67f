use super::*;

#[test]
fn test_get_log_dir() {
    let Some(dir) = get_log_dir() else {
        return;
    };
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(LOG_DIR));
}

#[test]
fn test_get_config_path() {
    let Some(path) = get_config_path() else {
        return;
    };
    assert!(path.to_string_lossy().contains(APP_NAME));
    assert!(path.ends_with(CONFIG_FILE));
}
