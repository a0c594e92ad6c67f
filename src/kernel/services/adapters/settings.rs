//! 补全配置的加载与落盘

use crate::kernel::services::ports::CompletionConfig;
use std::path::{Path, PathBuf};

/// Writes pretty-printed defaults to `path` unless a file is already there.
pub fn ensure_config_file(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&CompletionConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(path.to_path_buf())
}

/// Reads the config at `path`. A missing file yields defaults; a file that
/// cannot be read or parsed is logged and also yields defaults.
pub fn load_config(path: &Path) -> CompletionConfig {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no completion config, using defaults");
            return CompletionConfig::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "read completion config failed");
            return CompletionConfig::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "parse completion config failed");
            CompletionConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
