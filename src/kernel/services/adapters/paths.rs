//! 应用目录管理
//!
//! 跨平台的数据目录：
//! - macOS: ~/Library/Application Support/zcomplete
//! - Linux: ~/.local/share/zcomplete
//! - Windows: %APPDATA%\zcomplete

use std::path::PathBuf;

const APP_NAME: &str = "zcomplete";
const LOG_DIR: &str = "logs";
const CONFIG_FILE: &str = "completion.json";

/// 获取应用数据目录
fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        dirs_path_linux()
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn dirs_path_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn dirs_path_linux() -> Option<PathBuf> {
    // 优先使用 XDG_DATA_HOME，否则使用 ~/.local/share
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn dirs_path_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// 默认配置文件路径
pub fn get_config_path() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(CONFIG_FILE))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
