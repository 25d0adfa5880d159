use std::path::{Path, PathBuf};

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "DIRCHOOSER_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/dirchooser regardless of OS,
/// unless `DIRCHOOSER_CONFIG_DIR` is set)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("dirchooser"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("dirchooser")
}

/// Expand a path string, handling ~ and relative paths
///
/// # Arguments
/// * `path_str` - Path string that may contain ~ or be relative
/// * `base` - Directory relative paths are resolved against
///
/// # Returns
/// Expanded PathBuf
pub fn expand_path(path_str: &str, base: &Path) -> PathBuf {
    if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else if path_str == "~" {
        get_home_dir()
    } else {
        let path = Path::new(path_str);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}

/// Format a path for display (show ~ for home)
pub fn format_path_for_display(path: &Path) -> String {
    format_relative_to(path, &get_home_dir())
}

fn format_relative_to(path: &Path, home_dir: &Path) -> String {
    // "/" as home would turn every path into "~/..."
    if home_dir.parent().is_none() {
        return path.to_string_lossy().to_string();
    }

    if let Ok(relative) = path.strip_prefix(home_dir) {
        if relative.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", relative.to_string_lossy())
        }
    } else {
        path.to_string_lossy().to_string()
    }
}
