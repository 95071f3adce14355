//! Where the viewer keeps its config file and logs.
//!
//! A `cargo run` or debug build keeps everything in the working directory so
//! `config.json` sits next to `Cargo.toml`. Installed builds use the platform
//! directories from `dirs`, each with a `huntmap` subfolder:
//! - config: `~/.config/huntmap/` on Linux, the data directory elsewhere
//! - data (logs): `~/.local/share/huntmap/`, `%APPDATA%\huntmap\`,
//!   `~/Library/Application Support/huntmap/`

use std::path::{Path, PathBuf};

/// Subfolder name under the platform directories
const APP_DIR_NAME: &str = "huntmap";

/// Log file written by debug builds
pub const LOG_FILE_NAME: &str = "huntmap.log";

/// True under `cargo run` (which sets `CARGO`) or in any debug build
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// `base/huntmap`, or the working directory in dev mode
fn app_dir(base: Option<PathBuf>) -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    base.map(|p| p.join(APP_DIR_NAME))
}

pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        app_dir(dirs::config_dir())
    } else {
        data_dir()
    }
}

pub fn data_dir() -> Option<PathBuf> {
    app_dir(dirs::data_dir())
}

pub fn config_file() -> PathBuf {
    config_dir().unwrap_or_default().join("config.json")
}

pub fn logs_dir() -> PathBuf {
    data_dir().unwrap_or_default().join("logs")
}

/// Resolve a path named in the config file.
///
/// Absolute paths are returned unchanged; relative ones are taken from the
/// config directory so a catalogue can sit next to `config.json`.
pub fn resolve_config_relative(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    config_dir()
        .map(|dir| dir.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Create the config and log directories of an installed build
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_mode_uses_working_directory() {
        // Tests build with debug assertions
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(config_file(), PathBuf::from("./config.json"));
    }

    #[test]
    fn test_resolve_relative_uses_config_dir() {
        let resolved = resolve_config_relative(Path::new("workbenches.json"));
        assert_eq!(resolved, PathBuf::from("./workbenches.json"));
    }

    #[test]
    fn test_resolve_absolute_is_unchanged() {
        let absolute = std::env::temp_dir().join("catalogue.json");
        assert_eq!(resolve_config_relative(&absolute), absolute);
    }
}
