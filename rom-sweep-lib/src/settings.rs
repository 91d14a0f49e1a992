//! Sweep settings (library root, quarantine root, config file location).
//!
//! Paths resolve once at startup; nothing re-reads the settings file during
//! the sweep.

use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/rom-sweep/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-sweep").join("settings.toml")
}

/// Resolve the library root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.root` in `settings.toml`
/// 3. `~/RetroPie/roms`
pub fn resolve_library_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_library_setting("root") {
        return p;
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("RetroPie")
        .join("roms")
}

/// Resolve the quarantine root: CLI override, then `library.quarantine` in
/// `settings.toml`, then `<library_root>/unscraped`.
pub fn resolve_quarantine_root(cli_override: Option<PathBuf>, library_root: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_library_setting("quarantine") {
        return p;
    }
    library_root.join("unscraped")
}

/// Read a path-valued key from the `[library]` table, if set.
fn load_library_setting(key: &str) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get("library")?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
