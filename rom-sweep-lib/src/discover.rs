//! System folder discovery.

use std::path::{Path, PathBuf};

use crate::error::SweepError;
use crate::gamelist::GAMELIST_FILE;

/// A candidate system folder inside the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    /// Folder name (e.g., "nes", "snes")
    pub name: String,
    /// Absolute path to the system folder
    pub path: PathBuf,
    /// Absolute path to the system's gamelist.xml
    pub gamelist: PathBuf,
}

/// Find system folders eligible for sweeping.
///
/// A candidate is any immediate subdirectory of `library_root` that contains
/// a gamelist.xml, excluding the quarantine directory itself. Results are
/// sorted by name so the selection list is stable.
pub fn find_systems(
    library_root: &Path,
    quarantine_root: &Path,
) -> Result<Vec<System>, SweepError> {
    if !library_root.is_dir() {
        return Err(SweepError::MissingLibraryRoot {
            path: library_root.to_path_buf(),
        });
    }

    let mut systems = Vec::new();
    for entry in std::fs::read_dir(library_root)?.flatten() {
        let path = entry.path();
        if !path.is_dir() || path == quarantine_root {
            continue;
        }
        let gamelist = path.join(GAMELIST_FILE);
        if !gamelist.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        systems.push(System {
            name,
            path,
            gamelist,
        });
    }

    systems.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(systems)
}

#[cfg(test)]
#[path = "tests/discover_tests.rs"]
mod tests;
