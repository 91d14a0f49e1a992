//! Classification of system folder contents into scraped and unscraped files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::discover::System;
use crate::error::SweepError;
use crate::gamelist::{self, GAMELIST_FILE};

/// A planned relocation of one unscraped file into the quarantine tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOperation {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Result of classifying one system folder.
///
/// Recomputing a classification without moving files in between yields the
/// same value; nothing here depends on directory iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// System folder name
    pub system: String,
    /// Direct files in the system folder, not counting gamelist.xml
    pub total_files: usize,
    /// Number of entries declared in the gamelist
    pub declared_entries: usize,
    /// Files with no gamelist entry, sorted by path
    pub unreferenced: Vec<PathBuf>,
}

/// Partition the direct files of a system folder using a two-pass scan.
///
/// Pass one builds the referenced set: a file is referenced when its absolute
/// path is declared in the gamelist, or when it is a `.bin` whose sibling
/// `.cue` with the same stem is declared (scrapers list the cue sheet for
/// disc games; the data track rides along). Pass two takes everything else.
pub fn classify_system(system: &System) -> Result<Classification, SweepError> {
    let declared = gamelist::declared_paths(&system.gamelist, &system.path)?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(&system.path)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.file_name().and_then(|n| n.to_str()) != Some(GAMELIST_FILE))
        .collect();
    files.sort();

    let unreferenced: Vec<PathBuf> = files
        .iter()
        .filter(|path| !is_referenced(path, &declared))
        .cloned()
        .collect();

    Ok(Classification {
        system: system.name.clone(),
        total_files: files.len(),
        declared_entries: declared.len(),
        unreferenced,
    })
}

/// Build move operations for every unscraped file of a classification.
///
/// Ensures the per-system quarantine subfolder exists (idempotent) so the
/// destination paths are valid by the time the user confirms.
pub fn plan_moves(
    classification: &Classification,
    quarantine_root: &Path,
) -> Result<Vec<MoveOperation>, SweepError> {
    let system_quarantine = quarantine_root.join(&classification.system);
    std::fs::create_dir_all(&system_quarantine)?;

    Ok(classification
        .unreferenced
        .iter()
        .map(|source| {
            let file_name = source.file_name().unwrap_or_default();
            MoveOperation {
                source: source.clone(),
                dest: system_quarantine.join(file_name),
            }
        })
        .collect())
}

/// True if the file is declared directly or covered by a declared cue sheet.
fn is_referenced(path: &Path, declared: &HashSet<PathBuf>) -> bool {
    if declared.contains(path) {
        return true;
    }
    is_bin_with_declared_cue(path, declared)
}

fn is_bin_with_declared_cue(path: &Path, declared: &HashSet<PathBuf>) -> bool {
    let is_bin = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("bin"))
        .unwrap_or(false);
    is_bin && declared.contains(&path.with_extension("cue"))
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
