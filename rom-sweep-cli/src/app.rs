//! Sweep flow orchestration: discovery, selection, classification, action.

use std::path::Path;

use rom_sweep_lib::classify::{self, MoveOperation};
use rom_sweep_lib::{SweepError, discover, mover, report};

use crate::prompt::{Confirmation, Selection, UserPrompt};

/// Run the full sweep flow and return the process exit code.
///
/// Exit codes: 0 on success or benign no-op; 1 on a missing library root or
/// a cancel at the selection step. Cancelling at the confirmation step exits
/// 0 with no files moved.
pub fn run(prompt: &mut dyn UserPrompt, library_root: &Path, quarantine_root: &Path) -> i32 {
    let systems = match discover::find_systems(library_root, quarantine_root) {
        Ok(systems) => systems,
        Err(e @ SweepError::MissingLibraryRoot { .. }) => {
            prompt.message(&e.to_string());
            return 1;
        }
        Err(e) => {
            prompt.message(&format!("Failed to scan {}: {}", library_root.display(), e));
            return 1;
        }
    };

    prompt.notify(&format!(
        "Searching for unscraped roms in {}...",
        library_root.display()
    ));

    let names: Vec<String> = systems.iter().map(|s| s.name.clone()).collect();
    let selected = match prompt.choose_systems(&names) {
        Selection::Chosen(indices) => indices,
        Selection::Cancelled => return 1,
    };

    prompt.notify("Searching for unscraped roms of selected systems...");

    let mut all_moves: Vec<MoveOperation> = Vec::new();
    let mut classifications = Vec::new();
    for index in selected {
        let system = &systems[index];
        let classification = match classify::classify_system(system) {
            Ok(c) => c,
            Err(e) => {
                prompt.message(&format!("Failed to scan '{}': {}", system.name, e));
                return 1;
            }
        };
        match classify::plan_moves(&classification, quarantine_root) {
            Ok(moves) => all_moves.extend(moves),
            Err(e) => {
                prompt.message(&format!(
                    "Failed to prepare quarantine for '{}': {}",
                    system.name, e
                ));
                return 1;
            }
        }
        classifications.push(classification);
    }

    if all_moves.is_empty() {
        prompt.message(&format!(
            "Did not find any unscraped roms across {} systems in {}!",
            classifications.len(),
            library_root.display()
        ));
        return 0;
    }

    let report = report::compose(&classifications);
    if prompt.confirm_moves(&report) == Confirmation::Cancelled {
        return 0;
    }

    prompt.notify("Moving unscraped roms...");
    let outcome = mover::execute_moves(&all_moves);

    if outcome.failed.is_empty() {
        prompt.message(&format!(
            "Moved {} unscraped roms to {}!",
            outcome.moved,
            quarantine_root.display()
        ));
    } else {
        prompt.message(&format!(
            "Moved {} unscraped roms to {}; {} could not be moved (see log)",
            outcome.moved,
            quarantine_root.display(),
            outcome.failed.len()
        ));
    }
    0
}
