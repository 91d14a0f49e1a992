//! Execution of planned quarantine moves.

use std::io;
use std::path::{Path, PathBuf};

use crate::classify::MoveOperation;

/// Result of executing a batch of move operations.
#[derive(Debug, Default)]
pub struct MoveOutcome {
    /// Files successfully relocated
    pub moved: usize,
    /// Files that could not be moved, with the underlying error
    pub failed: Vec<(PathBuf, io::Error)>,
}

/// Execute every move in list order.
///
/// Moves are independent; a failure is logged and recorded in the outcome and
/// the batch continues. There is no rollback of earlier moves.
pub fn execute_moves(moves: &[MoveOperation]) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for op in moves {
        match move_file(&op.source, &op.dest) {
            Ok(()) => outcome.moved += 1,
            Err(e) => {
                log::warn!("Failed to move {}: {}", op.source.display(), e);
                outcome.failed.push((op.source.clone(), e));
            }
        }
    }

    outcome
}

/// Rename, falling back to copy + remove when the quarantine lives on
/// another filesystem.
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match std::fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            std::fs::copy(source, dest)?;
            std::fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "tests/mover_tests.rs"]
mod tests;
