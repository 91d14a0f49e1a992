//! Report text shown on the confirmation screen.

use crate::classify::Classification;

/// One block per system: a header with counts, then the unscraped files.
pub fn system_block(classification: &Classification) -> String {
    let mut text = format!(
        "Games in '{}' folder: {} total, {} scraped\n\
         ===================================================\n\n",
        classification.system, classification.total_files, classification.declared_entries,
    );

    for path in &classification.unreferenced {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        text.push_str(&format!("   - {}\n", name));
    }

    text.push_str("\n\n");
    text
}

/// Concatenated report for every classified system.
pub fn compose(classifications: &[Classification]) -> String {
    classifications.iter().map(system_block).collect()
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
