use super::*;

use std::fs;

/// Build a system folder with the given ROM files and a gamelist declaring
/// `declared` (as `./name` relative entries).
fn make_system(root: &Path, name: &str, files: &[&str], declared: &[&str]) -> System {
    let path = root.join(name);
    fs::create_dir_all(&path).unwrap();

    for file in files {
        fs::write(path.join(file), b"rom").unwrap();
    }

    let mut xml = String::from("<?xml version=\"1.0\"?>\n<gameList>\n");
    for entry in declared {
        xml.push_str(&format!(
            "  <game><path>./{}</path><name>{}</name></game>\n",
            entry, entry
        ));
    }
    xml.push_str("</gameList>\n");

    let gamelist = path.join(GAMELIST_FILE);
    fs::write(&gamelist, xml).unwrap();

    System {
        name: name.to_string(),
        path,
        gamelist,
    }
}

fn unreferenced_names(classification: &Classification) -> Vec<String> {
    classification
        .unreferenced
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_partition_excludes_gamelist_and_declared_files() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(
        dir.path(),
        "nes",
        &["mario.nes", "zelda.nes"],
        &["mario.nes"],
    );

    let classification = classify_system(&system).unwrap();
    assert_eq!(classification.total_files, 2);
    assert_eq!(classification.declared_entries, 1);
    assert_eq!(unreferenced_names(&classification), vec!["zelda.nes"]);
}

#[test]
fn test_classification_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(
        dir.path(),
        "snes",
        &["a.sfc", "b.sfc", "c.sfc"],
        &["b.sfc"],
    );

    let first = classify_system(&system).unwrap();
    let second = classify_system(&system).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_unreferenced() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(dir.path(), "nes", &["mario.nes"], &["mario.nes"]);

    let classification = classify_system(&system).unwrap();
    assert_eq!(classification.total_files, 1);
    assert!(classification.unreferenced.is_empty());
}

#[test]
fn test_bin_covered_by_declared_cue() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(
        dir.path(),
        "psx",
        &["game.cue", "game.bin"],
        &["game.cue"],
    );

    let classification = classify_system(&system).unwrap();
    assert!(classification.unreferenced.is_empty());
}

#[test]
fn test_files_after_a_cue_bin_pair_are_still_swept() {
    // The scan must not stop at a matched pair; later unscraped files are
    // still reported.
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(
        dir.path(),
        "psx",
        &["alpha.cue", "alpha.bin", "zeta.bin", "zulu.iso"],
        &["alpha.cue"],
    );

    let classification = classify_system(&system).unwrap();
    assert_eq!(
        unreferenced_names(&classification),
        vec!["zeta.bin", "zulu.iso"]
    );
}

#[test]
fn test_undeclared_cue_does_not_cover_its_bin() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(dir.path(), "psx", &["game.cue", "game.bin"], &[]);

    let classification = classify_system(&system).unwrap();
    assert_eq!(unreferenced_names(&classification), vec!["game.bin", "game.cue"]);
}

#[test]
fn test_subdirectories_are_not_classified() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(dir.path(), "nes", &["mario.nes"], &["mario.nes"]);
    fs::create_dir(system.path.join("media")).unwrap();

    let classification = classify_system(&system).unwrap();
    assert_eq!(classification.total_files, 1);
    assert!(classification.unreferenced.is_empty());
}

#[test]
fn test_plan_moves_mirrors_system_subfolder() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(
        dir.path(),
        "nes",
        &["mario.nes", "zelda.nes"],
        &["mario.nes"],
    );
    let quarantine = dir.path().join("unscraped");

    let classification = classify_system(&system).unwrap();
    let moves = plan_moves(&classification, &quarantine).unwrap();

    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].source, system.path.join("zelda.nes"));
    assert_eq!(moves[0].dest, quarantine.join("nes").join("zelda.nes"));
    assert!(quarantine.join("nes").is_dir());
}

#[test]
fn test_plan_moves_is_idempotent_on_existing_quarantine() {
    let dir = tempfile::tempdir().unwrap();
    let system = make_system(dir.path(), "nes", &["zelda.nes"], &[]);
    let quarantine = dir.path().join("unscraped");

    let classification = classify_system(&system).unwrap();
    let first = plan_moves(&classification, &quarantine).unwrap();
    let second = plan_moves(&classification, &quarantine).unwrap();
    assert_eq!(first, second);
}
