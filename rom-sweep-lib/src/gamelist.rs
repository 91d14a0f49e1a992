//! Reader for EmulationStation-style `gamelist.xml` catalogs.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::SweepError;

/// Per-system catalog filename written by scrapers.
pub const GAMELIST_FILE: &str = "gamelist.xml";

/// Parse a gamelist and return the set of declared ROM paths.
///
/// Each `<game>` entry carries a `<path>` element naming the scraped file.
/// Entries may be absolute or relative (`./Game.nes` or `Game.nes`); relative
/// entries resolve against `system_dir` so membership checks always compare
/// absolute paths.
pub fn declared_paths(gamelist: &Path, system_dir: &Path) -> Result<HashSet<PathBuf>, SweepError> {
    let file = std::fs::File::open(gamelist)?;
    parse_declared(std::io::BufReader::new(file), system_dir)
}

fn parse_declared<R: BufRead>(reader: R, system_dir: &Path) -> Result<HashSet<PathBuf>, SweepError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut declared = HashSet::new();
    let mut in_path = false;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == b"path" => in_path = true,
            Event::End(ref e) if e.name().as_ref() == b"path" => in_path = false,
            Event::Text(ref e) => {
                if in_path {
                    let text = e.unescape()?.to_string();
                    if !text.is_empty() {
                        declared.insert(resolve_entry(&text, system_dir));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(declared)
}

/// Resolve a declared path entry to an absolute path under `system_dir`.
fn resolve_entry(entry: &str, system_dir: &Path) -> PathBuf {
    let path = Path::new(entry);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let stripped = entry.strip_prefix("./").unwrap_or(entry);
    system_dir.join(stripped)
}

#[cfg(test)]
#[path = "tests/gamelist_tests.rs"]
mod tests;
