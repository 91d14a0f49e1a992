use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a ROM library.
#[derive(Debug, Error)]
pub enum SweepError {
    /// I/O error while listing folders or reading a gamelist
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed gamelist.xml
    #[error("Gamelist parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The configured library root does not exist
    #[error("Could not find rom path {}!", .path.display())]
    MissingLibraryRoot { path: PathBuf },
}
