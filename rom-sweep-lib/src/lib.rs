//! Core logic for sweeping unscraped ROMs out of a library.
//!
//! A ROM is "scraped" when its system's `gamelist.xml` declares it. Everything
//! here is synchronous and terminal-free; the CLI crate owns all interaction.

pub mod classify;
pub mod discover;
pub mod error;
pub mod gamelist;
pub mod mover;
pub mod report;
pub mod settings;

pub use classify::{Classification, MoveOperation};
pub use discover::System;
pub use error::SweepError;
pub use mover::MoveOutcome;
