//! Interactive prompt surface for the sweep flow.
//!
//! The flow never talks to the terminal directly; it goes through the
//! [`UserPrompt`] trait so tests can drive it with scripted responses.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Outcome of the system multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(Vec<usize>),
    Cancelled,
}

/// Outcome of the final confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancelled,
}

/// Interactive capability needed by the sweep flow.
pub trait UserPrompt {
    /// Non-blocking status message.
    fn notify(&mut self, text: &str);

    /// Multi-select over system names; chosen indices refer to `options`.
    fn choose_systems(&mut self, options: &[String]) -> Selection;

    /// Show the report and ask whether to proceed with the moves.
    fn confirm_moves(&mut self, report: &str) -> Confirmation;

    /// Blocking acknowledgment.
    fn message(&mut self, text: &str);
}

/// Dialoguer-backed prompt for real terminal sessions.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserPrompt for TerminalPrompt {
    fn notify(&mut self, text: &str) {
        println!("{}", text.if_supports_color(Stdout, |t| t.dimmed()));
    }

    fn choose_systems(&mut self, options: &[String]) -> Selection {
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Which folders should be cleaned of unscraped roms?")
            .items(options)
            .interact_opt();
        match picked {
            Ok(Some(indices)) => Selection::Chosen(indices),
            // Esc or a closed terminal both read as a cancel
            Ok(None) | Err(_) => Selection::Cancelled,
        }
    }

    fn confirm_moves(&mut self, report: &str) -> Confirmation {
        println!("{report}");
        if self.assume_yes {
            return Confirmation::Proceed;
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Move these roms to the quarantine folder?")
            .default(false)
            .interact_opt();
        match confirmed {
            Ok(Some(true)) => Confirmation::Proceed,
            _ => Confirmation::Cancelled,
        }
    }

    fn message(&mut self, text: &str) {
        println!("{}", text.if_supports_color(Stdout, |t| t.bold()));
    }
}
