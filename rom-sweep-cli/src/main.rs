//! rom-sweep CLI
//!
//! Interactive tool that quarantines unscraped ROMs: files inside a system
//! folder that its gamelist.xml does not declare.

mod app;
mod prompt;

use std::path::PathBuf;

use clap::Parser;

use prompt::TerminalPrompt;
use rom_sweep_lib::settings;

#[derive(Parser)]
#[command(name = "rom-sweep")]
#[command(about = "Move unscraped ROMs into a quarantine folder", long_about = None)]
struct Cli {
    /// Library root containing one folder per system
    /// (defaults to the configured root, then ~/RetroPie/roms)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Quarantine folder for unscraped ROMs (defaults to <root>/unscraped)
    #[arg(short, long)]
    quarantine: Option<PathBuf>,

    /// Skip the confirmation prompt before moving files
    #[arg(short, long)]
    yes: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let library_root = settings::resolve_library_root(cli.root);
    let quarantine_root = settings::resolve_quarantine_root(cli.quarantine, &library_root);

    let mut prompt = TerminalPrompt::new(cli.yes);
    std::process::exit(app::run(&mut prompt, &library_root, &quarantine_root));
}
