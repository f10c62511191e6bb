//! # sniffgo-notes CLI
//!
//! Entry point for the interactive notes shell.
//!
//! The binary takes no arguments: it loads the optional `.sniffgo` config,
//! ensures the notes directory exists, and drops into the menu loop on
//! stdin/stdout. The only fatal error is failing to create the notes
//! directory at startup (exit status 1).

use std::io;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use sniffgo_notes::{Config, NoteStore, Shell};

#[derive(Parser)]
#[command(name = "sniffgo-notes")]
#[command(version)]
#[command(about = "Interactive console notes manager")]
#[command(
    long_about = "sniffgo-notes is an interactive, single-user notes manager. Notes are stored \
as plain .txt files in a notes directory (default: ./notes), one file per note, with no \
metadata beyond the filename.

Running the binary presents a numbered menu for listing, creating, viewing, editing \
(overwrite or append), and deleting notes. There are no subcommands or flags; all \
interaction happens through the menu."
)]
struct Cli {}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let config = Config::load()?;
    let store = NoteStore::new(config.notes_path());
    store.ensure_dir()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    Shell::new(store, stdin.lock(), stdout.lock(), stderr.lock()).run()
}
