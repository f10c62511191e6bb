//! # sniffgo-notes
//!
//! A single-user, interactive console notes manager.
//!
//! Notes are stored as plain `.txt` files in a notes directory, making them
//! human-readable, grep-friendly, and editable with any tool. There is no
//! database, no index, and no in-memory cache: every menu operation re-reads
//! the directory, so the listing always reflects current on-disk state.
//!
//! ## Features
//!
//! - **Plain-text storage**: one file per note, the file body is the note body
//! - **Safe filenames**: titles are sanitized and collisions resolved with
//!   ` (1)`, ` (2)`, … suffixes
//! - **Line-oriented shell**: numbered menu over stdin/stdout, scriptable via
//!   piped input

pub mod config;
pub mod constants;
pub mod note;
pub mod shell;
pub mod store;

pub use config::Config;
pub use shell::Shell;
pub use store::NoteStore;
