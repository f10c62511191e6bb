//! # Constants
//!
//! Centralized constants for magic values used throughout sniffgo-notes.

// =============================================================================
// File System
// =============================================================================

/// File extension for note files.
pub const NOTE_FILE_EXTENSION: &str = "txt";

/// Default directory name for storing notes (relative to the working directory).
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Fallback filename base when a title sanitizes to nothing.
pub const FALLBACK_NOTE_NAME: &str = "note";

/// Project configuration file name (in the working directory).
pub const CONFIG_FILE: &str = ".sniffgo";

// =============================================================================
// Shell Protocol
// =============================================================================

/// A line consisting of exactly this string terminates content entry.
pub const CONTENT_TERMINATOR: &str = ".";
