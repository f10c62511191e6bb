//! # Note Store
//!
//! File system operations for notes.
//!
//! Every operation re-derives its view of the notes directory from disk;
//! the store keeps no state between calls beyond the directory path, so
//! listings always reflect current on-disk content.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::{constants::NOTE_FILE_EXTENSION, note::sanitize_title};

/// Stateless handle on the notes directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    /// Creates a store rooted at the given directory.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    /// Returns the notes directory path.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Creates the notes directory if it does not exist (idempotent).
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.notes_dir).with_context(|| {
            format!(
                "Failed to ensure notes directory exists: {}",
                self.notes_dir.display()
            )
        })
    }

    /// Lists all note files, sorted lexicographically by filename.
    ///
    /// Only regular files directly inside the notes directory with the note
    /// extension count. A missing directory yields an empty list.
    pub fn list(&self) -> Vec<PathBuf> {
        let mut notes: Vec<PathBuf> = WalkDir::new(&self.notes_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext == NOTE_FILE_EXTENSION)
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        notes.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        notes
    }

    /// Resolves a free path for a new note with the given title.
    ///
    /// The candidate is `<base>.txt`; on collision, ` (1)`, ` (2)`, … are
    /// tried in order until an unused path is found. Checked against live
    /// directory state at call time, so pre-existing manually created
    /// suffixes are simply skipped over.
    pub fn unique_path(&self, title: &str) -> PathBuf {
        let base = sanitize_title(title);
        let mut path = self.notes_dir.join(format!("{base}.{NOTE_FILE_EXTENSION}"));
        let mut idx: u32 = 1;

        while path.exists() {
            path = self
                .notes_dir
                .join(format!("{base} ({idx}).{NOTE_FILE_EXTENSION}"));
            idx += 1;
        }

        path
    }

    /// Creates a new note file and returns its path.
    ///
    /// Nothing is written unless the file opens successfully.
    pub fn create(&self, title: &str, lines: &[String]) -> Result<PathBuf> {
        let path = self.unique_path(title);

        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create note file: {}", path.display()))?;
        write_lines(file, lines)
            .with_context(|| format!("Failed to write note: {}", path.display()))?;

        Ok(path)
    }

    /// Reads a note's lines in file order.
    pub fn read(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;

        Ok(content.lines().map(str::to_string).collect())
    }

    /// Replaces a note's content with the given lines.
    pub fn overwrite(&self, path: &Path, lines: &[String]) -> Result<()> {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to open for writing: {}", path.display()))?;
        write_lines(file, lines)
            .with_context(|| format!("Failed to write note: {}", path.display()))
    }

    /// Appends the given lines after a note's existing content.
    pub fn append(&self, path: &Path, lines: &[String]) -> Result<()> {
        let file = fs::OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open for appending: {}", path.display()))?;
        write_lines(file, lines)
            .with_context(|| format!("Failed to write note: {}", path.display()))
    }

    /// Removes a note file.
    pub fn delete(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to delete: {}", path.display()))
    }
}

/// Writes each line followed by a newline.
fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
