//! # Interactive Shell
//!
//! Line-oriented menu loop over the note store.
//!
//! The shell is a simple synchronous request/response loop: read one line,
//! parse, dispatch, print the result, repeat. It is generic over its reader
//! and writers so the complete protocol can be exercised in tests with
//! in-memory buffers.
//!
//! Every read consumes exactly one line, so unparseable input never bleeds
//! into the next prompt. Per-note I/O failures go to the error writer and
//! the loop continues; only end-of-input or menu option 6 ends it.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{constants::CONTENT_TERMINATOR, store::NoteStore};

/// Interactive menu shell over a [`NoteStore`].
pub struct Shell<R, W, E> {
    store: NoteStore,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    /// Creates a shell reading from `input` and writing to `out`/`err`.
    pub fn new(store: NoteStore, input: R, out: W, err: E) -> Self {
        Self {
            store,
            input,
            out,
            err,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match line.trim().parse::<i64>() {
                Ok(1) => self.list()?,
                Ok(2) => self.create()?,
                Ok(3) => self.view()?,
                Ok(4) => self.edit()?,
                Ok(5) => self.delete()?,
                Ok(6) => {
                    writeln!(self.out, "Goodbye.")?;
                    break;
                }
                Ok(_) => writeln!(self.out, "Unknown option.")?,
                Err(_) => writeln!(self.out, "Invalid input.")?,
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "SniffGo Notes - menu")?;
        writeln!(self.out, "1) List notes")?;
        writeln!(self.out, "2) Create note")?;
        writeln!(self.out, "3) View note")?;
        writeln!(self.out, "4) Edit note (overwrite/append)")?;
        writeln!(self.out, "5) Delete note")?;
        writeln!(self.out, "6) Exit")?;
        write!(self.out, "Choose: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads one line, stripping the trailing newline. `None` on end-of-input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(Some(line))
    }

    /// Prints a prompt (no newline) and reads the response line.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads content lines until a lone `.` or end-of-input.
    ///
    /// The terminator line is consumed and excluded from the result.
    fn read_content(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        while let Some(line) = self.read_line()? {
            if line == CONTENT_TERMINATOR {
                break;
            }
            lines.push(line);
        }

        Ok(lines)
    }

    /// Prints the numbered note list, or `No notes found.` when empty.
    fn show_notes(&mut self, notes: &[PathBuf]) -> Result<()> {
        if notes.is_empty() {
            writeln!(self.out, "No notes found.")?;
            return Ok(());
        }

        for (i, path) in notes.iter().enumerate() {
            writeln!(self.out, "{}) {}", i + 1, display_name(path))?;
        }

        Ok(())
    }

    /// Selection sub-protocol shared by View, Edit, and Delete.
    ///
    /// Shows the numbered list (fresh from disk), prompts for a number, and
    /// returns the chosen path. Non-numeric and out-of-range input both
    /// yield `None` with no side effects.
    fn pick_note(&mut self) -> Result<Option<PathBuf>> {
        let notes = self.store.list();
        self.show_notes(&notes)?;

        let Some(line) = self.prompt("Choose note number: ")? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=notes.len()).contains(&n) => Ok(Some(notes[n - 1].clone())),
            _ => Ok(None),
        }
    }

    fn list(&mut self) -> Result<()> {
        let notes = self.store.list();
        self.show_notes(&notes)
    }

    fn create(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter note title: ")? else {
            return Ok(());
        };

        writeln!(
            self.out,
            "Enter note content. End with a single line containing only a dot (.)"
        )?;
        let lines = self.read_content()?;

        match self.store.create(&title, &lines) {
            Ok(path) => writeln!(self.out, "Saved: {}", path.display())?,
            Err(err) => writeln!(self.err, "{err:#}")?,
        }

        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let Some(path) = self.pick_note()? else {
            writeln!(self.out, "Invalid selection.")?;
            return Ok(());
        };

        match self.store.read(&path) {
            Ok(lines) => {
                writeln!(self.out, "---- {} ----", display_name(&path))?;
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
                writeln!(self.out, "---- end ----")?;
            }
            Err(err) => writeln!(self.err, "{err:#}")?,
        }

        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let Some(path) = self.pick_note()? else {
            writeln!(self.out, "Invalid selection.")?;
            return Ok(());
        };

        writeln!(self.out, "Edit options:")?;
        writeln!(self.out, "1) Overwrite")?;
        writeln!(self.out, "2) Append")?;
        let Some(line) = self.prompt("Choose: ")? else {
            return Ok(());
        };

        // No file is touched on an unrecognized sub-choice.
        match line.trim().parse::<i64>() {
            Ok(1) => {
                writeln!(
                    self.out,
                    "Enter new content. End with a single line containing only a dot (.)"
                )?;
                let lines = self.read_content()?;
                match self.store.overwrite(&path, &lines) {
                    Ok(()) => writeln!(self.out, "Overwritten.")?,
                    Err(err) => writeln!(self.err, "{err:#}")?,
                }
            }
            Ok(2) => {
                writeln!(
                    self.out,
                    "Enter content to append. End with a single line containing only a dot (.)"
                )?;
                let lines = self.read_content()?;
                match self.store.append(&path, &lines) {
                    Ok(()) => writeln!(self.out, "Appended.")?,
                    Err(err) => writeln!(self.err, "{err:#}")?,
                }
            }
            Ok(_) => writeln!(self.out, "Unknown option.")?,
            Err(_) => writeln!(self.out, "Invalid input.")?,
        }

        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(path) = self.pick_note()? else {
            writeln!(self.out, "Invalid selection.")?;
            return Ok(());
        };

        let question = format!("Delete '{}'? (y/N): ", display_name(&path));
        let answer = self.prompt(&question)?.unwrap_or_default();

        // Only an explicit yes deletes; anything else cancels.
        if matches!(answer.trim(), "y" | "Y") {
            match self.store.delete(&path) {
                Ok(()) => writeln!(self.out, "Deleted.")?,
                Err(err) => writeln!(self.err, "{err:#}")?,
            }
        } else {
            writeln!(self.out, "Canceled.")?;
        }

        Ok(())
    }
}

/// Returns the filename component for display.
fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name().map_or(Cow::Borrowed(""), |n| n.to_string_lossy())
}
