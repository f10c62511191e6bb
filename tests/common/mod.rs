//! # Test Harness
//!
//! Utilities for integration-testing the sniffgo-notes binary in an isolated
//! temporary working directory, so tests never touch a real notes directory.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with a temporary working directory for the binary.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Creates a fresh temporary working directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Returns the working directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the default notes directory path.
    pub fn notes_path(&self) -> PathBuf {
        self.dir.path().join("notes")
    }

    /// Returns a command for the binary rooted at the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sniffgo-notes").expect("binary should build");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Writes a `.sniffgo` config file in the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.dir.path().join(".sniffgo"), content).expect("Failed to write config");
    }

    /// Pre-seeds a file inside the notes directory.
    pub fn seed_note(&self, name: &str, content: &str) {
        fs::create_dir_all(self.notes_path()).expect("Failed to create notes dir");
        fs::write(self.notes_path().join(name), content).expect("Failed to write note");
    }

    /// Reads a note file's raw content.
    pub fn read_note(&self, name: &str) -> String {
        fs::read_to_string(self.notes_path().join(name)).expect("Failed to read note")
    }

    /// Lists filenames in the notes directory, sorted.
    pub fn note_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.notes_path()) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
