// ABOUTME: Shared test fixtures for behavioral tests
//
// Provides:
// - TestDataDir: temporary storage directory with helpers to reopen it

use intern_form::app::{AppState, StateOptions};
use intern_form::storage::{FileStorage, Storage};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary data directory that can be opened repeatedly, like separate runs
pub struct TestDataDir {
    pub dir: TempDir,
}

impl TestDataDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a fresh FileStorage over this directory
    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::new(FileStorage::open(self.path()).expect("failed to open storage"))
    }

    /// Simulate a new process starting the stepper
    pub fn start(&self) -> AppState {
        AppState::load(self.storage(), StateOptions::default())
    }

    pub fn storage_file(&self) -> std::path::PathBuf {
        self.path().join("storage.json")
    }
}
