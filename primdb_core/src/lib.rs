use std::path::PathBuf;

pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

pub use error::{Error, Result};

use storage::{DiskStorage, Storage};

/// File-persisted database rooted at a directory. Persisted state is the
/// source of truth: the catalog is reloaded from disk at the start of every
/// command and nothing is cached across commands, so several `Database`
/// values over the same root stay consistent as long as commands are
/// serialized. No internal locking; a concurrent host must add its own.
#[derive(Debug)]
pub struct Database {
    root: PathBuf,
    storage: DiskStorage,
}

impl Database {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let storage = DiskStorage::new(&root);
        Self { root, storage }
    }

    /// Parses and executes one command line, returning the text to show
    /// the user. Errors abandon the command without touching persisted
    /// state; the caller's loop is expected to continue.
    pub fn execute(&mut self, input: &str) -> Result<String> {
        let cmd = parser::parser::parse(input)?;
        let mut catalog = self.storage.load_catalog()?;
        engine::execute_command(cmd, &mut catalog, &mut self.storage)
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}
