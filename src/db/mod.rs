//! The reading log: a flat CSV file that only ever grows.

use std::path::{Path, PathBuf};

pub mod models;
mod repositories;

pub use models::Reading;

#[derive(Debug, Clone)]
pub struct ReadingLog {
    path: PathBuf,
}

impl ReadingLog {
    /// The file is expected to exist already with suitable permissions;
    /// nothing is created here or on append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
