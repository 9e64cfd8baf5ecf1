use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;

use crate::db::{models::Reading, ReadingLog};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

impl ReadingLog {
    /// Appends one line for `reading`. Opens append+write-only without
    /// `create`, so a missing log file is an error.
    pub fn append(&self, reading: &Reading) -> Result<()> {
        let line = reading.to_line();
        let path = self.path();

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("could not open reading log {}", path.display()))?;

        file.write_all(line.as_bytes())
            .with_context(|| format!("could not write {:?} to {}", line, path.display()))?;

        // fsync, so write errors the kernel defers are reported here rather
        // than lost when the file is dropped.
        file.sync_all()
            .with_context(|| format!("could not sync reading log {}", path.display()))?;

        log_debug!("appended {reading} to {}", path.display());
        Ok(())
    }
}
