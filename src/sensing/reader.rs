use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// A w1_slave file is two lines of roughly 37 bytes each.
pub const READ_BUFFER_LEN: u64 = 100;

/// Reads up to `READ_BUFFER_LEN` bytes of the sensor file. No retry; the
/// caller decides what a short buffer means.
pub fn read_sensor(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;

    let mut data = Vec::with_capacity(READ_BUFFER_LEN as usize);
    let read = file
        .take(READ_BUFFER_LEN)
        .read_to_end(&mut data)
        .with_context(|| format!("could not read file {}", path.display()))?;

    if read == 0 {
        bail!("could not read file {}: sensor file is empty", path.display());
    }

    log_debug!("read {read} bytes from {}: {:?}", path.display(), String::from_utf8_lossy(&data));
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_whole_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w1_slave");
        fs::write(&path, "a2 00 4b 46 7f ff 0e 10 e5 t=10125\n").unwrap();

        let data = read_sensor(&path).unwrap();
        assert_eq!(data, b"a2 00 4b 46 7f ff 0e 10 e5 t=10125\n");
    }

    #[test]
    fn stops_at_buffer_len() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w1_slave");
        fs::write(&path, "x".repeat(250)).unwrap();

        let data = read_sensor(&path).unwrap();
        assert_eq!(data.len(), READ_BUFFER_LEN as usize);
    }

    #[test]
    fn missing_sensor_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sensor(&dir.path().join("w1_slave")).unwrap_err();
        assert!(format!("{err:#}").contains("could not open"));
    }

    #[test]
    fn empty_sensor_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w1_slave");
        fs::write(&path, "").unwrap();

        let err = read_sensor(&path).unwrap_err();
        assert!(format!("{err:#}").contains("sensor file is empty"));
    }
}
