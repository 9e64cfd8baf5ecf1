use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Where the settings file is looked up. Its absence is not an error.
pub const SETTINGS_PATH: &str = "/etc/water-temp/settings.json";

/// Directory the w1-therm driver creates for the probe.
pub const DEFAULT_SENSOR_DIR: &str = "/sys/bus/w1/devices/28-000006af39c9";

/// Linux's 1-wire driver names the data file this way.
pub const DEFAULT_SENSOR_FILE: &str = "w1_slave";

pub const DEFAULT_LOG_PATH: &str = "/home/pi/water.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sensor_dir: PathBuf,
    pub sensor_file: String,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensor_dir: PathBuf::from(DEFAULT_SENSOR_DIR),
            sensor_file: DEFAULT_SENSOR_FILE.into(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))
    }

    pub fn sensor_path(&self) -> PathBuf {
        self.sensor_dir.join(&self.sensor_file)
    }
}
