//! Reads a DS18B20 probe through the Linux w1-therm driver and appends the
//! raw reading to a CSV log.
//!
//! One invocation takes one sample: read `w1_slave`, check the CRC verdict,
//! pull out `t=NNNNN`, append `<unix_ts>,<raw>` to the log, then print the
//! converted temperature. Sampling on an interval is left to cron or a
//! systemd timer.
//!
//! Before the probe shows up the kernel modules have to be loaded:
//!
//! ```text
//! sudo modprobe w1-gpio
//! sudo modprobe w1-therm
//! ```

pub mod db;
pub mod sensing;
pub mod settings;
pub mod units;
mod utils;

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::Utc;

use db::{Reading, ReadingLog};
use sensing::{read_sensor, ReadingParser, Sample};
use settings::Settings;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

/// Why a run finished without recording anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoMarker,
    NoTemperature,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMarker => f.write_str("no YES/NO verdict in sensor data"),
            SkipReason::NoTemperature => f.write_str("no t= value in sensor data"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Recorded { reading: Reading, display: f64 },
    Skipped(SkipReason),
}

/// Takes one sample. The converted temperature goes to `out` only after the
/// reading is safely in the log.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Outcome> {
    let sensor_path = settings.sensor_path();
    let data = read_sensor(&sensor_path)?;

    let parser = ReadingParser::new()?;
    let raw = match parser.parse(&data)? {
        Sample::Temperature(raw) => raw,
        Sample::NoMarker => return Ok(skip(SkipReason::NoMarker, &sensor_path)),
        Sample::NoTemperature => return Ok(skip(SkipReason::NoTemperature, &sensor_path)),
    };

    let reading = Reading::new(Utc::now().timestamp(), raw);
    let log = ReadingLog::new(&settings.log_path);
    log.append(&reading)
        .with_context(|| format!("could not store raw value {raw}"))?;

    let display = units::raw_to_display(raw);
    writeln!(out, "{display}").context("could not print temperature")?;

    log_info!("recorded {reading} ({display})");
    Ok(Outcome::Recorded { reading, display })
}

fn skip(reason: SkipReason, sensor_path: &std::path::Path) -> Outcome {
    log_warn!("nothing recorded from {}: {reason}", sensor_path.display());
    Outcome::Skipped(reason)
}
