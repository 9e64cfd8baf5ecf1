//! Reading data model.
//!
//! One line of the reading log: when the sample was taken and the raw code
//! the probe reported. The converted temperature is never stored.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Raw probe code (Celsius * 1000).
    pub value: i64,
}

impl Reading {
    pub fn new(timestamp: i64, value: i64) -> Self {
        Self { timestamp, value }
    }

    /// The log line, newline included: `1611012127,10125\n`.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.timestamp, self.value)
    }
}
