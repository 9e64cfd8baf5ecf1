//! Parser for the w1-therm `w1_slave` text.
//!
//! The kernel exposes the scratchpad as two lines:
//!
//! ```text
//! a2 00 4b 46 7f ff 0e 10 e5 : crc=e5 YES
//! a2 00 4b 46 7f ff 0e 10 e5 t=10125
//! ```
//!
//! The first line ends in the CRC verdict, the second carries the raw code.

use anyhow::{Context, Result};
use regex::Regex;

use super::error::SensorError;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

const MARKER_PATTERN: &str = r"(?m)\b(YES|NO)\r?$";
const TEMPERATURE_PATTERN: &str = r"t=([0-9]{4,5})\b";

/// What a successful parse found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Raw code taken from `t=NNNNN`.
    Temperature(i64),
    /// Neither `YES` nor `NO` ends a line.
    NoMarker,
    /// `YES`, but no 4 or 5 digit `t=` value.
    NoTemperature,
}

pub struct ReadingParser {
    marker: Regex,
    temperature: Regex,
}

impl ReadingParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(MARKER_PATTERN).context("invalid marker pattern")?,
            temperature: Regex::new(TEMPERATURE_PATTERN)
                .context("invalid temperature pattern")?,
        })
    }

    pub fn parse(&self, data: &[u8]) -> Result<Sample, SensorError> {
        let text = String::from_utf8_lossy(data);

        let marker = self
            .marker
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match marker {
            Some("NO") => {
                return Err(SensorError::ChecksumFailed {
                    raw: text.to_string(),
                })
            }
            Some(_) => {}
            None => return Ok(Sample::NoMarker),
        }

        let Some(digits) = self
            .temperature
            .captures(&text)
            .and_then(|caps| caps.get(1))
        else {
            return Ok(Sample::NoTemperature);
        };

        let digits = digits.as_str();
        let raw = digits
            .parse::<i64>()
            .map_err(|source| SensorError::InvalidCode {
                text: digits.to_string(),
                source,
            })?;

        log_debug!("parsed raw code {raw}");
        Ok(Sample::Temperature(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &[u8] =
        b"a2 00 4b 46 7f ff 0e 10 e5 : crc=e5 YES\na2 00 4b 46 7f ff 0e 10 e5 t=10125\n";

    fn parser() -> ReadingParser {
        ReadingParser::new().unwrap()
    }

    fn with_code(verdict: &str, code: &str) -> Vec<u8> {
        format!("a2 00 4b 46 7f ff 0e 10 e5 : crc=e5 {verdict}\na2 00 4b 46 7f ff 0e 10 e5 t={code}\n")
            .into_bytes()
    }

    #[test]
    fn extracts_raw_code() {
        assert_eq!(parser().parse(GOOD).unwrap(), Sample::Temperature(10125));
    }

    #[test]
    fn accepts_four_and_five_digits() {
        let p = parser();
        assert_eq!(p.parse(&with_code("YES", "9875")).unwrap(), Sample::Temperature(9875));
        assert_eq!(p.parse(&with_code("YES", "25062")).unwrap(), Sample::Temperature(25062));
    }

    #[test]
    fn ignores_three_and_six_digits() {
        let p = parser();
        assert_eq!(p.parse(&with_code("YES", "875")).unwrap(), Sample::NoTemperature);
        assert_eq!(p.parse(&with_code("YES", "100000")).unwrap(), Sample::NoTemperature);
    }

    #[test]
    fn negative_codes_are_not_matched() {
        assert_eq!(
            parser().parse(&with_code("YES", "-1250")).unwrap(),
            Sample::NoTemperature
        );
    }

    #[test]
    fn crc_no_is_checksum_failure() {
        let err = parser().parse(&with_code("NO", "10125")).unwrap_err();
        assert!(matches!(err, SensorError::ChecksumFailed { .. }));
        assert!(err.to_string().starts_with("data is not good"));
    }

    #[test]
    fn yes_without_value_is_not_an_error() {
        let data = b"a2 00 4b 46 7f ff 0e 10 e5 : crc=e5 YES\n";
        assert_eq!(parser().parse(data).unwrap(), Sample::NoTemperature);
    }

    #[test]
    fn missing_marker_is_reported() {
        let data = b"a2 00 4b 46 7f ff 0e 10 e5 t=10125\n";
        assert_eq!(parser().parse(data).unwrap(), Sample::NoMarker);
    }

    #[test]
    fn marker_must_end_the_line() {
        let data = b"a2 00 4b 46 7f ff 0e 10 e5 : crc=e5 YESTERDAY\nt=10125\n";
        assert_eq!(parser().parse(data).unwrap(), Sample::NoMarker);
    }

    #[test]
    fn tolerates_crlf_and_trailing_padding() {
        let mut data = b"a2 00 : crc=e5 YES\r\na2 00 t=10125\r\n".to_vec();
        data.extend_from_slice(&[0u8; 20]);
        assert_eq!(parser().parse(&data).unwrap(), Sample::Temperature(10125));
    }
}
