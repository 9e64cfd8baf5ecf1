use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    /// The probe's CRC check failed and it flagged the conversion with `NO`.
    #[error("data is not good: {raw:?}")]
    ChecksumFailed { raw: String },

    #[error("raw data cannot be converted into number {text:?}")]
    InvalidCode {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
