//! Logging macros gated by a module-level `ENABLE_LOGS` flag.
//!
//! Usage:
//! ```ignore
//! // The calling module defines the flag:
//! const ENABLE_LOGS: bool = true;
//!
//! // The macros are exported at the crate root:
//! use crate::{log_debug, log_warn};
//!
//! log_warn!("sensor reported no temperature");
//! ```
//!
//! The flag only silences chatter. Whatever passes it still goes through the
//! `log` facade, so `RUST_LOG` filtering applies on top.

/// Conditional debug logging, for byte dumps and per-step tracing.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Conditional info logging.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Conditional warn logging. Used for runs that finish without a reading.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
