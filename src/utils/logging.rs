//! Logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Usage:
//! ```ignore
//! // In your module, define the flag first:
//! const ENABLE_LOGS: bool = true;
//!
//! // Then use the macros (they're exported at the crate root):
//! use crate::{log_info, log_warn};
//!
//! log_info!("Loaded {} moods", 3);
//! ```
//!
//! Output goes through the `log` facade, so nothing is printed until a
//! backend is installed with [`init_logging`].

use log::LevelFilter;

/// Installs `env_logger` as the `log` backend.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Calling this
/// more than once is harmless: later calls leave the first logger in place.
pub fn init_logging(default_level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    // A logger already installed (tests, embedding host) is fine.
    let _ = builder.try_init();
}

/// Parses a level name such as `"debug"`; unknown names fall back to `Info`.
pub fn parse_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Conditional debug logging; requires `const ENABLE_LOGS: bool` in the calling module.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Conditional info logging; requires `const ENABLE_LOGS: bool` in the calling module.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Conditional warn logging; requires `const ENABLE_LOGS: bool` in the calling module.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Conditional error logging; requires `const ENABLE_LOGS: bool` in the calling module.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
