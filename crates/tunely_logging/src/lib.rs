#![deny(missing_docs)]
//! Shared logging utilities for the Tunely workspace.
//!
//! Every crate logs through the `tunely_*` macros so that the backend can be
//! swapped in one place. The macros forward to the `log` facade; the binary
//! installs a `simplelog` backend at startup and tests use
//! [`initialize_for_tests`].

/// Logs a debug-level message.
#[macro_export]
macro_rules! tunely_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "tunely", $($arg)*);
    }};
}

/// Logs an info-level message.
#[macro_export]
macro_rules! tunely_info {
    ($($arg:tt)*) => {{
        log::info!(target: "tunely", $($arg)*);
    }};
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! tunely_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "tunely", $($arg)*);
    }};
}

/// Logs an error-level message.
#[macro_export]
macro_rules! tunely_error {
    ($($arg:tt)*) => {{
        log::error!(target: "tunely", $($arg)*);
    }};
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from many tests; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
