#![deny(missing_docs)]
//! Shared logging utilities for the www workspace.
//!
//! This crate provides the `stage_*` logging macros used by the stager, the
//! page controller and its host, plus a minimal test initializer for the
//! global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the page host's current event-loop tick.
    static LOOP_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the event-loop tick for the current thread.
/// The page host calls this once per drained tick.
pub fn set_loop_tick(tick: u64) {
    LOOP_TICK.with(|v| v.set(tick));
}

/// Retrieves the event-loop tick for the current thread.
/// Returns 0 outside of a running page host.
pub fn loop_tick() -> u64 {
    LOOP_TICK.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! stage_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! stage_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! stage_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! stage_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! stage_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
