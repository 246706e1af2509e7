// cli/constants.rs — program identity, defaults, and the display-level global

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "codecbench";
pub const AUTHOR: &str = "the codecbench developers";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Suffix appended to the archive name to form the decompressed output name.
pub const DEC_SUFFIX: &str = "_dec";

/// Iteration count used when `-t` is not given.
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Exit code for usage and benchmark failures.
pub const EXIT_FAILURE: i32 = 1;

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = results (default); 3 = progress; 4 = per-iteration detail
//
// Only verbosity lives here. Benchmark statistics are owned by the harness.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout, unconditional (report lines)
//   display!(...)         → stderr, unconditional
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
