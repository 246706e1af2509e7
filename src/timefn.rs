// timefn - monotonic timer used by the benchmark loops
//
// Built on std::time::Instant, which is monotonic on every supported
// platform. The harness times individual codec calls with it and reports
// milliseconds.

use std::time::Instant;

/// Nanosecond duration.
pub type DurationNs = u64;

/// Opaque timestamp. The absolute value is not meaningful;
/// use it only to compute a duration between two measurements.
#[derive(Clone, Copy, Debug)]
pub struct TimeT {
    pub(crate) t: Instant,
}

impl TimeT {
    pub fn new() -> Self {
        TimeT { t: Instant::now() }
    }
}

impl Default for TimeT {
    fn default() -> Self {
        TimeT::new()
    }
}

/// Returns the current monotonic timestamp.
pub fn get_time() -> TimeT {
    TimeT { t: Instant::now() }
}

/// Nanoseconds between `clock_start` and `clock_end` (0 if `clock_end` is earlier).
pub fn span_ns(clock_start: TimeT, clock_end: TimeT) -> DurationNs {
    clock_end
        .t
        .saturating_duration_since(clock_start.t)
        .as_nanos() as DurationNs
}

/// Nanoseconds elapsed since `clock_start`.
pub fn clock_span_ns(clock_start: TimeT) -> DurationNs {
    clock_start.t.elapsed().as_nanos() as DurationNs
}

/// Convert a nanosecond span to fractional milliseconds.
#[inline]
pub fn ns_to_ms(ns: DurationNs) -> f64 {
    ns as f64 / 1_000_000.0
}

/// Run `f` and return its result together with the elapsed time in milliseconds.
///
/// Only the call itself is inside the window: buffer setup and stream I/O
/// stay outside.
pub fn time_ms<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = get_time();
    let out = f();
    let elapsed = clock_span_ns(start);
    (out, ns_to_ms(elapsed))
}

/// Busy-waits until the clock advances by at least 1 ns.
/// Used before a timed phase to line up with a clock tick.
pub fn wait_for_next_tick() {
    let clock_start = get_time();
    loop {
        if span_ns(clock_start, get_time()) > 0 {
            break;
        }
    }
}
