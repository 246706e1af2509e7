//! Benchmark configuration: the runtime parameters for one harness run.
//!
//! [`BenchConfig`] holds the codec choice, compression level, iteration
//! count, verbosity, and the round-trip check flag. Its builder-style setters
//! allow callers to construct a configuration incrementally before handing it
//! to [`super::harness::BenchmarkHarness`], which takes it by value and never
//! changes it afterwards.

use crate::codec::{CodecKind, CompressionLevel};
use crate::cli::constants::DEFAULT_ITERATIONS;
use crate::error::BenchError;

// ── BenchConfig struct ────────────────────────────────────────────────────────

/// Runtime parameters controlling a single benchmark session.
///
/// Construct via [`Default`] and then adjust with the builder-style setters,
/// or set fields directly. All fields are `pub` for convenient inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Backend to benchmark (default: zlib).
    pub codec: CodecKind,

    /// Compression effort (default: high). Ignored by backends without levels.
    pub level: CompressionLevel,

    /// Number of compress iterations, and then of decompress iterations.
    /// Must be at least 1 (default: 1).
    pub iterations: u32,

    /// Verbosity level: 0 = silent, 1 = errors, 2 = results (default),
    /// 3 = phase progress, 4 = per-iteration samples.
    pub display_level: u32,

    /// When `true`, every decompressed buffer is checked against the xxh64
    /// digest of the source. Default: `true`.
    pub verify_round_trip: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            codec: CodecKind::default(),
            level: CompressionLevel::default(),
            iterations: DEFAULT_ITERATIONS,
            display_level: 2,
            verify_round_trip: true,
        }
    }
}

impl BenchConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    pub fn set_codec(&mut self, codec: CodecKind) -> &mut Self {
        self.codec = codec;
        self
    }

    pub fn set_level(&mut self, level: CompressionLevel) -> &mut Self {
        self.level = level;
        self
    }

    /// Set the number of iterations per phase. Zero is accepted here and
    /// rejected by [`validate`](BenchConfig::validate).
    pub fn set_iterations(&mut self, iterations: u32) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the verbosity level for benchmark output.
    pub fn set_notification_level(&mut self, level: u32) -> &mut Self {
        self.display_level = level;
        self
    }

    pub fn set_verify_round_trip(&mut self, verify: bool) -> &mut Self {
        self.verify_round_trip = verify;
        self
    }

    /// Check the configuration before a run.
    ///
    /// # Errors
    /// [`BenchError::Configuration`] when `iterations == 0`.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::Configuration("iteration count must be at least 1".into()));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
