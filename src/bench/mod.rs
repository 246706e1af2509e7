//! Benchmark entry points.
//!
//! [`bench_file`] is the primary public API: it opens the source file, the
//! archive, and the decompressed output next to it, and hands the three
//! streams to a [`harness::BenchmarkHarness`]. Internally, work is split into:
//!
//! - [`harness`] — the compress and decompress iteration loops and the
//!   phase state machine.
//! - [`stats`] — running sums and means.
//! - [`stream`] — length probe, rewind, whole-stream read, verified write.
//!
//! [`config::BenchConfig`] controls the codec, level, iteration count,
//! verbosity, and the round-trip digest check.

pub mod config;
pub mod harness;
pub mod stats;
pub mod stream;

// Re-export public types so callers can use `bench::BenchConfig` directly.
pub use config::BenchConfig;
pub use harness::{BenchReport, BenchmarkHarness, RunState};
pub use stats::StatsAccumulator;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::cli::naming::{archive_path, output_path};
use crate::error::BenchError;

/// Paths a benchmark of one source file writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchPaths {
    pub source: PathBuf,
    pub archive: PathBuf,
    pub output: PathBuf,
}

impl BenchPaths {
    pub fn for_source(source: &Path, config: &BenchConfig) -> Self {
        let archive = archive_path(source, config.codec);
        let output = output_path(&archive);
        BenchPaths { source: source.to_path_buf(), archive, output }
    }
}

/// Create (or truncate) `path` for reading and writing.
fn open_rw_truncate(path: &Path) -> Result<File, BenchError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            BenchError::Configuration(format!("cannot open {} for writing: {}", path.display(), e))
        })
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Benchmark `config.codec` on the file at `source`.
///
/// The archive is written to `<source><ext>` and the decoded copy to
/// `<archive>_dec`; both are truncated first and left on disk afterwards.
///
/// # Errors
/// [`BenchError::Configuration`] if a file cannot be opened or the source
/// is empty, plus anything the harness reports.
pub fn bench_file(source: &Path, config: BenchConfig) -> Result<BenchReport, BenchError> {
    let paths = BenchPaths::for_source(source, &config);
    let mut harness = BenchmarkHarness::new(config)?;

    let mut src = File::open(&paths.source).map_err(|e| {
        BenchError::Configuration(format!("cannot open {}: {}", paths.source.display(), e))
    })?;
    let mut archive = open_rw_truncate(&paths.archive)?;
    let mut output = open_rw_truncate(&paths.output)?;

    harness.run(&mut src, &mut archive, &mut output)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
