//! The benchmark loop.
//!
//! [`BenchmarkHarness`] runs `iterations` compress passes over a source
//! stream, then `iterations` decompress passes over the resulting archive,
//! and reports the means. Every pass starts from a rewound stream and fresh
//! buffers, so each sample measures the same work.
//!
//! # Phases
//!
//! ```text
//! Idle ──run_compress_phase──▶ CompressPhase ──run_decompress_phase──▶ DecompressPhase ─▶ Done
//!   └──────────────────── any error ─────────────────────▶ Failed ◀────────────────┘
//! ```
//!
//! A phase called out of order, or `report` before `Done`, is
//! [`BenchError::InvalidState`]. The first error inside a phase stops the
//! loop: no further iterations run, and the harness stays `Failed`.
//!
//! Only the codec call sits inside the timed window. Stream reads, writes,
//! and buffer allocation are excluded.

use std::fmt;
use std::io::{Read, Seek, Write};

use xxhash_rust::xxh64::xxh64;

use super::config::BenchConfig;
use super::stats::{ratio_pct, StatsAccumulator};
use super::stream::{read_whole, rewind, write_verified};
use crate::buffer::{BufferAllocator, HeapAllocator};
use crate::codec::{create_codec, Codec, CodecKind, CompressionLevel};
use crate::error::BenchError;
use crate::timefn::{time_ms, wait_for_next_tick};

/// Seed for the source / decoded digests.
const DIGEST_SEED: u64 = 0;

// ── RunState ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has run yet.
    Idle,
    /// The compress phase is running, or has completed and the decompress
    /// phase may start.
    CompressPhase,
    /// The decompress phase is running.
    DecompressPhase,
    /// Both phases completed; the report is available.
    Done,
    /// A phase aborted. Terminal.
    Failed,
}

impl RunState {
    pub fn name(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::CompressPhase => "CompressPhase",
            RunState::DecompressPhase => "DecompressPhase",
            RunState::Done => "Done",
            RunState::Failed => "Failed",
        }
    }
}

// ── BenchReport ───────────────────────────────────────────────────────────────

/// Means over a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub codec: CodecKind,
    pub level: CompressionLevel,
    pub iterations: u32,
    /// Source length seen by the last compress iteration.
    pub source_len: usize,
    /// Mean of `compressed / source * 100` over the compress iterations.
    pub mean_compress_ratio_pct: f64,
    pub mean_compress_time_ms: f64,
    pub mean_decompress_time_ms: f64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean compression ratio: {:.2}%", self.mean_compress_ratio_pct)?;
        writeln!(f, "Mean compression time: {:.3} ms", self.mean_compress_time_ms)?;
        writeln!(f, "Mean decompression time: {:.3} ms", self.mean_decompress_time_ms)
    }
}

// ── BenchmarkHarness ──────────────────────────────────────────────────────────

pub struct BenchmarkHarness<C = Box<dyn Codec>, A = HeapAllocator> {
    config: BenchConfig,
    codec: C,
    allocator: A,
    stats: StatsAccumulator,
    state: RunState,
    source_len: Option<usize>,
    archive_len: Option<usize>,
    source_digest: Option<u64>,
}

impl BenchmarkHarness {
    /// Harness for `config.codec` on the heap allocator.
    ///
    /// # Errors
    /// [`BenchError::Configuration`] if `config` does not validate.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        let codec = create_codec(config.codec);
        BenchmarkHarness::with_parts(config, codec, HeapAllocator)
    }
}

impl<C: Codec, A: BufferAllocator> BenchmarkHarness<C, A> {
    /// Harness over an explicit codec and allocator.
    ///
    /// `config.codec` is informational here; `codec` is what runs.
    pub fn with_parts(config: BenchConfig, codec: C, allocator: A) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(BenchmarkHarness {
            config,
            codec,
            allocator,
            stats: StatsAccumulator::new(),
            state: RunState::Idle,
            source_len: None,
            archive_len: None,
            source_digest: None,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn stats(&self) -> &StatsAccumulator {
        &self.stats
    }

    /// Source length recorded by the last compress iteration.
    pub fn recorded_len(&self) -> Option<usize> {
        self.source_len
    }

    fn require(&self, expected: RunState, operation: &'static str) -> Result<(), BenchError> {
        if self.state != expected {
            return Err(BenchError::InvalidState { operation, state: self.state.name() });
        }
        Ok(())
    }

    fn log(&self, level: u32, msg: fmt::Arguments<'_>) {
        if self.config.display_level >= level {
            eprint!("{}", msg);
        }
    }

    // ── Compress phase ────────────────────────────────────────────────────────

    /// Run every compress iteration, writing each archive over the previous one.
    ///
    /// Returns the source length of the last iteration; both streams are left
    /// at offset 0. The archive is rewound but not truncated, so a shorter
    /// archive after a longer one leaves a tail behind; the decompress phase
    /// rejects that as [`BenchError::ArchiveLength`].
    pub fn run_compress_phase<R, W>(&mut self, source: &mut R, archive: &mut W) -> Result<usize, BenchError>
    where
        R: Read + Seek + ?Sized,
        W: Write + Seek + ?Sized,
    {
        self.require(RunState::Idle, "run_compress_phase")?;
        self.state = RunState::CompressPhase;
        wait_for_next_tick();

        let mut last_len = 0usize;
        for iteration in 1..=self.config.iterations {
            match self.compress_iteration(iteration, source, archive) {
                Ok(len) => last_len = len,
                Err(e) => {
                    self.state = RunState::Failed;
                    self.log(1, format_args!("compress iteration {} failed: {}\n", iteration, e));
                    return Err(e);
                }
            }
        }

        self.source_len = Some(last_len);
        self.log(
            3,
            format_args!(
                "{}: {} compress iterations, mean ratio {:.2}%\n",
                self.codec.kind(),
                self.stats.compress_samples(),
                self.stats.mean_ratio_pct().unwrap_or(0.0)
            ),
        );
        Ok(last_len)
    }

    fn compress_iteration<R, W>(&mut self, iteration: u32, source: &mut R, archive: &mut W) -> Result<usize, BenchError>
    where
        R: Read + Seek + ?Sized,
        W: Write + Seek + ?Sized,
    {
        let src = read_whole(source, &mut self.allocator)?;
        let mut dst = self.allocator.allocate(self.codec.max_compressed_size(src.len()))?;

        let level = self.config.level;
        let codec = &mut self.codec;
        let (result, elapsed_ms) = time_ms(|| codec.compress_block(src.as_slice(), level, dst.capacity_mut()));
        let written = result?;
        dst.set_len(written, self.codec.kind())?;

        write_verified(archive, dst.as_slice())?;
        self.archive_len = Some(dst.len());

        if self.config.verify_round_trip {
            self.source_digest = Some(xxh64(src.as_slice(), DIGEST_SEED));
        }
        let ratio = ratio_pct(dst.len(), src.len());
        self.stats.record_compress(elapsed_ms, ratio);
        self.log(
            4,
            format_args!(
                "compress   #{:<3} {:>10} -> {:>10} bytes ({:6.2}%) {:9.3} ms\n",
                iteration,
                src.len(),
                dst.len(),
                ratio,
                elapsed_ms
            ),
        );

        rewind(source)?;
        rewind(archive)?;
        Ok(src.len())
    }

    // ── Decompress phase ──────────────────────────────────────────────────────

    /// Run every decompress iteration, decoding the archive into `output`.
    ///
    /// `recorded_len` is the source length returned by the compress phase;
    /// each decoded buffer must be exactly that long.
    pub fn run_decompress_phase<R, W>(
        &mut self,
        archive: &mut R,
        output: &mut W,
        recorded_len: usize,
    ) -> Result<(), BenchError>
    where
        R: Read + Seek + ?Sized,
        W: Write + Seek + ?Sized,
    {
        self.require(RunState::CompressPhase, "run_decompress_phase")?;
        self.state = RunState::DecompressPhase;
        wait_for_next_tick();

        for iteration in 1..=self.config.iterations {
            if let Err(e) = self.decompress_iteration(iteration, archive, output, recorded_len) {
                self.state = RunState::Failed;
                self.log(1, format_args!("decompress iteration {} failed: {}\n", iteration, e));
                return Err(e);
            }
        }

        self.state = RunState::Done;
        self.log(
            3,
            format_args!(
                "{}: {} decompress iterations, mean {:.3} ms\n",
                self.codec.kind(),
                self.stats.decompress_samples(),
                self.stats.mean_decompress_time_ms().unwrap_or(0.0)
            ),
        );
        Ok(())
    }

    fn decompress_iteration<R, W>(
        &mut self,
        iteration: u32,
        archive: &mut R,
        output: &mut W,
        recorded_len: usize,
    ) -> Result<(), BenchError>
    where
        R: Read + Seek + ?Sized,
        W: Write + Seek + ?Sized,
    {
        let packed = read_whole(archive, &mut self.allocator)?;
        if let Some(written) = self.archive_len {
            if packed.len() != written {
                return Err(BenchError::ArchiveLength { written, found: packed.len() });
            }
        }
        let mut out = self.allocator.allocate(recorded_len)?;

        let codec = &mut self.codec;
        let (result, elapsed_ms) = time_ms(|| codec.decompress_block(packed.as_slice(), out.capacity_mut()));
        let decoded = result?;
        out.set_len(decoded, self.codec.kind())?;

        let written = write_verified(output, out.as_slice())?;
        if written != recorded_len {
            return Err(BenchError::WriteVerification { expected: recorded_len, written });
        }

        if let Some(digest) = self.source_digest {
            if xxh64(out.as_slice(), DIGEST_SEED) != digest {
                return Err(BenchError::RoundTripMismatch { iteration });
            }
        }

        self.stats.record_decompress(elapsed_ms);
        self.log(
            4,
            format_args!(
                "decompress #{:<3} {:>10} -> {:>10} bytes {:9.3} ms\n",
                iteration,
                packed.len(),
                written,
                elapsed_ms
            ),
        );

        rewind(archive)?;
        rewind(output)?;
        Ok(())
    }

    // ── Reporting ─────────────────────────────────────────────────────────────

    /// Means over both phases.
    ///
    /// # Errors
    /// [`BenchError::InvalidState`] unless both phases have completed.
    pub fn report(&self) -> Result<BenchReport, BenchError> {
        self.require(RunState::Done, "report")?;
        Ok(BenchReport {
            codec: self.codec.kind(),
            level: self.config.level,
            iterations: self.config.iterations,
            source_len: self.source_len.unwrap_or(0),
            mean_compress_ratio_pct: self.stats.mean_ratio_pct().unwrap_or(0.0),
            mean_compress_time_ms: self.stats.mean_compress_time_ms().unwrap_or(0.0),
            mean_decompress_time_ms: self.stats.mean_decompress_time_ms().unwrap_or(0.0),
        })
    }

    /// Both phases followed by [`report`](Self::report).
    pub fn run<R, A2, W>(&mut self, source: &mut R, archive: &mut A2, output: &mut W) -> Result<BenchReport, BenchError>
    where
        R: Read + Seek + ?Sized,
        A2: Read + Write + Seek + ?Sized,
        W: Write + Seek + ?Sized,
    {
        let recorded_len = self.run_compress_phase(source, archive)?;
        self.run_decompress_phase(archive, output, recorded_len)?;
        self.report()
    }
}
