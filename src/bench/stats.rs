//! Running-sum statistics for one benchmark run.
//!
//! Each phase contributes one sample per iteration. Means are plain
//! `sum / count` and are read only after the phase has finished. The
//! accumulator is owned by the harness, created once, and never reset.

/// Sums and sample counts for the compress and decompress phases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsAccumulator {
    total_compress_time_ms: f64,
    total_ratio_pct: f64,
    total_decompress_time_ms: f64,
    compress_samples: u32,
    decompress_samples: u32,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one compress iteration.
    ///
    /// `ratio_pct` is `compressed_len / source_len * 100`.
    pub fn record_compress(&mut self, elapsed_ms: f64, ratio_pct: f64) {
        self.total_compress_time_ms += elapsed_ms;
        self.total_ratio_pct += ratio_pct;
        self.compress_samples += 1;
    }

    /// Record one decompress iteration.
    pub fn record_decompress(&mut self, elapsed_ms: f64) {
        self.total_decompress_time_ms += elapsed_ms;
        self.decompress_samples += 1;
    }

    pub fn compress_samples(&self) -> u32 {
        self.compress_samples
    }

    pub fn decompress_samples(&self) -> u32 {
        self.decompress_samples
    }

    /// Mean compression ratio in percent, or `None` before any sample.
    pub fn mean_ratio_pct(&self) -> Option<f64> {
        mean(self.total_ratio_pct, self.compress_samples)
    }

    pub fn mean_compress_time_ms(&self) -> Option<f64> {
        mean(self.total_compress_time_ms, self.compress_samples)
    }

    pub fn mean_decompress_time_ms(&self) -> Option<f64> {
        mean(self.total_decompress_time_ms, self.decompress_samples)
    }
}

fn mean(total: f64, samples: u32) -> Option<f64> {
    if samples == 0 {
        None
    } else {
        Some(total / f64::from(samples))
    }
}

/// Compressed size as a percentage of the source size.
///
/// A zero-length source has no meaningful ratio and yields 0.
pub fn ratio_pct(compressed_len: usize, source_len: usize) -> f64 {
    if source_len == 0 {
        return 0.0;
    }
    compressed_len as f64 * 100.0 / source_len as f64
}
