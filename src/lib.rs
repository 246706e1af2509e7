// codecbench — round-trip compression benchmark over swappable codec backends

pub mod timefn;
pub mod error;
pub mod buffer;
pub mod codec;
pub mod bench;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use bench::{bench_file, BenchConfig, BenchReport, BenchmarkHarness};
pub use buffer::{BufferAllocator, HeapAllocator, OwnedBuffer};
pub use codec::{create_codec, Codec, CodecKind, CompressionLevel};
pub use error::{AllocationError, BenchError, CodecError};

