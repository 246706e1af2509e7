//! Error kinds surfaced by the benchmark core.
//!
//! Three layers, innermost first:
//!
//! - [`AllocationError`]: a buffer could not be obtained.
//! - [`CodecError`]: a backend reported failure, or its output did not fit.
//! - [`BenchError`]: everything that can abort a run, wrapping the two above
//!   plus stream, configuration, and verification failures.
//!
//! None of these are retried. Every error aborts the current phase and the
//! run, and is handed back to the caller untouched.

use std::fmt;
use std::io;

use crate::codec::CodecKind;

// ── AllocationError ───────────────────────────────────────────────────────────

/// Failure to obtain an owned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    /// A zero-length buffer was requested (degenerate input).
    ZeroSize,
    /// The allocator could not reserve `requested` bytes.
    OutOfMemory { requested: usize },
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::ZeroSize => f.write_str("allocation error : zero-sized buffer requested"),
            AllocationError::OutOfMemory { requested } => {
                write!(f, "allocation error : not enough memory for {} bytes", requested)
            }
        }
    }
}

impl std::error::Error for AllocationError {}

// ── CodecError ────────────────────────────────────────────────────────────────

/// Failure reported by, or detected around, a codec call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The backend rejected the input while compressing.
    Compress { codec: CodecKind, msg: String },
    /// The backend rejected the archive while decompressing (malformed data).
    Decompress { codec: CodecKind, msg: String },
    /// Output did not fit in the buffer the codec was given.
    OutputOverflow { codec: CodecKind, capacity: usize },
    /// The archive decoded to a different length than the caller expected.
    LengthMismatch { codec: CodecKind, expected: usize, actual: usize },
}

impl CodecError {
    /// Codec that produced this error.
    pub fn codec(&self) -> CodecKind {
        match self {
            CodecError::Compress { codec, .. }
            | CodecError::Decompress { codec, .. }
            | CodecError::OutputOverflow { codec, .. }
            | CodecError::LengthMismatch { codec, .. } => *codec,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Compress { codec, msg } => {
                write!(f, "{} compression error: {}", codec.name(), msg)
            }
            CodecError::Decompress { codec, msg } => {
                write!(f, "{} decompression error: {}", codec.name(), msg)
            }
            CodecError::OutputOverflow { codec, capacity } => write!(
                f,
                "{} error: output does not fit in {} byte buffer",
                codec.name(),
                capacity
            ),
            CodecError::LengthMismatch { codec, expected, actual } => write!(
                f,
                "{} decompression error: expected {} bytes, archive holds {}",
                codec.name(),
                expected,
                actual
            ),
        }
    }
}

impl std::error::Error for CodecError {}

// ── BenchError ────────────────────────────────────────────────────────────────

/// Any failure that aborts a benchmark run.
#[derive(Debug)]
pub enum BenchError {
    Allocation(AllocationError),
    Codec(CodecError),
    /// Bytes accepted by a stream differ from what was handed to it, or the
    /// stream reported an error while accepting them.
    WriteVerification { expected: usize, written: usize },
    /// Invalid configuration or unusable source (e.g. zero iterations, empty input).
    Configuration(String),
    Io(io::Error),
    /// A harness operation was called out of phase order.
    InvalidState { operation: &'static str, state: &'static str },
    /// Decoded bytes do not match the source that was compressed.
    RoundTripMismatch { iteration: u32 },
    /// The archive stream holds a different number of bytes than the last
    /// compress iteration wrote (a stale tail from a longer earlier archive).
    ArchiveLength { written: usize, found: usize },
}

impl BenchError {
    /// Short stable label for the error kind, used in log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BenchError::Allocation(_) => "AllocationError",
            BenchError::Codec(_) => "CodecError",
            BenchError::WriteVerification { .. } => "WriteVerificationError",
            BenchError::Configuration(_) => "ConfigurationError",
            BenchError::Io(_) => "IoError",
            BenchError::InvalidState { .. } => "InvalidStateError",
            BenchError::RoundTripMismatch { .. } => "RoundTripMismatchError",
            BenchError::ArchiveLength { .. } => "ArchiveLengthError",
        }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Allocation(e) => fmt::Display::fmt(e, f),
            BenchError::Codec(e) => fmt::Display::fmt(e, f),
            BenchError::WriteVerification { expected, written } => write!(
                f,
                "write verification error: wrote {} of {} bytes",
                written, expected
            ),
            BenchError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            BenchError::Io(e) => write!(f, "i/o error: {}", e),
            BenchError::InvalidState { operation, state } => {
                write!(f, "{} is not allowed in state {}", operation, state)
            }
            BenchError::RoundTripMismatch { iteration } => write!(
                f,
                "decoded data differs from source (decompress iteration {})",
                iteration
            ),
            BenchError::ArchiveLength { written, found } => write!(
                f,
                "archive holds {} bytes but the last compress iteration wrote {}",
                found, written
            ),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Allocation(e) => Some(e),
            BenchError::Codec(e) => Some(e),
            BenchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocationError> for BenchError {
    fn from(e: AllocationError) -> Self {
        BenchError::Allocation(e)
    }
}

impl From<CodecError> for BenchError {
    fn from(e: CodecError) -> Self {
        BenchError::Codec(e)
    }
}

impl From<io::Error> for BenchError {
    fn from(e: io::Error) -> Self {
        BenchError::Io(e)
    }
}
