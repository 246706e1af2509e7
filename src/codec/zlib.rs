//! zlib (DEFLATE) adapter over `flate2`'s raw `Compress` / `Decompress` streams.
//!
//! The stream API reports progress through `Status` plus running
//! `total_in`/`total_out` counters instead of a single success flag. Both
//! directions drive it to `StreamEnd` in a loop and treat "output slice full
//! without reaching the end" as an overflow.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use super::{Codec, CodecKind, CompressionLevel};
use crate::error::CodecError;

/// Fixed per-stream overhead (header, trailer, final block) covered by the bound.
const ZLIB_BOUND_OVERHEAD: usize = 128;

/// Stored-block granularity used in the fallback term of the bound.
const ZLIB_STORED_BLOCK: usize = 31 * 1024;

#[derive(Debug, Default)]
pub struct ZlibCodec;

impl ZlibCodec {
    pub fn new() -> Self {
        ZlibCodec
    }
}

/// Worst-case zlib output size for `len` input bytes.
///
/// Larger of a 10% expansion term and a per-stored-block term, both on top of
/// a fixed overhead. The percentage is rounded up, never down.
pub fn zlib_bound(len: usize) -> usize {
    let pct = len.saturating_add(len.div_ceil(10));
    let stored = len.saturating_add((len / ZLIB_STORED_BLOCK + 1) * 5);
    pct.max(stored).saturating_add(ZLIB_BOUND_OVERHEAD)
}

fn compress_err(e: impl std::fmt::Display) -> CodecError {
    CodecError::Compress { codec: CodecKind::Zlib, msg: e.to_string() }
}

fn decompress_err(e: impl std::fmt::Display) -> CodecError {
    CodecError::Decompress { codec: CodecKind::Zlib, msg: e.to_string() }
}

/// Inflate all of `src` into `out`. Returns `(bytes_written, reached_end)`.
fn inflate_into(src: &[u8], out: &mut [u8]) -> Result<(usize, bool), CodecError> {
    let mut stream = Decompress::new(true);
    loop {
        let consumed = stream.total_in() as usize;
        let produced = stream.total_out() as usize;
        let status = stream
            .decompress(&src[consumed..], &mut out[produced..], FlushDecompress::Finish)
            .map_err(decompress_err)?;
        let now_out = stream.total_out() as usize;
        match status {
            Status::StreamEnd => return Ok((now_out, true)),
            _ if now_out == out.len() => return Ok((now_out, false)),
            _ if stream.total_in() as usize == consumed && now_out == produced => {
                return Err(decompress_err("truncated zlib stream"));
            }
            _ => {}
        }
    }
}

impl Codec for ZlibCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Zlib
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        zlib_bound(input_len)
    }

    fn compress_block(
        &mut self,
        src: &[u8],
        level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        let mut stream = Compress::new(Compression::new(level.numeric()), true);
        loop {
            let consumed = stream.total_in() as usize;
            let produced = stream.total_out() as usize;
            let status = stream
                .compress(&src[consumed..], &mut dst[produced..], FlushCompress::Finish)
                .map_err(compress_err)?;
            let now_out = stream.total_out() as usize;
            if status == Status::StreamEnd {
                return Ok(now_out);
            }
            // Finishing with no room left, or with no progress at all, both
            // mean the remaining output does not fit.
            let stalled = stream.total_in() as usize == consumed && now_out == produced;
            if now_out == dst.len() || stalled {
                return Err(CodecError::OutputOverflow { codec: CodecKind::Zlib, capacity: dst.len() });
            }
        }
    }

    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        // An empty destination still needs somewhere for inflate to write, so a
        // zero-length expectation decodes into a one-byte scratch that must stay unused.
        let mut scratch = [0u8; 1];
        let expected = dst.len();
        let out: &mut [u8] = if dst.is_empty() { &mut scratch } else { dst };

        let (written, ended) = inflate_into(src, out)?;
        if !ended || written != expected {
            return Err(CodecError::LengthMismatch {
                codec: CodecKind::Zlib,
                expected,
                actual: written,
            });
        }
        Ok(written)
    }
}
