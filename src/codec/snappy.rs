//! Snappy adapter over `snap::raw` (the unframed block format).
//!
//! Snappy has no compression levels. Unlike the stream-status backends it
//! reports success as a plain `Result<usize>`, and the raw format records
//! the decoded length in a varint preamble, so a mismatch with the caller's
//! expectation is caught before anything is decoded.

use snap::raw::{decompress_len, max_compress_len, Decoder, Encoder};

use super::{Codec, CodecKind, CompressionLevel};
use crate::error::CodecError;

pub struct SnappyCodec {
    encoder: Encoder,
    decoder: Decoder,
}

impl SnappyCodec {
    pub fn new() -> Self {
        SnappyCodec { encoder: Encoder::new(), decoder: Decoder::new() }
    }
}

impl Default for SnappyCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Worst-case snappy output: `32 + len + len / 6`.
///
/// `snap` returns 0 for inputs beyond the format's limit; that maps to
/// `usize::MAX` so the allocation fails loudly instead of under-sizing.
pub fn snappy_bound(len: usize) -> usize {
    match max_compress_len(len) {
        0 => usize::MAX,
        n => n,
    }
}

impl Codec for SnappyCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Snappy
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        snappy_bound(input_len)
    }

    fn compress_block(
        &mut self,
        src: &[u8],
        _level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        if dst.len() < snappy_bound(src.len()) {
            return Err(CodecError::OutputOverflow { codec: CodecKind::Snappy, capacity: dst.len() });
        }
        self.encoder
            .compress(src, dst)
            .map_err(|e| CodecError::Compress { codec: CodecKind::Snappy, msg: e.to_string() })
    }

    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        let decoded_len = decompress_len(src)
            .map_err(|e| CodecError::Decompress { codec: CodecKind::Snappy, msg: e.to_string() })?;
        if decoded_len != dst.len() {
            return Err(CodecError::LengthMismatch {
                codec: CodecKind::Snappy,
                expected: dst.len(),
                actual: decoded_len,
            });
        }
        self.decoder
            .decompress(src, dst)
            .map_err(|e| CodecError::Decompress { codec: CodecKind::Snappy, msg: e.to_string() })
    }
}
