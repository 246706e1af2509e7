//! LZ4 block adapter over `lz4_flex::block`.
//!
//! Raw LZ4 blocks (no frame, no size prefix). The decoded size is supplied
//! by the caller, which matches how the harness threads the recorded source
//! length into the decompress phase.

use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size};

use super::{Codec, CodecKind, CompressionLevel};
use crate::error::CodecError;

#[derive(Debug, Default)]
pub struct Lz4Codec;

impl Lz4Codec {
    pub fn new() -> Self {
        Lz4Codec
    }
}

/// Worst-case LZ4 block size for `len` input bytes.
pub fn lz4_bound(len: usize) -> usize {
    get_maximum_output_size(len)
}

impl Codec for Lz4Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Lz4
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        lz4_bound(input_len)
    }

    fn compress_block(
        &mut self,
        src: &[u8],
        _level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        // The only failure lz4_flex reports here is a too-small output slice.
        compress_into(src, dst)
            .map_err(|_| CodecError::OutputOverflow { codec: CodecKind::Lz4, capacity: dst.len() })
    }

    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        let expected = dst.len();
        let written = decompress_into(src, dst)
            .map_err(|e| CodecError::Decompress { codec: CodecKind::Lz4, msg: e.to_string() })?;
        if written != expected {
            return Err(CodecError::LengthMismatch { codec: CodecKind::Lz4, expected, actual: written });
        }
        Ok(written)
    }
}
