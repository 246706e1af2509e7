//! bzip2 (block-sort) adapter over the `bzip2` crate's raw stream API.
//!
//! libbzip2 signals through status codes: `StreamEnd` means done, while
//! `FinishOk` / `Ok` with a full output buffer means "give me more room".
//! The one-shot buffer-to-buffer calls in libbzip2 treat that as an output
//! overflow, and so does this adapter.
//!
//! Output sizing follows the libbzip2 manual: 1% over the input plus 600
//! bytes. The 1% is a ceiling division, so it never rounds away to zero for
//! small inputs.

use ::bzip2::{Action, Compress, Compression, Decompress, Status};

use super::{Codec, CodecKind, CompressionLevel};
use crate::error::CodecError;

/// Fixed slack on top of the 1% margin.
const BZIP2_BOUND_OVERHEAD: usize = 600;

/// libbzip2 default work factor (0 selects it).
const BZIP2_WORK_FACTOR: u32 = 0;

#[derive(Debug, Default)]
pub struct Bzip2Codec;

impl Bzip2Codec {
    pub fn new() -> Self {
        Bzip2Codec
    }
}

/// Worst-case bzip2 output size for `len` input bytes: `len + ceil(len / 100) + 600`.
pub fn bzip2_bound(len: usize) -> usize {
    len.saturating_add(len.div_ceil(100))
        .saturating_add(BZIP2_BOUND_OVERHEAD)
}

fn compress_err(e: impl std::fmt::Display) -> CodecError {
    CodecError::Compress { codec: CodecKind::Bzip2, msg: e.to_string() }
}

fn decompress_err(e: impl std::fmt::Display) -> CodecError {
    CodecError::Decompress { codec: CodecKind::Bzip2, msg: e.to_string() }
}

impl Codec for Bzip2Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Bzip2
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        bzip2_bound(input_len)
    }

    fn compress_block(
        &mut self,
        src: &[u8],
        level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        let mut stream = Compress::new(Compression::new(level.numeric()), BZIP2_WORK_FACTOR);
        loop {
            let consumed = stream.total_in() as usize;
            let produced = stream.total_out() as usize;
            let status = stream
                .compress(&src[consumed..], &mut dst[produced..], Action::Finish)
                .map_err(compress_err)?;
            let now_out = stream.total_out() as usize;
            if matches!(status, Status::StreamEnd) {
                return Ok(now_out);
            }
            let stalled = stream.total_in() as usize == consumed && now_out == produced;
            if now_out == dst.len() || stalled {
                return Err(CodecError::OutputOverflow { codec: CodecKind::Bzip2, capacity: dst.len() });
            }
        }
    }

    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        let mut scratch = [0u8; 1];
        let expected = dst.len();
        let out: &mut [u8] = if dst.is_empty() { &mut scratch } else { dst };

        let mut stream = Decompress::new(false);
        loop {
            let consumed = stream.total_in() as usize;
            let produced = stream.total_out() as usize;
            let status = stream
                .decompress(&src[consumed..], &mut out[produced..])
                .map_err(decompress_err)?;
            let now_out = stream.total_out() as usize;

            if matches!(status, Status::StreamEnd) {
                if now_out != expected {
                    return Err(CodecError::LengthMismatch {
                        codec: CodecKind::Bzip2,
                        expected,
                        actual: now_out,
                    });
                }
                return Ok(now_out);
            }

            // Output full before the end marker: drain the rest to learn the
            // real decoded length. Only the end marker may remain.
            if now_out == out.len() {
                let actual = decoded_len_past_capacity(&mut stream, src)?;
                if actual != expected {
                    return Err(CodecError::LengthMismatch { codec: CodecKind::Bzip2, expected, actual });
                }
                return Ok(actual);
            }
            if stream.total_in() as usize == consumed && now_out == produced {
                return Err(decompress_err("unexpected end of archive"));
            }
        }
    }
}

/// Keep decoding into a scratch buffer until the stream ends and return the
/// total decoded length.
fn decoded_len_past_capacity(stream: &mut Decompress, src: &[u8]) -> Result<usize, CodecError> {
    let mut scratch = [0u8; 4096];
    loop {
        let consumed = stream.total_in() as usize;
        let produced = stream.total_out();
        let status = stream
            .decompress(&src[consumed..], &mut scratch)
            .map_err(decompress_err)?;
        if matches!(status, Status::StreamEnd) {
            return Ok(stream.total_out() as usize);
        }
        if stream.total_in() as usize == consumed && stream.total_out() == produced {
            return Err(decompress_err("unexpected end of archive"));
        }
    }
}
