//! Codec adapters.
//!
//! Defines the [`Codec`] trait and one implementation per backend family:
//!
//! | Kind               | Family           | Backend crate | Levels   |
//! |--------------------|------------------|---------------|----------|
//! | [`CodecKind::Zlib`]   | DEFLATE          | `flate2`      | 1 / 9    |
//! | [`CodecKind::Bzip2`]  | block-sort       | `bzip2`       | 1 / 9    |
//! | [`CodecKind::Snappy`] | byte-oriented    | `snap`        | ignored  |
//! | [`CodecKind::Lz4`]    | byte-oriented    | `lz4_flex`    | ignored  |
//!
//! Each backend signals success differently (stream status codes, `Result`s,
//! byte counts). The adapters fold all of that into `Result<usize, CodecError>`
//! so the harness sees one calling convention. Use [`create_codec`] to pick
//! the implementation once, when the configuration is built.

pub mod bzip2;
pub mod lz4;
pub mod snappy;
pub mod zlib;

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

pub use self::bzip2::Bzip2Codec;
pub use self::lz4::Lz4Codec;
pub use self::snappy::SnappyCodec;
pub use self::zlib::ZlibCodec;

// ── Selection enums ───────────────────────────────────────────────────────────

/// Backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodecKind {
    #[default]
    Zlib,
    Bzip2,
    Snappy,
    Lz4,
}

impl CodecKind {
    /// Every supported backend, in CLI order.
    pub const ALL: [CodecKind; 4] =
        [CodecKind::Zlib, CodecKind::Bzip2, CodecKind::Snappy, CodecKind::Lz4];

    /// Lower-case library name, as printed in the configuration summary.
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Zlib => "zlib",
            CodecKind::Bzip2 => "bzip2",
            CodecKind::Snappy => "snappy",
            CodecKind::Lz4 => "lz4",
        }
    }

    /// Archive file extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            CodecKind::Zlib => ".zlib",
            CodecKind::Bzip2 => ".bz2",
            CodecKind::Snappy => ".snappy",
            CodecKind::Lz4 => ".lz4",
        }
    }

    /// Whether the backend honours [`CompressionLevel`].
    pub fn has_levels(self) -> bool {
        matches!(self, CodecKind::Zlib | CodecKind::Bzip2)
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zlib" | "deflate" => Ok(CodecKind::Zlib),
            "bzip2" | "bz2" => Ok(CodecKind::Bzip2),
            "snappy" => Ok(CodecKind::Snappy),
            // LZO has no backend here; lz4 fills the same fast byte-oriented slot.
            "lz4" | "lzo" => Ok(CodecKind::Lz4),
            other => Err(format!("unknown codec: {}", other)),
        }
    }
}

/// Two-step compression effort knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    Low,
    #[default]
    High,
}

impl CompressionLevel {
    /// Numeric level for backends that take one (zlib, bzip2).
    pub fn numeric(self) -> u32 {
        match self {
            CompressionLevel::Low => 1,
            CompressionLevel::High => 9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionLevel::Low => "low",
            CompressionLevel::High => "high",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Codec trait ───────────────────────────────────────────────────────────────

/// One compression backend, driven through fixed-capacity buffers.
///
/// The block forms never allocate: the caller sizes `dst` (from
/// [`max_compressed_size`](Codec::max_compressed_size) when compressing, from
/// the recorded source length when decompressing) and the adapter reports how
/// many bytes it wrote. The archive does not carry its own length; the caller
/// supplies it.
pub trait Codec {
    fn kind(&self) -> CodecKind;

    /// Worst-case compressed size for `input_len` bytes of any content.
    ///
    /// Never smaller than `input_len`.
    fn max_compressed_size(&self, input_len: usize) -> usize;

    /// Compress `src` into `dst`, returning the number of bytes written.
    ///
    /// # Errors
    /// [`CodecError::OutputOverflow`] if `dst` is too small, or
    /// [`CodecError::Compress`] if the backend fails.
    fn compress_block(
        &mut self,
        src: &[u8],
        level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError>;

    /// Decompress `src` into `dst`, whose length is the exact expected output size.
    ///
    /// # Errors
    /// [`CodecError::Decompress`] for malformed input, or
    /// [`CodecError::LengthMismatch`] when the archive decodes to a different size.
    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError>;

    /// Compress into a freshly sized `Vec`.
    fn compress(&mut self, src: &[u8], level: CompressionLevel) -> Result<Vec<u8>, CodecError> {
        let mut dst = vec![0u8; self.max_compressed_size(src.len())];
        let written = self.compress_block(src, level, &mut dst)?;
        dst.truncate(written);
        Ok(dst)
    }

    /// Decompress into a `Vec` of exactly `expected_len` bytes.
    fn decompress(&mut self, src: &[u8], expected_len: usize) -> Result<Vec<u8>, CodecError> {
        let mut dst = vec![0u8; expected_len];
        let written = self.decompress_block(src, &mut dst)?;
        if written != expected_len {
            return Err(CodecError::LengthMismatch {
                codec: self.kind(),
                expected: expected_len,
                actual: written,
            });
        }
        Ok(dst)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn kind(&self) -> CodecKind {
        (**self).kind()
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        (**self).max_compressed_size(input_len)
    }

    fn compress_block(
        &mut self,
        src: &[u8],
        level: CompressionLevel,
        dst: &mut [u8],
    ) -> Result<usize, CodecError> {
        (**self).compress_block(src, level, dst)
    }

    fn decompress_block(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        (**self).decompress_block(src, dst)
    }
}

/// Build the adapter for `kind`.
pub fn create_codec(kind: CodecKind) -> Box<dyn Codec> {
    match kind {
        CodecKind::Zlib => Box::new(ZlibCodec::new()),
        CodecKind::Bzip2 => Box::new(Bzip2Codec::new()),
        CodecKind::Snappy => Box::new(SnappyCodec::new()),
        CodecKind::Lz4 => Box::new(Lz4Codec::new()),
    }
}
