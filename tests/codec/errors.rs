// Error-path tests: malformed archives, wrong expected lengths, and
// undersized output buffers are errors for every codec, never truncation.

use codecbench::codec::{create_codec, CodecKind, CompressionLevel};
use codecbench::error::CodecError;

fn sample() -> Vec<u8> {
    b"error path sample, error path sample, error path sample. ".repeat(30)
}

#[test]
fn garbage_archive_is_rejected() {
    let garbage = vec![0xFFu8; 64];
    for kind in CodecKind::ALL {
        let err = create_codec(kind).decompress(&garbage, 100).unwrap_err();
        assert_eq!(err.codec(), kind);
    }
}

#[test]
fn truncated_archive_is_rejected() {
    let data = sample();
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, CompressionLevel::High).unwrap();
        let cut = &packed[..packed.len() / 2];
        assert!(codec.decompress(cut, data.len()).is_err(), "{kind}");
    }
}

#[test]
fn longer_expected_length_is_rejected() {
    let data = sample();
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, CompressionLevel::Low).unwrap();
        let err = codec.decompress(&packed, data.len() + 1).unwrap_err();
        assert!(
            matches!(err, CodecError::LengthMismatch { .. } | CodecError::Decompress { .. }),
            "{kind}: {err:?}"
        );
    }
}

#[test]
fn shorter_expected_length_is_rejected() {
    let data = sample();
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, CompressionLevel::Low).unwrap();
        assert!(codec.decompress(&packed, data.len() - 1).is_err(), "{kind}");
    }
}

#[test]
fn undersized_output_is_an_overflow_not_a_truncation() {
    let data = sample();
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        let mut dst = vec![0u8; 8];
        let err = codec.compress_block(&data, CompressionLevel::High, &mut dst).unwrap_err();
        assert_eq!(err, CodecError::OutputOverflow { codec: kind, capacity: 8 }, "{kind}");
    }
}

#[test]
fn foreign_archive_is_rejected() {
    let data = sample();
    let zlib = create_codec(CodecKind::Zlib).compress(&data, CompressionLevel::High).unwrap();
    let bz2 = create_codec(CodecKind::Bzip2).compress(&data, CompressionLevel::High).unwrap();
    assert!(create_codec(CodecKind::Bzip2).decompress(&zlib, data.len()).is_err());
    assert!(create_codec(CodecKind::Zlib).decompress(&bz2, data.len()).is_err());
}
