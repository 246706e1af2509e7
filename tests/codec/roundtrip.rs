// Round-trip tests for every codec adapter and level.
//
// decompress(compress(x, level), len(x)) == x for empty, tiny, textual,
// repetitive, and high-entropy inputs.

use codecbench::codec::{create_codec, CodecKind, CompressionLevel};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const LEVELS: [CompressionLevel; 2] = [CompressionLevel::Low, CompressionLevel::High];

fn assert_round_trip(kind: CodecKind, level: CompressionLevel, data: &[u8]) {
    let mut codec = create_codec(kind);
    let packed = codec
        .compress(data, level)
        .unwrap_or_else(|e| panic!("{kind}/{level}: compress {} bytes: {e}", data.len()));
    let back = codec
        .decompress(&packed, data.len())
        .unwrap_or_else(|e| panic!("{kind}/{level}: decompress {} bytes: {e}", data.len()));
    assert_eq!(back, data, "{kind}/{level}: round trip of {} bytes", data.len());
}

#[test]
fn empty_input_round_trips() {
    for kind in CodecKind::ALL {
        for level in LEVELS {
            assert_round_trip(kind, level, b"");
        }
    }
}

#[test]
fn single_byte_round_trips() {
    for kind in CodecKind::ALL {
        for level in LEVELS {
            assert_round_trip(kind, level, b"x");
        }
    }
}

#[test]
fn repetitive_input_shrinks() {
    let data = vec![b'A'; 64 * 1024];
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, CompressionLevel::High).unwrap();
        assert!(packed.len() < data.len() / 10, "{kind}: {} bytes", packed.len());
        assert_eq!(codec.decompress(&packed, data.len()).unwrap(), data);
    }
}

#[test]
fn high_entropy_input_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xC0DEC);
    for len in [1usize, 31, 1000, 31 * 1024, 200_000] {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        for kind in CodecKind::ALL {
            for level in LEVELS {
                assert_round_trip(kind, level, &data);
            }
        }
    }
}

#[test]
fn compression_is_deterministic() {
    let data = b"determinism determinism determinism".repeat(50);
    for kind in CodecKind::ALL {
        for level in LEVELS {
            let a = create_codec(kind).compress(&data, level).unwrap();
            let b = create_codec(kind).compress(&data, level).unwrap();
            assert_eq!(a, b, "{kind}/{level}");
        }
    }
}

#[test]
fn adapter_is_reusable_across_calls() {
    let inputs: [&[u8]; 3] = [b"first", b"a much longer second input, repeated, repeated", b""];
    for kind in CodecKind::ALL {
        let mut codec = create_codec(kind);
        for input in inputs {
            let packed = codec.compress(input, CompressionLevel::High).unwrap();
            assert_eq!(codec.decompress(&packed, input.len()).unwrap(), input, "{kind}");
        }
    }
}

fn any_kind() -> impl Strategy<Value = CodecKind> {
    prop::sample::select(CodecKind::ALL.to_vec())
}

fn any_level() -> impl Strategy<Value = CompressionLevel> {
    prop::sample::select(LEVELS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip(
        kind in any_kind(),
        level in any_level(),
        data in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, level).unwrap();
        prop_assert!(packed.len() <= codec.max_compressed_size(data.len()));
        prop_assert_eq!(codec.decompress(&packed, data.len()).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_low_alphabet(
        kind in any_kind(),
        data in prop::collection::vec(0u8..4, 0..8192),
    ) {
        let mut codec = create_codec(kind);
        let packed = codec.compress(&data, CompressionLevel::High).unwrap();
        prop_assert_eq!(codec.decompress(&packed, data.len()).unwrap(), data);
    }
}
