#![no_main]
use codecbench::{create_codec, CodecKind, CompressionLevel};
use libfuzzer_sys::fuzz_target;

// First byte picks codec and level; the rest is the payload.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let kind = CodecKind::ALL[(selector & 0x03) as usize];
    let level = if selector & 0x04 == 0 { CompressionLevel::Low } else { CompressionLevel::High };

    let mut codec = create_codec(kind);
    let packed = codec
        .compress(payload, level)
        .expect("compress must fit in max_compressed_size");
    assert!(packed.len() <= codec.max_compressed_size(payload.len()));

    let recovered = codec
        .decompress(&packed, payload.len())
        .expect("own archive must decode");
    assert_eq!(recovered, payload, "{} round-trip mismatch", kind);
});
