#![no_main]
use codecbench::{create_codec, CodecKind};
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must be rejected with an error, never a panic or overrun.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let kind = CodecKind::ALL[(selector & 0x03) as usize];
    let expected = (selector as usize) * 17;
    let mut dst = vec![0u8; expected];
    if let Ok(n) = create_codec(kind).decompress_block(payload, &mut dst) {
        assert_eq!(n, expected);
    }
});
