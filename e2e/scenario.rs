// e2e/scenario.rs — end-to-end runs of the library API against real files
//
// Drives `bench_file` and `BenchmarkHarness` over on-disk files, the way the
// binary does, and checks the reported means and the files left behind.

use std::fs::{self, File, OpenOptions};
use std::io::{Seek, Write};

use codecbench::bench::{bench_file, BenchConfig, BenchmarkHarness, RunState};
use codecbench::{BenchError, CodecKind, CompressionLevel};
use tempfile::TempDir;

fn text_1000() -> Vec<u8> {
    let line = b"The quick brown fox jumps over the lazy dog. ";
    line.iter().copied().cycle().take(1000).collect()
}

fn quiet(codec: CodecKind, level: CompressionLevel, iterations: u32) -> BenchConfig {
    let mut cfg = BenchConfig::default();
    cfg.set_codec(codec)
        .set_level(level)
        .set_iterations(iterations)
        .set_notification_level(0);
    cfg
}

#[test]
fn thousand_bytes_three_iterations_zlib_high() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sample.txt");
    let data = text_1000();
    fs::write(&input, &data).unwrap();

    let report = bench_file(&input, quiet(CodecKind::Zlib, CompressionLevel::High, 3)).unwrap();
    assert_eq!(report.iterations, 3);
    assert_eq!(report.source_len, 1000);
    assert!(report.mean_compress_ratio_pct > 0.0 && report.mean_compress_ratio_pct < 100.0);
    assert!(report.mean_compress_time_ms >= 0.0);
    assert!(report.mean_decompress_time_ms > 0.0);

    let archive = fs::read(dir.path().join("sample.txt.zlib")).unwrap();
    let expected_ratio = archive.len() as f64 / 1000.0 * 100.0;
    assert!((report.mean_compress_ratio_pct - expected_ratio).abs() < 1e-9);
    assert_eq!(fs::read(dir.path().join("sample.txt.zlib_dec")).unwrap(), data);
}

#[test]
fn every_codec_and_level_round_trips_through_files() {
    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8 ^ (i / 97) as u8).collect();
    for kind in CodecKind::ALL {
        for level in [CompressionLevel::Low, CompressionLevel::High] {
            let dir = TempDir::new().unwrap();
            let input = dir.path().join("blob.bin");
            fs::write(&input, &data).unwrap();

            let report = bench_file(&input, quiet(kind, level, 2)).unwrap();
            assert_eq!(report.codec, kind);
            assert_eq!(report.level, level);

            let decoded = dir.path().join(format!("blob.bin{}_dec", kind.extension()));
            assert_eq!(fs::read(decoded).unwrap(), data, "{kind} {level}");
        }
    }
}

#[test]
fn stale_archive_content_is_truncated() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, text_1000()).unwrap();
    // A leftover archive much larger than the new one must not leak into decoding.
    fs::write(dir.path().join("in.txt.snappy"), vec![0xAB; 50_000]).unwrap();

    let report = bench_file(&input, quiet(CodecKind::Snappy, CompressionLevel::High, 1)).unwrap();
    assert_eq!(report.source_len, 1000);
}

#[test]
fn harness_over_files_leaves_streams_rewound() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, text_1000()).unwrap();

    let open_rw = |name: &str| {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(dir.path().join(name))
            .unwrap()
    };
    let mut src = File::open(&input).unwrap();
    let mut archive = open_rw("in.txt.bz2");
    let mut output = open_rw("in.txt.bz2_dec");

    let mut h = BenchmarkHarness::new(quiet(CodecKind::Bzip2, CompressionLevel::Low, 2)).unwrap();
    let len = h.run_compress_phase(&mut src, &mut archive).unwrap();
    assert_eq!(len, 1000);
    assert_eq!(h.state(), RunState::CompressPhase);
    assert_eq!(src.stream_position().unwrap(), 0);
    assert_eq!(archive.stream_position().unwrap(), 0);

    h.run_decompress_phase(&mut archive, &mut output, len).unwrap();
    assert_eq!(h.state(), RunState::Done);
    assert_eq!(output.stream_position().unwrap(), 0);
    output.flush().unwrap();
    assert_eq!(fs::read(dir.path().join("in.txt.bz2_dec")).unwrap(), text_1000());
}

#[test]
fn empty_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty");
    fs::write(&input, b"").unwrap();
    let err = bench_file(&input, quiet(CodecKind::Lz4, CompressionLevel::High, 1)).unwrap_err();
    assert!(matches!(err, BenchError::Configuration(ref m) if m.contains("no data")));
}
