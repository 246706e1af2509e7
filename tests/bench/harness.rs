// Integration tests for bench/harness.rs — BenchmarkHarness
//
//   - compress phase: one archive write per iteration, streams rewound, length recorded
//   - decompress phase: decoded bytes written once per iteration, streams rewound
//   - every iteration reads identical source bytes (no drift across rewinds)
//   - mean ratio is the arithmetic mean of the per-iteration ratios
//   - phase ordering and report availability

use std::io::Cursor;

use codecbench::bench::{BenchmarkHarness, RunState};
use codecbench::buffer::HeapAllocator;
use codecbench::codec::{create_codec, CodecKind, CompressionLevel};
use codecbench::error::BenchError;

use crate::support::{quiet_config, CountingAllocator, FakeCodec, TrackedCursor};

fn text(len: usize) -> Vec<u8> {
    b"Sphinx of black quartz, judge my vow. ".iter().copied().cycle().take(len).collect()
}

// ── Scenario ──────────────────────────────────────────────────────────────────

#[test]
fn thousand_bytes_three_iterations_zlib_high() {
    let data = text(1000);
    let mut cfg = quiet_config(3);
    cfg.set_codec(CodecKind::Zlib).set_level(CompressionLevel::High);
    let mut h = BenchmarkHarness::new(cfg).unwrap();

    let mut src = TrackedCursor::new(data.clone());
    let mut archive = TrackedCursor::new(Vec::new());
    let mut out = TrackedCursor::new(Vec::new());

    let len = h.run_compress_phase(&mut src, &mut archive).unwrap();
    assert_eq!(len, 1000);
    assert_eq!(archive.flushes, 3, "one verified archive write per iteration");
    assert_eq!(h.stats().compress_samples(), 3);

    h.run_decompress_phase(&mut archive, &mut out, len).unwrap();
    assert_eq!(out.flushes, 3, "one verified output write per iteration");
    assert_eq!(out.get_ref(), &data);
    assert_eq!(h.stats().decompress_samples(), 3);

    let report = h.report().unwrap();
    assert_eq!(report.iterations, 3);
    assert_eq!(report.source_len, 1000);
    assert!(report.mean_decompress_time_ms > 0.0);

    let archive_len = archive.get_ref().len() as f64;
    assert!((report.mean_compress_ratio_pct - archive_len / 10.0).abs() < 1e-9);
}

// ── Stream handling ───────────────────────────────────────────────────────────

#[test]
fn streams_are_rewound_after_each_phase() {
    let mut h = BenchmarkHarness::with_parts(quiet_config(4), FakeCodec::new(), HeapAllocator).unwrap();
    let mut src = TrackedCursor::new(text(300));
    let mut archive = TrackedCursor::new(Vec::new());
    let mut out = TrackedCursor::new(Vec::new());

    let len = h.run_compress_phase(&mut src, &mut archive).unwrap();
    assert_eq!(src.position(), 0);
    assert_eq!(archive.position(), 0);

    h.run_decompress_phase(&mut archive, &mut out, len).unwrap();
    assert_eq!(archive.position(), 0);
    assert_eq!(out.position(), 0);
}

#[test]
fn every_iteration_reads_identical_source_bytes() {
    let data = text(777);
    let codec = FakeCodec::new();
    let log = codec.log();
    let mut h = BenchmarkHarness::with_parts(quiet_config(5), codec, HeapAllocator).unwrap();

    let mut src = Cursor::new(data.clone());
    let mut archive = Cursor::new(Vec::new());
    h.run_compress_phase(&mut src, &mut archive).unwrap();

    let log = log.borrow();
    assert_eq!(log.compress_inputs.len(), 5);
    assert!(log.compress_inputs.iter().all(|seen| seen == &data));
}

#[test]
fn buffers_are_sized_from_the_codec_bound() {
    let alloc = CountingAllocator::new();
    let sizes = alloc.sizes.clone();
    let codec = FakeCodec::new().with_padding(&[7]);
    let mut h = BenchmarkHarness::with_parts(quiet_config(2), codec, alloc).unwrap();

    let mut src = Cursor::new(text(100));
    let mut archive = Cursor::new(Vec::new());
    let mut out = Cursor::new(Vec::new());
    h.run(&mut src, &mut archive, &mut out).unwrap();

    // compress: source, bound; decompress: archive, recorded length.
    assert_eq!(*sizes.borrow(), vec![100, 107, 100, 107, 107, 100, 107, 100]);
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[test]
fn mean_ratio_is_mean_of_iteration_ratios() {
    // 100-byte source padded by 0, 50, 100 → 100%, 150%, 200%.
    let codec = FakeCodec::new().with_padding(&[0, 50, 100]);
    let mut h = BenchmarkHarness::with_parts(quiet_config(3), codec, HeapAllocator).unwrap();
    let mut src = Cursor::new(text(100));
    let mut archive = Cursor::new(Vec::new());
    let mut out = Cursor::new(Vec::new());

    let report = h.run(&mut src, &mut archive, &mut out).unwrap();
    assert!((report.mean_compress_ratio_pct - 150.0).abs() < 1e-9);
    assert_eq!(h.stats().compress_samples(), 3);
}

#[test]
fn real_codecs_report_stable_ratio() {
    // Deterministic codecs produce the same archive every iteration, so the
    // mean equals any single ratio.
    for kind in CodecKind::ALL {
        let data = text(5000);
        let mut once = create_codec(kind);
        let single = once.compress(&data, CompressionLevel::High).unwrap().len() as f64 / 50.0;

        let mut cfg = quiet_config(3);
        cfg.set_codec(kind);
        let mut h = BenchmarkHarness::new(cfg).unwrap();
        let report = h
            .run(&mut Cursor::new(data), &mut Cursor::new(Vec::new()), &mut Cursor::new(Vec::new()))
            .unwrap();
        assert!((report.mean_compress_ratio_pct - single).abs() < 1e-9, "{kind}");
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[test]
fn report_requires_both_phases() {
    let mut h = BenchmarkHarness::with_parts(quiet_config(1), FakeCodec::new(), HeapAllocator).unwrap();
    let mut src = Cursor::new(text(10));
    let mut archive = Cursor::new(Vec::new());
    h.run_compress_phase(&mut src, &mut archive).unwrap();

    let err = h.report().unwrap_err();
    assert!(matches!(err, BenchError::InvalidState { operation: "report", state: "CompressPhase" }));
}

#[test]
fn compress_phase_cannot_run_twice() {
    let mut h = BenchmarkHarness::with_parts(quiet_config(1), FakeCodec::new(), HeapAllocator).unwrap();
    let mut src = Cursor::new(text(10));
    let mut archive = Cursor::new(Vec::new());
    h.run_compress_phase(&mut src, &mut archive).unwrap();
    let err = h.run_compress_phase(&mut src, &mut archive).unwrap_err();
    assert!(matches!(err, BenchError::InvalidState { operation: "run_compress_phase", .. }));
    // An ordering mistake does not poison a healthy run.
    assert_eq!(h.state(), RunState::CompressPhase);
}

#[test]
fn recorded_len_is_threaded_to_decompress() {
    let mut h = BenchmarkHarness::with_parts(quiet_config(2), FakeCodec::new(), HeapAllocator).unwrap();
    assert_eq!(h.recorded_len(), None);
    let mut src = Cursor::new(text(64));
    let mut archive = Cursor::new(Vec::new());
    let len = h.run_compress_phase(&mut src, &mut archive).unwrap();
    assert_eq!(h.recorded_len(), Some(64));
    assert_eq!(len, 64);
}
