// Integration tests for cli/args.rs — parse_args_from
//
//   - codec flags, level flags, iteration forms
//   - verbosity flags adjust the configured display level
//   - informational flags end parsing early
//   - usage errors: no source, unknown flag, bad or missing iteration count, two sources

use codecbench::cli::args::{last_name_from_path, parse_args_from, EarlyExit, LZO_SUBSTITUTION_NOTE};
use codecbench::codec::{CodecKind, CompressionLevel};

fn parse(list: &[&str]) -> anyhow::Result<codecbench::cli::args::ParsedArgs> {
    let argv: Vec<String> = list.iter().map(|s| s.to_string()).collect();
    parse_args_from("codecbench", &argv)
}

#[test]
fn codec_flags_select_the_backend() {
    for (flag, kind) in [
        ("--zlib", CodecKind::Zlib),
        ("--bzip2", CodecKind::Bzip2),
        ("--snappy", CodecKind::Snappy),
        ("--lz4", CodecKind::Lz4),
        ("--codec=bz2", CodecKind::Bzip2),
    ] {
        let p = parse(&[flag, "in.bin"]).unwrap();
        assert_eq!(p.bench_config.codec, kind, "{flag}");
    }
}

#[test]
fn lzo_runs_lz4_with_a_note() {
    for flag in ["--lzo", "--codec=lzo", "--codec=LZO"] {
        let p = parse(&[flag, "in.bin"]).unwrap();
        assert_eq!(p.bench_config.codec, CodecKind::Lz4, "{flag}");
        assert_eq!(p.notes, vec![LZO_SUBSTITUTION_NOTE.to_owned()], "{flag}");
    }
    assert!(parse(&["--lz4", "in.bin"]).unwrap().notes.is_empty());
}

#[test]
fn last_codec_flag_wins() {
    let p = parse(&["--snappy", "in.bin", "--bzip2"]).unwrap();
    assert_eq!(p.bench_config.codec, CodecKind::Bzip2);
    assert_eq!(p.input_filename.as_deref(), Some("in.bin"));
}

#[test]
fn h_means_high_not_help() {
    let p = parse(&["-l", "-h", "in.bin"]).unwrap();
    assert_eq!(p.bench_config.level, CompressionLevel::High);
    assert_eq!(p.early_exit, None);

    let p = parse(&["-h", "-l", "in.bin"]).unwrap();
    assert_eq!(p.bench_config.level, CompressionLevel::Low);
}

#[test]
fn iteration_forms() {
    assert_eq!(parse(&["-t", "5", "f"]).unwrap().bench_config.iterations, 5);
    assert_eq!(parse(&["-t12", "f"]).unwrap().bench_config.iterations, 12);
    assert_eq!(parse(&["--iterations=3", "f"]).unwrap().bench_config.iterations, 3);
    assert_eq!(parse(&["-lt", "7", "f"]).unwrap().bench_config.iterations, 7);
}

#[test]
fn bad_iteration_counts_are_usage_errors() {
    for argv in [&["-t", "0", "f"][..], &["-t", "abc", "f"], &["-t", "-3", "f"], &["f", "-t"]] {
        let err = parse(argv).unwrap_err();
        assert!(err.to_string().starts_with("bad usage"), "{argv:?}: {err}");
    }
}

#[test]
fn verbosity_flags_move_the_display_level() {
    assert_eq!(parse(&["-v", "f"]).unwrap().bench_config.display_level, 3);
    assert_eq!(parse(&["-vv", "f"]).unwrap().bench_config.display_level, 4);
    assert_eq!(parse(&["-q", "f"]).unwrap().bench_config.display_level, 1);
    assert_eq!(parse(&["-qqqq", "f"]).unwrap().bench_config.display_level, 0);
    assert_eq!(parse(&["--verbose", "--quiet", "f"]).unwrap().bench_config.display_level, 2);
}

#[test]
fn no_verify_disables_the_digest_check() {
    assert!(parse(&["f"]).unwrap().bench_config.verify_round_trip);
    assert!(!parse(&["--no-verify", "f"]).unwrap().bench_config.verify_round_trip);
}

#[test]
fn help_and_version_need_no_source() {
    let p = parse(&["--help"]).unwrap();
    assert_eq!(p.early_exit, Some(EarlyExit::Help));
    assert_eq!(p.input_filename, None);

    assert_eq!(parse(&["--version"]).unwrap().early_exit, Some(EarlyExit::Version));
    assert_eq!(parse(&["-V"]).unwrap().early_exit, Some(EarlyExit::Version));
}

#[test]
fn too_few_arguments() {
    assert_eq!(parse(&[]).unwrap_err().to_string(), "Too few arguments");
    assert_eq!(parse(&["--lz4", "-t", "3"]).unwrap_err().to_string(), "Too few arguments");
}

#[test]
fn unknown_options_are_rejected() {
    for flag in ["--lzma", "-x", "--codec=lzma"] {
        let err = parse(&[flag, "f"]).unwrap_err();
        assert!(err.to_string().starts_with("bad usage"), "{flag}: {err}");
    }
}

#[test]
fn only_one_source_file() {
    let err = parse(&["a.bin", "b.bin"]).unwrap_err();
    assert!(err.to_string().contains("only one source file"));
}

#[test]
fn double_dash_allows_dash_prefixed_names() {
    let p = parse(&["--", "-odd-name"]).unwrap();
    assert_eq!(p.input_filename.as_deref(), Some("-odd-name"));
}

#[test]
fn stdin_is_refused() {
    assert!(parse(&["-"]).is_err());
}

#[test]
fn basename_helper() {
    assert_eq!(last_name_from_path("/a/b/codecbench"), "codecbench");
    assert_eq!(last_name_from_path("C:\\bin\\codecbench.exe"), "codecbench.exe");
    assert_eq!(last_name_from_path("codecbench"), "codecbench");
}
