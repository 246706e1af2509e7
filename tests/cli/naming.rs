// Integration tests for cli/naming.rs — archive and output paths

use std::path::Path;

use codecbench::bench::{BenchConfig, BenchPaths};
use codecbench::cli::naming::{archive_path, output_path};
use codecbench::codec::CodecKind;

#[test]
fn names_follow_source_extension_dec_pattern() {
    for kind in CodecKind::ALL {
        let archive = archive_path(Path::new("/tmp/x/data.bin"), kind);
        let output = output_path(&archive);
        assert_eq!(archive.to_str().unwrap(), format!("/tmp/x/data.bin{}", kind.extension()));
        assert_eq!(output.to_str().unwrap(), format!("/tmp/x/data.bin{}_dec", kind.extension()));
    }
}

#[test]
fn source_without_extension() {
    assert_eq!(archive_path(Path::new("README"), CodecKind::Bzip2), Path::new("README.bz2"));
}

#[test]
fn bench_paths_use_the_configured_codec() {
    let mut cfg = BenchConfig::default();
    cfg.set_codec(CodecKind::Snappy);
    let paths = BenchPaths::for_source(Path::new("in.txt"), &cfg);
    assert_eq!(paths.source, Path::new("in.txt"));
    assert_eq!(paths.archive, Path::new("in.txt.snappy"));
    assert_eq!(paths.output, Path::new("in.txt.snappy_dec"));
}
