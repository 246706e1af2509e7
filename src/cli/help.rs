// cli/help.rs — usage text, version banner, and the configuration summary
//
// Functions:
//   write_usage           → usage text into any writer
//   print_usage           → usage text on stdout
//   print_version         → one-line version banner on stdout
//   write_configuration   → "Iterations set to ..." summary into any writer
//   print_configuration   → the summary on stderr, at display level 2

use std::io::{self, Write};

use crate::bench::BenchConfig;
use crate::cli::constants::{display_level, AUTHOR, COMPRESSOR_NAME, VERSION};
use crate::codec::CodecKind;

/// Write brief usage to `out`.
pub fn write_usage<W: Write + ?Sized>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "\t{} [options] source_path", program)?;
    writeln!(out, "options:")?;
    writeln!(out, "-l - low compression")?;
    writeln!(out, "-h - high compression (default)")?;
    writeln!(out, "-t number - iterations (default 1)")?;
    for kind in CodecKind::ALL {
        let default = if kind == CodecKind::default() { " (default)" } else { "" };
        writeln!(out, "--{} - {} compression{}", kind.name(), kind.name().to_uppercase(), default)?;
    }
    writeln!(out, "--lzo - accepted for compatibility, runs lz4")?;
    writeln!(out, "-v / -q - more / less verbose")?;
    writeln!(out, "--no-verify - skip the decoded data check")?;
    writeln!(out, "--help - display this help and exit")?;
    writeln!(out, "-V - display version and exit")?;
    writeln!(out)
}

/// Print brief usage to stdout.
pub fn print_usage(program: &str) {
    let stdout = io::stdout();
    let _ = write_usage(&mut stdout.lock(), program);
}

/// Print the version banner to stdout.
pub fn print_version() {
    println!("*** {} v{}, by {} ***", COMPRESSOR_NAME, VERSION, AUTHOR);
}

/// Write the configuration summary shown before a run.
pub fn write_configuration<W: Write + ?Sized>(out: &mut W, config: &BenchConfig) -> io::Result<()> {
    writeln!(out, "Iterations set to {}", config.iterations)?;
    writeln!(out, "Compression level set to {}.", config.level.name())?;
    if !config.codec.has_levels() {
        writeln!(out, "({} has no compression levels; the level is ignored)", config.codec.name())?;
    }
    writeln!(out, "Library set to {}", config.codec.name())
}

/// Print the configuration summary to stderr when the display level is 2 or more.
pub fn print_configuration(config: &BenchConfig) {
    if display_level() >= 2 {
        let stderr = io::stderr();
        let _ = write_configuration(&mut stderr.lock(), config);
    }
}
