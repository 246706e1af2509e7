//! Command-line argument parsing for `codecbench`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value carrying the benchmark configuration
//! and the source path.
//!
//! ```text
//! codecbench [options] source_path
//!   -l | -h                       low / high compression (default high)
//!   -t N | -tN | --iterations=N   iteration count (default 1)
//!   --zlib | --bzip2 | --snappy | --lz4 | --codec=NAME
//!   --lzo                         accepted, runs lz4 and says so
//!   -v | -q                       more / less verbose (repeatable, may be aggregated)
//!   --no-verify                   skip the decoded-digest check
//!   --help | -V | --version
//! ```
//!
//! `-h` selects high compression, as in the tool this CLI follows; help is
//! `--help` only. Bad or unrecognised options return an `Err` whose message
//! begins with `"bad usage: "`.

use anyhow::anyhow;

use crate::bench::BenchConfig;
use crate::cli::constants::DEFAULT_ITERATIONS;
use crate::codec::{CodecKind, CompressionLevel};

// ── Public output type ─────────────────────────────────────────────────────────

/// Complete set of options produced by the argument parsing loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Benchmark configuration accumulated from the flags.
    pub bench_config: BenchConfig,
    /// Path of the file to benchmark. `None` only when `exit_early` is set.
    pub input_filename: Option<String>,
    /// What the caller should do without benchmarking, if anything.
    pub early_exit: Option<EarlyExit>,
    /// Program name (argv[0] basename), used by help functions.
    pub exe_name: String,
    /// Messages for the user about how the flags were interpreted, shown at
    /// display level 2 once the final level is known.
    pub notes: Vec<String>,
}

/// Note shown when an LZO selection is served by lz4.
pub const LZO_SUBSTITUTION_NOTE: &str = "lzo is not available; using lz4 instead";

/// Informational flags that end parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    Help,
    Version,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Returns the final path component of `path`, accepting `/` and `\`.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Parse an iteration count, which must be a positive decimal integer.
fn parse_iterations(value: &str) -> anyhow::Result<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("bad usage: -t: expected a number, got '{}'", value));
    }
    let n: u32 = value
        .parse()
        .map_err(|_| anyhow!("bad usage: -t: {} is out of range", value))?;
    if n == 0 {
        return Err(anyhow!("bad usage: -t: iteration count must be at least 1"));
    }
    Ok(n)
}

/// Parse an explicit argument list.
///
/// `exe_name` is argv[0] (used for help text). `argv` is argv[1..].
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut bench_config = BenchConfig::default();
    bench_config.set_iterations(DEFAULT_ITERATIONS);
    let mut input_filename: Option<String> = None;
    let mut early_exit: Option<EarlyExit> = None;
    let mut all_arguments_are_files = false;
    let mut notes: Vec<String> = Vec::new();

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];
        arg_idx += 1;

        if argument.is_empty() {
            continue;
        }

        // The harness seeks its streams, so a pipe cannot be the source.
        if argument == "-" && !all_arguments_are_files {
            return Err(anyhow!("bad usage: standard input cannot be benchmarked, give a file"));
        }

        // ── Non-option path ───────────────────────────────────────────────────
        if all_arguments_are_files || !argument.starts_with('-') {
            if let Some(prev) = &input_filename {
                return Err(anyhow!(
                    "bad usage: only one source file is benchmarked ({} and {} given)",
                    prev,
                    argument
                ));
            }
            input_filename = Some(argument.clone());
            continue;
        }

        // ── Long options ──────────────────────────────────────────────────────
        if let Some(long) = argument.strip_prefix("--") {
            match long {
                "" => all_arguments_are_files = true,
                "zlib" => {
                    bench_config.set_codec(CodecKind::Zlib);
                }
                "bzip2" => {
                    bench_config.set_codec(CodecKind::Bzip2);
                }
                "snappy" => {
                    bench_config.set_codec(CodecKind::Snappy);
                }
                "lz4" => {
                    bench_config.set_codec(CodecKind::Lz4);
                }
                "lzo" => {
                    bench_config.set_codec(CodecKind::Lz4);
                    notes.push(LZO_SUBSTITUTION_NOTE.to_owned());
                }
                "low" => {
                    bench_config.set_level(CompressionLevel::Low);
                }
                "high" => {
                    bench_config.set_level(CompressionLevel::High);
                }
                "no-verify" => {
                    bench_config.set_verify_round_trip(false);
                }
                "verbose" => {
                    let lvl = bench_config.display_level.saturating_add(1);
                    bench_config.set_notification_level(lvl);
                }
                "quiet" => {
                    let lvl = bench_config.display_level.saturating_sub(1);
                    bench_config.set_notification_level(lvl);
                }
                "help" => {
                    early_exit = Some(EarlyExit::Help);
                    break;
                }
                "version" => {
                    early_exit = Some(EarlyExit::Version);
                    break;
                }
                _ => {
                    if let Some(name) = long.strip_prefix("codec=") {
                        let kind = name
                            .parse::<CodecKind>()
                            .map_err(|e| anyhow!("bad usage: --codec: {}", e))?;
                        if name.eq_ignore_ascii_case("lzo") {
                            notes.push(LZO_SUBSTITUTION_NOTE.to_owned());
                        }
                        bench_config.set_codec(kind);
                    } else if let Some(value) = long.strip_prefix("iterations=") {
                        bench_config.set_iterations(parse_iterations(value)?);
                    } else {
                        return Err(anyhow!("bad usage: unknown option: {}", argument));
                    }
                }
            }
            continue;
        }

        // ── Short options (possibly aggregated, e.g. `-lv`) ───────────────────
        let flags = &argument[1..];
        for (pos, flag) in flags.char_indices() {
            match flag {
                'l' => {
                    bench_config.set_level(CompressionLevel::Low);
                }
                'h' => {
                    bench_config.set_level(CompressionLevel::High);
                }
                'v' => {
                    let lvl = bench_config.display_level.saturating_add(1);
                    bench_config.set_notification_level(lvl);
                }
                'q' => {
                    let lvl = bench_config.display_level.saturating_sub(1);
                    bench_config.set_notification_level(lvl);
                }
                'V' => {
                    early_exit = Some(EarlyExit::Version);
                }
                't' => {
                    // `-tN` or `-t N`; the count ends the flag group.
                    let attached = &flags[pos + 1..];
                    let value = if !attached.is_empty() {
                        attached.to_owned()
                    } else if arg_idx < argv.len() {
                        arg_idx += 1;
                        argv[arg_idx - 1].clone()
                    } else {
                        return Err(anyhow!("bad usage: -t requires an iteration count"));
                    };
                    bench_config.set_iterations(parse_iterations(&value)?);
                    break;
                }
                other => {
                    return Err(anyhow!("bad usage: unknown option: -{}", other));
                }
            }
        }
        if early_exit.is_some() {
            break;
        }
    }

    if early_exit.is_none() && input_filename.is_none() {
        return Err(anyhow!("Too few arguments"));
    }

    Ok(ParsedArgs {
        bench_config,
        input_filename,
        early_exit,
        exe_name: last_name_from_path(exe_name).to_owned(),
        notes,
    })
}
