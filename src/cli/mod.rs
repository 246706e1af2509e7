//! Command-line interface for the `codecbench` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, defaults, and the shared `DISPLAY_LEVEL` atomic with its display macros. |
//! | [`help`]      | Usage text, version banner, configuration summary. |
//! | [`args`]      | `ParsedArgs`: the argument loop that turns `argv` into a `BenchConfig` and a source path. |
//! | [`naming`]    | Archive and decompressed-output file names derived from the source path. |
//!
//! Typical call sequence: `parse_args` → `print_configuration` → `bench::bench_file` → report on stdout.

pub mod constants;
pub mod help;
pub mod args;
pub mod naming;
