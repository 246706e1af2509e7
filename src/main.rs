//! Binary entry point for the `codecbench` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//!    Too few arguments or a bad flag prints usage and exits 1.
//! 2. The configuration summary is printed (display level 2 and up).
//! 3. [`run`] benchmarks the source file and prints the three mean lines
//!    on stdout. Any benchmark error is reported on stderr and exits 1.

use std::path::Path;

use codecbench::bench::bench_file;
use codecbench::cli::args::{parse_args, EarlyExit, ParsedArgs};
use codecbench::cli::constants::{set_display_level, EXIT_FAILURE};
use codecbench::cli::help::{print_configuration, print_usage, print_version};
use codecbench::{displaylevel, displayout};

/// Benchmark the parsed source file. Returns the process exit code.
fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs { bench_config, input_filename, early_exit, exe_name, notes } = args;

    match early_exit {
        Some(EarlyExit::Help) => {
            print_usage(&exe_name);
            return 0;
        }
        Some(EarlyExit::Version) => {
            print_version();
            return 0;
        }
        None => {}
    }

    let source = match input_filename {
        Some(name) => name,
        None => {
            print_usage(&exe_name);
            return EXIT_FAILURE;
        }
    };

    for note in &notes {
        displaylevel!(2, "{}\n", note);
    }
    print_configuration(&bench_config);
    displaylevel!(3, "Benchmarking {} with {}\n", source, bench_config.codec);

    match bench_file(Path::new(&source), bench_config) {
        Ok(report) => {
            displayout!("{}", report);
            0
        }
        Err(e) => {
            displaylevel!(1, "Error: {} ({})\n", e, e.kind_name());
            EXIT_FAILURE
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            displaylevel!(1, "{}\n", e);
            let exe = std::env::args().next().unwrap_or_default();
            print_usage(codecbench::cli::args::last_name_from_path(&exe));
            std::process::exit(EXIT_FAILURE);
        }
    };
    set_display_level(args.bench_config.display_level);
    std::process::exit(run(args));
}
