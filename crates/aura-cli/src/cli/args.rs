//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Program IR file (positional).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Program IR as JSON (use \"-\" for stdin)")
}

/// Target language (-t/--target).
pub fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("TARGET")
        .default_value("c")
        .value_parser(["c", "rust", "rs"])
        .help("Target language")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Reference the prelude instead of inlining it (--no-prelude).
pub fn no_prelude_arg() -> Arg {
    Arg::new("no_prelude")
        .long("no-prelude")
        .action(ArgAction::SetTrue)
        .help("Reference aura_core.h / aura_core::prelude instead of inlining the prelude")
}

/// Spaces per indentation level (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .value_parser(value_parser!(u8).range(1..=16))
        .conflicts_with("tabs")
        .help("Spaces per indentation level (default: 4)")
}

/// Indent with tabs (--tabs).
pub fn tabs_arg() -> Arg {
    Arg::new("tabs")
        .long("tabs")
        .action(ArgAction::SetTrue)
        .help("Indent with tabs")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

/// Print the program IR instead of compiling it (--ir).
pub fn ir_arg() -> Arg {
    Arg::new("ir")
        .long("ir")
        .action(ArgAction::SetTrue)
        .help("Print the program IR as JSON instead of target source")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
