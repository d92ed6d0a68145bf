//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the code generation options shared by `build` and `demo`.
fn with_codegen_args(cmd: Command) -> Command {
    cmd.arg(target_arg())
        .arg(output_file_arg())
        .arg(no_prelude_arg())
        .arg(indent_arg())
        .arg(tabs_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("aura")
        .about("Compile Aura programs to C or Rust")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(build_command())
        .subcommand(check_command())
        .subcommand(prelude_command())
        .subcommand(types_command())
        .subcommand(demo_command())
}

/// Compile a program to target source.
pub fn build_command() -> Command {
    let cmd = Command::new("build")
        .about("Compile a program to C or Rust source")
        .override_usage(
            "\
  aura build <PROGRAM> [-t <TARGET>] [-o <FILE>]
  aura build - < program.json",
        )
        .after_help(
            r#"EXAMPLES:
  aura build hello.json                 # C to stdout
  aura build hello.json -t rust -o main.rs
  aura build hello.json --no-prelude    # #include "aura_core.h"
  cat hello.json | aura build -"#,
        )
        .arg(program_path_arg());

    with_codegen_args(cmd)
}

/// Validate a program.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a program")
        .after_help(
            r#"EXAMPLES:
  aura check hello.json    # silent on success
  aura check -             # from stdin"#,
        )
        .arg(program_path_arg())
}

/// Print the runtime prelude.
pub fn prelude_command() -> Command {
    Command::new("prelude")
        .about("Print the runtime prelude for a target")
        .after_help(
            r#"EXAMPLES:
  aura prelude -o aura_core.h
  aura prelude -t rust"#,
        )
        .arg(target_arg())
        .arg(output_file_arg())
        .arg(indent_arg())
        .arg(tabs_arg())
        .arg(color_arg())
}

/// List the primitive aliases.
pub fn types_command() -> Command {
    Command::new("types")
        .about("List the primitive type aliases")
        .arg(json_arg())
        .arg(color_arg())
}

/// Emit the hello-world program.
pub fn demo_command() -> Command {
    let cmd = Command::new("demo")
        .about("Emit the hello-world program")
        .after_help(
            r#"EXAMPLES:
  aura demo                    # C source
  aura demo -t rust -o main.rs
  aura demo --ir > hello.json  # the program itself"#,
        )
        .arg(ir_arg().conflicts_with_all([
            "target",
            "no_prelude",
            "indent",
            "tabs",
            "color",
        ]));

    with_codegen_args(cmd)
}
