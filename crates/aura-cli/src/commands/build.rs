use std::path::PathBuf;

use aura_compiler::{Target, emit};

use super::program_loader::{exit_with_load_error, load_program};
use super::run_common::{
    Layout, codegen_config, exit_with_compile_error, exit_with_write_error, write_output,
};

pub struct BuildArgs {
    pub program_path: PathBuf,
    pub output: Option<PathBuf>,
    pub target: Target,
    pub emit_prelude: bool,
    pub layout: Layout,
    pub color: bool,
}

pub fn run(args: BuildArgs) {
    let program = load_program(&args.program_path).unwrap_or_else(|e| exit_with_load_error(e));

    let config = codegen_config(args.emit_prelude, args.layout, args.color);
    let source =
        emit(&program, args.target, &config).unwrap_or_else(|e| exit_with_compile_error(&e));

    if let Err(e) = write_output(args.output.as_deref(), &source) {
        exit_with_write_error(args.output.as_deref(), &e);
    }
}
