use std::path::PathBuf;

use aura_compiler::validate;

use super::program_loader::{exit_with_load_error, load_program};
use super::run_common::exit_with_compile_error;

pub struct CheckArgs {
    pub program_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    let program = load_program(&args.program_path).unwrap_or_else(|e| exit_with_load_error(e));

    if let Err(e) = validate(&program) {
        exit_with_compile_error(&e);
    }

    // Silent on success (like cargo check)
}
