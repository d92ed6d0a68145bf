use std::path::PathBuf;

use aura_compiler::demo::hello_world;
use aura_compiler::{Target, emit};

use super::run_common::{
    Layout, codegen_config, exit_with_compile_error, exit_with_write_error, write_output,
};

pub struct DemoArgs {
    pub ir: bool,
    pub output: Option<PathBuf>,
    pub target: Target,
    pub emit_prelude: bool,
    pub layout: Layout,
    pub color: bool,
}

pub fn run(args: DemoArgs) {
    let program = hello_world();

    let text = if args.ir {
        program
            .to_json_pretty()
            .map(|mut json| {
                json.push('\n');
                json
            })
            .unwrap_or_else(|e| exit_with_compile_error(&e))
    } else {
        let config = codegen_config(args.emit_prelude, args.layout, args.color);
        emit(&program, args.target, &config).unwrap_or_else(|e| exit_with_compile_error(&e))
    };

    if let Err(e) = write_output(args.output.as_deref(), &text) {
        exit_with_write_error(args.output.as_deref(), &e);
    }
}
