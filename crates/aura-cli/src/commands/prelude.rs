use std::path::PathBuf;

use aura_compiler::Target;
use aura_compiler::codegen::render_prelude;

use super::run_common::{Layout, codegen_config, exit_with_write_error, write_output};

pub struct PreludeArgs {
    pub target: Target,
    pub output: Option<PathBuf>,
    pub layout: Layout,
    pub color: bool,
}

pub fn run(args: PreludeArgs) {
    let config = codegen_config(true, args.layout, args.color);
    let text = render_prelude(args.target, &config);

    if let Err(e) = write_output(args.output.as_deref(), &text) {
        exit_with_write_error(args.output.as_deref(), &e);
    }
}
