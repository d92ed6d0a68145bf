//! Pieces shared by the commands that produce source text.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use aura_compiler::{Config, Error};

/// Indentation of generated source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Default,
    Spaces(u8),
    Tabs,
}

pub fn codegen_config(emit_prelude: bool, layout: Layout, color: bool) -> Config {
    let config = Config::new().emit_prelude(emit_prelude).colored(color);
    match layout {
        Layout::Default => config,
        Layout::Spaces(width) => config.indent_width(usize::from(width)),
        Layout::Tabs => config.tabs(),
    }
}

/// Write `text` to `path`, or to stdout when there is none.
pub fn write_output(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            log::debug!("writing {} bytes to {}", text.len(), path.display());
            fs::write(path, text)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}

/// One `error:` line per problem: every validation error, or the single
/// decoding error.
pub fn error_lines(err: &Error) -> Vec<String> {
    match err {
        Error::Validation(errors) => errors.iter().map(|e| format!("error: {e}")).collect(),
        Error::Json(_) => vec![format!("error: {err}")],
    }
}

pub fn exit_with_compile_error(err: &Error) -> ! {
    for line in error_lines(err) {
        eprintln!("{line}");
    }
    std::process::exit(1);
}

pub fn exit_with_write_error(path: Option<&Path>, err: &io::Error) -> ! {
    match path {
        Some(path) => eprintln!("error: failed to write {}: {}", path.display(), err),
        None => eprintln!("error: failed to write output: {}", err),
    }
    std::process::exit(1);
}
