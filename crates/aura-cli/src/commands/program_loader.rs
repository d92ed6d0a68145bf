use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use aura_compiler::Program;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("program cannot be empty")]
    Empty,

    #[error(transparent)]
    Compile(#[from] aura_compiler::Error),
}

/// Read and decode the program at `path`, or from stdin for `-`.
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let json = if path.as_os_str() == "-" {
        load_stdin()?
    } else {
        load_file(path)?
    };
    parse_program(&json)
}

pub fn parse_program(json: &str) -> Result<Program, LoadError> {
    if json.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    let program = Program::from_json(json)?;
    log::debug!(
        "loaded program: {} includes, {} atoms, {} statics",
        program.includes.len(),
        program.atoms.len(),
        program.statics.len()
    );
    Ok(program)
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })
}

/// Print a load failure the way the commands report errors, then exit.
pub fn exit_with_load_error(err: LoadError) -> ! {
    match err {
        LoadError::Compile(err) => super::run_common::exit_with_compile_error(&err),
        err => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
