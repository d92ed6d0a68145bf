//! Code generation: IR to C or Rust source.
//!
//! Both targets share the alias table from `aura_core`, so a program renders
//! to the same set of type names either way. Output is produced through a
//! [`writer::Writer`] and always ends with exactly one newline.

mod c;
mod config;
mod escape;
mod rust;
mod writer;


pub use config::Config;

use std::fmt;

use crate::Result;
use crate::analyze::validate;
use crate::ir::Program;

/// Output language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    #[default]
    C,
    Rust,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::C, Target::Rust];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "c" => Some(Target::C),
            "rust" | "rs" => Some(Target::Rust),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Rust => "rust",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate `program` and render it as `target` source.
pub fn emit(program: &Program, target: Target, config: &Config) -> Result<String> {
    let symbols = validate(program)?;
    log::debug!("emitting {} functions as {target}", program.statics.len() + 1);

    let output = match target {
        Target::C => c::Emitter::new(program, &symbols, config).emit(),
        Target::Rust => rust::Emitter::new(program, &symbols, config).emit(),
    };
    Ok(output)
}

/// The prelude alone: alias table plus `print`.
pub fn render_prelude(target: Target, config: &Config) -> String {
    let mut w = writer::Writer::new(config);
    match target {
        Target::C => c::write_prelude(&mut w),
        Target::Rust => rust::write_prelude(&mut w),
    }
    w.finish()
}
