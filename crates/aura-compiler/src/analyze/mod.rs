//! Semantic analysis passes.
//!
//! - Include paths (`validate_includes`)
//! - Name resolution for atoms and functions (`symbol_table`)
//! - Scoping, call resolution, and type checking of bodies (`type_check`)
//!
//! Passes report into a shared error list so one run surfaces every problem.

mod error;
mod names;
pub mod symbol_table;
mod type_check;

#[cfg(test)]
mod validate_tests;

pub use error::ValidationError;
pub use names::{compatible, is_reserved};
pub use symbol_table::{Signature, SymbolTable};

use crate::ir::Program;
use crate::{Error, Result};

/// Validate `program`, returning its symbol table on success.
pub fn validate(program: &Program) -> Result<SymbolTable> {
    let mut errors = Vec::new();

    validate_includes(&program.includes, &mut errors);
    let symbols = SymbolTable::build(program, &mut errors);
    type_check::check_bodies(program, &symbols, &mut errors);

    if !errors.is_empty() {
        log::debug!("validation found {} errors", errors.len());
        return Err(Error::Validation(errors));
    }

    log::debug!(
        "validated program: {} atoms, {} functions",
        program.atoms.len(),
        symbols.function_count()
    );
    Ok(symbols)
}

/// Include paths are spliced into `#include "..."` verbatim.
fn validate_includes(includes: &[String], errors: &mut Vec<ValidationError>) {
    for path in includes {
        let bad = path.is_empty() || path.chars().any(|c| c == '"' || c.is_control());
        if bad {
            errors.push(ValidationError::InvalidInclude { path: path.clone() });
        }
    }
}
