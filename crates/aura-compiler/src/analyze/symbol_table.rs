//! Symbol table: program-level names.
//!
//! Collects atoms and function signatures before any body is checked, so
//! functions may call each other regardless of declaration order.

use std::collections::HashSet;

use aura_core::Primitive;
use indexmap::IndexMap;

use super::ValidationError;
use super::names::{check_identifier, resolve_type};
use crate::ir::{Atom, Program, StaticBind};

/// Name of the builtin output function.
pub const PRINT: &str = "print";

/// Name of the entry point.
pub const MAIN: &str = "main";

/// Parameter and return types of a callable. `None` marks a type that
/// failed to resolve and was already reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Option<Primitive>>,
    pub output: Option<Primitive>,
    pub builtin: bool,
}

impl Signature {
    fn print() -> Self {
        Self {
            params: vec![Some(Primitive::String)],
            output: Some(Primitive::Void),
            builtin: true,
        }
    }
}

/// Atoms by source name with their values, and callables by name.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    atoms: IndexMap<String, u64>,
    functions: IndexMap<String, Signature>,
}

impl SymbolTable {
    /// Build the table, reporting malformed or duplicate declarations.
    pub fn build(program: &Program, errors: &mut Vec<ValidationError>) -> Self {
        let mut table = Self::default();
        table.functions.insert(PRINT.to_owned(), Signature::print());

        for atom in &program.atoms {
            table.declare_atom(atom, errors);
        }
        for function in &program.statics {
            table.declare_function(function, errors);
        }
        check_main(&program.main, errors);

        table
    }

    fn declare_atom(&mut self, atom: &Atom, errors: &mut Vec<ValidationError>) {
        if !atom.is_well_formed() {
            errors.push(ValidationError::InvalidAtomName {
                name: atom.name().to_owned(),
            });
        }
        if self.atoms.contains_key(atom.name()) {
            errors.push(ValidationError::DuplicateAtom {
                name: atom.name().to_owned(),
            });
            return;
        }
        let value = self.atoms.len() as u64;
        self.atoms.insert(atom.name().to_owned(), value);
    }

    fn declare_function(&mut self, function: &StaticBind, errors: &mut Vec<ValidationError>) {
        let header = function.header();
        let name = header.ident.as_str();

        if name == PRINT || name == MAIN {
            errors.push(ValidationError::BuiltinRedefined {
                name: name.to_owned(),
            });
            return;
        }
        check_identifier(name, errors);

        let mut seen = HashSet::new();
        let params = header
            .args
            .iter()
            .map(|param| {
                let param_name = param.ident.as_str();
                check_identifier(param_name, errors);
                if !seen.insert(param_name) {
                    errors.push(ValidationError::DuplicateBinding {
                        name: param_name.to_owned(),
                    });
                }
                let ty = resolve_type(param.type_.as_str(), errors);
                if ty == Some(Primitive::Void) {
                    errors.push(ValidationError::VoidBinding {
                        name: param_name.to_owned(),
                    });
                }
                ty
            })
            .collect();
        let output = resolve_type(header.output.as_str(), errors);

        if self.functions.contains_key(name) {
            errors.push(ValidationError::DuplicateFunction {
                name: name.to_owned(),
            });
            return;
        }
        self.functions.insert(
            name.to_owned(),
            Signature {
                params,
                output,
                builtin: false,
            },
        );
    }

    /// Value of a declared atom.
    pub fn atom_value(&self, atom: &Atom) -> Option<u64> {
        self.atoms.get(atom.name()).copied()
    }

    /// Declared atoms in value order.
    pub fn atoms(&self) -> impl Iterator<Item = (Atom, u64)> + '_ {
        self.atoms
            .iter()
            .map(|(name, &value)| (Atom::new(name.as_str()), value))
    }

    pub fn function(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }

    /// Number of callables, builtins included.
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

fn check_main(main: &StaticBind, errors: &mut Vec<ValidationError>) {
    let header = main.header();
    let is_int = Primitive::from_name(header.output.as_str()) == Some(Primitive::Int);
    if header.ident.as_str() != MAIN || !header.args.is_empty() || !is_int {
        errors.push(ValidationError::InvalidMain);
    }
}
