//! Atoms: program-wide symbolic constants.
//!
//! An atom is written in source form (`not-found`) and spelled in target code
//! as a mangled constant (`__Atom_NOT_FOUND`). Values are assigned by
//! declaration order, so the mangled name is all generated code ever sees.

use std::fmt;

use aura_core::utils::{to_kebab_case, to_screaming_snake_case};
use serde::{Deserialize, Serialize};

/// Prefix of every mangled atom constant.
pub const ATOM_PREFIX: &str = "__Atom_";

/// A symbolic constant, stored in source form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Recover an atom from its mangled spelling.
    ///
    /// Returns `None` if `mangled` does not carry [`ATOM_PREFIX`].
    pub fn from_mangled(mangled: &str) -> Option<Self> {
        mangled
            .strip_prefix(ATOM_PREFIX)
            .map(|rest| Self(to_kebab_case(rest)))
    }

    /// Source form, e.g. `not-found`.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Target spelling, e.g. `__Atom_NOT_FOUND`.
    pub fn mangled(&self) -> String {
        format!("{ATOM_PREFIX}{}", to_screaming_snake_case(&self.0))
    }

    /// Lowercase ASCII letters, digits, and `-`, starting with a letter.
    ///
    /// Exactly the names whose mangling round-trips and yields an identifier.
    pub fn is_well_formed(&self) -> bool {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_ascii_lowercase()
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Atom> for String {
    fn from(atom: Atom) -> Self {
        atom.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}
