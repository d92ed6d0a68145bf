//! Top-level IR objects.

use serde::{Deserialize, Serialize};

use super::{Atom, Identifier, Scope};
use crate::Result;

/// A correct Aura program, syntax and semantics both.
///
/// Holds everything needed to produce target source by string output alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// C headers to include. Ignored by the Rust target.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Atoms are global and numbered by position, up to 2^64 of them.
    #[serde(default)]
    pub atoms: Vec<Atom>,

    /// Functions other than `main`.
    #[serde(default)]
    pub statics: Vec<StaticBind>,

    /// Entry point: `Int main()`.
    pub main: StaticBind,
}

impl Program {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Static functions followed by `main`.
    pub fn functions(&self) -> impl Iterator<Item = &StaticBind> {
        self.statics.iter().chain(std::iter::once(&self.main))
    }
}

/// A program-level binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticBind {
    Function { header: FunctionHeader, body: Scope },
}

impl StaticBind {
    pub fn header(&self) -> &FunctionHeader {
        match self {
            StaticBind::Function { header, .. } => header,
        }
    }

    pub fn body(&self) -> &Scope {
        match self {
            StaticBind::Function { body, .. } => body,
        }
    }

    pub fn name(&self) -> &str {
        self.header().ident.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionHeader {
    pub ident: Identifier,
    #[serde(default)]
    pub args: Vec<Param>,
    pub output: Identifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub ident: Identifier,
    #[serde(rename = "type")]
    pub type_: Identifier,
}

impl Param {
    pub fn new(ident: &str, type_: &str) -> Self {
        Self {
            ident: Identifier::from(ident),
            type_: Identifier::from(type_),
        }
    }
}
