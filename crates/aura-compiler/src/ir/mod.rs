//! The Aura intermediate representation.
//!
//! A [`Program`] is a tree of plain data: target emitters turn it into
//! source text without further lowering. Every type is serde-serializable
//! so programs can be exchanged as JSON.

mod atom;
mod expr;
mod identifier;
mod program;
mod stmt;


pub use atom::{ATOM_PREFIX, Atom};
pub use expr::{Call, Expr, Literal, Value};
pub use identifier::Identifier;
pub use program::{FunctionHeader, Param, Program, StaticBind};
pub use stmt::{Scope, Statement};
