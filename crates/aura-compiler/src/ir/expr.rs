use serde::{Deserialize, Serialize};

use super::{Atom, Identifier, Scope};

/// A value annotated with the name of its type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub value: Value,
    #[serde(rename = "type")]
    pub type_: Identifier,
}

impl Expr {
    pub fn new(value: Value, type_: impl Into<Identifier>) -> Self {
        Self {
            value,
            type_: type_.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Literal(Literal),
    Call(Call),
    Atom(Atom),
    Identifier(Identifier),
    /// A block. Only valid in statement position.
    Scope(Scope),
}

impl Value {
    pub fn call(symbol: &str, args: Vec<Value>) -> Self {
        Self::Call(Call {
            symbol: Identifier::from(symbol),
            args,
        })
    }

    pub fn ident(name: &str) -> Self {
        Self::Identifier(Identifier::from(name))
    }

    pub fn atom(name: &str) -> Self {
        Self::Atom(Atom::from(name))
    }

    pub fn int(v: i64) -> Self {
        Self::Literal(Literal::Int(v))
    }

    pub fn string(s: &str) -> Self {
        Self::Literal(Literal::String(s.to_owned()))
    }
}

/// A primitive literal value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// Raw text. Escaping happens at emission time.
    String(String),
    Bool(bool),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub symbol: Identifier,
    pub args: Vec<Value>,
}
