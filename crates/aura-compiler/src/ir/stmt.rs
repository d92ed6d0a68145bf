use serde::{Deserialize, Serialize};

use super::{Expr, Identifier, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Evaluate for effect.
    Expr(Expr),
    /// Introduce `ident` of type `expr.type_`, initialized with `expr.value`.
    Bind { ident: Identifier, expr: Expr },
    Return(Value),
}

/// A block of statements with its own binding scope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(pub Vec<Statement>);

impl Scope {
    pub fn statements(&self) -> &[Statement] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
