/// A single semantic problem in a program.
///
/// Validation collects every problem it finds; see [`crate::Error::Validation`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{name}` is not a valid identifier")]
    InvalidIdentifier { name: String },

    #[error("`{name}` is a reserved word")]
    ReservedIdentifier { name: String },

    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    #[error("`{name}` cannot have type Void")]
    VoidBinding { name: String },

    #[error("invalid include path {path:?}")]
    InvalidInclude { path: String },

    #[error("invalid atom name `{name}`: expected lowercase letters, digits, and `-`")]
    InvalidAtomName { name: String },

    #[error("atom `{name}` is declared more than once")]
    DuplicateAtom { name: String },

    #[error("atom `{name}` is not declared")]
    UndeclaredAtom { name: String },

    #[error("function `{name}` is defined more than once")]
    DuplicateFunction { name: String },

    #[error("`{name}` is a builtin and cannot be redefined")]
    BuiltinRedefined { name: String },

    #[error("entry point must be declared as `Int main()`")]
    InvalidMain,

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    #[error("`{name}` is a local binding and cannot be called")]
    NotCallable { name: String },

    #[error("`{name}` takes {expected} arguments but {found} were given")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("`{name}` is not bound")]
    UnboundIdentifier { name: String },

    #[error("`{name}` is already bound in this scope")]
    DuplicateBinding { name: String },

    #[error("the initializer of `{name}` refers to `{name}`")]
    SelfReferentialBinding { name: String },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("literal {value} does not fit in {type_name}")]
    LiteralOutOfRange { value: i64, type_name: &'static str },

    #[error("float literal must be finite")]
    NonFiniteFloat,

    #[error("float literal does not fit in {type_name}")]
    FloatOutOfRange { type_name: &'static str },

    #[error("a block cannot be used as a value")]
    ScopeAsValue,

    #[error("function `{function}` must end with `return`")]
    MissingReturn { function: String },

    #[error("`return` with a value in Void function `{function}`")]
    ReturnInVoidFunction { function: String },
}
