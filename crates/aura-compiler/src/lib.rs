//! Aura compiler: IR, semantic validation, and code generation.
//!
//! - `ir` - the program representation, exchanged as JSON
//! - `analyze` - symbol table and validation passes
//! - `codegen` - C and Rust emitters, plus target preludes
//! - `demo` - the canonical hello-world program

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod codegen;
pub mod demo;
pub mod ir;

pub use analyze::{ValidationError, validate};
pub use codegen::{Config, Target, emit};
pub use ir::Program;

/// Errors that can occur while loading or compiling a program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid program JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("program validation failed with {} errors", .0.len())]
    Validation(Vec<ValidationError>),
}

impl Error {
    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::Validation(errors) => errors,
            Error::Json(_) => &[],
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
