#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime support for Aura programs.
//!
//! Two layers:
//! - **Prelude** (`prelude`): the aliases and `print` that generated Rust
//!   code glob-imports
//! - **Primitive table** (`Primitive`): the same aliases as data, used by the
//!   compiler to render preludes for other targets and to resolve type names

pub mod colors;
pub mod prelude;
mod primitive;
pub mod utils;


pub use colors::Colors;
pub use primitive::{Primitive, PrimitiveInfo, PrimitiveKind};
