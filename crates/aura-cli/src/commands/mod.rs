pub mod build;
pub mod check;
pub mod demo;
pub mod prelude;
pub mod program_loader;
pub mod run_common;
pub mod types;

#[cfg(test)]
mod types_tests;
