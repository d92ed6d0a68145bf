//! Rust target.
//!
//! Generated code is a single-file program. The prelude is either inlined as
//! `mod prelude` or imported from the `aura_core` crate.

mod emitter;


pub(super) use emitter::Emitter;

use aura_core::Primitive;

use super::writer::Writer;

/// Lints the generated names trip: mangled atoms, user function names.
pub const ALLOWED_LINTS: &str = "dead_code, unused, non_upper_case_globals, non_snake_case";

/// Function wrapping the program's entry point; the real `main` exits with
/// its result.
pub const ENTRY: &str = "aura_main";

/// Prelude items, without a surrounding module.
pub(super) fn write_prelude(w: &mut Writer) {
    for p in Primitive::ALL {
        if p.is_borrowed() {
            w.line(&format!("pub type {}<'a> = {};", p.name(), p.rust_type()));
        } else {
            w.line(&format!("pub type {} = {};", p.name(), p.rust_type()));
        }
    }
    w.blank();
    w.line("pub fn print(text: String<'_>) {");
    w.indent();
    w.line("use std::io::Write;");
    w.line("let _ = std::io::stdout().lock().write_all(text.as_bytes());");
    w.dedent();
    w.line("}");
}
