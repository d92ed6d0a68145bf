//! C target.
//!
//! The prelude is the `aura_core.h` header: include guard, the standard
//! headers the aliases need, one `typedef` per alias, and `print`.

mod emitter;


pub(super) use emitter::Emitter;

use aura_core::Primitive;

use super::writer::Writer;

/// Include guard of the prelude header.
pub const GUARD: &str = "__AURA_CORE_H__";

/// Header generated code includes when the prelude is not inlined.
pub const HEADER: &str = "aura_core.h";

pub(super) fn write_prelude(w: &mut Writer) {
    w.line(&format!("#ifndef {GUARD}"));
    w.line(&format!("#define {GUARD}"));
    w.blank();
    w.line("#include <stdint.h>");
    w.line("#include <stdbool.h>");
    w.line("#include <stdio.h>");
    w.blank();
    for p in Primitive::ALL {
        w.line(&format!("typedef {} {};", p.c_type(), p.name()));
    }
    w.blank();
    w.line("void print(String str) {");
    w.indent();
    w.line(r#"printf("%s", str);"#);
    w.dedent();
    w.line("}");
    w.blank();
    w.line(&format!("#endif // {GUARD}"));
}
