//! Identifier rules shared by every pass.

use aura_core::Primitive;
use aura_core::utils::is_identifier;

use super::ValidationError;
use crate::ir::ATOM_PREFIX;

/// Keywords of C (C11 plus `stdbool.h` names) and Rust (2024, strict and
/// reserved), and names the generated code brings into scope on either
/// target. A name must be usable on every target.
const RESERVED: &[&str] = &[
    // C
    "_Bool", "auto", "bool", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "false", "float", "for", "goto", "if", "inline", "int",
    "long", "register", "restrict", "return", "short", "signed", "sizeof", "static", "struct",
    "switch", "true", "typedef", "union", "unsigned", "void", "volatile", "while", "NULL",
    // <stdint.h>
    "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    "int_least8_t", "int_least16_t", "int_least32_t", "int_least64_t", "uint_least8_t",
    "uint_least16_t", "uint_least32_t", "uint_least64_t", "int_fast8_t", "int_fast16_t",
    "int_fast32_t", "int_fast64_t", "uint_fast8_t", "uint_fast16_t", "uint_fast32_t",
    "uint_fast64_t", "intptr_t", "uintptr_t", "intmax_t", "uintmax_t", "INT8_MIN", "INT16_MIN",
    "INT32_MIN", "INT64_MIN", "INT8_MAX", "INT16_MAX", "INT32_MAX", "INT64_MAX", "UINT8_MAX",
    "UINT16_MAX", "UINT32_MAX", "UINT64_MAX", "INTPTR_MIN", "INTPTR_MAX", "UINTPTR_MAX",
    "INTMAX_MIN", "INTMAX_MAX", "UINTMAX_MAX", "PTRDIFF_MIN", "PTRDIFF_MAX", "SIZE_MAX",
    "SIG_ATOMIC_MIN", "SIG_ATOMIC_MAX", "WCHAR_MIN", "WCHAR_MAX", "WINT_MIN", "WINT_MAX",
    "INT8_C", "INT16_C", "INT32_C", "INT64_C", "UINT8_C", "UINT16_C", "UINT32_C", "UINT64_C",
    "INTMAX_C", "UINTMAX_C",
    // <stdio.h>
    "FILE", "fpos_t", "size_t", "ssize_t", "off_t", "va_list", "EOF", "BUFSIZ", "FILENAME_MAX",
    "FOPEN_MAX", "L_tmpnam", "TMP_MAX", "SEEK_SET", "SEEK_CUR", "SEEK_END", "stdin", "stdout",
    "stderr", "remove", "rename", "tmpfile", "tmpnam", "fclose", "fflush", "fopen", "freopen",
    "fdopen", "setbuf", "setvbuf", "fprintf", "fscanf", "printf", "scanf", "snprintf", "sprintf",
    "sscanf", "dprintf", "vfprintf", "vfscanf", "vprintf", "vscanf", "vsnprintf", "vsprintf",
    "vsscanf", "fgetc", "fgets", "fputc", "fputs", "getc", "getchar", "gets", "putc", "putchar",
    "puts", "ungetc", "getline", "getdelim", "fread", "fwrite", "fgetpos", "fseek", "fsetpos",
    "ftell", "rewind", "clearerr", "feof", "ferror", "perror", "fileno", "popen", "pclose",
    // Rust
    "Self", "abstract", "as", "async", "await", "become", "box", "crate", "dyn", "final", "fn",
    "gen", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override",
    "priv", "pub", "ref", "self", "super", "trait", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "yield",
    // Rust prelude values, which a `let` would match as patterns
    "None", "Some", "Ok", "Err",
    // Generated code
    "aura_main", "prelude",
];

/// Reserved words, alias names, and the identifiers C reserves for the
/// implementation (`__x`, `_X`), which include the atom prefix.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
        || Primitive::from_name(name).is_some()
        || name.starts_with(ATOM_PREFIX)
        || is_implementation_reserved(name)
}

fn is_implementation_reserved(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('_') && chars.next().is_some_and(|c| c == '_' || c.is_ascii_uppercase())
}

/// Report `name` if it cannot be spelled as-is on every target.
pub fn check_identifier(name: &str, errors: &mut Vec<ValidationError>) {
    if !is_identifier(name) {
        errors.push(ValidationError::InvalidIdentifier {
            name: name.to_owned(),
        });
    } else if is_reserved(name) {
        errors.push(ValidationError::ReservedIdentifier {
            name: name.to_owned(),
        });
    }
}

/// Resolve a type name, reporting it if unknown.
pub fn resolve_type(name: &str, errors: &mut Vec<ValidationError>) -> Option<Primitive> {
    let resolved = Primitive::from_name(name);
    if resolved.is_none() {
        errors.push(ValidationError::UnknownType {
            name: name.to_owned(),
        });
    }
    resolved
}

/// Whether a value of `found` can stand where `expected` is declared.
///
/// Aliases of one host type are interchangeable (`Int` and `Int32`), except
/// `Atom`, which only matches itself.
pub fn compatible(expected: Primitive, found: Primitive) -> bool {
    expected == found
        || (expected != Primitive::Atom
            && found != Primitive::Atom
            && expected.rust_type() == found.rust_type())
}
