//! Literal spelling shared by the C and Rust emitters.

/// Escape `s` for a double-quoted string literal.
///
/// The common escapes (`\n`, `\t`, `\r`, `\\`, `\"`) read the same in C and
/// Rust. Other control characters differ: C takes a three-digit octal escape
/// (a hex escape would swallow following hex digits), Rust takes `\x`.
pub fn escape_string(s: &str, octal_controls: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_ascii_control() => {
                if octal_controls {
                    out.push_str(&format!("\\{:03o}", c as u32));
                } else {
                    out.push_str(&format!("\\x{:02x}", c as u32));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Spell a finite float so it always reads as a float: `1.0`, not `1`.
pub fn format_float(v: f64) -> String {
    // Debug keeps a fractional part or an exponent.
    format!("{v:?}")
}
