//! The Aura runtime prelude.
//!
//! Generated Rust code starts with `use aura_core::prelude::*;`. Each alias
//! names a host primitive of a fixed width and adds no behavior.

use std::io::{self, Write};

pub type Bool = bool;

/// Default integer, 32-bit signed.
pub type Int = i32;
/// Default unsigned integer, 32-bit.
pub type UInt = u32;

pub type Int8 = i8;
pub type Int16 = i16;
pub type Int32 = i32;
pub type Int64 = i64;

pub type UInt8 = u8;
pub type UInt16 = u16;
pub type UInt32 = u32;
pub type UInt64 = u64;

/// Default float, 32-bit.
pub type Float = f32;
pub type Float32 = f32;
pub type Float64 = f64;

/// Platform `char`: 8 bits, signedness follows the C ABI of the host.
pub type Char = core::ffi::c_char;

/// Immutable text reference.
pub type String<'a> = &'a str;

/// Opaque 64-bit identifier. Atom values are tokens, not numbers.
pub type Atom = u64;

pub type Void = ();

/// Write `text` to standard output.
///
/// The bytes go out verbatim: no newline is appended and nothing is
/// formatted. Write failures (a closed stdout, for one) are ignored.
pub fn print(text: String<'_>) {
    print_to(&mut io::stdout().lock(), text);
}

/// Write `text` to `out` verbatim, discarding any I/O error.
pub fn print_to<W: Write + ?Sized>(out: &mut W, text: String<'_>) {
    let _ = out.write_all(text.as_bytes());
}
