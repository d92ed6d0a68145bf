//! Primitive type table.
//!
//! One row per alias in [`crate::prelude`]. Renderers walk [`Primitive::ALL`]
//! in order, so the table order is the order aliases appear in every
//! generated prelude.

use serde::Serialize;

/// Representation class of a primitive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    /// Two's complement signed integer.
    Signed,
    Unsigned,
    /// IEEE 754 binary float.
    Float,
    /// Platform character, 8 bits with host-defined signedness.
    Char,
    /// Borrowed, immutable text.
    Text,
    /// No value.
    Void,
}

/// Primitive type aliases shared by generated code on every target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Primitive {
    Bool,
    Int,
    UInt,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Float32,
    Float64,
    Char,
    String,
    Atom,
    Void,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 18] = [
        Self::Bool,
        Self::Int,
        Self::UInt,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float,
        Self::Float32,
        Self::Float64,
        Self::Char,
        Self::String,
        Self::Atom,
        Self::Void,
    ];

    /// Look up a primitive by its alias name (`"UInt8"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The alias name generated code refers to.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Char => "Char",
            Self::String => "String",
            Self::Atom => "Atom",
            Self::Void => "Void",
        }
    }

    /// C spelling, valid after `<stdint.h>` and `<stdbool.h>`.
    pub const fn c_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int | Self::Int32 => "int32_t",
            Self::UInt | Self::UInt32 => "uint32_t",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int64 => "int64_t",
            Self::UInt8 => "uint8_t",
            Self::UInt16 => "uint16_t",
            Self::UInt64 | Self::Atom => "uint64_t",
            Self::Float | Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Char => "char",
            Self::String => "const char*",
            Self::Void => "void",
        }
    }

    /// Rust spelling. Borrowed types use the lifetime `'a`.
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int | Self::Int32 => "i32",
            Self::UInt | Self::UInt32 => "u32",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int64 => "i64",
            Self::UInt8 => "u8",
            Self::UInt16 => "u16",
            Self::UInt64 | Self::Atom => "u64",
            Self::Float | Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Char => "core::ffi::c_char",
            Self::String => "&'a str",
            Self::Void => "()",
        }
    }

    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Self::Bool => PrimitiveKind::Bool,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => {
                PrimitiveKind::Signed
            }
            Self::UInt
            | Self::UInt8
            | Self::UInt16
            | Self::UInt32
            | Self::UInt64
            | Self::Atom => PrimitiveKind::Unsigned,
            Self::Float | Self::Float32 | Self::Float64 => PrimitiveKind::Float,
            Self::Char => PrimitiveKind::Char,
            Self::String => PrimitiveKind::Text,
            Self::Void => PrimitiveKind::Void,
        }
    }

    /// Width in bits, or `None` for the pointer-sized text reference.
    pub const fn bits(self) -> Option<u32> {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 | Self::Char => Some(8),
            Self::Int16 | Self::UInt16 => Some(16),
            Self::Int
            | Self::UInt
            | Self::Int32
            | Self::UInt32
            | Self::Float
            | Self::Float32 => Some(32),
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::Atom => Some(64),
            Self::String => None,
            Self::Void => Some(0),
        }
    }

    /// Whether this is a signed integer.
    pub fn is_signed(self) -> bool {
        matches!(self.kind(), PrimitiveKind::Signed)
    }

    /// Whether this is an integer of either signedness.
    pub fn is_integer(self) -> bool {
        matches!(self.kind(), PrimitiveKind::Signed | PrimitiveKind::Unsigned)
    }

    /// Whether the Rust spelling borrows and needs a lifetime parameter.
    pub fn is_borrowed(self) -> bool {
        matches!(self.kind(), PrimitiveKind::Text)
    }

    /// A serializable row describing this primitive.
    pub fn info(self) -> PrimitiveInfo {
        PrimitiveInfo {
            name: self.name(),
            c: self.c_type(),
            rust: self.rust_type(),
            kind: self.kind(),
            bits: self.bits(),
        }
    }
}

/// One row of the alias table, as printed by `aura types --json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrimitiveInfo {
    pub name: &'static str,
    pub c: &'static str,
    pub rust: &'static str,
    pub kind: PrimitiveKind,
    pub bits: Option<u32>,
}
