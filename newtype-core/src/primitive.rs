//! Well-known C# primitive kinds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A well-known primitive type of the C# language.
///
/// These are the types whose operators and equality are defined by the
/// language rather than by user-declared members, so an underlying type
/// tagged with one of these kinds gets its intrinsic surface synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// System.Boolean
    #[serde(rename = "bool")]
    Boolean,
    /// System.Char - UTF-16 code unit
    #[serde(rename = "char")]
    Char,
    /// System.SByte - signed 8-bit integer
    #[serde(rename = "sbyte")]
    SByte,
    /// System.Byte - unsigned 8-bit integer
    #[serde(rename = "byte")]
    Byte,
    /// System.Int16 - signed 16-bit integer
    #[serde(rename = "short")]
    Int16,
    /// System.UInt16 - unsigned 16-bit integer
    #[serde(rename = "ushort")]
    UInt16,
    /// System.Int32 - signed 32-bit integer
    #[serde(rename = "int")]
    Int32,
    /// System.UInt32 - unsigned 32-bit integer
    #[serde(rename = "uint")]
    UInt32,
    /// System.Int64 - signed 64-bit integer
    #[serde(rename = "long")]
    Int64,
    /// System.UInt64 - unsigned 64-bit integer
    #[serde(rename = "ulong")]
    UInt64,
    /// System.Single - 32-bit floating point
    #[serde(rename = "float")]
    Single,
    /// System.Double - 64-bit floating point
    #[serde(rename = "double")]
    Double,
    /// System.Decimal - 128-bit decimal floating point
    #[serde(rename = "decimal")]
    Decimal,
    /// System.String
    #[serde(rename = "string")]
    String,
}

impl PrimitiveKind {
    /// Every primitive kind, in keyword table order.
    pub const ALL: [PrimitiveKind; 14] = [
        Self::Boolean,
        Self::Char,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::Decimal,
        Self::String,
    ];

    /// The C# keyword naming this type (e.g. `int`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Char => "char",
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Single => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
        }
    }

    /// The runtime type name (e.g. `System.Int32`).
    pub fn clr_name(&self) -> &'static str {
        match self {
            Self::Boolean => "System.Boolean",
            Self::Char => "System.Char",
            Self::SByte => "System.SByte",
            Self::Byte => "System.Byte",
            Self::Int16 => "System.Int16",
            Self::UInt16 => "System.UInt16",
            Self::Int32 => "System.Int32",
            Self::UInt32 => "System.UInt32",
            Self::Int64 => "System.Int64",
            Self::UInt64 => "System.UInt64",
            Self::Single => "System.Single",
            Self::Double => "System.Double",
            Self::Decimal => "System.Decimal",
            Self::String => "System.String",
        }
    }

    /// Resolve a keyword or runtime name (optionally `global::` qualified).
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim_start_matches("global::");
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == name || kind.clr_name() == name)
    }

    /// Whether values of this kind have value semantics.
    pub fn is_value_type(&self) -> bool {
        !matches!(self, Self::String)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::SByte
                | Self::Byte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
        )
    }

    /// Whether `value` is in range for this integer kind.
    ///
    /// Always false for non-integer kinds.
    pub fn holds_integer(&self, value: i128) -> bool {
        match self {
            Self::SByte => i8::try_from(value).is_ok(),
            Self::Byte => u8::try_from(value).is_ok(),
            Self::Int16 => i16::try_from(value).is_ok(),
            Self::UInt16 => u16::try_from(value).is_ok(),
            Self::Int32 => i32::try_from(value).is_ok(),
            Self::UInt32 => u32::try_from(value).is_ok(),
            Self::Int64 => i64::try_from(value).is_ok(),
            Self::UInt64 => u64::try_from(value).is_ok(),
            _ => false,
        }
    }

    /// Integers narrower than 32 bits, whose arithmetic promotes to `int`.
    pub fn is_small_integer(&self) -> bool {
        matches!(self, Self::SByte | Self::Byte | Self::Int16 | Self::UInt16)
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Single | Self::Double | Self::Decimal)
    }

    /// Whether the language defines `==` for this kind without a user operator.
    pub fn has_builtin_equality(&self) -> bool {
        self.is_integer()
            || self.is_floating()
            || matches!(self, Self::Boolean | Self::Char | Self::String)
    }

    /// Whether the runtime type implements `IFormattable`.
    pub fn is_formattable(&self) -> bool {
        self.is_integer() || self.is_floating()
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for PrimitiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| format!("'{s}' is not a primitive type"))
    }
}
