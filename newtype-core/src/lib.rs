//! Core utilities and types for the newtype wrapper generator.
//!
//! This crate provides the leaf building blocks used across the newtype
//! crates: writing generated files, the well-known primitive catalog, and
//! locale-independent literal formatting.

mod file;
mod literal;
mod primitive;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Literal formatting
pub use literal::{ConstantValue, escape_char, escape_string, format_literal, is_decimal_numeral};
// Fundamental types
pub use primitive::PrimitiveKind;
// Naming utilities
pub use utils::{CSHARP_KEYWORDS, escape_identifier, hint_name, is_csharp_keyword, validate_identifier};
