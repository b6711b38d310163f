//! Parameter default values.

use newtype_core::{ConstantValue, PrimitiveKind};
use serde::Deserialize;

/// A parameter default as written in the manifest.
///
/// Plain TOML scalars are typed by the parameter they belong to, so `1.5` on
/// a `decimal` parameter is a decimal and `"x"` on a `char` parameter is a
/// character. The table form covers what TOML cannot express directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Explicit {
        kind: DefaultKind,
        value: Option<String>,
    },
}

/// Kinds for the `{ kind = ..., value = ... }` default form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultKind {
    /// `null` / `default`
    Null,
    Char,
    /// Decimal numeral text, kept exact
    Decimal,
    /// Any constant without literal syntax (enum members, etc)
    Other,
}

impl DefaultValue {
    /// Convert to a typed constant for a parameter of `type_name`.
    ///
    /// Combinations with no faithful literal become [`ConstantValue::Unsupported`].
    pub fn to_constant(&self, type_name: &str) -> ConstantValue {
        let primitive = PrimitiveKind::from_type_name(type_name.trim().trim_end_matches('?'));

        match (self, primitive) {
            (Self::Bool(b), Some(PrimitiveKind::Boolean)) => ConstantValue::Bool(*b),
            (Self::Integer(i), Some(PrimitiveKind::Single)) => ConstantValue::Float32(*i as f32),
            (Self::Integer(i), Some(PrimitiveKind::Double)) => ConstantValue::Float64(*i as f64),
            (Self::Integer(i), Some(PrimitiveKind::Decimal)) => {
                ConstantValue::Decimal(i.to_string())
            }
            (Self::Integer(i), Some(kind)) if kind.holds_integer(i128::from(*i)) => {
                ConstantValue::Int {
                    value: i128::from(*i),
                    kind,
                }
            }
            (Self::Float(f), Some(PrimitiveKind::Single)) => ConstantValue::Float32(*f as f32),
            (Self::Float(f), Some(PrimitiveKind::Double)) => ConstantValue::Float64(*f),
            (Self::Float(f), Some(PrimitiveKind::Decimal)) => decimal_from_float(*f),
            (Self::Text(s), Some(PrimitiveKind::String)) => ConstantValue::String(s.clone()),
            (Self::Text(s), Some(PrimitiveKind::Decimal)) => ConstantValue::Decimal(s.clone()),
            (Self::Text(s), Some(PrimitiveKind::Char)) => single_char(s),
            (Self::Explicit { kind, value }, _) => match kind {
                DefaultKind::Null => ConstantValue::Null,
                DefaultKind::Char => value.as_deref().map_or(ConstantValue::Unsupported, single_char),
                DefaultKind::Decimal => value
                    .clone()
                    .map_or(ConstantValue::Unsupported, ConstantValue::Decimal),
                DefaultKind::Other => ConstantValue::Unsupported,
            },
            _ => ConstantValue::Unsupported,
        }
    }
}

// `Display` for floats never switches to exponent notation.
fn decimal_from_float(f: f64) -> ConstantValue {
    let text = f.to_string();
    if f.is_finite() && newtype_core::is_decimal_numeral(&text) {
        ConstantValue::Decimal(text)
    } else {
        ConstantValue::Unsupported
    }
}

fn single_char(s: &str) -> ConstantValue {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ConstantValue::Char(c),
        _ => ConstantValue::Unsupported,
    }
}
