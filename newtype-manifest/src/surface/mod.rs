//! Public surface of an underlying type, as reported by the host.

mod default;
pub(crate) mod prelude;

pub use default::{DefaultKind, DefaultValue};
use newtype_core::PrimitiveKind;
use newtype_model::{Accessibility, RefKind};
use serde::Deserialize;

/// A type that aliases may wrap, with the members it exposes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSurface {
    /// Fully qualified name to emit (defaults to `global::<key>`).
    pub full_name: Option<String>,

    /// Short display name (defaults to the last segment of the key).
    pub display_name: Option<String>,

    /// Declaration kind
    #[serde(default)]
    pub kind: TypeKind,

    /// Well-known primitive tag, when the key is not already a primitive name
    pub primitive: Option<PrimitiveKind>,

    /// Implemented interfaces, e.g. `System.IComparable<Money>` or `System.IFormattable`
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeSurface {
    /// The name to emit for this type when declared under `key`.
    pub fn full_name(&self, key: &str) -> String {
        if let Some(full_name) = &self.full_name {
            return full_name.clone();
        }
        match PrimitiveKind::from_type_name(key) {
            Some(kind) => kind.keyword().to_string(),
            None => format!("global::{key}"),
        }
    }

    /// The short name for this type when declared under `key`.
    pub fn minimal_name(&self, key: &str) -> String {
        if let Some(display_name) = &self.display_name {
            return display_name.clone();
        }
        match PrimitiveKind::from_type_name(key) {
            Some(kind) => kind.keyword().to_string(),
            None => key.rsplit('.').next().unwrap_or(key).to_string(),
        }
    }

    /// The primitive tag, from the explicit field or the key itself.
    pub fn primitive_kind(&self, key: &str) -> Option<PrimitiveKind> {
        self.primitive.or_else(|| PrimitiveKind::from_type_name(key))
    }

    pub fn is_value_type(&self, key: &str) -> bool {
        match self.primitive_kind(key) {
            Some(kind) => kind.is_value_type(),
            None => self.kind.is_value_type(),
        }
    }

    /// Whether the type implements `System.IComparable<T>`.
    pub fn implements_comparable(&self) -> bool {
        self.interfaces.iter().any(|i| {
            let i = i.trim_start_matches("global::");
            i == "System.IComparable`1" || i.starts_with("System.IComparable<")
        })
    }

    /// Whether the type implements `System.IFormattable`.
    pub fn implements_formattable(&self) -> bool {
        self.interfaces
            .iter()
            .any(|i| i.trim_start_matches("global::") == "System.IFormattable")
    }
}

/// Declaration kind of a surface type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn is_value_type(&self) -> bool {
        matches!(self, Self::Struct | Self::Enum)
    }
}

/// A member of a surface type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    Field(FieldMember),
    Property(PropertyMember),
    Method(MethodMember),
    Constructor(ConstructorMember),
    Operator(OperatorMember),
    /// Implicit or explicit conversion operator
    Conversion(ConversionMember),
}

impl Member {
    /// Member name, for members that have one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(m) => Some(&m.name),
            Self::Property(m) => Some(&m.name),
            Self::Method(m) => Some(&m.name),
            Self::Constructor(_) | Self::Operator(_) | Self::Conversion(_) => None,
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        match self {
            Self::Field(m) => m.accessibility,
            Self::Property(m) => m.accessibility,
            Self::Method(m) => m.accessibility,
            Self::Constructor(m) => m.accessibility,
            Self::Operator(_) | Self::Conversion(_) => Accessibility::Public,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Self::Field(m) => m.is_static || m.is_const,
            Self::Property(m) => m.is_static,
            Self::Method(m) => m.is_static,
            Self::Constructor(m) => m.is_static,
            Self::Operator(_) | Self::Conversion(_) => true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMember {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    /// Compiler-synthesized (e.g. a property backing field)
    #[serde(default)]
    pub implicit: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyMember {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default = "default_true")]
    pub getter: bool,
    #[serde(default)]
    pub setter: bool,
    /// An indexer (`this[...]`)
    #[serde(default)]
    pub indexer: bool,
}

/// Accessor role of a compiler-generated method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Get,
    Set,
    Init,
    Add,
    Remove,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodMember {
    pub name: String,
    #[serde(default = "default_void")]
    pub returns: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Declares its own type parameters
    #[serde(default)]
    pub generic: bool,
    /// Set for property and event accessors
    pub accessor: Option<AccessorKind>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorMember {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Compiler-synthesized (e.g. the parameterless struct constructor)
    #[serde(default)]
    pub implicit: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorMember {
    /// Operator token (`+`) or metadata name (`op_Addition`)
    pub symbol: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub returns: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionMember {
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub returns: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub ref_kind: RefKind,
    /// A `params` array
    #[serde(default)]
    pub params: bool,
    pub default: Option<DefaultValue>,
}

impl Parameter {
    /// Whether the parameter is a raw pointer (`byte*`).
    pub fn is_pointer(&self) -> bool {
        self.type_name.trim_end().ends_with('*')
    }
}

fn default_true() -> bool {
    true
}

fn default_void() -> String {
    "void".to_string()
}
