//! Extracted member facts.
//!
//! Type names are stored fully qualified exactly as they will be emitted;
//! the `*_is_underlying` flags record whether a position referred to the
//! underlying type itself, which is what drives re-wrapping in the output.

use serde::{Deserialize, Serialize};

use crate::{EquatableSeq, OperatorKind};

/// Parameter passing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefKind {
    /// By value.
    #[default]
    None,
    Ref,
    Out,
    In,
    RefReadonly,
}

impl RefKind {
    /// Modifier written before a parameter type in a declaration.
    pub fn declaration_modifier(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ref => "ref ",
            Self::Out => "out ",
            Self::In => "in ",
            Self::RefReadonly => "ref readonly ",
        }
    }

    /// Modifier written before an argument at a call site.
    pub fn argument_modifier(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ref => "ref ",
            Self::Out => "out ",
            Self::In | Self::RefReadonly => "in ",
        }
    }
}

/// A binary operator declared on (or intrinsic to) the underlying type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryOperatorInfo {
    pub kind: OperatorKind,
    pub left_type: String,
    pub right_type: String,
    pub return_type: String,
    pub left_is_underlying: bool,
    pub right_is_underlying: bool,
    pub return_is_underlying: bool,
}

impl BinaryOperatorInfo {
    /// Both operands are the underlying type.
    pub fn is_homogeneous(&self) -> bool {
        self.left_is_underlying && self.right_is_underlying
    }
}

/// A unary operator declared on (or intrinsic to) the underlying type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnaryOperatorInfo {
    pub kind: OperatorKind,
    pub return_type: String,
    pub return_is_underlying: bool,
}

/// A static property or readonly field forwarded onto the alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticMemberInfo {
    pub name: String,
    pub type_name: String,
    pub type_is_underlying: bool,
    pub is_property: bool,
    pub is_readonly_field: bool,
}

/// A public instance field, exposed as a get-only property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceFieldInfo {
    pub name: String,
    pub type_name: String,
    pub type_is_underlying: bool,
}

/// A readable instance property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstancePropertyInfo {
    pub name: String,
    pub type_name: String,
    pub type_is_underlying: bool,
    pub has_getter: bool,
}

/// An ordinary instance method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceMethodInfo {
    pub name: String,
    pub return_type: String,
    pub returns_void: bool,
    pub return_is_underlying: bool,
    /// Keep the underlying type in the signature instead of re-wrapping it.
    pub skip_return_wrapping: bool,
    pub parameters: EquatableSeq<ParameterInfo>,
}

/// A parameter of a forwarded instance method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub type_name: String,
    pub ref_kind: RefKind,
    pub is_underlying: bool,
}

/// A constructor of the underlying type the alias forwards to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorInfo {
    pub parameters: EquatableSeq<ConstructorParameterInfo>,
}

impl ConstructorInfo {
    /// Names ignored: pass convention plus type, comma separated.
    pub fn signature(&self) -> String {
        self.parameters
            .iter()
            .map(|p| format!("{}{}", p.ref_kind.declaration_modifier(), p.type_name))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructorParameterInfo {
    pub name: String,
    pub type_name: String,
    pub ref_kind: RefKind,
    /// A `params` array parameter.
    pub is_params: bool,
    /// Pre-rendered default value, when the parameter is optional.
    pub default_literal: Option<String>,
}
