//! The per-alias generation input.

use newtype_core::{PrimitiveKind, hint_name};
use serde::{Deserialize, Serialize};

use crate::{
    BinaryOperatorInfo, ConstructorInfo, EquatableSeq, GenerationOptions, InstanceFieldInfo,
    InstanceMethodInfo, InstancePropertyInfo, StaticMemberInfo, UnaryOperatorInfo,
};

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    /// The modifier keyword(s).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
            Self::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Runtime representation of the alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarrierKind {
    /// A struct: value semantics, never null.
    #[default]
    Struct,
    /// A class: reference semantics, may be null.
    Class,
}

/// Identity of the wrapped type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnderlyingType {
    /// Fully qualified name as emitted (`global::Shop.Money`, or a keyword like `int`).
    pub full_name: String,
    /// Short display name (`Money`, `int`).
    pub minimal_name: String,
    /// Well-known primitive tag, if any.
    pub primitive: Option<PrimitiveKind>,
    /// Whether the type has value semantics.
    pub is_value_type: bool,
}

/// Everything the synthesizer needs to emit one alias.
///
/// Built once per alias and never mutated. Equality is structural over every
/// field, including the member sequences, so an unchanged descriptor means
/// unchanged output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Declared alias name.
    pub type_name: String,
    /// Containing namespace; empty for the global namespace.
    pub namespace: String,
    pub accessibility: Accessibility,
    pub carrier: CarrierKind,
    pub is_record: bool,
    /// Declared `readonly` (meaningful for struct carriers).
    pub is_readonly: bool,
    /// Namespace-qualified alias name, used to name the output file.
    pub type_display_string: String,

    pub underlying: UnderlyingType,

    /// Underlying type implements `IComparable<T>`.
    pub implements_comparable: bool,
    /// Underlying type implements `IFormattable`.
    pub implements_formattable: bool,
    /// A user `==` exists or the underlying type is a built-in equality primitive.
    pub has_native_equality: bool,
    /// Any public static non-operator property or field exists, even if none survived filtering.
    pub has_static_member_candidates: bool,

    pub options: GenerationOptions,

    pub binary_operators: EquatableSeq<BinaryOperatorInfo>,
    pub unary_operators: EquatableSeq<UnaryOperatorInfo>,
    pub static_members: EquatableSeq<StaticMemberInfo>,
    pub instance_fields: EquatableSeq<InstanceFieldInfo>,
    pub instance_properties: EquatableSeq<InstancePropertyInfo>,
    pub instance_methods: EquatableSeq<InstanceMethodInfo>,
    pub constructors: EquatableSeq<ConstructorInfo>,
}

impl TypeDescriptor {
    /// Output file name, e.g. `Shop_Price.g.cs`.
    pub fn hint_name(&self) -> String {
        hint_name(&self.type_display_string)
    }

    /// Whether the alias has reference semantics.
    pub fn is_class(&self) -> bool {
        matches!(self.carrier, CarrierKind::Class)
    }

    /// Whether equality members are emitted.
    ///
    /// Records get compiler-synthesized equality, and redeclaring it would not compile.
    pub fn emits_equality(&self) -> bool {
        self.has_native_equality && !self.is_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> TypeDescriptor {
        TypeDescriptor {
            type_name: "Price".to_string(),
            namespace: "Shop".to_string(),
            accessibility: Accessibility::Public,
            carrier: CarrierKind::Struct,
            is_record: false,
            is_readonly: true,
            type_display_string: "Shop.Price".to_string(),
            underlying: UnderlyingType {
                full_name: "decimal".to_string(),
                minimal_name: "decimal".to_string(),
                primitive: Some(PrimitiveKind::Decimal),
                is_value_type: true,
            },
            implements_comparable: true,
            implements_formattable: true,
            has_native_equality: true,
            has_static_member_candidates: true,
            options: GenerationOptions::default(),
            binary_operators: EquatableSeq::empty(),
            unary_operators: EquatableSeq::empty(),
            static_members: EquatableSeq::empty(),
            instance_fields: EquatableSeq::empty(),
            instance_properties: EquatableSeq::empty(),
            instance_methods: EquatableSeq::empty(),
            constructors: EquatableSeq::empty(),
        }
    }

    #[test]
    fn test_hint_name_flattens_namespace() {
        assert_eq!(descriptor().hint_name(), "Shop_Price.g.cs");
    }

    #[test]
    fn test_records_do_not_emit_equality() {
        let mut d = descriptor();
        assert!(d.emits_equality());
        d.is_record = true;
        assert!(!d.emits_equality());
    }

    #[test]
    fn test_descriptor_equality_is_structural() {
        let a = descriptor();
        let mut b = descriptor();
        assert_eq!(a, b);
        b.options.suppress_wrap = true;
        assert_ne!(a, b);
    }

    #[test]
    fn test_descriptor_json_round_trip_preserves_equality() {
        let a = descriptor();
        let json = serde_json::to_string(&a).unwrap();
        let b: TypeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessibility_keywords() {
        assert_eq!(Accessibility::ProtectedInternal.keyword(), "protected internal");
        assert!(Accessibility::Public.is_public());
        assert!(!Accessibility::Internal.is_public());
    }
}
