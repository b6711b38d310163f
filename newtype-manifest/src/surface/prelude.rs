//! Built-in surfaces for the C# primitive types.
//!
//! Only the members that matter for forwarding are listed. Numeric limits
//! are `const` in the runtime, so they count as static member candidates
//! without surviving the readonly-field filter.

use std::sync::LazyLock;

use newtype_core::PrimitiveKind;
use newtype_model::Accessibility;

use super::{
    ConstructorMember, FieldMember, Member, MethodMember, Parameter, PropertyMember, TypeKind,
    TypeSurface,
};

static PRELUDE: LazyLock<Vec<(PrimitiveKind, TypeSurface)>> = LazyLock::new(|| {
    PrimitiveKind::ALL
        .into_iter()
        .map(|kind| (kind, surface_for(kind)))
        .collect()
});

/// The built-in surface for a primitive.
pub(crate) fn surface(kind: PrimitiveKind) -> &'static TypeSurface {
    PRELUDE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, surface)| surface)
        .unwrap_or_else(|| unreachable!("prelude covers every primitive kind"))
}

fn surface_for(kind: PrimitiveKind) -> TypeSurface {
    let keyword = kind.keyword();
    let mut interfaces = vec![format!("System.IComparable<{keyword}>")];
    if kind.is_formattable() {
        interfaces.push("System.IFormattable".to_string());
    }

    let mut members = vec![
        method("Equals", "bool", vec![param("obj", "object?")]),
        method("GetHashCode", "int", vec![]),
        method("ToString", "string", vec![]),
        method("CompareTo", "int", vec![param("value", keyword)]),
    ];

    match kind {
        PrimitiveKind::Boolean => {
            members.push(static_readonly("TrueString", "string"));
            members.push(static_readonly("FalseString", "string"));
        }
        PrimitiveKind::String => {
            members.push(static_readonly("Empty", "string"));
            members.push(property("Length", "int"));
            members.push(Member::Property(PropertyMember {
                indexer: true,
                ..property_member("Chars", "char")
            }));
            members.push(method("Contains", "bool", vec![param("value", "string")]));
            members.push(method("StartsWith", "bool", vec![param("value", "string")]));
            members.push(method("EndsWith", "bool", vec![param("value", "string")]));
            members.push(method("Trim", "string", vec![]));
            members.push(method("ToUpperInvariant", "string", vec![]));
            members.push(method("ToLowerInvariant", "string", vec![]));
            members.push(constructor(vec![param("c", "char"), param("count", "int")]));
            members.push(constructor(vec![param("value", "char[]")]));
            members.push(constructor(vec![param("value", "char*")]));
        }
        PrimitiveKind::Double | PrimitiveKind::Single => {
            members.extend(limits(keyword));
            for name in ["Epsilon", "NaN", "PositiveInfinity", "NegativeInfinity"] {
                members.push(constant(name, keyword));
            }
        }
        _ => members.extend(limits(keyword)),
    }

    TypeSurface {
        full_name: Some(keyword.to_string()),
        display_name: Some(keyword.to_string()),
        kind: if kind.is_value_type() {
            TypeKind::Struct
        } else {
            TypeKind::Class
        },
        primitive: Some(kind),
        interfaces,
        members,
    }
}

fn limits(keyword: &str) -> [Member; 2] {
    [constant("MinValue", keyword), constant("MaxValue", keyword)]
}

fn constant(name: &str, type_name: &str) -> Member {
    Member::Field(FieldMember {
        name: name.to_string(),
        type_name: type_name.to_string(),
        accessibility: Accessibility::Public,
        is_static: true,
        readonly: false,
        is_const: true,
        implicit: false,
    })
}

fn static_readonly(name: &str, type_name: &str) -> Member {
    Member::Field(FieldMember {
        name: name.to_string(),
        type_name: type_name.to_string(),
        accessibility: Accessibility::Public,
        is_static: true,
        readonly: true,
        is_const: false,
        implicit: false,
    })
}

fn property_member(name: &str, type_name: &str) -> PropertyMember {
    PropertyMember {
        name: name.to_string(),
        type_name: type_name.to_string(),
        accessibility: Accessibility::Public,
        is_static: false,
        getter: true,
        setter: false,
        indexer: false,
    }
}

fn property(name: &str, type_name: &str) -> Member {
    Member::Property(property_member(name, type_name))
}

fn method(name: &str, returns: &str, parameters: Vec<Parameter>) -> Member {
    Member::Method(MethodMember {
        name: name.to_string(),
        returns: returns.to_string(),
        parameters,
        accessibility: Accessibility::Public,
        is_static: false,
        generic: false,
        accessor: None,
    })
}

fn constructor(parameters: Vec<Parameter>) -> Member {
    Member::Constructor(ConstructorMember {
        parameters,
        accessibility: Accessibility::Public,
        is_static: false,
        implicit: false,
    })
}

fn param(name: &str, type_name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        type_name: type_name.to_string(),
        ref_kind: Default::default(),
        params: false,
        default: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_primitive_has_a_surface() {
        for kind in PrimitiveKind::ALL {
            let surface = surface(kind);
            assert_eq!(surface.primitive, Some(kind));
            assert!(surface.implements_comparable());
        }
    }

    #[test]
    fn test_int_limits_are_const() {
        let int = surface(PrimitiveKind::Int32);
        let max = int
            .members
            .iter()
            .find_map(|m| match m {
                Member::Field(f) if f.name == "MaxValue" => Some(f),
                _ => None,
            })
            .unwrap();
        assert!(max.is_const);
        assert!(!max.readonly);
        assert!(int.implements_formattable());
    }

    #[test]
    fn test_string_is_reference_type() {
        let string = surface(PrimitiveKind::String);
        assert_eq!(string.kind, TypeKind::Class);
        assert!(!string.is_value_type("string"));
        assert!(!string.implements_formattable());
    }
}
