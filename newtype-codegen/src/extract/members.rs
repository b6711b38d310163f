//! Member extraction: classify an underlying type's surface into the
//! member collections the synthesizer forwards.

use newtype_core::{format_literal, is_csharp_keyword, validate_identifier};
use newtype_manifest::{
    ConstructorMember, FieldMember, Manifest, Member, MethodMember, OperatorMember, Parameter,
    PropertyMember, TypeSurface,
};
use newtype_model::{
    Arity, BinaryOperatorInfo, ConstructorInfo, ConstructorParameterInfo, InstanceFieldInfo,
    InstanceMethodInfo, InstancePropertyInfo, OperatorKind, ParameterInfo, ReturnWrappingPolicy,
    StaticMemberInfo, UnaryOperatorInfo, UnderlyingType,
};

use super::intrinsics::intrinsic_operators;

/// Methods every type has, which the synthesizer writes itself.
const OBJECT_METHODS: [&str; 4] = ["Equals", "GetHashCode", "ToString", "CompareTo"];

/// Member collections of one underlying type, filtered and in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedMembers {
    pub binary_operators: Vec<BinaryOperatorInfo>,
    pub unary_operators: Vec<UnaryOperatorInfo>,
    pub static_members: Vec<StaticMemberInfo>,
    pub has_static_member_candidates: bool,
    pub instance_fields: Vec<InstanceFieldInfo>,
    pub instance_properties: Vec<InstancePropertyInfo>,
    pub instance_methods: Vec<InstanceMethodInfo>,
    pub constructors: Vec<ConstructorInfo>,
}

/// Classifies the members of one underlying type.
///
/// Type positions are compared against the underlying type by resolved name,
/// so `Pair`, `global::Pair` and a `[types]` key all count as the same type.
pub struct MemberExtractor<'a> {
    manifest: &'a Manifest,
    underlying: &'a UnderlyingType,
    policy: ReturnWrappingPolicy,
}

impl<'a> MemberExtractor<'a> {
    pub fn new(
        manifest: &'a Manifest,
        underlying: &'a UnderlyingType,
        policy: ReturnWrappingPolicy,
    ) -> Self {
        Self {
            manifest,
            underlying,
            policy,
        }
    }

    /// Run every classification rule over `surface`.
    ///
    /// `declared_signatures` are the alias's own constructors; forwarded
    /// constructors with the same signature are dropped.
    pub fn extract(&self, surface: &TypeSurface, declared_signatures: &[String]) -> ExtractedMembers {
        let mut out = ExtractedMembers::default();

        if let Some(kind) = self.underlying.primitive {
            let intrinsic = intrinsic_operators(kind);
            out.binary_operators = intrinsic.binary;
            out.unary_operators = intrinsic.unary;
        }

        for member in &surface.members {
            match member {
                Member::Operator(op) => self.classify_operator(op, &mut out),
                Member::Conversion(_) => {}
                Member::Field(field) => self.classify_field(field, &mut out),
                Member::Property(prop) => self.classify_property(prop, &mut out),
                Member::Method(method) => {
                    if let Some(info) = self.instance_method(method) {
                        out.instance_methods.push(info);
                    }
                }
                Member::Constructor(ctor) => {
                    if let Some(info) = self.constructor(ctor, declared_signatures) {
                        out.constructors.push(info);
                    }
                }
            }
        }

        out
    }

    /// Resolve a type reference and compare it with the underlying type.
    fn resolve(&self, type_name: &str) -> (String, bool) {
        let resolved = self.manifest.resolve_type_name(type_name);
        let full = self.underlying.full_name.as_str();
        let is_underlying = resolved == full
            || (!self.underlying.is_value_type && resolved.strip_suffix('?') == Some(full));
        (resolved, is_underlying)
    }

    fn classify_operator(&self, op: &OperatorMember, out: &mut ExtractedMembers) {
        let arity = match op.parameters.len() {
            1 => Arity::Unary,
            2 => Arity::Binary,
            n => {
                tracing::debug!(symbol = %op.symbol, parameters = n, "skipping operator with unexpected arity");
                return;
            }
        };

        let Some(kind) = operator_kind(&op.symbol, arity) else {
            tracing::debug!(symbol = %op.symbol, "skipping unsupported operator");
            return;
        };

        let (return_type, return_is_underlying) = self.resolve(&op.returns);

        match arity {
            Arity::Binary => {
                let (left_type, left_is_underlying) = self.resolve(&op.parameters[0].type_name);
                let (right_type, right_is_underlying) = self.resolve(&op.parameters[1].type_name);
                if !left_is_underlying && !right_is_underlying {
                    tracing::debug!(%kind, "skipping operator that does not involve the underlying type");
                    return;
                }
                let info = BinaryOperatorInfo {
                    kind,
                    left_type,
                    right_type,
                    return_type,
                    left_is_underlying,
                    right_is_underlying,
                    return_is_underlying,
                };
                if !out.binary_operators.contains(&info) {
                    out.binary_operators.push(info);
                }
            }
            Arity::Unary => {
                let info = UnaryOperatorInfo {
                    kind,
                    return_type,
                    return_is_underlying,
                };
                if !out.unary_operators.contains(&info) {
                    out.unary_operators.push(info);
                }
            }
        }
    }

    fn classify_field(&self, field: &FieldMember, out: &mut ExtractedMembers) {
        if !field.accessibility.is_public() {
            return;
        }

        if field.is_static || field.is_const {
            out.has_static_member_candidates = true;
            // Constants are candidates but are not forwarded
            if field.readonly && !field.is_const {
                let (type_name, type_is_underlying) = self.resolve(&field.type_name);
                out.static_members.push(StaticMemberInfo {
                    name: field.name.clone(),
                    type_name,
                    type_is_underlying,
                    is_property: false,
                    is_readonly_field: true,
                });
            }
            return;
        }

        if field.implicit {
            return;
        }
        let (type_name, type_is_underlying) = self.resolve(&field.type_name);
        out.instance_fields.push(InstanceFieldInfo {
            name: field.name.clone(),
            type_name,
            type_is_underlying,
        });
    }

    fn classify_property(&self, prop: &PropertyMember, out: &mut ExtractedMembers) {
        if !prop.accessibility.is_public() {
            return;
        }

        if prop.is_static {
            out.has_static_member_candidates = true;
            if prop.getter {
                let (type_name, type_is_underlying) = self.resolve(&prop.type_name);
                out.static_members.push(StaticMemberInfo {
                    name: prop.name.clone(),
                    type_name,
                    type_is_underlying,
                    is_property: true,
                    is_readonly_field: false,
                });
            }
            return;
        }

        if prop.indexer || !prop.getter {
            return;
        }
        let (type_name, type_is_underlying) = self.resolve(&prop.type_name);
        out.instance_properties.push(InstancePropertyInfo {
            name: prop.name.clone(),
            type_name,
            type_is_underlying,
            has_getter: prop.getter,
        });
    }

    fn instance_method(&self, method: &MethodMember) -> Option<InstanceMethodInfo> {
        if method.is_static || !method.accessibility.is_public() {
            return None;
        }
        if method.accessor.is_some() || method.generic {
            return None;
        }
        // Compiler-named methods (`get_Length`, `<Clone>$`) can't be called by name.
        // Keywords can, as `@lock`.
        if (validate_identifier(&method.name).is_some() && !is_csharp_keyword(&method.name))
            || method.name.starts_with("get_")
            || method.name.starts_with("set_")
        {
            return None;
        }
        if OBJECT_METHODS.contains(&method.name.as_str()) {
            return None;
        }

        let returns_void = method.returns.trim() == "void";
        let (return_type, return_is_underlying) = if returns_void {
            ("void".to_string(), false)
        } else {
            self.resolve(&method.returns)
        };

        let parameters = method
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (type_name, is_underlying) = self.resolve(&p.type_name);
                ParameterInfo {
                    name: parameter_name(p, i),
                    type_name,
                    ref_kind: p.ref_kind,
                    is_underlying,
                }
            })
            .collect();

        Some(InstanceMethodInfo {
            name: method.name.clone(),
            return_type,
            returns_void,
            return_is_underlying,
            skip_return_wrapping: self
                .policy
                .skips(self.underlying.primitive, self.underlying.is_value_type),
            parameters,
        })
    }

    fn constructor(
        &self,
        ctor: &ConstructorMember,
        declared_signatures: &[String],
    ) -> Option<ConstructorInfo> {
        if ctor.is_static || ctor.implicit || !ctor.accessibility.is_public() {
            return None;
        }
        if ctor.parameters.is_empty() || ctor.parameters.iter().any(Parameter::is_pointer) {
            return None;
        }

        let parameters: Vec<_> = ctor
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (type_name, is_underlying) = self.resolve(&p.type_name);
                (
                    is_underlying,
                    ConstructorParameterInfo {
                        name: parameter_name(p, i),
                        type_name,
                        ref_kind: p.ref_kind,
                        is_params: p.params,
                        default_literal: p
                            .default
                            .as_ref()
                            .map(|d| format_literal(&d.to_constant(&p.type_name))),
                    },
                )
            })
            .collect();

        // Copy constructor
        if let [(true, _)] = parameters.as_slice() {
            return None;
        }

        let info = ConstructorInfo {
            parameters: parameters.into_iter().map(|(_, p)| p).collect(),
        };
        let signature = info.signature();
        if declared_signatures.contains(&signature) {
            tracing::debug!(%signature, "skipping constructor already declared on the alias");
            return None;
        }
        Some(info)
    }
}

/// Map a declared operator symbol (`+`) or metadata name (`op_Addition`) to its kind.
pub(crate) fn operator_kind(symbol: &str, arity: Arity) -> Option<OperatorKind> {
    OperatorKind::from_symbol(symbol, arity)
        .or_else(|| OperatorKind::from_metadata_name(symbol).filter(|k| k.arity() == arity))
}

fn parameter_name(p: &Parameter, index: usize) -> String {
    if p.name.is_empty() {
        format!("arg{index}")
    } else {
        p.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use newtype_model::RefKind;

    use super::*;

    fn extract(src: &str, underlying: &str) -> ExtractedMembers {
        let manifest: Manifest = src.parse().unwrap();
        let found = manifest.surface(underlying).unwrap();
        let ty = found.underlying_type();
        MemberExtractor::new(&manifest, &ty, ReturnWrappingPolicy::default())
            .extract(found.surface, &[])
    }

    #[test]
    fn test_binary_operator_self_flags() {
        let members = extract(
            r#"
            [types.Money]
            kind = "struct"

            [[types.Money.members]]
            kind = "operator"
            symbol = "*"
            parameters = [{ name = "a", type = "Money" }, { name = "f", type = "decimal" }]
            returns = "Money"

            [[types.Money.members]]
            kind = "operator"
            symbol = "op_Multiply"
            parameters = [{ name = "f", type = "decimal" }, { name = "a", type = "global::Money" }]
            returns = "global::Money"
            "#,
            "Money",
        );

        assert_eq!(members.binary_operators.len(), 2);
        let first = &members.binary_operators[0];
        assert_eq!(first.kind, OperatorKind::Multiply);
        assert!(first.left_is_underlying && !first.right_is_underlying);
        assert!(first.return_is_underlying);
        assert_eq!(first.right_type, "decimal");

        let second = &members.binary_operators[1];
        assert!(!second.left_is_underlying && second.right_is_underlying);
        assert_eq!(second.left_type, "decimal");
    }

    #[test]
    fn test_operators_without_underlying_operand_are_dropped() {
        let members = extract(
            r#"
            [types.Money]
            [[types.Money.members]]
            kind = "operator"
            symbol = "+"
            parameters = [{ type = "int" }, { type = "int" }]
            returns = "int"

            [[types.Money.members]]
            kind = "operator"
            symbol = "true"
            parameters = [{ type = "Money" }]
            returns = "bool"

            [[types.Money.members]]
            kind = "conversion"
            parameters = [{ type = "Money" }]
            returns = "decimal"
            "#,
            "Money",
        );
        assert!(members.binary_operators.is_empty());
        assert!(members.unary_operators.is_empty());
    }

    #[test]
    fn test_unary_minus_by_arity() {
        let members = extract(
            r#"
            [types.Money]
            [[types.Money.members]]
            kind = "operator"
            symbol = "-"
            parameters = [{ type = "Money" }]
            returns = "Money"
            "#,
            "Money",
        );
        assert_eq!(members.unary_operators[0].kind, OperatorKind::UnaryNegation);
        assert!(members.unary_operators[0].return_is_underlying);
    }

    #[test]
    fn test_static_members_and_candidates() {
        let members = extract(
            r#"
            [types.Vector]
            kind = "struct"

            [[types.Vector.members]]
            kind = "property"
            name = "Zero"
            type = "Vector"
            static = true

            [[types.Vector.members]]
            kind = "field"
            name = "Origin"
            type = "Vector"
            static = true
            readonly = true

            [[types.Vector.members]]
            kind = "field"
            name = "Counter"
            type = "int"
            static = true

            [[types.Vector.members]]
            kind = "property"
            name = "Hidden"
            type = "int"
            static = true
            accessibility = "internal"
            "#,
            "Vector",
        );

        assert!(members.has_static_member_candidates);
        let names: Vec<_> = members.static_members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Zero", "Origin"]);
        assert!(members.static_members[0].is_property);
        assert!(members.static_members[1].is_readonly_field);
        assert!(members.static_members.iter().all(|m| m.type_is_underlying));
    }

    #[test]
    fn test_int_constants_are_candidates_only() {
        let members = extract("", "int");
        assert!(members.has_static_member_candidates);
        assert!(members.static_members.is_empty());
        assert_eq!(members.binary_operators.len(), 10);
    }

    #[test]
    fn test_instance_fields_and_properties() {
        let members = extract(
            r#"
            [types.Sensor]
            [[types.Sensor.members]]
            kind = "field"
            name = "Name"
            type = "string"

            [[types.Sensor.members]]
            kind = "field"
            name = "<Mode>k__BackingField"
            type = "int"
            implicit = true

            [[types.Sensor.members]]
            kind = "property"
            name = "Reading"
            type = "double"

            [[types.Sensor.members]]
            kind = "property"
            name = "Calibration"
            type = "double"
            getter = false
            setter = true

            [[types.Sensor.members]]
            kind = "property"
            name = "Item"
            type = "double"
            indexer = true
            "#,
            "Sensor",
        );

        assert_eq!(members.instance_fields.len(), 1);
        assert_eq!(members.instance_fields[0].name, "Name");
        let props: Vec<_> = members
            .instance_properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(props, ["Reading"]);
    }

    #[test]
    fn test_instance_method_filters() {
        let members = extract(
            r#"
            [types.Widget]
            [[types.Widget.members]]
            kind = "method"
            name = "Render"
            returns = "string"
            parameters = [{ name = "other", type = "Widget" }, { name = "scale", type = "double", ref_kind = "ref" }]

            [[types.Widget.members]]
            kind = "method"
            name = "ToString"
            returns = "string"

            [[types.Widget.members]]
            kind = "method"
            name = "Map"
            generic = true

            [[types.Widget.members]]
            kind = "method"
            name = "get_Name"
            returns = "string"
            accessor = "get"

            [[types.Widget.members]]
            kind = "method"
            name = "Create"
            static = true
            returns = "Widget"

            [[types.Widget.members]]
            kind = "method"
            name = "<Clone>$"
            returns = "Widget"

            [[types.Widget.members]]
            kind = "method"
            name = "lock"
            returns = "void"
            "#,
            "Widget",
        );

        let names: Vec<_> = members.instance_methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Render", "lock"]);
        assert!(members.instance_methods[1].returns_void);
        let render = &members.instance_methods[0];
        assert_eq!(render.name, "Render");
        assert!(!render.returns_void);
        assert!(!render.skip_return_wrapping);
        assert!(render.parameters[0].is_underlying);
        assert_eq!(render.parameters[1].ref_kind, RefKind::Ref);
    }

    #[test]
    fn test_primitive_value_types_skip_return_wrapping() {
        let manifest: Manifest = r#"
            [types.int]
            [[types.int.members]]
            kind = "method"
            name = "Abs"
            returns = "int"
        "#
        .parse()
        .unwrap();
        let found = manifest.surface("int").unwrap();
        let ty = found.underlying_type();
        assert_eq!(ty.primitive, Some(newtype_core::PrimitiveKind::Int32));

        let skip = MemberExtractor::new(&manifest, &ty, ReturnWrappingPolicy::default())
            .extract(found.surface, &[]);
        assert!(skip.instance_methods[0].skip_return_wrapping);
        assert!(skip.instance_methods[0].return_is_underlying);

        let wrap = MemberExtractor::new(&manifest, &ty, ReturnWrappingPolicy::WrapAll)
            .extract(found.surface, &[]);
        assert!(!wrap.instance_methods[0].skip_return_wrapping);
    }

    #[test]
    fn test_constructor_filters() {
        let manifest: Manifest = r#"
            [types.Tokenizer]
            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "input", type = "string" }]

            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "input", type = "string", ref_kind = "ref" }]

            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "other", type = "Tokenizer" }]

            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "ptr", type = "byte*" }]

            [[types.Tokenizer.members]]
            kind = "constructor"

            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "size", type = "int" }]
            accessibility = "private"

            [[types.Tokenizer.members]]
            kind = "constructor"
            parameters = [{ name = "input", type = "string" }, { name = "limit", type = "decimal", default = 1.5 }]
        "#
        .parse()
        .unwrap();
        let found = manifest.surface("Tokenizer").unwrap();
        let ty = found.underlying_type();
        let members = MemberExtractor::new(&manifest, &ty, ReturnWrappingPolicy::default())
            .extract(found.surface, &["ref string".to_string()]);

        let signatures: Vec<_> = members.constructors.iter().map(|c| c.signature()).collect();
        assert_eq!(signatures, ["string", "string,decimal"]);
        assert_eq!(
            members.constructors[1].parameters[1].default_literal.as_deref(),
            Some("1.5m")
        );
    }
}
