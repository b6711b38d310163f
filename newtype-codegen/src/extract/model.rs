//! Model building: one immutable descriptor per alias.

use eyre::{Result, eyre};
use newtype_manifest::{AliasDecl, Manifest};
use newtype_model::{OperatorKind, TypeDescriptor};

use super::MemberExtractor;

/// Extract and assemble the descriptor for `alias`.
///
/// Fails only when the underlying type does not resolve, which manifest
/// parsing already rules out for parsed manifests.
pub fn build_descriptor(manifest: &Manifest, alias: &AliasDecl) -> Result<TypeDescriptor> {
    let found = manifest.underlying(alias).ok_or_else(|| {
        eyre!(
            "unknown underlying type '{}' for alias '{}'",
            alias.underlying,
            alias.name
        )
    })?;
    let underlying = found.underlying_type();

    let declared = manifest.declared_signatures(alias);
    let members = MemberExtractor::new(manifest, &underlying, manifest.generator.return_wrapping)
        .extract(found.surface, &declared);

    let has_native_equality = members
        .binary_operators
        .iter()
        .any(|op| op.kind == OperatorKind::Equality)
        || underlying
            .primitive
            .is_some_and(|kind| kind.has_builtin_equality());

    tracing::debug!(
        alias = %alias.qualified_name(),
        underlying = %underlying.full_name,
        binary = members.binary_operators.len(),
        unary = members.unary_operators.len(),
        methods = members.instance_methods.len(),
        constructors = members.constructors.len(),
        "extracted alias"
    );

    Ok(TypeDescriptor {
        type_name: alias.name.clone(),
        namespace: alias.namespace.clone(),
        accessibility: alias.accessibility,
        carrier: alias.carrier,
        is_record: alias.record,
        is_readonly: alias.readonly,
        type_display_string: alias.qualified_name(),
        implements_comparable: found.surface.implements_comparable(),
        implements_formattable: found.surface.implements_formattable(),
        has_native_equality,
        has_static_member_candidates: members.has_static_member_candidates,
        options: alias.options(manifest.generator.method_impl),
        binary_operators: members.binary_operators.into(),
        unary_operators: members.unary_operators.into(),
        static_members: members.static_members.into(),
        instance_fields: members.instance_fields.into(),
        instance_properties: members.instance_properties.into(),
        instance_methods: members.instance_methods.into(),
        constructors: members.constructors.into(),
        underlying,
    })
}
