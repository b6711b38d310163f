//! Forwarded static and instance members.

use newtype_codegen::builder::CodeFragment;
use newtype_core::escape_identifier;
use newtype_model::{InstanceMethodInfo, ParameterInfo, RefKind};

use super::{Alias, Block, separate};

/// The `Static Members` region.
///
/// Emitted whenever the underlying type has static member candidates, even
/// if none survived filtering.
pub(super) fn static_members(alias: &Alias) -> Vec<Block> {
    let d = alias.d;
    if !d.has_static_member_candidates {
        return Vec::new();
    }

    let (n, u) = (alias.name(), alias.underlying());
    let members = d
        .static_members
        .iter()
        .filter(|m| !alias.is_reserved(&m.name))
        .map(|m| {
            let name = escape_identifier(&m.name);
            let access = format!("{u}.{name}");
            if m.type_is_underlying {
                alias.property(format!("public static {n} {name}"), alias.wrap(&access))
            } else {
                alias.property(format!("public static {} {name}", m.type_name), access)
            }
        });

    vec![vec![CodeFragment::region("Static Members", separate(members))]]
}

/// Instance fields and properties as get-only properties, then methods.
pub(super) fn instance_members(alias: &Alias) -> Vec<Block> {
    let d = alias.d;
    let n = alias.name();

    let fields = d
        .instance_fields
        .iter()
        .map(|f| (&f.name, &f.type_name, f.type_is_underlying));
    let properties = d
        .instance_properties
        .iter()
        .filter(|p| p.has_getter)
        .map(|p| (&p.name, &p.type_name, p.type_is_underlying));

    let mut blocks: Vec<Block> = fields
        .chain(properties)
        .filter(|(name, _, _)| !alias.is_reserved(name))
        .map(|(name, type_name, is_underlying)| {
            let name = escape_identifier(name);
            let access = format!("_value.{name}");
            if is_underlying {
                alias.property(format!("public {n} {name}"), alias.wrap(&access))
            } else {
                alias.property(format!("public {type_name} {name}"), access)
            }
        })
        .collect();

    blocks.extend(
        d.instance_methods
            .iter()
            .filter(|m| !alias.is_reserved(&m.name))
            .map(|m| method(alias, m)),
    );
    blocks
}

fn method(alias: &Alias, m: &InstanceMethodInfo) -> Block {
    let parameters: Vec<_> = m.parameters.iter().map(|p| parameter(alias, p)).collect();
    let (declarations, arguments): (Vec<_>, Vec<_>) = parameters.into_iter().unzip();

    let name = escape_identifier(&m.name);
    let call = format!("_value.{name}({})", arguments.join(", "));
    let (returns, body) = if m.returns_void {
        ("void".to_string(), call)
    } else if m.return_is_underlying && !m.skip_return_wrapping {
        (alias.name().to_string(), alias.wrap(&call))
    } else {
        (m.return_type.clone(), call)
    };

    alias.attributed(format!(
        "public {returns} {name}({}) => {body};",
        declarations.join(", ")
    ))
}

/// Declaration and call-site argument for one parameter.
///
/// By-value parameters of the underlying type take the alias instead.
fn parameter(alias: &Alias, p: &ParameterInfo) -> (String, String) {
    let name = escape_identifier(&p.name);
    if p.is_underlying && p.ref_kind == RefKind::None {
        (format!("{} {name}", alias.name()), format!("{name}._value"))
    } else {
        (
            format!("{}{} {name}", p.ref_kind.declaration_modifier(), p.type_name),
            format!("{}{name}", p.ref_kind.argument_modifier()),
        )
    }
}
