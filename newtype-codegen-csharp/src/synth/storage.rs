//! Storage, construction and the implicit conversions.

use newtype_codegen::builder::CodeFragment;
use newtype_core::escape_identifier;
use newtype_model::{ConstructorInfo, ConstructorParameterInfo};

use super::{Alias, Block};

pub(super) fn storage(alias: &Alias) -> Vec<Block> {
    let u = alias.underlying();
    vec![
        vec![CodeFragment::line(format!("private readonly {u} _value;"))],
        vec![CodeFragment::line(format!("public {u} Value => _value;"))],
    ]
}

pub(super) fn constructors(alias: &Alias) -> Vec<Block> {
    let mut blocks = vec![vec![CodeFragment::braced(
        format!("public {}({} value)", alias.name(), alias.underlying()),
        vec![CodeFragment::line("_value = value;")],
    )]];

    if !alias.d.options.suppress_constructor_forwarding {
        blocks.extend(
            alias
                .d
                .constructors
                .iter()
                .map(|ctor| forwarded_constructor(alias, ctor)),
        );
    }
    blocks
}

fn forwarded_constructor(alias: &Alias, ctor: &ConstructorInfo) -> Block {
    let parameters: Vec<_> = ctor.parameters.iter().map(declare_parameter).collect();
    let arguments: Vec<_> = ctor
        .parameters
        .iter()
        .map(|p| format!("{}{}", p.ref_kind.argument_modifier(), escape_identifier(&p.name)))
        .collect();

    vec![CodeFragment::braced(
        format!("public {}({})", alias.name(), parameters.join(", ")),
        vec![CodeFragment::line(format!(
            "_value = new {}({});",
            alias.underlying(),
            arguments.join(", ")
        ))],
    )]
}

fn declare_parameter(p: &ConstructorParameterInfo) -> String {
    let mut out = String::new();
    if p.is_params {
        out.push_str("params ");
    }
    out.push_str(p.ref_kind.declaration_modifier());
    out.push_str(&p.type_name);
    out.push(' ');
    out.push_str(&escape_identifier(&p.name));
    if let Some(literal) = &p.default_literal {
        out.push_str(" = ");
        out.push_str(literal);
    }
    out
}

pub(super) fn conversions(alias: &Alias) -> Vec<Block> {
    let (n, u) = (alias.name(), alias.underlying());
    let options = &alias.d.options;

    let mut blocks = Vec::new();
    if !options.suppress_wrap {
        blocks.push(alias.attributed(format!(
            "public static implicit operator {n}({u} value) => new {n}(value);"
        )));
    }
    if !options.suppress_unwrap {
        blocks.push(alias.attributed(format!(
            "public static implicit operator {u}({n} value) => value._value;"
        )));
    }
    blocks
}
