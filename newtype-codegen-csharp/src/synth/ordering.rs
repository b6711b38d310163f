//! Ordering, formatting and `ToString`.

use newtype_codegen::builder::CodeFragment;
use newtype_core::PrimitiveKind;
use newtype_model::OperatorKind;

use super::{Alias, Block};

const RELATIONAL: [OperatorKind; 4] = [
    OperatorKind::LessThan,
    OperatorKind::GreaterThan,
    OperatorKind::LessThanOrEqual,
    OperatorKind::GreaterThanOrEqual,
];

/// `CompareTo` and the relational operators, when the underlying type is
/// `IComparable<T>`.
pub(super) fn comparison(alias: &Alias) -> Vec<Block> {
    let d = alias.d;
    if !d.implements_comparable {
        return Vec::new();
    }

    let n = alias.name();
    let nullable = alias.nullable_name();
    let compare = if alias.holds_reference() {
        format!(
            "global::System.Collections.Generic.Comparer<{}>.Default.Compare(_value, other._value)",
            alias.underlying()
        )
    } else {
        "_value.CompareTo(other._value)".to_string()
    };
    let compare_to = if alias.is_class() {
        format!("public int CompareTo({nullable} other) => other is null ? 1 : {compare};")
    } else {
        format!("public int CompareTo({n} other) => {compare};")
    };

    let mut blocks = vec![vec![CodeFragment::line(compare_to)]];

    for kind in RELATIONAL {
        // Already forwarded as Alias op Alias
        let forwarded = d
            .binary_operators
            .iter()
            .any(|op| op.kind == kind && op.is_homogeneous());
        if forwarded {
            continue;
        }

        let symbol = kind.symbol();
        let body = if alias.is_class() {
            format!(
                "global::System.Collections.Generic.Comparer<{n}>.Default.Compare(left, right) {symbol} 0"
            )
        } else if d.underlying.primitive.is_some_and(has_relational_operators) {
            format!("left._value {symbol} right._value")
        } else {
            format!("left.CompareTo(right) {symbol} 0")
        };
        blocks.push(alias.attributed(format!(
            "public static bool operator {symbol}({nullable} left, {nullable} right) => {body};"
        )));
    }

    blocks
}

/// Primitives whose values can be compared with `<` directly.
fn has_relational_operators(kind: PrimitiveKind) -> bool {
    kind.is_integer() || kind.is_floating() || kind == PrimitiveKind::Char
}

pub(super) fn formatting(alias: &Alias) -> Vec<Block> {
    if !alias.d.implements_formattable {
        return Vec::new();
    }

    let body = if alias.holds_reference() {
        "_value?.ToString(format, provider) ?? \"\""
    } else {
        "_value.ToString(format, provider)"
    };
    vec![vec![CodeFragment::line(format!(
        "public string ToString(string? format, global::System.IFormatProvider? provider) => {body};"
    ))]]
}

pub(super) fn to_string(alias: &Alias) -> Vec<Block> {
    let body = if alias.holds_reference() {
        "_value?.ToString() ?? \"\""
    } else {
        "_value.ToString()"
    };
    vec![vec![CodeFragment::line(format!(
        "public override string ToString() => {body};"
    ))]]
}
