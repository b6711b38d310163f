//! `IEquatable<T>` and the equality operators.

use newtype_codegen::builder::CodeFragment;

use super::{Alias, Block};

/// Emitted only when the underlying type has `==` and the alias is not a
/// record; records already have compiler-generated equality.
pub(super) fn equality(alias: &Alias) -> Vec<Block> {
    if !alias.d.emits_equality() {
        return Vec::new();
    }

    let n = alias.name();
    let nullable = alias.nullable_name();
    let hash = if alias.holds_reference() {
        "_value?.GetHashCode() ?? 0"
    } else {
        "_value.GetHashCode()"
    };

    let (equals, eq, ne) = if alias.is_class() {
        (
            format!("public bool Equals({nullable} other) => other is not null && _value == other._value;"),
            "left is null ? right is null : left.Equals(right)",
            "!(left == right)",
        )
    } else {
        (
            format!("public bool Equals({n} other) => _value == other._value;"),
            "left.Equals(right)",
            "!left.Equals(right)",
        )
    };

    vec![
        vec![CodeFragment::line(equals)],
        vec![CodeFragment::line(format!(
            "public override bool Equals(object? obj) => obj is {n} other && Equals(other);"
        ))],
        vec![CodeFragment::line(format!(
            "public override int GetHashCode() => {hash};"
        ))],
        alias.attributed(format!(
            "public static bool operator ==({nullable} left, {nullable} right) => {eq};"
        )),
        alias.attributed(format!(
            "public static bool operator !=({nullable} left, {nullable} right) => {ne};"
        )),
    ]
}
