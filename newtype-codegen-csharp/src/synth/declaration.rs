//! The type declaration line.

use super::Alias;

/// `public readonly partial struct Price : global::System.IEquatable<Price>, ...`
pub(super) fn declaration(alias: &Alias) -> String {
    let d = alias.d;

    let mut modifiers = vec![d.accessibility.keyword()];
    if !alias.is_class() && d.is_readonly {
        modifiers.push("readonly");
    }
    modifiers.push("partial");
    modifiers.push(match (alias.is_class(), d.is_record) {
        (false, false) => "struct",
        (false, true) => "record struct",
        (true, false) => "class",
        (true, true) => "record",
    });

    let mut header = format!("{} {}", modifiers.join(" "), alias.name());
    let interfaces = interfaces(alias);
    if !interfaces.is_empty() {
        header.push_str(" : ");
        header.push_str(&interfaces.join(", "));
    }
    header
}

fn interfaces(alias: &Alias) -> Vec<String> {
    let d = alias.d;
    let mut interfaces = Vec::new();
    if d.emits_equality() {
        interfaces.push(format!("global::System.IEquatable<{}>", alias.name()));
    }
    if d.implements_comparable {
        interfaces.push(format!("global::System.IComparable<{}>", alias.name()));
    }
    if d.implements_formattable {
        interfaces.push("global::System.IFormattable".to_string());
    }
    interfaces
}
