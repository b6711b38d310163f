//! Shared naming utilities for C# code generation.

use std::borrow::Cow;

/// C# reserved keywords. Contextual keywords are valid identifiers and are
/// not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Prefix reserved keywords with `@` so they can be used as identifiers.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_csharp_keyword(name) {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Validate a plain C# identifier.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name must contain only letters, digits, and underscores");
    }

    if is_csharp_keyword(name) {
        return Some("name is a C# reserved keyword");
    }

    None
}

/// Derive the generated file name for a type from its display string.
///
/// `Shop.Price` becomes `Shop_Price.g.cs`; generic brackets are flattened too.
pub fn hint_name(type_display_string: &str) -> String {
    let stem: String = type_display_string
        .chars()
        .map(|c| match c {
            '.' | '<' | '>' => '_',
            c => c,
        })
        .collect();
    format!("{stem}.g.cs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_name() {
        assert_eq!(hint_name("UserId"), "UserId.g.cs");
        assert_eq!(hint_name("Shop.Billing.Price"), "Shop_Billing_Price.g.cs");
        assert_eq!(hint_name("Outer.Box<Id>"), "Outer_Box_Id_.g.cs");
    }

    #[test]
    fn test_escape_identifier() {
        assert_eq!(escape_identifier("value"), "value");
        assert_eq!(escape_identifier("string"), "@string");
        assert_eq!(escape_identifier("params"), "@params");
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("UserId"), None);
        assert_eq!(validate_identifier("_raw2"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("user-id").is_some());
        assert!(validate_identifier("class").is_some());
    }
}
