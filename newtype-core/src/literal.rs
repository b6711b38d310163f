//! Invariant C# literal formatting.
//!
//! Formatting never consults the process locale: numbers go through Rust's
//! own shortest round-trip formatting, which always uses `.` as the decimal
//! separator, and every value gets the suffix that makes it re-parse as the
//! same C# type.

use serde::{Deserialize, Serialize};

use crate::PrimitiveKind;

/// A compile-time constant value, typically a parameter default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstantValue {
    /// `null` or an explicit `default`.
    Null,
    Bool(bool),
    Char(char),
    String(String),
    /// An integer of the given primitive width.
    Int { value: i128, kind: PrimitiveKind },
    Float32(f32),
    Float64(f64),
    /// Decimal numeral text, kept verbatim to avoid binary rounding.
    Decimal(String),
    /// A constant this formatter has no literal syntax for (enum members, etc).
    Unsupported,
}

/// Render a constant as C# source text.
///
/// Unsupported or malformed values render as `default`.
pub fn format_literal(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Null | ConstantValue::Unsupported => "default".to_string(),
        ConstantValue::Bool(b) => b.to_string(),
        ConstantValue::Char(c) => escape_char(*c).unwrap_or_else(|| "default".to_string()),
        ConstantValue::String(s) => escape_string(s),
        ConstantValue::Int { value, kind } => format_integer(*value, *kind),
        ConstantValue::Float32(v) => format_float(*v as f64, f32_text(*v), "float", "f"),
        ConstantValue::Float64(v) => format_float(*v, f64_text(*v), "double", "d"),
        ConstantValue::Decimal(text) => {
            if is_decimal_numeral(text) {
                format!("{text}m")
            } else {
                "default".to_string()
            }
        }
    }
}

fn format_integer(value: i128, kind: PrimitiveKind) -> String {
    if !kind.holds_integer(value) {
        return "default".to_string();
    }
    let suffix = match kind {
        PrimitiveKind::UInt32 => "u",
        PrimitiveKind::Int64 => "L",
        PrimitiveKind::UInt64 => "UL",
        _ => "",
    };
    format!("{value}{suffix}")
}

fn f32_text(v: f32) -> String {
    format!("{v:?}")
}

fn f64_text(v: f64) -> String {
    format!("{v:?}")
}

fn format_float(v: f64, text: String, type_keyword: &str, suffix: &str) -> String {
    if v.is_nan() {
        format!("{type_keyword}.NaN")
    } else if v.is_infinite() && v > 0.0 {
        format!("{type_keyword}.PositiveInfinity")
    } else if v.is_infinite() {
        format!("{type_keyword}.NegativeInfinity")
    } else {
        format!("{text}{suffix}")
    }
}

/// Largest magnitude of `System.Decimal`, as an integer numeral.
const DECIMAL_MAX: &str = "79228162514264337593543950335";

/// Check that `text` is a plain decimal numeral that fits `System.Decimal`.
///
/// Exponent forms are rejected so that an out-of-range magnitude can never
/// reach the output.
pub fn is_decimal_numeral(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let (int, frac_ok) = match body.split_once('.') {
        Some((int, frac)) => (int, digits(frac)),
        None => (body, true),
    };
    if !digits(int) || !frac_ok {
        return false;
    }

    let significant = int.trim_start_matches('0');
    significant.len() < DECIMAL_MAX.len()
        || (significant.len() == DECIMAL_MAX.len() && significant <= DECIMAL_MAX)
}

/// Quote and escape a string as a regular (non-verbatim) C# string literal.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            _ => push_escaped(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Quote and escape a character literal.
///
/// Returns `None` for scalar values outside the Basic Multilingual Plane,
/// which a single UTF-16 `char` cannot hold.
pub fn escape_char(c: char) -> Option<String> {
    if u32::from(c) > 0xFFFF {
        return None;
    }
    let mut out = String::with_capacity(4);
    out.push('\'');
    match c {
        '\'' => out.push_str("\\'"),
        _ => push_escaped(&mut out, c),
    }
    out.push('\'');
    Some(out)
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\0' => out.push_str("\\0"),
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        // Line and paragraph separators terminate a C# line.
        c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
            out.push_str(&format!("\\u{:04X}", u32::from(c)));
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_unsupported_render_default() {
        assert_eq!(format_literal(&ConstantValue::Null), "default");
        assert_eq!(format_literal(&ConstantValue::Unsupported), "default");
    }

    #[test]
    fn test_bool() {
        assert_eq!(format_literal(&ConstantValue::Bool(true)), "true");
        assert_eq!(format_literal(&ConstantValue::Bool(false)), "false");
    }

    #[test]
    fn test_floating_suffixes_round_trip() {
        assert_eq!(format_literal(&ConstantValue::Float32(2.5)), "2.5f");
        assert_eq!(format_literal(&ConstantValue::Float64(6.25)), "6.25d");
        assert_eq!(format_literal(&ConstantValue::Float64(1.0)), "1.0d");
        assert_eq!(format_literal(&ConstantValue::Float32(0.1)), "0.1f");
        assert_eq!(format_literal(&ConstantValue::Float64(-0.5)), "-0.5d");
    }

    #[test]
    fn test_non_finite_floats_use_named_members() {
        assert_eq!(
            format_literal(&ConstantValue::Float64(f64::NAN)),
            "double.NaN"
        );
        assert_eq!(
            format_literal(&ConstantValue::Float32(f32::INFINITY)),
            "float.PositiveInfinity"
        );
        assert_eq!(
            format_literal(&ConstantValue::Float64(f64::NEG_INFINITY)),
            "double.NegativeInfinity"
        );
    }

    #[test]
    fn test_decimal_keeps_invariant_separator() {
        assert_eq!(
            format_literal(&ConstantValue::Decimal("1.5".to_string())),
            "1.5m"
        );
        assert_eq!(
            format_literal(&ConstantValue::Decimal("1,5".to_string())),
            "default"
        );
    }

    #[test]
    fn test_integer_suffixes() {
        let int = |value, kind| format_literal(&ConstantValue::Int { value, kind });
        assert_eq!(int(42, PrimitiveKind::Int32), "42");
        assert_eq!(int(-7, PrimitiveKind::Int16), "-7");
        assert_eq!(int(42, PrimitiveKind::UInt32), "42u");
        assert_eq!(int(42, PrimitiveKind::Int64), "42L");
        assert_eq!(int(42, PrimitiveKind::UInt64), "42UL");
    }

    #[test]
    fn test_out_of_range_integer_fails_closed() {
        let int = |value, kind| format_literal(&ConstantValue::Int { value, kind });
        assert_eq!(int(300, PrimitiveKind::Byte), "default");
        assert_eq!(int(-1, PrimitiveKind::UInt32), "default");
        assert_eq!(int(1 << 40, PrimitiveKind::Int32), "default");
        assert_eq!(int(255, PrimitiveKind::Byte), "255");
    }

    #[test]
    fn test_string_escapes_control_characters() {
        assert_eq!(
            format_literal(&ConstantValue::String("line1\nline2".to_string())),
            "\"line1\\nline2\""
        );
        assert_eq!(
            format_literal(&ConstantValue::String("col1\tcol2".to_string())),
            "\"col1\\tcol2\""
        );
        assert_eq!(
            format_literal(&ConstantValue::String("say \"hi\"".to_string())),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(
            format_literal(&ConstantValue::String("C:\\temp".to_string())),
            "\"C:\\\\temp\""
        );
    }

    #[test]
    fn test_string_keeps_apostrophe_and_escapes_separators() {
        assert_eq!(escape_string("it's"), "\"it's\"");
        assert_eq!(escape_string("a\u{2028}b"), "\"a\\u2028b\"");
        assert_eq!(escape_string("\u{1b}[0m"), "\"\\u001B[0m\"");
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(format_literal(&ConstantValue::Char('\'')), "'\\''");
        assert_eq!(format_literal(&ConstantValue::Char('"')), "'\"'");
        assert_eq!(format_literal(&ConstantValue::Char('\0')), "'\\0'");
        assert_eq!(format_literal(&ConstantValue::Char('x')), "'x'");
    }

    #[test]
    fn test_char_outside_bmp_fails_closed() {
        assert_eq!(format_literal(&ConstantValue::Char('\u{1F600}')), "default");
    }

    #[test]
    fn test_decimal_numeral_shapes() {
        assert!(is_decimal_numeral("0"));
        assert!(is_decimal_numeral("-12.50"));
        assert!(is_decimal_numeral("0079228162514264337593543950335"));
        assert!(!is_decimal_numeral("79228162514264337593543950336"));
        assert!(!is_decimal_numeral("1e3"));
        assert!(!is_decimal_numeral("1e30"));
        assert!(!is_decimal_numeral(""));
        assert!(!is_decimal_numeral("1."));
        assert!(!is_decimal_numeral(".5"));
        assert!(!is_decimal_numeral("1e"));
        assert!(!is_decimal_numeral("NaN"));
    }
}
