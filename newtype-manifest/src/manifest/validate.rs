//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use newtype_core::validate_identifier;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename, and the current path through the
/// manifest so nested checks can name where they failed.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "newtype.toml");
/// ctx.validate_name("UserId", "alias")?;
///
/// let nested = ctx.push("UserId");
/// nested.validate_namespace("Shop.Billing")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "namespace segment in 'Price'" or just "alias" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `name = "..."` value in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), "name", name)
    }

    /// Find the span of a `key = "value"` value in the source.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that a name is a plain C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate every segment of a dotted namespace.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        for segment in namespace.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    segment,
                    self.context_for("namespace segment"),
                    reason,
                    self.find_value_span("namespace", namespace),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of `value` in a `key = "value"` assignment.
///
/// Both quote styles and the unspaced `key="value"` form are recognized.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{key} = \"{value}\""),
        format!("{key} = '{value}'"),
        format!("{key}=\"{value}\""),
        format!("{key}='{value}'"),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Skip the key, the separator and the opening quote
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "name = \"UserId\"\nunderlying='int'\n";
        let span = find_value_span(src, "name", "UserId").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "UserId");

        let span = find_value_span(src, "underlying", "int").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "int");

        assert!(find_value_span(src, "name", "Other").is_none());
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "newtype.toml");
        assert_eq!(ctx.context_for("alias"), "alias");
        assert_eq!(
            ctx.push("Price").context_for("namespace segment"),
            "namespace segment in 'Price'"
        );
    }

    #[test]
    fn test_validate_name_rejects_keywords() {
        let src = "name = \"int\"";
        let ctx = ParseContext::new(src, "newtype.toml");
        assert!(ctx.validate_name("int", "alias").is_err());
        assert!(ctx.validate_name("UserId", "alias").is_ok());
    }
}
