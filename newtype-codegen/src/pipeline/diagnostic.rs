//! Errors, warnings and notes collected while compiling a manifest.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stops the pipeline once the reporting phase finishes.
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// One finding about the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Phase that reported it.
    pub phase: String,
    /// Lint that reported it, when it came from the validate phase.
    pub lint: Option<&'static str>,
    pub message: String,
    /// Manifest path of the offending entry, e.g. `aliases.Shop.Price`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, phase, message)
    }

    fn with_severity(
        severity: Severity,
        phase: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            phase: phase.into(),
            lint: None,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn from_lint(mut self, lint: &'static str) -> Self {
        self.lint = Some(lint);
        self
    }
}

/// Renders as `warning[empty-surface]: message (at aliases.Handle)`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(lint) = self.lint {
            write!(f, "[{lint}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {loc})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert!(Diagnostic::error("validate", "duplicate alias").severity.is_error());
        assert!(Diagnostic::warning("validate", "empty surface").severity.is_warning());
        let info = Diagnostic::info("extract", "siblings");
        assert_eq!(info.phase, "extract");
        assert!(info.lint.is_none());
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::warning("validate", "empty surface").at("aliases.Handle");
        assert_eq!(diag.to_string(), "warning: empty surface (at aliases.Handle)");

        let diag = diag.from_lint("empty-surface");
        assert_eq!(
            diag.to_string(),
            "warning[empty-surface]: empty surface (at aliases.Handle)"
        );
    }

    #[test]
    fn test_serializes_lowercase_severity() {
        let diag = Diagnostic::error("validate", "boom").from_lint("duplicate-alias");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["lint"], "duplicate-alias");
        assert!(json["location"].is_null());
    }
}
