//! Per-alias generation options.

use newtype_core::PrimitiveKind;
use serde::{Deserialize, Serialize};

/// Switches that shape the generated wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Omit the implicit underlying → alias conversion.
    pub suppress_wrap: bool,
    /// Omit the implicit alias → underlying conversion.
    pub suppress_unwrap: bool,
    /// Emit only the primary constructor.
    pub suppress_constructor_forwarding: bool,
    /// Inlining attribute applied to every operator, conversion and forwarded member.
    pub inlining: InliningHint,
}

impl GenerationOptions {
    /// Options with both implicit conversions suppressed.
    pub fn no_conversions() -> Self {
        Self {
            suppress_wrap: true,
            suppress_unwrap: true,
            ..Self::default()
        }
    }

    /// Options for an opaque alias: no conversions and no constructor forwarding.
    pub fn opaque() -> Self {
        Self {
            suppress_constructor_forwarding: true,
            ..Self::no_conversions()
        }
    }
}

/// `System.Runtime.CompilerServices.MethodImplOptions` value emitted on generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InliningHint {
    /// No attribute.
    None,
    #[default]
    AggressiveInlining,
    NoInlining,
    AggressiveOptimization,
}

impl InliningHint {
    /// The `MethodImplOptions` member name, or `None` when no attribute is emitted.
    pub fn member_name(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::AggressiveInlining => Some("AggressiveInlining"),
            Self::NoInlining => Some("NoInlining"),
            Self::AggressiveOptimization => Some("AggressiveOptimization"),
        }
    }
}

/// When forwarded methods keep the underlying type instead of re-wrapping it.
///
/// Re-wrapping `int Abs()` on a counter alias into `Counter Abs()` tends to
/// surprise callers, so primitive value types are left alone by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnWrappingPolicy {
    /// Skip re-wrapping for primitive value types (numbers, bool, char).
    #[default]
    SkipPrimitiveValueTypes,
    /// Skip re-wrapping for every primitive, including `string`.
    SkipAllPrimitives,
    /// Always re-wrap.
    WrapAll,
}

impl ReturnWrappingPolicy {
    /// Decide for an underlying type with the given primitive tag and value-ness.
    pub fn skips(&self, primitive: Option<PrimitiveKind>, is_value_type: bool) -> bool {
        match self {
            Self::SkipPrimitiveValueTypes => primitive.is_some() && is_value_type,
            Self::SkipAllPrimitives => primitive.is_some(),
            Self::WrapAll => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inlines_aggressively() {
        let options = GenerationOptions::default();
        assert_eq!(options.inlining, InliningHint::AggressiveInlining);
        assert!(!options.suppress_wrap);
        assert!(!options.suppress_unwrap);
        assert!(!options.suppress_constructor_forwarding);
    }

    #[test]
    fn test_opaque_implies_no_conversions() {
        let options = GenerationOptions::opaque();
        assert!(options.suppress_wrap);
        assert!(options.suppress_unwrap);
        assert!(options.suppress_constructor_forwarding);
    }

    #[test]
    fn test_inlining_hint_member_names() {
        assert_eq!(InliningHint::default().member_name(), Some("AggressiveInlining"));
        assert_eq!(InliningHint::NoInlining.member_name(), Some("NoInlining"));
        assert_eq!(InliningHint::None.member_name(), None);
    }

    #[test]
    fn test_return_wrapping_policies() {
        let int = Some(PrimitiveKind::Int32);
        let string = Some(PrimitiveKind::String);

        let default = ReturnWrappingPolicy::default();
        assert!(default.skips(int, true));
        assert!(!default.skips(string, false));
        assert!(!default.skips(None, true));

        assert!(ReturnWrappingPolicy::SkipAllPrimitives.skips(string, false));
        assert!(!ReturnWrappingPolicy::WrapAll.skips(int, true));
    }
}
