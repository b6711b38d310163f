//! Closed classification of overloadable operators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

/// An overloadable C# operator.
///
/// Classification goes through this enum rather than matching on
/// `op_*` metadata name prefixes; the metadata name is only kept for display
/// and for reading host facts that use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    // Binary
    Addition,
    Subtraction,
    Multiply,
    Division,
    Modulus,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Equality,
    Inequality,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    // Unary
    UnaryPlus,
    UnaryNegation,
    LogicalNot,
    OnesComplement,
    Increment,
    Decrement,
}

impl OperatorKind {
    const ALL: [OperatorKind; 23] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiply,
        Self::Division,
        Self::Modulus,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::ExclusiveOr,
        Self::LeftShift,
        Self::RightShift,
        Self::UnsignedRightShift,
        Self::Equality,
        Self::Inequality,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessThanOrEqual,
        Self::GreaterThanOrEqual,
        Self::UnaryPlus,
        Self::UnaryNegation,
        Self::LogicalNot,
        Self::OnesComplement,
        Self::Increment,
        Self::Decrement,
    ];

    /// The operator token as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Addition | Self::UnaryPlus => "+",
            Self::Subtraction | Self::UnaryNegation => "-",
            Self::Multiply => "*",
            Self::Division => "/",
            Self::Modulus => "%",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::ExclusiveOr => "^",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::UnsignedRightShift => ">>>",
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::LogicalNot => "!",
            Self::OnesComplement => "~",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    /// The compiled method name (e.g. `op_Addition`).
    pub fn metadata_name(&self) -> &'static str {
        match self {
            Self::Addition => "op_Addition",
            Self::Subtraction => "op_Subtraction",
            Self::Multiply => "op_Multiply",
            Self::Division => "op_Division",
            Self::Modulus => "op_Modulus",
            Self::BitwiseAnd => "op_BitwiseAnd",
            Self::BitwiseOr => "op_BitwiseOr",
            Self::ExclusiveOr => "op_ExclusiveOr",
            Self::LeftShift => "op_LeftShift",
            Self::RightShift => "op_RightShift",
            Self::UnsignedRightShift => "op_UnsignedRightShift",
            Self::Equality => "op_Equality",
            Self::Inequality => "op_Inequality",
            Self::LessThan => "op_LessThan",
            Self::GreaterThan => "op_GreaterThan",
            Self::LessThanOrEqual => "op_LessThanOrEqual",
            Self::GreaterThanOrEqual => "op_GreaterThanOrEqual",
            Self::UnaryPlus => "op_UnaryPlus",
            Self::UnaryNegation => "op_UnaryNegation",
            Self::LogicalNot => "op_LogicalNot",
            Self::OnesComplement => "op_OnesComplement",
            Self::Increment => "op_Increment",
            Self::Decrement => "op_Decrement",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::UnaryPlus
            | Self::UnaryNegation
            | Self::LogicalNot
            | Self::OnesComplement
            | Self::Increment
            | Self::Decrement => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Resolve an operator token for the given operand count.
    ///
    /// `-` with one operand is negation, with two it is subtraction.
    pub fn from_symbol(symbol: &str, arity: Arity) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.arity() == arity && kind.symbol() == symbol)
    }

    /// Resolve a compiled `op_*` method name.
    pub fn from_metadata_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.metadata_name() == name)
    }

    /// `==` and `!=`, which the equality section owns.
    pub fn is_equality(&self) -> bool {
        matches!(self, Self::Equality | Self::Inequality)
    }

    /// `<`, `>`, `<=` and `>=`.
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::GreaterThan | Self::LessThanOrEqual | Self::GreaterThanOrEqual
        )
    }

    /// `++` and `--`.
    pub fn is_step(&self) -> bool {
        matches!(self, Self::Increment | Self::Decrement)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_depends_on_arity() {
        assert_eq!(
            OperatorKind::from_symbol("-", Arity::Binary),
            Some(OperatorKind::Subtraction)
        );
        assert_eq!(
            OperatorKind::from_symbol("-", Arity::Unary),
            Some(OperatorKind::UnaryNegation)
        );
    }

    #[test]
    fn test_unknown_or_mismatched_symbols() {
        assert_eq!(OperatorKind::from_symbol("true", Arity::Unary), None);
        assert_eq!(OperatorKind::from_symbol("~", Arity::Binary), None);
        assert_eq!(OperatorKind::from_symbol("*", Arity::Unary), None);
    }

    #[test]
    fn test_metadata_names() {
        assert_eq!(
            OperatorKind::from_metadata_name("op_Equality"),
            Some(OperatorKind::Equality)
        );
        assert_eq!(OperatorKind::Modulus.metadata_name(), "op_Modulus");
        assert_eq!(OperatorKind::from_metadata_name("op_Implicit"), None);
    }

    #[test]
    fn test_symbol_and_metadata_name_are_consistent() {
        for kind in OperatorKind::ALL {
            assert_eq!(OperatorKind::from_symbol(kind.symbol(), kind.arity()), Some(kind));
            assert_eq!(OperatorKind::from_metadata_name(kind.metadata_name()), Some(kind));
        }
    }

    #[test]
    fn test_categories() {
        assert!(OperatorKind::Inequality.is_equality());
        assert!(OperatorKind::GreaterThanOrEqual.is_relational());
        assert!(!OperatorKind::Equality.is_relational());
    }
}
