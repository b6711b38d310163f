//! Built-in lints for manifest validation.

mod duplicate_alias;
mod empty_surface;
mod record_equality;
mod sibling_aliases;
mod unsupported_operator;

pub use duplicate_alias::DuplicateAliasLint;
pub use empty_surface::EmptySurfaceLint;
pub use record_equality::RecordEqualityLint;
pub use sibling_aliases::SiblingAliasesLint;
pub use unsupported_operator::UnsupportedOperatorLint;
