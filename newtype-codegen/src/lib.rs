//! Shared code generation machinery for the newtype wrapper generator.
//!
//! This crate turns a parsed manifest into immutable alias descriptors and
//! provides the building blocks language back ends use to render them.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`cache`] - Descriptor cache for incremental generation
//! - [`extract`] - Member extraction and descriptor building
//! - [`language`] - Language back end abstractions (LanguageCodegen, etc.)
//! - [`pipeline`] - Compilation phases, lints and diagnostics

pub mod builder;
pub mod cache;
pub mod extract;
pub mod language;
pub mod pipeline;

pub use cache::DescriptorCache;
pub use language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
