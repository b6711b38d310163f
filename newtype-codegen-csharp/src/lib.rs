//! C# code generation for newtype aliases.
//!
//! [`synthesize`] is the pure descriptor-to-text step; [`Generator`] wraps it
//! with file output, cleaning and the descriptor cache.

mod generator;
mod synth;

pub mod files;

pub use generator::Generator;
pub use newtype_codegen::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
pub use synth::{AUTO_GENERATED_MARKER, synthesize};
