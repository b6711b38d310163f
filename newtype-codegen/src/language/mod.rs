//! Back end interface shared by language generators.

mod traits;

pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
