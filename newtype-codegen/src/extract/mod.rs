//! Member extraction and descriptor building.
//!
//! The extractor reads host facts (an alias declaration and its underlying
//! type's surface) and produces a [`TypeDescriptor`] that holds no
//! references back into the manifest.
//!
//! [`TypeDescriptor`]: newtype_model::TypeDescriptor

mod intrinsics;
mod members;
mod model;

pub(crate) use members::operator_kind;
pub use members::{ExtractedMembers, MemberExtractor};
pub use model::build_descriptor;
