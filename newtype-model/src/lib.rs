//! Descriptor types for the newtype wrapper generator.
//!
//! This crate provides the immutable model that sits between member
//! extraction and source synthesis.
//!
//! # Architecture
//!
//! ```text
//! newtype.toml → newtype-manifest (host facts) → extractor → TypeDescriptor → synthesizer
//! ```
//!
//! Every type here is a plain value:
//! - No references back into the manifest it was extracted from
//! - Structural equality and hashing, so a descriptor is its own cache key
//! - Serializable, for the on-disk descriptor cache and debug snapshots

mod descriptor;
mod members;
mod operator;
mod options;
mod seq;

pub use descriptor::{Accessibility, CarrierKind, TypeDescriptor, UnderlyingType};
pub use members::{
    BinaryOperatorInfo, ConstructorInfo, ConstructorParameterInfo, InstanceFieldInfo,
    InstanceMethodInfo, InstancePropertyInfo, ParameterInfo, RefKind, StaticMemberInfo,
    UnaryOperatorInfo,
};
pub use operator::{Arity, OperatorKind};
pub use options::{GenerationOptions, InliningHint, ReturnWrappingPolicy};
pub use seq::EquatableSeq;
