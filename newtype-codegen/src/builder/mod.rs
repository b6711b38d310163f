//! C# source assembly.
//!
//! Declarations describe themselves as a tree of [`CodeFragment`]s through
//! [`Renderable`]; [`CodeBuilder`] flattens the tree into indented text.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
