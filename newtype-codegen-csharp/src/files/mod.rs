//! Generated file types.

mod alias_file;

pub use alias_file::AliasFile;
