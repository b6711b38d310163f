// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod alias;
mod error;
mod manifest;
mod surface;

pub use alias::{AliasDecl, SignatureParam};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, NewtypeToml, OutputConfig, ParseContext, SurfaceRef,
};
pub use surface::{
    AccessorKind, ConstructorMember, ConversionMember, DefaultKind, DefaultValue, FieldMember,
    Member, MethodMember, OperatorMember, Parameter, PropertyMember, TypeKind, TypeSurface,
};
