//! Shared declaration generation for typewrite.
//!
//! Language emitters (`typewrite-codegen-rust`, `typewrite-codegen-typescript`)
//! build on the pieces here:
//!
//! - [`builder`] - code building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - name planning and lowering of a schema snapshot
//! - [`language`] - LanguageCodegen, TypeMapper and NamingConvention
//! - [`types`] - the language-agnostic declaration module a pipeline produces

pub mod builder;
mod error;
pub mod language;
pub mod pipeline;
pub mod types;

pub use builder::{CodeBuilder, CodeFragment, CommentStyle, Indent, Renderable};
pub use error::GenerateError;
pub use language::{LanguageCodegen, NamingConvention, PreviewFile, TypeMapper};
pub use types::{
    CollectionEntry, DatabaseEntry, FieldDecl, FieldType, ModuleDecl, RecordDecl, ScalarType,
    scalar_type,
};
