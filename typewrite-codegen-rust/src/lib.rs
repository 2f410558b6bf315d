mod generator;
mod naming;
mod rust_file;
mod type_mapper;

pub mod ast;

pub use ast::{Const, Field, Impl, Struct};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Use};
pub use type_mapper::RustTypeMapper;
pub use typewrite_codegen::{LanguageCodegen, PreviewFile};
