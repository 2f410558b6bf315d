//! TypeScript declaration emitter for typewrite.
//!
//! Renders a [`typewrite_codegen::ModuleDecl`] as a single `.ts` file for
//! projects using [node-appwrite](https://www.npmjs.com/package/node-appwrite):
//!
//! - the `RoleString` union and `PermissionOptions` type
//! - one `interface X extends Models.Document` per collection
//! - the nested `DatabaseMap` type
//!
//! ```ignore
//! use typewrite_codegen::{LanguageCodegen, pipeline::Pipeline};
//! use typewrite_codegen_typescript::Generator;
//!
//! let mut ctx = Pipeline::new().run(snapshot)?;
//! let source = Generator::new().render(&ctx.take_module()?);
//! ```

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use ast::{Import, Interface, InterfaceField, TypeAlias};
pub use code_file::CodeFile;
pub use generator::Generator;
pub use naming::TS_NAMING;
pub use type_mapper::TypeScriptTypeMapper;
pub use typewrite_codegen::{LanguageCodegen, PreviewFile};
