//! Rust AST builders for the declarations typewrite emits.
//!
//! These provide a small API for constructing Rust syntax, which renders
//! to [`typewrite_codegen::CodeFragment`]s.

mod impls;
mod structs;

pub use impls::{Const, Impl};
pub use structs::{Field, Struct};
