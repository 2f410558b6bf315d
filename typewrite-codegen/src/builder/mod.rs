//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - fluent API for building indented code
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for nodes that convert to code fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, CommentStyle, Renderable};
pub use indent::Indent;
