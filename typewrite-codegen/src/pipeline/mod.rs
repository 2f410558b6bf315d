//! Generation pipeline.
//!
//! A [`Pipeline`] takes a [`typewrite_schema::SchemaSnapshot`] through
//! explicit phases:
//!
//! - [`phases::PlanNamesPhase`] - assigns one declared type name per collection
//! - [`phases::LowerPhase`] - builds the [`crate::ModuleDecl`] emitters render
//!
//! Diagnostics from every phase are collected on the [`CompilationContext`].
//!
//! ```ignore
//! let mut ctx = Pipeline::new().run(snapshot)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let module = ctx.take_module()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, NamePlan};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
