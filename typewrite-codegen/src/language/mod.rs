//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - main trait for declaration emitters
//! - [`TypeMapper`] - maps field types to language type strings
//! - [`NamingConvention`] - field naming and reserved-word rules
//! - [`PreviewFile`] - rendered output not yet written

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{LanguageCodegen, PreviewFile, TypeMapper};
