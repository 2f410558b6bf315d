//! Database schema representation for the typewrite generator.
//!
//! These types describe a remote database schema independently of any
//! target language. An introspection walk fills a [`SchemaSnapshot`];
//! the code generation pipeline reads it.
//!
//! ```text
//! list databases → list collections → list attributes → SchemaSnapshot → codegen
//! ```

mod attribute;
mod snapshot;

pub use attribute::{Attribute, AttributeType, RelationType};
pub use snapshot::{CollectionSchema, DatabaseSchema, SchemaSnapshot};
