//! Typed access to Appwrite databases.
//!
//! - [`query`] and [`permission`] compile option records into the query and
//!   permission strings the server expects.
//! - [`DatabasesApi`] is the seam to the vendor service; [`AppwriteClient`]
//!   implements it over blocking HTTP.
//! - [`TypedDatabases`] binds document calls to record types implementing
//!   [`Collection`].

mod api;
mod config;
mod error;
mod facade;
mod http;
mod models;
pub mod permission;
pub mod query;
mod role;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::DatabasesApi;
pub use config::{API_KEY_VAR, Config, ConfigError, ENDPOINT_VAR, PROJECT_ID_VAR};
pub use error::{ApiError, Result};
pub use facade::{
    Collection, CreateDocument, DeleteDocument, GetDocument, ListDocuments, RelatedDocuments,
    TypedDatabases, UNIQUE_ID, UpdateDocument,
};
pub use http::AppwriteClient;
pub use models::{
    AttributeList, CollectionInfo, CollectionList, DatabaseInfo, DatabaseList, Document,
    DocumentList, RawDocument, RawDocumentList,
};
pub use permission::{PermissionAction, PermissionOptions, build_permissions};
pub use query::{Condition, FilterOp, QueryOptions, build_queries};
pub use role::{Role, RoleError, RoleString};
pub use typewrite_schema::RelationType;
