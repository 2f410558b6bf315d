use serde_json::Value;

use crate::{
    error::Result,
    models::{
        AttributeList, CollectionInfo, CollectionList, DatabaseInfo, DatabaseList, RawDocument,
        RawDocumentList,
    },
};

/// Databases service of the backend.
///
/// Queries and permissions arrive already compiled to their string
/// expressions. Implemented by [`crate::AppwriteClient`] over HTTP and by
/// in-memory doubles in tests.
pub trait DatabasesApi {
    fn list_databases(&self) -> Result<DatabaseList>;
    fn get_database(&self, database_id: &str) -> Result<DatabaseInfo>;
    fn create_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo>;
    fn update_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo>;
    fn delete_database(&self, database_id: &str) -> Result<()>;

    fn list_collections(&self, database_id: &str) -> Result<CollectionList>;
    fn get_collection(&self, database_id: &str, collection_id: &str) -> Result<CollectionInfo>;
    fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[String],
    ) -> Result<CollectionInfo>;
    /// `permissions` of `None` leaves the stored permissions untouched.
    fn update_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: Option<&[String]>,
    ) -> Result<CollectionInfo>;
    fn delete_collection(&self, database_id: &str, collection_id: &str) -> Result<()>;

    fn list_attributes(&self, database_id: &str, collection_id: &str) -> Result<AttributeList>;

    fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> Result<RawDocumentList>;
    fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<RawDocument>;
    fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: &[String],
    ) -> Result<RawDocument>;
    /// `permissions` of `None` leaves the stored permissions untouched.
    fn update_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: Option<&[String]>,
    ) -> Result<RawDocument>;
    fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<()>;
}
