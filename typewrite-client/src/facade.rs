//! Typed access to documents, collections and databases.
//!
//! Record types implement [`Collection`] to bind them to their database and
//! collection ids, so a document call cannot pair an identifier with the
//! wrong shape. Option records are compiled by [`build_queries`] and
//! [`build_permissions`] before the call is forwarded to the vendor client.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;
use typewrite_schema::RelationType;

use crate::{
    api::DatabasesApi,
    error::{ApiError, Result},
    models::{CollectionInfo, CollectionList, DatabaseInfo, DatabaseList, Document, DocumentList},
    permission::{PermissionOptions, build_permissions},
    query::{Condition, QueryOptions, build_queries},
};

/// Document id asking the server to generate one.
pub const UNIQUE_ID: &str = "unique()";

/// A record type stored in a known collection.
pub trait Collection: Serialize + DeserializeOwned {
    const DATABASE_ID: &'static str;
    const COLLECTION_ID: &'static str;
}

#[derive(Debug, Clone)]
pub struct CreateDocument<T> {
    /// Defaults to [`UNIQUE_ID`].
    pub document_id: Option<String>,
    pub data: T,
    pub permissions: Option<PermissionOptions>,
}

impl<T> CreateDocument<T> {
    pub fn new(data: T) -> Self {
        Self {
            document_id: None,
            data,
            permissions: None,
        }
    }

    pub fn with_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_permissions(mut self, permissions: PermissionOptions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListDocuments {
    pub queries: Option<QueryOptions>,
}

impl ListDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_queries(queries: QueryOptions) -> Self {
        Self {
            queries: Some(queries),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetDocument {
    pub document_id: String,
}

impl GetDocument {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }
}

/// Partial update; `data` is any serializable patch of the record.
#[derive(Debug, Clone)]
pub struct UpdateDocument<P> {
    pub document_id: String,
    pub data: P,
    /// `None` leaves the stored permissions as they are.
    pub permissions: Option<PermissionOptions>,
}

impl<P> UpdateDocument<P> {
    pub fn new(document_id: impl Into<String>, data: P) -> Self {
        Self {
            document_id: document_id.into(),
            data,
            permissions: None,
        }
    }

    pub fn with_permissions(mut self, permissions: PermissionOptions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

#[derive(Debug, Clone)]
pub struct DeleteDocument {
    pub document_id: String,
}

impl DeleteDocument {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }
}

/// Lookup of documents related to a main document.
#[derive(Debug, Clone)]
pub struct RelatedDocuments {
    pub document_id: String,
    pub relation_type: RelationType,
    /// Field of the related collection holding the main document id.
    pub related_field: String,
    pub queries: Option<QueryOptions>,
}

impl RelatedDocuments {
    pub fn new(
        document_id: impl Into<String>,
        relation_type: RelationType,
        related_field: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            relation_type,
            related_field: related_field.into(),
            queries: None,
        }
    }

    pub fn with_queries(mut self, queries: QueryOptions) -> Self {
        self.queries = Some(queries);
        self
    }
}

/// Typed wrapper over a vendor databases client.
pub struct TypedDatabases<A> {
    api: A,
}

impl<A: DatabasesApi> TypedDatabases<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_inner(self) -> A {
        self.api
    }

    pub fn create_document<T: Collection>(
        &self,
        options: CreateDocument<T>,
    ) -> Result<Document<T>> {
        let document_id = options.document_id.as_deref().unwrap_or(UNIQUE_ID);
        let permissions = compile_permissions(options.permissions.as_ref());
        let data = encode(&options.data)?;
        debug!(
            database = T::DATABASE_ID,
            collection = T::COLLECTION_ID,
            document_id,
            "create document"
        );
        self.api
            .create_document(
                T::DATABASE_ID,
                T::COLLECTION_ID,
                document_id,
                &data,
                &permissions,
            )?
            .decode()
    }

    pub fn list_documents<T: Collection>(&self, options: ListDocuments) -> Result<DocumentList<T>> {
        let queries = compile_queries(options.queries.as_ref());
        self.api
            .list_documents(T::DATABASE_ID, T::COLLECTION_ID, &queries)?
            .decode()
    }

    pub fn get_document<T: Collection>(&self, options: GetDocument) -> Result<Document<T>> {
        self.api
            .get_document(T::DATABASE_ID, T::COLLECTION_ID, &options.document_id)?
            .decode()
    }

    pub fn update_document<T: Collection, P: Serialize>(
        &self,
        options: UpdateDocument<P>,
    ) -> Result<Document<T>> {
        let data = encode(&options.data)?;
        let permissions = options.permissions.as_ref().map(build_permissions);
        self.api
            .update_document(
                T::DATABASE_ID,
                T::COLLECTION_ID,
                &options.document_id,
                &data,
                permissions.as_deref(),
            )?
            .decode()
    }

    pub fn delete_document<T: Collection>(&self, options: DeleteDocument) -> Result<()> {
        self.api
            .delete_document(T::DATABASE_ID, T::COLLECTION_ID, &options.document_id)
    }

    /// List documents of `R` related to a document of `T`.
    ///
    /// For `oneToOne` and `oneToMany` the main document is fetched first and
    /// the related collection is filtered on `related_field` equal to its id,
    /// together with any given queries. Other relation types list the related
    /// collection with the given queries only.
    pub fn related_documents<T: Collection, R: Collection>(
        &self,
        options: RelatedDocuments,
    ) -> Result<DocumentList<R>> {
        let mut queries = options.queries.unwrap_or_default();

        if matches!(
            options.relation_type,
            RelationType::OneToOne | RelationType::OneToMany
        ) {
            let main = self
                .api
                .get_document(T::DATABASE_ID, T::COLLECTION_ID, &options.document_id)?;
            queries
                .equals
                .insert(0, Condition::new(options.related_field, main.id));
        }

        self.list_documents::<R>(ListDocuments::with_queries(queries))
    }

    pub fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: Option<&PermissionOptions>,
    ) -> Result<CollectionInfo> {
        let permissions = compile_permissions(permissions);
        self.api
            .create_collection(database_id, collection_id, name, &permissions)
    }

    pub fn list_collections(&self, database_id: &str) -> Result<CollectionList> {
        self.api.list_collections(database_id)
    }

    pub fn get_collection(&self, database_id: &str, collection_id: &str) -> Result<CollectionInfo> {
        self.api.get_collection(database_id, collection_id)
    }

    pub fn update_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: Option<&PermissionOptions>,
    ) -> Result<CollectionInfo> {
        let permissions = permissions.map(build_permissions);
        self.api
            .update_collection(database_id, collection_id, name, permissions.as_deref())
    }

    pub fn delete_collection(&self, database_id: &str, collection_id: &str) -> Result<()> {
        self.api.delete_collection(database_id, collection_id)
    }

    pub fn create_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        self.api.create_database(database_id, name)
    }

    pub fn list_databases(&self) -> Result<DatabaseList> {
        self.api.list_databases()
    }

    pub fn get_database(&self, database_id: &str) -> Result<DatabaseInfo> {
        self.api.get_database(database_id)
    }

    pub fn update_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        self.api.update_database(database_id, name)
    }

    pub fn delete_database(&self, database_id: &str) -> Result<()> {
        self.api.delete_database(database_id)
    }
}

fn compile_permissions(options: Option<&PermissionOptions>) -> Vec<String> {
    options.map(build_permissions).unwrap_or_default()
}

fn compile_queries(options: Option<&QueryOptions>) -> Vec<String> {
    options.map(build_queries).unwrap_or_default()
}

fn encode<T: Serialize>(data: &T) -> Result<Value> {
    serde_json::to_value(data).map_err(ApiError::Encode)
}
