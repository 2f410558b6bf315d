//! Response types of the databases API.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use typewrite_schema::Attribute;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub database_id: String,
    pub name: String,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
    #[serde(default)]
    pub document_security: bool,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseList {
    pub total: u64,
    pub databases: Vec<DatabaseInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionList {
    pub total: u64,
    pub collections: Vec<CollectionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeList {
    pub total: u64,
    pub attributes: Vec<Attribute>,
}

/// A stored document: Appwrite metadata plus the record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,
    #[serde(rename = "$databaseId", default)]
    pub database_id: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    pub data: T,
}

/// Document with untyped record fields, as returned by the vendor seam.
pub type RawDocument = Document<Map<String, Value>>;

impl RawDocument {
    /// Decode the record fields into a typed record, keeping the metadata.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Document<T>> {
        let data = serde_json::from_value(Value::Object(self.data)).map_err(|e| {
            ApiError::Decode(format!("document '{}': {}", self.id, e))
        })?;
        Ok(Document {
            id: self.id,
            collection_id: self.collection_id,
            database_id: self.database_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            permissions: self.permissions,
            data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<Document<T>>,
}

pub type RawDocumentList = DocumentList<Map<String, Value>>;

impl RawDocumentList {
    pub fn decode<T: DeserializeOwned>(self) -> Result<DocumentList<T>> {
        let documents = self
            .documents
            .into_iter()
            .map(RawDocument::decode)
            .collect::<Result<Vec<_>>>()?;
        Ok(DocumentList {
            total: self.total,
            documents,
        })
    }
}
