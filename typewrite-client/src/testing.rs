//! In-memory [`DatabasesApi`] for tests.
//!
//! Holds databases, collections, attributes and documents in insertion order
//! and records every call. Document listings apply the `equal`, `notEqual`,
//! `lessThan`, `greaterThan`, `search`, `limit` and `offset` query methods;
//! any other method is recorded but not applied.

use std::cell::RefCell;

use serde_json::{Map, Value};
use typewrite_schema::{Attribute, SchemaSnapshot};

use crate::{
    api::DatabasesApi,
    error::{ApiError, Result},
    facade::UNIQUE_ID,
    models::{
        AttributeList, CollectionInfo, CollectionList, DatabaseInfo, DatabaseList, Document,
        RawDocument, RawDocumentList,
    },
};

/// A recorded call on the double.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub database_id: Option<String>,
    pub collection_id: Option<String>,
    pub document_id: Option<String>,
    pub queries: Vec<String>,
    pub permissions: Option<Vec<String>>,
}

impl Call {
    fn new(method: &'static str) -> Self {
        Self {
            method,
            database_id: None,
            collection_id: None,
            document_id: None,
            queries: Vec::new(),
            permissions: None,
        }
    }

    fn database(mut self, id: &str) -> Self {
        self.database_id = Some(id.to_string());
        self
    }

    fn collection(mut self, id: &str) -> Self {
        self.collection_id = Some(id.to_string());
        self
    }

    fn document(mut self, id: &str) -> Self {
        self.document_id = Some(id.to_string());
        self
    }
}

struct StoredDatabase {
    info: DatabaseInfo,
    collections: Vec<StoredCollection>,
}

struct StoredCollection {
    info: CollectionInfo,
    attributes: Vec<Attribute>,
    documents: Vec<RawDocument>,
}

#[derive(Default)]
struct State {
    databases: Vec<StoredDatabase>,
    next_id: u64,
}

#[derive(Default)]
pub struct MemoryDatabases {
    state: RefCell<State>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<Vec<&'static str>>,
}

impl MemoryDatabases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed databases, collections and attributes from a schema snapshot.
    pub fn from_snapshot(snapshot: &SchemaSnapshot) -> Self {
        let databases = snapshot
            .databases
            .iter()
            .map(|db| StoredDatabase {
                info: database_info(&db.id, &db.name),
                collections: db
                    .collections
                    .iter()
                    .map(|col| StoredCollection {
                        info: collection_info(&db.id, &col.id, &col.name, Vec::new()),
                        attributes: col.attributes.clone(),
                        documents: Vec::new(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            state: RefCell::new(State {
                databases,
                next_id: 0,
            }),
            ..Self::default()
        }
    }

    /// Make every later call of `method` fail with a server error.
    pub fn fail_on(&self, method: &'static str) {
        self.failing.borrow_mut().push(method);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.borrow().last().cloned()
    }

    fn record(&self, call: Call) -> Result<()> {
        let method = call.method;
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&method) {
            return Err(ApiError::server(500, format!("injected failure in {}", method)));
        }
        Ok(())
    }

    fn with_database<R>(
        &self,
        database_id: &str,
        f: impl FnOnce(&mut StoredDatabase) -> Result<R>,
    ) -> Result<R> {
        let mut state = self.state.borrow_mut();
        let db = state
            .databases
            .iter_mut()
            .find(|db| db.info.id == database_id)
            .ok_or_else(|| not_found("database", database_id))?;
        f(db)
    }

    fn with_collection<R>(
        &self,
        database_id: &str,
        collection_id: &str,
        f: impl FnOnce(&mut StoredCollection) -> Result<R>,
    ) -> Result<R> {
        self.with_database(database_id, |db| {
            let col = db
                .collections
                .iter_mut()
                .find(|c| c.info.id == collection_id)
                .ok_or_else(|| not_found("collection", collection_id))?;
            f(col)
        })
    }

    fn next_id(&self) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        format!("doc{}", state.next_id)
    }
}

fn database_info(id: &str, name: &str) -> DatabaseInfo {
    DatabaseInfo {
        id: id.to_string(),
        name: name.to_string(),
        created_at: String::new(),
        updated_at: String::new(),
        enabled: true,
    }
}

fn collection_info(
    database_id: &str,
    id: &str,
    name: &str,
    permissions: Vec<String>,
) -> CollectionInfo {
    CollectionInfo {
        id: id.to_string(),
        database_id: database_id.to_string(),
        name: name.to_string(),
        permissions,
        created_at: String::new(),
        updated_at: String::new(),
        document_security: false,
        enabled: true,
    }
}

fn not_found(kind: &str, id: &str) -> ApiError {
    ApiError::Server {
        status: 404,
        message: format!("{} '{}' could not be found", kind, id),
        kind: Some(format!("{}_not_found", kind)),
    }
}

fn conflict(kind: &str, id: &str) -> ApiError {
    ApiError::Server {
        status: 409,
        message: format!("{} '{}' already exists", kind, id),
        kind: Some(format!("{}_already_exists", kind)),
    }
}

fn object(data: &Value) -> Result<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(map.clone()),
        _ => Err(ApiError::server(400, "document data must be an object")),
    }
}

fn field<'a>(doc: &'a RawDocument, attribute: &str) -> Option<&'a Value> {
    doc.data.get(attribute)
}

fn compare(left: &Value, right: &Value) -> Option<std::cmp::Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn query_matches(doc: &RawDocument, method: &str, attribute: &str, values: &[Value]) -> bool {
    let id = Value::String(doc.id.clone());
    let null = Value::Null;
    let actual = if attribute == "$id" {
        &id
    } else {
        field(doc, attribute).unwrap_or(&null)
    };

    match method {
        "equal" => values.contains(actual),
        "notEqual" => !values.contains(actual),
        "lessThan" => values
            .iter()
            .any(|v| compare(actual, v) == Some(std::cmp::Ordering::Less)),
        "greaterThan" => values
            .iter()
            .any(|v| compare(actual, v) == Some(std::cmp::Ordering::Greater)),
        "search" => match actual {
            Value::String(s) => values
                .iter()
                .filter_map(Value::as_str)
                .any(|needle| s.contains(needle)),
            _ => false,
        },
        _ => true,
    }
}

fn apply_queries(documents: &[RawDocument], queries: &[String]) -> Result<Vec<RawDocument>> {
    let mut selected: Vec<RawDocument> = documents.to_vec();
    let mut limit = None;
    let mut offset = 0;

    for query in queries {
        let parsed: Value = serde_json::from_str(query)
            .map_err(|e| ApiError::server(400, format!("invalid query '{}': {}", query, e)))?;
        let method = parsed["method"].as_str().unwrap_or_default();
        let values = parsed["values"].as_array().cloned().unwrap_or_default();
        let first = values.first().and_then(Value::as_u64);
        match method {
            "limit" => limit = first,
            "offset" => offset = first.unwrap_or(0),
            _ => {
                let attribute = parsed["attribute"].as_str().unwrap_or_default();
                selected.retain(|doc| query_matches(doc, method, attribute, &values));
            }
        }
    }

    let selected = selected.into_iter().skip(offset as usize);
    Ok(match limit {
        Some(n) => selected.take(n as usize).collect(),
        None => selected.collect(),
    })
}

impl DatabasesApi for MemoryDatabases {
    fn list_databases(&self) -> Result<DatabaseList> {
        self.record(Call::new("list_databases"))?;
        let state = self.state.borrow();
        let databases: Vec<_> = state.databases.iter().map(|db| db.info.clone()).collect();
        Ok(DatabaseList {
            total: databases.len() as u64,
            databases,
        })
    }

    fn get_database(&self, database_id: &str) -> Result<DatabaseInfo> {
        self.record(Call::new("get_database").database(database_id))?;
        self.with_database(database_id, |db| Ok(db.info.clone()))
    }

    fn create_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        self.record(Call::new("create_database").database(database_id))?;
        let mut state = self.state.borrow_mut();
        if state.databases.iter().any(|db| db.info.id == database_id) {
            return Err(conflict("database", database_id));
        }
        let info = database_info(database_id, name);
        state.databases.push(StoredDatabase {
            info: info.clone(),
            collections: Vec::new(),
        });
        Ok(info)
    }

    fn update_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        self.record(Call::new("update_database").database(database_id))?;
        self.with_database(database_id, |db| {
            db.info.name = name.to_string();
            Ok(db.info.clone())
        })
    }

    fn delete_database(&self, database_id: &str) -> Result<()> {
        self.record(Call::new("delete_database").database(database_id))?;
        let mut state = self.state.borrow_mut();
        let before = state.databases.len();
        state.databases.retain(|db| db.info.id != database_id);
        if state.databases.len() == before {
            return Err(not_found("database", database_id));
        }
        Ok(())
    }

    fn list_collections(&self, database_id: &str) -> Result<CollectionList> {
        self.record(Call::new("list_collections").database(database_id))?;
        self.with_database(database_id, |db| {
            let collections: Vec<_> = db.collections.iter().map(|c| c.info.clone()).collect();
            Ok(CollectionList {
                total: collections.len() as u64,
                collections,
            })
        })
    }

    fn get_collection(&self, database_id: &str, collection_id: &str) -> Result<CollectionInfo> {
        self.record(
            Call::new("get_collection")
                .database(database_id)
                .collection(collection_id),
        )?;
        self.with_collection(database_id, collection_id, |col| Ok(col.info.clone()))
    }

    fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[String],
    ) -> Result<CollectionInfo> {
        let mut call = Call::new("create_collection")
            .database(database_id)
            .collection(collection_id);
        call.permissions = Some(permissions.to_vec());
        self.record(call)?;

        self.with_database(database_id, |db| {
            if db.collections.iter().any(|c| c.info.id == collection_id) {
                return Err(conflict("collection", collection_id));
            }
            let info = collection_info(database_id, collection_id, name, permissions.to_vec());
            db.collections.push(StoredCollection {
                info: info.clone(),
                attributes: Vec::new(),
                documents: Vec::new(),
            });
            Ok(info)
        })
    }

    fn update_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: Option<&[String]>,
    ) -> Result<CollectionInfo> {
        let mut call = Call::new("update_collection")
            .database(database_id)
            .collection(collection_id);
        call.permissions = permissions.map(<[String]>::to_vec);
        self.record(call)?;

        self.with_collection(database_id, collection_id, |col| {
            col.info.name = name.to_string();
            if let Some(permissions) = permissions {
                col.info.permissions = permissions.to_vec();
            }
            Ok(col.info.clone())
        })
    }

    fn delete_collection(&self, database_id: &str, collection_id: &str) -> Result<()> {
        self.record(
            Call::new("delete_collection")
                .database(database_id)
                .collection(collection_id),
        )?;
        self.with_database(database_id, |db| {
            let before = db.collections.len();
            db.collections.retain(|c| c.info.id != collection_id);
            if db.collections.len() == before {
                return Err(not_found("collection", collection_id));
            }
            Ok(())
        })
    }

    fn list_attributes(&self, database_id: &str, collection_id: &str) -> Result<AttributeList> {
        self.record(
            Call::new("list_attributes")
                .database(database_id)
                .collection(collection_id),
        )?;
        self.with_collection(database_id, collection_id, |col| {
            Ok(AttributeList {
                total: col.attributes.len() as u64,
                attributes: col.attributes.clone(),
            })
        })
    }

    fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> Result<RawDocumentList> {
        let mut call = Call::new("list_documents")
            .database(database_id)
            .collection(collection_id);
        call.queries = queries.to_vec();
        self.record(call)?;

        self.with_collection(database_id, collection_id, |col| {
            let documents = apply_queries(&col.documents, queries)?;
            Ok(RawDocumentList {
                total: documents.len() as u64,
                documents,
            })
        })
    }

    fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<RawDocument> {
        self.record(
            Call::new("get_document")
                .database(database_id)
                .collection(collection_id)
                .document(document_id),
        )?;
        self.with_collection(database_id, collection_id, |col| {
            col.documents
                .iter()
                .find(|d| d.id == document_id)
                .cloned()
                .ok_or_else(|| not_found("document", document_id))
        })
    }

    fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: &[String],
    ) -> Result<RawDocument> {
        let mut call = Call::new("create_document")
            .database(database_id)
            .collection(collection_id)
            .document(document_id);
        call.permissions = Some(permissions.to_vec());
        self.record(call)?;

        let data = object(data)?;
        let id = if document_id == UNIQUE_ID {
            self.next_id()
        } else {
            document_id.to_string()
        };

        self.with_collection(database_id, collection_id, |col| {
            if col.documents.iter().any(|d| d.id == id) {
                return Err(conflict("document", &id));
            }
            let doc = Document {
                id,
                collection_id: collection_id.to_string(),
                database_id: database_id.to_string(),
                created_at: String::new(),
                updated_at: String::new(),
                permissions: permissions.to_vec(),
                data,
            };
            col.documents.push(doc.clone());
            Ok(doc)
        })
    }

    fn update_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: Option<&[String]>,
    ) -> Result<RawDocument> {
        let mut call = Call::new("update_document")
            .database(database_id)
            .collection(collection_id)
            .document(document_id);
        call.permissions = permissions.map(<[String]>::to_vec);
        self.record(call)?;

        let patch = object(data)?;
        self.with_collection(database_id, collection_id, |col| {
            let doc = col
                .documents
                .iter_mut()
                .find(|d| d.id == document_id)
                .ok_or_else(|| not_found("document", document_id))?;
            doc.data.extend(patch);
            if let Some(permissions) = permissions {
                doc.permissions = permissions.to_vec();
            }
            Ok(doc.clone())
        })
    }

    fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<()> {
        self.record(
            Call::new("delete_document")
                .database(database_id)
                .collection(collection_id)
                .document(document_id),
        )?;
        self.with_collection(database_id, collection_id, |col| {
            let before = col.documents.len();
            col.documents.retain(|d| d.id != document_id);
            if col.documents.len() == before {
                return Err(not_found("document", document_id));
            }
            Ok(())
        })
    }
}
