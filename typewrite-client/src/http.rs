//! Blocking REST client for the Appwrite databases service.

use reqwest::{
    Method,
    blocking::{Client, RequestBuilder},
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use crate::{
    api::DatabasesApi,
    config::Config,
    error::{ApiError, Result},
    models::{
        AttributeList, CollectionInfo, CollectionList, DatabaseInfo, DatabaseList, RawDocument,
        RawDocumentList,
    },
    query,
};

const PROJECT_HEADER: &str = "x-appwrite-project";
const KEY_HEADER: &str = "x-appwrite-key";

/// Page size used when walking schema listings.
const PAGE_SIZE: u64 = 100;

/// Error body returned by the server.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

pub struct AppwriteClient {
    http: Client,
    endpoint: String,
}

impl AppwriteClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(PROJECT_HEADER),
            HeaderValue::from_str(&config.project_id)?,
        );
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(KEY_HEADER), key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let body = self.execute(request)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn send_empty(&self, request: RequestBuilder) -> Result<()> {
        self.execute(request).map(|_| ())
    }

    fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }
        Ok(body)
    }

    fn json_body(request: RequestBuilder, body: &Value) -> Result<RequestBuilder> {
        let encoded = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        Ok(request.body(encoded))
    }

    // Schema listings are short; every page is fetched so the walk sees all entries.
    fn list_all<L, T>(&self, path: &str, items: fn(L) -> (u64, Vec<T>)) -> Result<(u64, Vec<T>)>
    where
        L: DeserializeOwned,
    {
        let mut all = Vec::new();
        let mut offset = 0;
        loop {
            let queries = [query::limit(PAGE_SIZE), query::offset(offset)];
            let request = self.request(Method::GET, path).query(&queries_param(&queries));
            let (total, page) = items(self.send(request)?);
            let fetched = page.len() as u64;
            all.extend(page);
            offset += fetched;
            if fetched == 0 || offset >= total {
                return Ok((total, all));
            }
        }
    }
}

fn queries_param(queries: &[String]) -> Vec<(&'static str, &str)> {
    queries.iter().map(|q| ("queries[]", q.as_str())).collect()
}

fn server_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => ApiError::Server {
            status,
            message: err.message,
            kind: err.kind,
        },
        Err(_) if body.is_empty() => ApiError::server(status, "empty response"),
        Err(_) => ApiError::server(status, body),
    }
}

impl DatabasesApi for AppwriteClient {
    fn list_databases(&self) -> Result<DatabaseList> {
        let (total, databases) =
            self.list_all("/databases", |l: DatabaseList| (l.total, l.databases))?;
        Ok(DatabaseList { total, databases })
    }

    fn get_database(&self, database_id: &str) -> Result<DatabaseInfo> {
        self.send(self.request(Method::GET, &format!("/databases/{}", database_id)))
    }

    fn create_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        let body = json!({ "databaseId": database_id, "name": name });
        self.send(Self::json_body(self.request(Method::POST, "/databases"), &body)?)
    }

    fn update_database(&self, database_id: &str, name: &str) -> Result<DatabaseInfo> {
        let path = format!("/databases/{}", database_id);
        let body = json!({ "name": name });
        self.send(Self::json_body(self.request(Method::PUT, &path), &body)?)
    }

    fn delete_database(&self, database_id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/databases/{}", database_id)))
    }

    fn list_collections(&self, database_id: &str) -> Result<CollectionList> {
        let path = format!("/databases/{}/collections", database_id);
        let (total, collections) =
            self.list_all(&path, |l: CollectionList| (l.total, l.collections))?;
        Ok(CollectionList { total, collections })
    }

    fn get_collection(&self, database_id: &str, collection_id: &str) -> Result<CollectionInfo> {
        let path = format!("/databases/{}/collections/{}", database_id, collection_id);
        self.send(self.request(Method::GET, &path))
    }

    fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[String],
    ) -> Result<CollectionInfo> {
        let path = format!("/databases/{}/collections", database_id);
        let body = json!({
            "collectionId": collection_id,
            "name": name,
            "permissions": permissions,
        });
        self.send(Self::json_body(self.request(Method::POST, &path), &body)?)
    }

    fn update_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: Option<&[String]>,
    ) -> Result<CollectionInfo> {
        let path = format!("/databases/{}/collections/{}", database_id, collection_id);
        let mut body = json!({ "name": name });
        if let Some(permissions) = permissions {
            body["permissions"] = json!(permissions);
        }
        self.send(Self::json_body(self.request(Method::PUT, &path), &body)?)
    }

    fn delete_collection(&self, database_id: &str, collection_id: &str) -> Result<()> {
        let path = format!("/databases/{}/collections/{}", database_id, collection_id);
        self.send_empty(self.request(Method::DELETE, &path))
    }

    fn list_attributes(&self, database_id: &str, collection_id: &str) -> Result<AttributeList> {
        let path = format!(
            "/databases/{}/collections/{}/attributes",
            database_id, collection_id
        );
        let (total, attributes) =
            self.list_all(&path, |l: AttributeList| (l.total, l.attributes))?;
        Ok(AttributeList { total, attributes })
    }

    fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> Result<RawDocumentList> {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );
        self.send(self.request(Method::GET, &path).query(&queries_param(queries)))
    }

    fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<RawDocument> {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );
        self.send(self.request(Method::GET, &path))
    }

    fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: &[String],
    ) -> Result<RawDocument> {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database_id, collection_id
        );
        let body = json!({
            "documentId": document_id,
            "data": data,
            "permissions": permissions,
        });
        self.send(Self::json_body(self.request(Method::POST, &path), &body)?)
    }

    fn update_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
        permissions: Option<&[String]>,
    ) -> Result<RawDocument> {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );
        let mut body = json!({ "data": data });
        if let Some(permissions) = permissions {
            body["permissions"] = json!(permissions);
        }
        self.send(Self::json_body(self.request(Method::PATCH, &path), &body)?)
    }

    fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<()> {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database_id, collection_id, document_id
        );
        self.send_empty(self.request(Method::DELETE, &path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_from_appwrite_body() {
        let err = server_error(
            404,
            r#"{"message":"Document with the requested ID could not be found.","code":404,"type":"document_not_found","version":"1.5.7"}"#,
        );

        assert!(err.is_not_found());
        match err {
            ApiError::Server { kind, message, .. } => {
                assert_eq!(kind.as_deref(), Some("document_not_found"));
                assert!(message.starts_with("Document with the requested ID"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_server_error_from_plain_body() {
        let err = server_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "server error 502: Bad Gateway");
        assert_eq!(
            server_error(500, "").to_string(),
            "server error 500: empty response"
        );
    }

    #[test]
    fn test_queries_param() {
        let queries = vec![query::limit(1)];
        assert_eq!(
            queries_param(&queries),
            vec![("queries[]", r#"{"method":"limit","values":[1]}"#)]
        );
    }

    #[test]
    fn test_client_keeps_trimmed_endpoint() {
        let client = AppwriteClient::new(&Config::new("http://localhost/v1/", "p", "k")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost/v1");
    }

    #[test]
    fn test_client_rejects_invalid_header() {
        let err = AppwriteClient::new(&Config::new("http://localhost/v1", "p\n", "k"));
        assert!(matches!(err, Err(ApiError::InvalidHeader(_))));
    }
}
