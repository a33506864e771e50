//! Live adapter for the `DocumentStore` port over the hosted database's
//! JSON/REST surface.
//!
//! Dialect, per document key:
//!
//! ```text
//! GET    {base}/{collection}/{key}            -> 200 fields | 404
//! PUT    {base}/{collection}/{key}            -> upsert
//! PUT    …  + If-None-Match: *                -> 201 | 412 already exists
//! DELETE {base}/{collection}/{key}            -> 200 | 404 (both fine)
//! POST   {base}/{collection}/query            -> {"documents": [{key, fields}]}
//! ```
//!
//! The port is synchronous, so the adapter owns a current-thread tokio
//! runtime and drives the async client itself.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::IF_NONE_MATCH;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::store::{CreateOutcome, DocumentStore, Fields, QueryFilter, StoreError};

/// Document store client for the hosted database.
pub struct HttpStore {
    runtime: tokio::runtime::Runtime,
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Body of a `POST {collection}/query` request.
#[derive(Serialize)]
struct QueryBody<'a> {
    equals: BTreeMap<&'a str, &'a Value>,
    contains: BTreeMap<&'a str, &'a Value>,
}

/// Response to a query request.
#[derive(Deserialize)]
struct QueryResponse {
    documents: Vec<QueryRow>,
}

/// One matched document in a query response.
#[derive(Deserialize)]
struct QueryRow {
    key: String,
    fields: Fields,
}

impl HttpStore {
    /// Builds a client for the store at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or its runtime cannot be built.
    pub fn connect(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to build HTTP client: {e}")))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to start runtime: {e}")))?;

        Ok(Self {
            runtime,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn doc_url(&self, collection: &str, key: &str) -> String {
        format!("{}/{collection}/{key}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        self.runtime
            .block_on(request.send())
            .map_err(|e| StoreError::Unavailable(transport_message(&e)))
    }

    fn read_fields(&self, response: Response) -> Result<Fields, StoreError> {
        self.runtime
            .block_on(response.json::<Fields>())
            .map_err(|e| StoreError::Unavailable(format!("malformed store response: {e}")))
    }
}

impl DocumentStore for HttpStore {
    fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        let request = self.authorized(self.client.get(self.doc_url(collection, key)));
        let response = self.send(request)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(self.read_fields(response)?)),
            status => Err(unexpected_status("get", status)),
        }
    }

    fn set(&self, collection: &str, key: &str, fields: &Fields) -> Result<(), StoreError> {
        let request = self.authorized(self.client.put(self.doc_url(collection, key)).json(fields));
        let response = self.send(request)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(unexpected_status("set", status))
        }
    }

    fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        fields: &Fields,
    ) -> Result<CreateOutcome, StoreError> {
        let request = self.authorized(
            self.client.put(self.doc_url(collection, key)).header(IF_NONE_MATCH, "*").json(fields),
        );
        let response = self.send(request)?;
        match response.status() {
            StatusCode::PRECONDITION_FAILED | StatusCode::CONFLICT => {
                Ok(CreateOutcome::AlreadyExists)
            }
            status if status.is_success() => Ok(CreateOutcome::Created),
            status => Err(unexpected_status("create", status)),
        }
    }

    fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let request = self.authorized(self.client.delete(self.doc_url(collection, key)));
        let response = self.send(request)?;
        let status = response.status();
        // 404 keeps deletes idempotent: the document is gone either way.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(unexpected_status("delete", status))
        }
    }

    fn query(
        &self,
        collection: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<(String, Fields)>, StoreError> {
        let body = QueryBody {
            equals: filter.equals.iter().map(|(f, v)| (f.as_str(), v)).collect(),
            contains: filter.contains.iter().map(|(f, v)| (f.as_str(), v)).collect(),
        };
        let url = format!("{}/{collection}/query", self.base_url);
        let request = self.authorized(self.client.post(url).json(&body));
        let response = self.send(request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status("query", status));
        }
        let parsed: QueryResponse = self
            .runtime
            .block_on(response.json())
            .map_err(|e| StoreError::Unavailable(format!("malformed query response: {e}")))?;
        Ok(parsed.documents.into_iter().map(|row| (row.key, row.fields)).collect())
    }
}

fn unexpected_status(operation: &str, status: StatusCode) -> StoreError {
    StoreError::Unavailable(format!("{operation} failed with HTTP {status}"))
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
