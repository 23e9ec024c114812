//! API Client
//!
//! JSON-over-HTTP client for the fleet backend. Implements the table
//! `DataSource` and the queue / task-distribution calls.

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::components::table::{DataSource, PageQuery};
use crate::domain::config::ApiConfig;
use crate::domain::queue::{QueueItem, QueueRequest};
use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::domain::task::{DistributionResponse, TaskRequest};
use crate::error::{Error, Result};

/// Queue collection path
pub const QUEUE_ENDPOINT: &str = "/queue/";

/// Task distribution path
pub const DISTRIBUTE_ENDPOINT: &str = "/tasks/distribute/";

/// Fleet backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|source| Error::Transport {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint; a missing leading slash is added
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// One window of a collection
    pub async fn fetch_records(
        &self,
        kind: ResourceKind,
        query: &PageQuery,
    ) -> Result<Vec<Record>> {
        self.get_json(kind.endpoint(), query).await
    }

    /// Queue of a single printer
    pub async fn printer_queue(&self, printer_id: i64) -> Result<Vec<QueueItem>> {
        self.get_json(QUEUE_ENDPOINT, &[("printer_id", printer_id)]).await
    }

    /// Add a model run to a printer's queue
    pub async fn add_to_queue(&self, request: &QueueRequest) -> Result<()> {
        let url = self.url(QUEUE_ENDPOINT);
        let (status, body) = self.execute(self.http.post(&url).json(request), &url).await?;
        check_status(&url, status, &body)
    }

    /// Ask the backend to split a job across printers.
    ///
    /// Error responses that carry a JSON `detail` become `Distribution` errors.
    pub async fn distribute_tasks(&self, request: &TaskRequest) -> Result<DistributionResponse> {
        let url = self.url(DISTRIBUTE_ENDPOINT);
        let (status, body) = self.execute(self.http.post(&url).json(request), &url).await?;

        if !status.is_success() {
            if let Ok(DistributionResponse {
                detail: Some(detail),
                ..
            }) = serde_json::from_str::<DistributionResponse>(&body)
            {
                error!(%url, status = status.as_u16(), %detail, "Task distribution refused");
                return Err(Error::Distribution { detail });
            }
        }
        check_status(&url, status, &body)?;
        decode_body(status, &body)
    }

    async fn get_json<T, Q>(&self, endpoint: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        let (status, body) = self.execute(self.http.get(&url).query(query), &url).await?;
        check_status(&url, status, &body)?;
        decode_body(status, &body)
    }

    async fn execute(&self, request: RequestBuilder, url: &str) -> Result<(StatusCode, String)> {
        debug!(%url, "Fetching API");
        let response = request.send().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "API response");

        Ok((status, body))
    }
}

impl DataSource for ApiClient {
    fn fetch_page(
        &self,
        kind: ResourceKind,
        query: PageQuery,
    ) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(async move { self.fetch_records(kind, &query).await })
    }
}

/// Turn a non-success status into `HttpStatus`, logging the body
fn check_status(url: &str, status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    error!(%url, status = status.as_u16(), body = %body, "API error");
    Err(Error::HttpStatus {
        url: url.to_string(),
        status: status.as_u16(),
    })
}

/// Decode a JSON body; `204` and empty bodies decode as `T::default()`
fn decode_body<T: DeserializeOwned + Default>(status: StatusCode, body: &str) -> Result<T> {
    if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .expect("client")
    }

    #[test]
    fn url_joins_with_single_slash() {
        let api = client("http://fleet.local:8000/");
        assert_eq!(api.base_url(), "http://fleet.local:8000");
        assert_eq!(api.url("/printers/"), "http://fleet.local:8000/printers/");
        assert_eq!(api.url("models/"), "http://fleet.local:8000/models/");
    }

    #[test]
    fn empty_and_no_content_bodies_decode_to_default() {
        let records: Vec<Record> = decode_body(StatusCode::NO_CONTENT, "").expect("empty");
        assert!(records.is_empty());
        let records: Vec<Record> = decode_body(StatusCode::OK, "  ").expect("blank");
        assert!(records.is_empty());
    }

    #[test]
    fn record_array_decodes() {
        let records: Vec<Record> =
            decode_body(StatusCode::OK, r#"[{"id":1,"status":"idle"},{"id":2}]"#).expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status(), Some("idle"));
    }

    #[test]
    fn malformed_body_is_json_error() {
        let err = decode_body::<Vec<Record>>(StatusCode::OK, "<html>").expect_err("html");
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn server_error_maps_to_http_status() {
        let err = check_status("/printers/", StatusCode::INTERNAL_SERVER_ERROR, "boom")
            .expect_err("500");
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
        assert!(check_status("/printers/", StatusCode::CREATED, "").is_ok());
    }

    #[test]
    fn table_query_encodes_sort_parameters() {
        let api = client("http://fleet.local");
        let request = api
            .http
            .get(api.url(ResourceKind::Printers.endpoint()))
            .query(&PageQuery::window(0, 100).sorted("name", true))
            .build()
            .expect("request");
        assert_eq!(
            request.url().as_str(),
            "http://fleet.local/printers/?skip=0&limit=100&sort_by=name&sort_desc=true"
        );
    }
}
