//! Live gateway over `reqwest`'s blocking client.
//!
//! Auth is carried implicitly: the cookie store forwards session cookies and
//! an optional bearer token is attached to every request. A 401 from any
//! call surfaces as [`ApiError::AuthExpired`](crate::api::errors::ApiError).

use std::time::Duration;

use chrono::Local;
use reqwest::blocking::multipart;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult, classify_response};
use crate::api::{
    EntityGateway, ExportBlob, ImportOutcome, MessageEnvelope, PageEnvelope, RecordEnvelope,
};
use crate::models::config::ServerConfig;
use crate::pagination::{PageRequest, PageResult};

/// REST implementation of [`EntityGateway`].
#[derive(Clone)]
pub struct RestGateway {
    http: Client,
    base_url: String,
}

impl RestGateway {
    /// Builds a gateway with the timeout and credentials from `config`.
    pub fn new(config: &ServerConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Network(format!("invalid auth token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Converts non-2xx responses into the error taxonomy.
    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(classify_response(status.as_u16(), &body))
    }
}

impl EntityGateway for RestGateway {
    fn fetch_page(&self, endpoint: &str, request: PageRequest) -> ApiResult<PageResult<Value>> {
        let response = self
            .http
            .get(self.url(&format!("{endpoint}/all")))
            .query(&[("page", request.page), ("limit", request.per_page)])
            .send()?;
        let envelope: PageEnvelope = Self::check(response)?.json()?;
        Ok(envelope.into_page_result())
    }

    fn fetch_record(&self, endpoint: &str, id: &str) -> ApiResult<Value> {
        let response = self.http.get(self.url(&format!("{endpoint}/{id}"))).send()?;
        let envelope: RecordEnvelope = Self::check(response)?.json()?;
        Ok(envelope.data)
    }

    fn create_record(&self, endpoint: &str, payload: &Value) -> ApiResult<Value> {
        let response = self.http.post(self.url(endpoint)).json(payload).send()?;
        let envelope: MessageEnvelope = Self::check(response)?.json()?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    fn update_record(&self, endpoint: &str, id: &str, payload: &Value) -> ApiResult<Value> {
        let response = self
            .http
            .put(self.url(&format!("{endpoint}/{id}")))
            .json(payload)
            .send()?;
        let envelope: MessageEnvelope = Self::check(response)?.json()?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    fn delete_record(&self, endpoint: &str, id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("{endpoint}/{id}")))
            .send()?;
        let _: MessageEnvelope = Self::check(response)?.json()?;
        Ok(())
    }

    fn import_csv(
        &self,
        endpoint: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<ImportOutcome> {
        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url(&format!("{endpoint}/import-csv")))
            .multipart(form)
            .send()?;
        let envelope: MessageEnvelope = Self::check(response)?.json()?;

        let outcome = match envelope.data {
            Some(data) => serde_json::from_value(data)?,
            None => ImportOutcome::default(),
        };
        Ok(outcome)
    }

    fn download_report(&self, endpoint: &str) -> ApiResult<ExportBlob> {
        let response = self
            .http
            .post(self.url(&format!("{endpoint}Report/download")))
            .send()?;
        let bytes = Self::check(response)?.bytes()?.to_vec();

        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        Ok(ExportBlob {
            bytes,
            suggested_name: format!("{endpoint}-report-{stamp}.xlsx"),
        })
    }
}
