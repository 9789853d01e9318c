//! The HTTP boundary: wire envelopes and the gateway trait every screen
//! talks through.
//!
//! The gateway works on `serde_json::Value` records; typing happens one
//! layer up when the screen configuration maps raw records into view rows.

use serde::Deserialize;
use serde_json::Value;

use crate::api::errors::ApiResult;
use crate::pagination::{PageRequest, PageResult};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
#[cfg(feature = "http")]
pub mod rest;

/// Pagination metadata block of a `GET <entity>/all` response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

/// Envelope of a paged listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Vec<Value>,
    pub pagination: PaginationMeta,
}

impl PageEnvelope {
    /// Flattens the envelope into the crate's paging type.
    pub fn into_page_result(self) -> PageResult<Value> {
        PageResult {
            items: self.data,
            total_items: self.pagination.total_items,
            total_pages: self.pagination.total_pages,
            current_page: self.pagination.current_page,
            per_page: self.pagination.page_size,
        }
    }
}

/// Envelope of a single-record response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Value,
}

/// Envelope of a mutation response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Outcome block of a `POST <entity>/import-csv` response.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    #[serde(rename = "successMessage")]
    pub success_message: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A downloaded report spreadsheet plus the filename to save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub suggested_name: String,
}

/// Everything the list controller needs from the backend, parameterized by
/// the entity's endpoint segment so one implementation serves every screen.
pub trait EntityGateway {
    /// `GET <endpoint>/all?page&limit`.
    fn fetch_page(&self, endpoint: &str, request: PageRequest) -> ApiResult<PageResult<Value>>;

    /// `GET <endpoint>/<id>`.
    fn fetch_record(&self, endpoint: &str, id: &str) -> ApiResult<Value>;

    /// `POST <endpoint>`; returns the created record when the backend
    /// echoes one back.
    fn create_record(&self, endpoint: &str, payload: &Value) -> ApiResult<Value>;

    /// `PUT <endpoint>/<id>`.
    fn update_record(&self, endpoint: &str, id: &str, payload: &Value) -> ApiResult<Value>;

    /// `DELETE <endpoint>/<id>`.
    fn delete_record(&self, endpoint: &str, id: &str) -> ApiResult<()>;

    /// `POST <endpoint>/import-csv` (multipart).
    fn import_csv(&self, endpoint: &str, filename: &str, bytes: Vec<u8>)
    -> ApiResult<ImportOutcome>;

    /// `POST <endpoint>Report/download`; returns the binary spreadsheet.
    fn download_report(&self, endpoint: &str) -> ApiResult<ExportBlob>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_decodes_camel_case_pagination() {
        let body = r#"{
            "status": "success",
            "data": [{"_id": "m1", "model_name": "MBP"}],
            "pagination": {"totalItems": 25, "totalPages": 3, "currentPage": 1, "pageSize": 10}
        }"#;
        let envelope: PageEnvelope = serde_json::from_str(body).unwrap();
        let page = envelope.into_page_result();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn import_outcome_decodes_partial_bodies() {
        let body = r#"{"successMessage": "5 rows imported"}"#;
        let outcome: ImportOutcome = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.success_message.as_deref(), Some("5 rows imported"));
        assert!(outcome.errors.is_empty());
    }
}
