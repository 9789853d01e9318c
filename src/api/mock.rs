//! Mock gateway for isolating the service layer in tests.

use mockall::mock;
use serde_json::Value;

use crate::api::errors::ApiResult;
use crate::api::{EntityGateway, ExportBlob, ImportOutcome};
use crate::pagination::{PageRequest, PageResult};

mock! {
    pub Gateway {}

    impl EntityGateway for Gateway {
        fn fetch_page(&self, endpoint: &str, request: PageRequest) -> ApiResult<PageResult<Value>>;
        fn fetch_record(&self, endpoint: &str, id: &str) -> ApiResult<Value>;
        fn create_record(&self, endpoint: &str, payload: &Value) -> ApiResult<Value>;
        fn update_record(&self, endpoint: &str, id: &str, payload: &Value) -> ApiResult<Value>;
        fn delete_record(&self, endpoint: &str, id: &str) -> ApiResult<()>;
        fn import_csv(
            &self,
            endpoint: &str,
            filename: &str,
            bytes: Vec<u8>,
        ) -> ApiResult<ImportOutcome>;
        fn download_report(&self, endpoint: &str) -> ApiResult<ExportBlob>;
    }
}
