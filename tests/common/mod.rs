//! In-memory stand-in for the REST backend, shared by the integration
//! tests. Implements real pagination math plus toggles for the failure
//! modes the controller has to handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{Value, json};

use assetdesk::api::errors::{ApiError, ApiResult};
use assetdesk::api::{EntityGateway, ExportBlob, ImportOutcome};
use assetdesk::pagination::{PageRequest, PageResult};
use assetdesk::prefs::{InMemoryPrefs, PreferenceStore};

/// Cloneable handle over one shared record store, so tests can keep
/// inspecting the backend after the controller takes its copy.
#[derive(Clone, Default)]
pub struct FakeBackend {
    records: Rc<RefCell<Vec<Value>>>,
    next_id: Rc<Cell<usize>>,
    pub unauthorized: Rc<Cell<bool>>,
    pub fetch_calls: Rc<Cell<usize>>,
}

impl FakeBackend {
    /// Seeds `count` asset models `m1..mN` with alternating brands.
    pub fn seeded(count: usize) -> Self {
        let backend = Self::default();
        {
            let mut records = backend.records.borrow_mut();
            for n in 1..=count {
                let (brand_id, brand) = if n % 2 == 0 {
                    ("b2", "Apple")
                } else {
                    ("b1", "Lenovo")
                };
                records.push(json!({
                    "_id": format!("m{n}"),
                    "model_name": format!("Model {n:02}"),
                    "brand": { "_id": brand_id, "name": brand },
                    "created_by": "admin",
                }));
            }
        }
        backend.next_id.set(count + 1);
        backend
    }

    pub fn record_count(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|record| record["_id"] == id)
    }

    fn guard(&self) -> Result<(), ApiError> {
        if self.unauthorized.get() {
            Err(ApiError::AuthExpired)
        } else {
            Ok(())
        }
    }
}

/// Write payloads carry foreign keys as id strings, but listings resolve
/// them to `{ _id, name }` objects. Mirror that on every stored write so
/// re-fetches decode like real backend responses.
fn resolve_references(record: &mut Value) {
    let Some(object) = record.as_object_mut() else {
        return;
    };
    for key in ["brand", "category", "status"] {
        let Some(id) = object.get(key).and_then(Value::as_str).map(str::to_string) else {
            continue;
        };
        let name = match id.as_str() {
            "b1" => "Lenovo".to_string(),
            "b2" => "Apple".to_string(),
            other => format!("Ref {other}"),
        };
        object.insert(key.to_string(), json!({ "_id": id, "name": name }));
    }
}

impl EntityGateway for FakeBackend {
    fn fetch_page(&self, _endpoint: &str, request: PageRequest) -> ApiResult<PageResult<Value>> {
        self.guard()?;
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        let records = self.records.borrow();
        let total_items = records.len();
        let total_pages = total_items.div_ceil(request.per_page);
        let start = (request.page - 1) * request.per_page;
        let items = records
            .iter()
            .skip(start)
            .take(request.per_page)
            .cloned()
            .collect();

        Ok(PageResult {
            items,
            total_items,
            total_pages,
            current_page: request.page,
            per_page: request.per_page,
        })
    }

    fn fetch_record(&self, _endpoint: &str, id: &str) -> ApiResult<Value> {
        self.guard()?;
        self.records
            .borrow()
            .iter()
            .find(|record| record["_id"] == id)
            .cloned()
            .ok_or(ApiError::Server {
                status: 404,
                message: "Not found".to_string(),
            })
    }

    fn create_record(&self, _endpoint: &str, payload: &Value) -> ApiResult<Value> {
        self.guard()?;

        let name = payload["model_name"].as_str().unwrap_or_default();
        if self
            .records
            .borrow()
            .iter()
            .any(|record| record["model_name"] == name)
        {
            return Err(ApiError::Duplicate("Asset model already exists".into()));
        }

        let id = format!("m{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        let mut record = payload.clone();
        record["_id"] = json!(id);
        resolve_references(&mut record);
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn update_record(&self, _endpoint: &str, id: &str, payload: &Value) -> ApiResult<Value> {
        self.guard()?;

        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|record| record["_id"] == id)
            .ok_or(ApiError::Server {
                status: 404,
                message: "Not found".to_string(),
            })?;

        if let (Some(target), Some(changes)) = (record.as_object_mut(), payload.as_object()) {
            for (key, value) in changes {
                target.insert(key.clone(), value.clone());
            }
        }
        resolve_references(record);
        Ok(record.clone())
    }

    fn delete_record(&self, _endpoint: &str, id: &str) -> ApiResult<()> {
        self.guard()?;

        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|record| record["_id"] != id);
        if records.len() == before {
            return Err(ApiError::Server {
                status: 404,
                message: "Not found".to_string(),
            });
        }
        Ok(())
    }

    fn import_csv(
        &self,
        _endpoint: &str,
        _filename: &str,
        _bytes: Vec<u8>,
    ) -> ApiResult<ImportOutcome> {
        self.guard()?;
        Ok(ImportOutcome {
            success_message: Some("2 rows imported".to_string()),
            error_message: None,
            errors: Vec::new(),
        })
    }

    fn download_report(&self, endpoint: &str) -> ApiResult<ExportBlob> {
        self.guard()?;
        Ok(ExportBlob {
            bytes: b"spreadsheet".to_vec(),
            suggested_name: format!("{endpoint}-report-20240301-120000.xlsx"),
        })
    }
}

/// Preference store handle that outlives the controller, so tests can check
/// what was persisted.
#[derive(Clone, Default)]
pub struct SharedPrefs(Rc<RefCell<InMemoryPrefs>>);

impl PreferenceStore for SharedPrefs {
    fn page_size(&self, entity: &str) -> Option<usize> {
        self.0.borrow().page_size(entity)
    }

    fn set_page_size(&mut self, entity: &str, size: usize) {
        self.0.borrow_mut().set_page_size(entity, size);
    }
}
