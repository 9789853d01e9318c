use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tax record exactly as the backend ships it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct RawTax {
    #[serde(rename = "_id")]
    pub id: String,
    pub tax_name: String,
    pub percentage: Option<f64>,
    pub effective_from: Option<NaiveDate>,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for `POST tax` / `PUT tax/<id>`; the backend accepts the same
/// shape for both.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaxPayload {
    pub tax_name: String,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<NaiveDate>,
}

impl TaxPayload {
    #[must_use]
    pub fn new(tax_name: String, percentage: f64, effective_from: Option<NaiveDate>) -> Self {
        Self {
            tax_name: tax_name.trim().to_string(),
            percentage,
            effective_from,
        }
    }
}
