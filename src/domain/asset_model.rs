use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::Reference;

/// Asset model record exactly as the backend ships it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct RawAssetModel {
    #[serde(rename = "_id")]
    pub id: String,
    pub model_name: String,
    pub brand: Option<Reference>,
    pub category: Option<Reference>,
    pub warranty_period_months: Option<u32>,
    pub warranty_start_date: Option<NaiveDate>,
    pub status: Option<Reference>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for `POST assetModel`. Optional foreign keys are omitted rather
/// than sent as empty strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewAssetModel {
    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_period_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_start_date: Option<NaiveDate>,
}

impl NewAssetModel {
    #[must_use]
    pub fn new(
        model_name: String,
        brand: Option<String>,
        category: Option<String>,
        warranty_period_months: Option<u32>,
        warranty_start_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            model_name: model_name.trim().to_string(),
            brand: brand.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            category: category
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            warranty_period_months,
            warranty_start_date,
        }
    }
}

/// Payload for `PUT assetModel/<id>`; same normalization as [`NewAssetModel`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateAssetModel {
    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_period_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_start_date: Option<NaiveDate>,
}

impl UpdateAssetModel {
    #[must_use]
    pub fn new(
        model_name: String,
        brand: Option<String>,
        category: Option<String>,
        warranty_period_months: Option<u32>,
        warranty_start_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            model_name: model_name.trim().to_string(),
            brand: brand.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            category: category
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            warranty_period_months,
            warranty_start_date,
        }
    }
}
