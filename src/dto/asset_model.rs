//! Grid projection and screen configuration for asset models.

use std::collections::BTreeMap;

use chrono::Months;
use serde_json::Value;

use crate::domain::asset_model::RawAssetModel;
use crate::domain::types::Reference;
use crate::dto::{EntityScreen, display_date_or_dash, display_or_dash, display_timestamp_or_dash};
use crate::forms::asset_model::AssetModelForm;

/// Flat asset-model row. References are resolved to both display names and
/// ids; the id copies back the structured filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetModelRow {
    pub id: String,
    pub model_name: String,
    pub brand: String,
    pub brand_id: Option<String>,
    pub category: String,
    pub status: String,
    pub status_id: Option<String>,
    pub warranty_start: String,
    /// Derived client-side: start date plus the warranty period.
    pub warranty_end: String,
    pub created_by: String,
    pub created_on: String,
}

impl From<RawAssetModel> for AssetModelRow {
    fn from(raw: RawAssetModel) -> Self {
        let warranty_end = match (raw.warranty_start_date, raw.warranty_period_months) {
            (Some(start), Some(months)) => {
                display_date_or_dash(start.checked_add_months(Months::new(months)))
            }
            _ => "-".to_string(),
        };

        Self {
            id: raw.id,
            model_name: raw.model_name,
            brand: Reference::display(raw.brand.as_ref()),
            brand_id: raw.brand.map(|r| r.id),
            category: Reference::display(raw.category.as_ref()),
            status: Reference::display(raw.status.as_ref()),
            status_id: raw.status.map(|r| r.id),
            warranty_start: display_date_or_dash(raw.warranty_start_date),
            warranty_end,
            created_by: display_or_dash(raw.created_by.as_ref()),
            created_on: display_timestamp_or_dash(raw.created_at.as_ref()),
        }
    }
}

/// Screen configuration for the asset-model listing.
pub struct AssetModelScreen;

impl EntityScreen for AssetModelScreen {
    type Raw = RawAssetModel;
    type Row = AssetModelRow;
    type CreateForm = AssetModelForm;
    type UpdateForm = AssetModelForm;

    fn endpoint() -> &'static str {
        "assetModel"
    }

    fn label() -> &'static str {
        "Asset model"
    }

    fn to_row(raw: Self::Raw) -> Self::Row {
        raw.into()
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }

    fn search_haystack(row: &Self::Row) -> String {
        [
            row.model_name.as_str(),
            row.brand.as_str(),
            row.category.as_str(),
            row.status.as_str(),
            row.created_by.as_str(),
            row.created_on.as_str(),
        ]
        .join(" ")
    }

    fn create_payload(form: &Self::CreateForm) -> Result<Value, serde_json::Error> {
        serde_json::to_value(form.to_new())
    }

    fn update_payload(form: &Self::UpdateForm) -> Result<Value, serde_json::Error> {
        serde_json::to_value(form.to_update())
    }

    fn matches_structured(row: &Self::Row, filters: &BTreeMap<String, String>) -> bool {
        filters.iter().all(|(key, wanted)| match key.as_str() {
            "brand_id" => row.brand_id.as_deref() == Some(wanted.as_str()),
            "status_id" => row.status_id.as_deref() == Some(wanted.as_str()),
            _ => true,
        })
    }

    fn csv_headers() -> &'static [&'static str] {
        &["model_name", "brand", "category"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::parse_api_date;

    fn raw() -> RawAssetModel {
        RawAssetModel {
            id: "m1".into(),
            model_name: "ThinkPad T14".into(),
            brand: Some(Reference {
                id: "b1".into(),
                name: "Lenovo".into(),
            }),
            category: None,
            warranty_period_months: Some(24),
            warranty_start_date: Some(parse_api_date("2024-02-01").unwrap()),
            status: Some(Reference {
                id: "s1".into(),
                name: "Active".into(),
            }),
            created_by: Some("admin".into()),
            created_at: Some("2024-02-02T08:00:00Z".into()),
        }
    }

    #[test]
    fn mapping_flattens_references_and_formats_dates() {
        let row = AssetModelRow::from(raw());
        assert_eq!(row.brand, "Lenovo");
        assert_eq!(row.brand_id.as_deref(), Some("b1"));
        assert_eq!(row.category, "-");
        assert_eq!(row.warranty_start, "01-02-2024");
        assert_eq!(row.created_on, "02-02-2024");
    }

    #[test]
    fn warranty_end_is_start_plus_period() {
        let row = AssetModelRow::from(raw());
        assert_eq!(row.warranty_end, "01-02-2026");
    }

    #[test]
    fn warranty_end_needs_both_inputs() {
        let mut incomplete = raw();
        incomplete.warranty_period_months = None;
        let row = AssetModelRow::from(incomplete);
        assert_eq!(row.warranty_end, "-");
    }

    #[test]
    fn structured_filter_matches_on_reference_ids() {
        let row = AssetModelRow::from(raw());
        let mut filters = BTreeMap::new();
        filters.insert("brand_id".to_string(), "b1".to_string());
        assert!(AssetModelScreen::matches_structured(&row, &filters));
        filters.insert("status_id".to_string(), "s9".to_string());
        assert!(!AssetModelScreen::matches_structured(&row, &filters));
    }
}
