//! Grid projection and screen configuration for taxes.

use serde_json::Value;

use crate::domain::tax::RawTax;
use crate::domain::types::Percentage;
use crate::dto::{EntityScreen, display_date_or_dash, display_or_dash, display_timestamp_or_dash};
use crate::forms::tax::TaxForm;

#[derive(Debug, Clone, PartialEq)]
pub struct TaxRow {
    pub id: String,
    pub tax_name: String,
    /// Rendered with a percent sign, or a dash when unset.
    pub percentage: String,
    pub effective_from: String,
    pub status: String,
    pub created_on: String,
}

impl From<RawTax> for TaxRow {
    fn from(raw: RawTax) -> Self {
        Self {
            id: raw.id,
            tax_name: raw.tax_name,
            percentage: raw
                .percentage
                .and_then(|p| Percentage::new(p).ok())
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            effective_from: display_date_or_dash(raw.effective_from),
            status: display_or_dash(raw.status.as_ref()),
            created_on: display_timestamp_or_dash(raw.created_at.as_ref()),
        }
    }
}

/// Screen configuration for the tax listing.
pub struct TaxScreen;

impl EntityScreen for TaxScreen {
    type Raw = RawTax;
    type Row = TaxRow;
    type CreateForm = TaxForm;
    type UpdateForm = TaxForm;

    fn endpoint() -> &'static str {
        "tax"
    }

    fn label() -> &'static str {
        "Tax"
    }

    fn to_row(raw: Self::Raw) -> Self::Row {
        raw.into()
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }

    fn search_haystack(row: &Self::Row) -> String {
        [
            row.tax_name.as_str(),
            row.percentage.as_str(),
            row.status.as_str(),
            row.effective_from.as_str(),
        ]
        .join(" ")
    }

    fn create_payload(form: &Self::CreateForm) -> Result<Value, serde_json::Error> {
        serde_json::to_value(form.to_payload())
    }

    fn update_payload(form: &Self::UpdateForm) -> Result<Value, serde_json::Error> {
        serde_json::to_value(form.to_payload())
    }

    fn csv_headers() -> &'static [&'static str] {
        &["tax_name", "percentage"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_renders_with_a_sign_or_dash() {
        let raw = RawTax {
            id: "t1".into(),
            tax_name: "GST".into(),
            percentage: Some(18.0),
            ..Default::default()
        };
        assert_eq!(TaxRow::from(raw).percentage, "18%");

        let out_of_range = RawTax {
            id: "t2".into(),
            tax_name: "Bogus".into(),
            percentage: Some(250.0),
            ..Default::default()
        };
        assert_eq!(TaxRow::from(out_of_range).percentage, "-");
    }
}
