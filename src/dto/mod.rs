//! Flat, display-shaped view rows plus the per-screen configuration that
//! instantiates the generic list controller for one entity type.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::domain::types::format_display_date;

pub mod asset_model;
pub mod client;
pub mod tax;
pub mod user;

/// Everything entity-specific the list controller needs: the endpoint, the
/// raw-to-row projection, the filter haystack, and the drawer payloads.
/// Implemented once per screen; the controller itself never changes.
pub trait EntityScreen {
    /// Server-shaped record decoded from the listing/detail endpoints.
    type Raw: DeserializeOwned;
    /// Flat grid row derived from [`Self::Raw`].
    type Row: Clone + PartialEq;
    /// Add-drawer form.
    type CreateForm: Validate;
    /// Edit-drawer form.
    type UpdateForm: Validate;

    /// Path segment of the entity's REST endpoints.
    fn endpoint() -> &'static str;

    /// Human-readable singular name used in notices.
    fn label() -> &'static str;

    /// Pure projection from the backend shape to the grid shape.
    fn to_row(raw: Self::Raw) -> Self::Row;

    fn row_id(row: &Self::Row) -> &str;

    /// Concatenation of the row's string-coercible fields; free-text
    /// filtering matches case-insensitively against this.
    fn search_haystack(row: &Self::Row) -> String;

    fn create_payload(form: &Self::CreateForm) -> Result<Value, serde_json::Error>;

    fn update_payload(form: &Self::UpdateForm) -> Result<Value, serde_json::Error>;

    /// Structured filter predicate; screens without structured filters
    /// accept everything.
    fn matches_structured(_row: &Self::Row, _filters: &BTreeMap<String, String>) -> bool {
        true
    }

    /// Columns a CSV import file must carry for this entity.
    fn csv_headers() -> &'static [&'static str];
}

/// Optional text field rendered as a dash when absent.
pub(crate) fn display_or_dash(value: Option<&String>) -> String {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

/// Optional date rendered as `DD-MM-YYYY` or a dash.
pub(crate) fn display_date_or_dash(value: Option<NaiveDate>) -> String {
    value
        .map(format_display_date)
        .unwrap_or_else(|| "-".to_string())
}

/// Backend timestamps arrive as `YYYY-MM-DD...` strings; only the date part
/// is shown in grids.
pub(crate) fn display_timestamp_or_dash(value: Option<&String>) -> String {
    value
        .and_then(|s| s.get(..10))
        .and_then(|s| crate::domain::types::parse_api_date(s).ok())
        .map(format_display_date)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_fallbacks() {
        assert_eq!(display_or_dash(None), "-");
        assert_eq!(display_or_dash(Some(&"  ".to_string())), "-");
        assert_eq!(display_or_dash(Some(&"Ada".to_string())), "Ada");
        assert_eq!(display_date_or_dash(None), "-");
    }

    #[test]
    fn timestamps_keep_only_the_date_part() {
        let stamp = "2024-03-07T10:15:00.000Z".to_string();
        assert_eq!(display_timestamp_or_dash(Some(&stamp)), "07-03-2024");
        assert_eq!(display_timestamp_or_dash(Some(&"junk".to_string())), "-");
    }
}
