//! Grid projection and screen configuration for clients.

use serde_json::Value;

use crate::domain::client::RawClient;
use crate::dto::{EntityScreen, display_or_dash, display_timestamp_or_dash};
use crate::forms::client::ClientForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub status: String,
    pub created_by: String,
    pub created_on: String,
}

impl From<RawClient> for ClientRow {
    fn from(raw: RawClient) -> Self {
        Self {
            id: raw.id,
            client_name: raw.client_name,
            email: display_or_dash(raw.email.as_ref()),
            mobile: display_or_dash(raw.mobile.as_ref()),
            address: display_or_dash(raw.address.as_ref()),
            status: display_or_dash(raw.status.as_ref()),
            created_by: display_or_dash(raw.created_by.as_ref()),
            created_on: display_timestamp_or_dash(raw.created_at.as_ref()),
        }
    }
}

/// Screen configuration for the client listing.
pub struct ClientScreen;

impl EntityScreen for ClientScreen {
    type Raw = RawClient;
    type Row = ClientRow;
    type CreateForm = ClientForm;
    type UpdateForm = ClientForm;

    fn endpoint() -> &'static str {
        "client"
    }

    fn label() -> &'static str {
        "Client"
    }

    fn to_row(raw: Self::Raw) -> Self::Row {
        raw.into()
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }

    fn search_haystack(row: &Self::Row) -> String {
        [
            row.client_name.as_str(),
            row.email.as_str(),
            row.mobile.as_str(),
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

    fn csv_headers() -> &'static [&'static str] {
        &["client_name", "email", "mobile"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_substitutes_dashes_for_missing_contacts() {
        let raw = RawClient {
            id: "c1".into(),
            client_name: "Acme".into(),
            email: None,
            mobile: Some("9876543210".into()),
            address: None,
            status: Some("Active".into()),
            created_by: None,
            created_at: None,
        };
        let row = ClientRow::from(raw);
        assert_eq!(row.email, "-");
        assert_eq!(row.mobile, "9876543210");
        assert_eq!(row.created_on, "-");
    }
}
