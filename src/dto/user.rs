//! Grid projection and screen configuration for back-office users.

use serde_json::Value;

use crate::domain::types::Reference;
use crate::domain::user::RawUser;
use crate::dto::{EntityScreen, display_or_dash, display_timestamp_or_dash};
use crate::forms::user::UserForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub role: String,
    pub department: String,
    pub status: String,
    pub created_on: String,
}

impl From<RawUser> for UserRow {
    fn from(raw: RawUser) -> Self {
        let full_name = match &raw.last_name {
            Some(last) if !last.trim().is_empty() => format!("{} {}", raw.first_name, last.trim()),
            _ => raw.first_name.clone(),
        };

        Self {
            id: raw.id,
            full_name,
            email: raw.email,
            mobile: display_or_dash(raw.mobile.as_ref()),
            role: Reference::display(raw.role.as_ref()),
            department: Reference::display(raw.department.as_ref()),
            status: display_or_dash(raw.status.as_ref()),
            created_on: display_timestamp_or_dash(raw.created_at.as_ref()),
        }
    }
}

/// Screen configuration for the user listing.
pub struct UserScreen;

impl EntityScreen for UserScreen {
    type Raw = RawUser;
    type Row = UserRow;
    type CreateForm = UserForm;
    type UpdateForm = UserForm;

    fn endpoint() -> &'static str {
        "user"
    }

    fn label() -> &'static str {
        "User"
    }

    fn to_row(raw: Self::Raw) -> Self::Row {
        raw.into()
    }

    fn row_id(row: &Self::Row) -> &str {
        &row.id
    }

    fn search_haystack(row: &Self::Row) -> String {
        [
            row.full_name.as_str(),
            row.email.as_str(),
            row.mobile.as_str(),
            row.role.as_str(),
            row.department.as_str(),
            row.status.as_str(),
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
        &["first_name", "email", "mobile"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let raw = RawUser {
            id: "u1".into(),
            first_name: "Ada".into(),
            last_name: Some("Lovelace".into()),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let row = UserRow::from(raw);
        assert_eq!(row.full_name, "Ada Lovelace");
        assert_eq!(row.role, "-");
    }
}
