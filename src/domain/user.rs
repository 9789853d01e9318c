use serde::{Deserialize, Serialize};

use crate::domain::types::Reference;

/// Back-office user record exactly as the backend ships it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct RawUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub mobile: Option<String>,
    pub role: Option<Reference>,
    pub department: Option<Reference>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for `POST user` / `PUT user/<id>`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserPayload {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserPayload {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: Option<String>,
        email: String,
        mobile: Option<String>,
        role: Option<String>,
        department: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email: email.trim().to_lowercase(),
            mobile: mobile
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            role: role.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            department: department
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
