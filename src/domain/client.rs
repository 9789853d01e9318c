use serde::{Deserialize, Serialize};

use crate::domain::types::Email;

/// Client record exactly as the backend ships it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct RawClient {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

/// Payload for `POST client`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewClient {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        client_name: String,
        email: Option<String>,
        mobile: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            client_name: client_name.trim().to_string(),
            email: email.and_then(|s| Email::new(s).ok()).map(Email::into_inner),
            mobile: mobile
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Payload for `PUT client/<id>`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateClient {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        client_name: String,
        email: Option<String>,
        mobile: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            client_name: client_name.trim().to_string(),
            email: email.and_then(|s| Email::new(s).ok()).map(Email::into_inner),
            mobile: mobile
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
