use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::forms::valid_optional_mobile;

/// Drawer form for adding or editing a client. Optional inputs arrive as
/// `None` when the field was left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "required"))]
    pub client_name: String,
    /// Optional, but must be well-formed when present.
    #[validate(email(message = "invalid email"))]
    pub email: Option<String>,
    #[validate(custom(function = valid_optional_mobile))]
    pub mobile: Option<String>,
    pub address: Option<String>,
}

impl ClientForm {
    #[must_use]
    pub fn to_new(&self) -> NewClient {
        NewClient::new(
            self.client_name.clone(),
            self.email.clone(),
            self.mobile.clone(),
            self.address.clone(),
        )
    }

    #[must_use]
    pub fn to_update(&self) -> UpdateClient {
        UpdateClient::new(
            self.client_name.clone(),
            self.email.clone(),
            self.mobile.clone(),
            self.address.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_must_be_ten_digits_when_present() {
        let form = ClientForm {
            client_name: "Acme".into(),
            email: Some("ops@acme.example".into()),
            mobile: Some("12345".into()),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mobile"));
    }

    #[test]
    fn absent_optional_fields_pass_validation() {
        let form = ClientForm {
            client_name: "Acme".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_optional_fields_are_omitted_from_payload() {
        let form = ClientForm {
            client_name: "  Acme  ".into(),
            email: Some("ops@acme.example".into()),
            mobile: Some("   ".into()),
            ..Default::default()
        };
        let payload = form.to_new();
        assert_eq!(payload.client_name, "Acme");
        assert!(payload.mobile.is_none());
        assert!(payload.address.is_none());
    }
}
