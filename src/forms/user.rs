use serde::Deserialize;
use validator::Validate;

use crate::domain::user::UserPayload;
use crate::forms::{selection_opt, valid_mobile};

/// Drawer form for adding or editing a back-office user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "required"))]
    pub first_name: String,
    pub last_name: Option<String>,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(custom(function = valid_mobile))]
    pub mobile: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub department_id: String,
}

impl UserForm {
    #[must_use]
    pub fn to_payload(&self) -> UserPayload {
        UserPayload::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            Some(self.mobile.clone()),
            selection_opt(&self.role_id),
            selection_opt(&self.department_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_is_mandatory_for_users() {
        let form = UserForm {
            first_name: "Ada".into(),
            email: "ada@example.com".into(),
            mobile: String::new(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mobile"));
    }

    #[test]
    fn payload_sends_role_by_id_and_normalizes_email() {
        let form = UserForm {
            first_name: "Ada".into(),
            email: "Ada@Example.COM".into(),
            mobile: "9876543210".into(),
            role_id: "r1".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        let payload = form.to_payload();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.role.as_deref(), Some("r1"));
        assert!(payload.department.is_none());
    }
}
