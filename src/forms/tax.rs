use serde::Deserialize;
use validator::Validate;

use crate::domain::tax::TaxPayload;
use crate::forms::{parse_display_date_opt, valid_optional_display_date};

/// Drawer form for adding or editing a tax.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaxForm {
    #[validate(length(min = 1, message = "required"))]
    pub tax_name: String,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub percentage: f64,
    /// `DD-MM-YYYY`, as shown in the drawer.
    #[serde(default)]
    #[validate(custom(function = valid_optional_display_date))]
    pub effective_from: String,
}

impl TaxForm {
    /// The backend accepts one payload shape for both create and update.
    #[must_use]
    pub fn to_payload(&self) -> TaxPayload {
        TaxPayload::new(
            self.tax_name.clone(),
            self.percentage,
            parse_display_date_opt(&self.effective_from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_outside_range_is_rejected() {
        let form = TaxForm {
            tax_name: "GST".into(),
            percentage: 118.0,
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("percentage"));
    }

    #[test]
    fn payload_carries_api_shaped_date() {
        let form = TaxForm {
            tax_name: "GST".into(),
            percentage: 18.0,
            effective_from: "01-04-2024".into(),
        };
        assert!(form.validate().is_ok());
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(json["effective_from"], "2024-04-01");
        assert_eq!(json["percentage"], 18.0);
    }
}
