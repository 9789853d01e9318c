//! User-input forms for the add/edit drawers.
//!
//! Validation here is deliberately shallow (presence, format, ranges); the
//! backend stays authoritative. Failed validation is flattened into a
//! per-field message map so the drawer can render messages inline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::{DISPLAY_DATE_FORMAT, MobileNumber};

pub mod asset_model;
pub mod client;
pub mod import;
pub mod tax;
pub mod user;

/// Flattens validator output into one message per field, first issue wins.
pub fn validation_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    for (field, issues) in errors.field_errors() {
        if let Some(issue) = issues.first() {
            let message = issue
                .message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| issue.code.to_string());
            messages.insert(field.to_string(), message);
        }
    }
    messages
}

/// Parses a `DD-MM-YYYY` drawer input; empty input is treated as unset.
pub fn parse_display_date_opt(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT).ok()
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Custom validator: optional `DD-MM-YYYY` date field.
pub fn valid_optional_display_date(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT).is_ok() {
        Ok(())
    } else {
        Err(field_error("date", "expected DD-MM-YYYY"))
    }
}

/// Custom validator: optional 10-digit mobile field.
pub fn valid_optional_mobile(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || MobileNumber::new(trimmed).is_ok() {
        Ok(())
    } else {
        Err(field_error("mobile", "must be a 10-digit number"))
    }
}

/// Custom validator: required 10-digit mobile field.
pub fn valid_mobile(value: &str) -> Result<(), ValidationError> {
    if MobileNumber::new(value.trim()).is_ok() {
        Ok(())
    } else {
        Err(field_error("mobile", "must be a 10-digit number"))
    }
}

/// Turns an optional dropdown selection into a foreign-key payload value.
pub fn selection_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
