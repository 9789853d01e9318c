//! The screen-side service layer: list controller, filter panel, drawer and
//! debounce state machines, and the notice (toast) model.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::import::ImportFileError;

pub mod controller;
pub mod debounce;
pub mod drawer;
pub mod filter;

/// Failures of one user action. Everything here ends up as either an inline
/// field message or a [`Notice`]; nothing propagates past the controller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client-side validation blocked the submission.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    ImportFile(#[from] ImportFileError),

    /// A payload failed to serialize before it ever reached the wire.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A user-visible notification queued by the controller and drained by the
/// embedding UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// CSS-style alert class for a notice level.
pub fn alert_level_to_str(level: &NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Error => "danger",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
    }
}
