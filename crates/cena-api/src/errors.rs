// SPDX-License-Identifier: Apache-2.0

use cena_core::{Error, ErrorCode};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error_mapping::{map_error_code, reason_phrase};

/// An error on its way to the client, before the request path and clock are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Vec<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    /// One detail per offending body property.
    #[must_use]
    pub fn invalid_body(details: Vec<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, "Invalid request body", details)
    }

    #[must_use]
    pub fn unreadable_body(reason: &str) -> Self {
        Self::invalid_body(vec![format!("Invalid request body: {reason}")])
    }

    #[must_use]
    pub fn invalid_params(details: Vec<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, "Invalid request parameters", details)
    }

    #[must_use]
    pub fn invalid_param(name: &str, reason: &str) -> Self {
        Self::invalid_params(vec![param_detail(name, reason)])
    }

    #[must_use]
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::new(
            ErrorCode::EntityNotFound,
            format!("{kind} `{id}` not found"),
            Vec::new(),
        )
    }

    #[must_use]
    pub fn authentication_required() -> Self {
        Self::new(
            ErrorCode::AuthenticationRequired,
            "Full authentication is required to access this resource",
            Vec::new(),
        )
    }

    #[must_use]
    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::AccessDenied, reason, Vec::new())
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            ErrorCode::InternalError,
            "An unexpected error occurred",
            Vec::new(),
        )
    }

    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            "Request body exceeds the configured limit",
            Vec::new(),
        )
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            "Method is not supported by this resource",
            Vec::new(),
        )
    }

    /// Error for a failure status produced outside the handlers (router, extractors, limits).
    #[must_use]
    pub fn for_rejected_status(status: u16) -> Self {
        match status {
            404 => Self::new(ErrorCode::EntityNotFound, "No such resource", Vec::new()),
            405 => Self::method_not_allowed(),
            413 => Self::payload_too_large(),
            401 => Self::authentication_required(),
            s if s >= 500 => Self::internal(),
            _ => Self::new(ErrorCode::InvalidRequest, "Invalid request", Vec::new()),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        map_error_code(self.code)
    }

    #[must_use]
    pub fn to_body(&self, path: &str, now: DateTime<Utc>) -> ApiErrorBody {
        let status = self.status_code();
        ApiErrorBody {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            status,
            error: reason_phrase(status).to_string(),
            code: self.code.value(),
            message: self.message.clone(),
            path: path.to_string(),
            details: self.details.clone(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            // Internal failures keep their cause out of the response.
            Error::Internal(_) => Self::internal(),
            Error::InvalidValue { field, reason } => Self::new(
                err.code(),
                err.to_string(),
                vec![body_detail(field, reason)],
            ),
            _ => Self::new(err.code(), err.to_string(), Vec::new()),
        }
    }
}

#[must_use]
pub fn body_detail(field: &str, reason: &str) -> String {
    format!("Invalid request body property '{field}': {reason}")
}

#[must_use]
pub fn param_detail(name: &str, reason: &str) -> String {
    format!("Invalid request parameter '{name}': {reason}")
}

/// The JSON error document every failing endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub code: u32,
    pub message: String,
    pub path: String,
    pub details: Vec<String>,
}
