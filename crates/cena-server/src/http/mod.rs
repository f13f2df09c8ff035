// SPDX-License-Identifier: Apache-2.0

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cena_api::ApiError;
use serde::Serialize;

pub(crate) mod handlers;
pub(crate) mod ingredients;
pub(crate) mod menus;
pub(crate) mod recipes;

pub const HAL_JSON: &str = "application/hal+json";

/// Handler failure. The body is rendered later by the error rendering middleware,
/// which knows the request path; this only carries the error and the status.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<cena_core::Error> for HttpError {
    fn from(err: cena_core::Error) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = status.into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

pub(crate) type HttpResult<T> = Result<T, HttpError>;

pub(crate) fn hal<T: Serialize>(status: StatusCode, model: T) -> Response {
    (status, [(header::CONTENT_TYPE, HAL_JSON)], Json(model)).into_response()
}

pub(crate) fn created<T: Serialize>(location: &str, model: T) -> Response {
    let mut response = hal(StatusCode::CREATED, model);
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

pub(crate) fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
