// SPDX-License-Identifier: Apache-2.0

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use cena_api::ApiError;
use chrono::Utc;
use tracing::{error, warn};

/// Turns an [`ApiError`] left in the response extensions into the JSON error body.
///
/// Failure responses the framework produced on its own (body limit, method routing,
/// extractor rejections) carry no [`ApiError`]; they get one derived from their status.
pub(crate) async fn error_rendering_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;
    let err = match response.extensions_mut().remove::<ApiError>() {
        Some(err) => err,
        None if is_bare_failure(&response) => {
            ApiError::for_rejected_status(response.status().as_u16())
        }
        None => return response,
    };

    let body = err.to_body(&path, Utc::now());
    if let Ok(status) = StatusCode::from_u16(body.status) {
        *response.status_mut() = status;
    }
    if body.status >= 500 {
        error!(code = body.code, path = %path, message = %err.message, "request failed");
    } else {
        warn!(
            code = body.code,
            status = body.status,
            path = %path,
            message = %err.message,
            "request rejected"
        );
    }

    match serde_json::to_vec(&body) {
        Ok(bytes) => {
            let headers = response.headers_mut();
            headers.remove(header::CONTENT_LENGTH);
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            *response.body_mut() = Body::from(bytes);
        }
        Err(e) => error!("cannot serialize error body: {e}"),
    }
    response
}

fn is_bare_failure(response: &Response) -> bool {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return false;
    }
    !response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
