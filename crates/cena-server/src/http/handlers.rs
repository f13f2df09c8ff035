// SPDX-License-Identifier: Apache-2.0

use axum::extract::Extension;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::Json;
use cena_api::{
    openapi_v1_spec, ApiError, IndexModel, HEALTH_PATH, INFO_PATH, INGREDIENTS_PATH, MENUS_PATH,
    OPENAPI_PATH, RECIPES_PATH,
};
use serde_json::{json, Value};

use super::{hal, HttpError, HttpResult};
use crate::security::{require_role, Caller, Role};

pub(crate) async fn index_handler(Extension(caller): Extension<Caller>) -> Response {
    let mut relations = vec![
        ("ingredients", INGREDIENTS_PATH),
        ("recipes", RECIPES_PATH),
        ("health", HEALTH_PATH),
        ("openapi", OPENAPI_PATH),
    ];
    if caller.has_role(Role::AuthenticatedUser) {
        relations.push(("menus", MENUS_PATH));
    }
    if caller.has_role(Role::Actuator) {
        relations.push(("info", INFO_PATH));
    }
    hal(StatusCode::OK, IndexModel::new(&relations))
}

pub(crate) async fn health_handler() -> Json<Value> {
    Json(json!({"status": "UP"}))
}

pub(crate) async fn info_handler(Extension(caller): Extension<Caller>) -> HttpResult<Json<Value>> {
    require_role(&caller, Role::Actuator)?;
    Ok(Json(json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

pub(crate) async fn openapi_handler() -> Json<Value> {
    Json(openapi_v1_spec())
}

pub(crate) async fn not_found_handler(uri: Uri) -> HttpError {
    HttpError(ApiError::not_found("resource", uri.path()))
}
