// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use cena_api::convert::{ingredient_collection, ingredient_href, IngredientModel};
use cena_api::dto::{parse_json_body, IngredientRequest};
use cena_api::params::{parse_ingredient_list_params, parse_path_id};
use cena_api::ApiError;
use cena_core::{ErrorCode, IngredientId};

use super::{created, hal, no_content, HttpResult};
use crate::security::{require_role, Caller, Role};
use crate::services::{CreateIngredient, DeleteIngredient};
use crate::AppState;

pub(crate) fn bulk_delete_disabled() -> ApiError {
    ApiError::new(
        ErrorCode::EntityNotFound,
        "bulk deletion is disabled",
        Vec::new(),
    )
}

pub(crate) async fn list_ingredients(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = parse_ingredient_list_params(&query);
    let ingredients = state
        .ingredient_consultation
        .list(params.name.as_deref());
    hal(StatusCode::OK, ingredient_collection(&ingredients))
}

pub(crate) async fn create_ingredient(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> HttpResult<Response> {
    require_role(&caller, Role::IngredientManager)?;
    let request: IngredientRequest = parse_json_body(&body)?;
    let input = request.validate()?;
    let ingredient = state
        .ingredient_management
        .create_ingredient(CreateIngredient {
            id: IngredientId::generate(),
            name: input.name,
            measurement_types: input.measurement_types,
        })?;
    Ok(created(
        &ingredient_href(&ingredient.id),
        IngredientModel::from(&ingredient),
    ))
}

pub(crate) async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let id: IngredientId = parse_path_id("ingredient", &id)?;
    let ingredient = state.ingredient_consultation.find(&id)?;
    Ok(hal(StatusCode::OK, IngredientModel::from(&ingredient)))
}

pub(crate) async fn delete_ingredient(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    require_role(&caller, Role::IngredientManager)?;
    let id: IngredientId = parse_path_id("ingredient", &id)?;
    state
        .ingredient_management
        .delete_ingredient(DeleteIngredient { id })?;
    Ok(no_content())
}

pub(crate) async fn delete_ingredients(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> HttpResult<Response> {
    if !state.api.allow_bulk_delete {
        return Err(bulk_delete_disabled().into());
    }
    require_role(&caller, Role::SuperAdministrator)?;
    state.ingredient_management.delete_ingredients()?;
    Ok(no_content())
}
