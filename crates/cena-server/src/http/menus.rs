// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use cena_api::convert::{menu_collection, menu_href, MenuModel};
use cena_api::dto::{parse_json_body, MenuRequest};
use cena_api::params::parse_menu_list_params;
use cena_api::{parse_menu_id, ApiError};
use cena_model::MenuId;

use super::{created, hal, no_content, HttpResult};
use crate::security::{require_role, Caller, Principal, Role};
use crate::services::{CreateMenu, DeleteMenu, GetMenus};
use crate::AppState;

fn owned_menu_id(raw: &str, owner: &Principal) -> Result<MenuId, ApiError> {
    parse_menu_id(raw, &owner.name).ok_or_else(|| ApiError::not_found("menu", raw))
}

pub(crate) async fn list_menus(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Query(query): Query<BTreeMap<String, String>>,
) -> HttpResult<Response> {
    let owner = require_role(&caller, Role::AuthenticatedUser)?;
    let params = parse_menu_list_params(&query)?;
    let menus = state.menus.get_menus(&GetMenus {
        owner: owner.name.clone(),
        range: params.range,
    });
    Ok(hal(StatusCode::OK, menu_collection(&menus)))
}

pub(crate) async fn create_menu(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> HttpResult<Response> {
    let owner = require_role(&caller, Role::AuthenticatedUser)?;
    let request: MenuRequest = parse_json_body(&body)?;
    let input = request.validate()?;
    let menu = state.menus.create_menu(CreateMenu {
        owner: owner.name.clone(),
        date: input.date,
        meal_type: input.meal_type,
        covers: input.covers,
        main_course_recipe_ids: input.main_course_recipe_ids,
    })?;
    Ok(created(&menu_href(&menu.id), MenuModel::from(&menu)))
}

pub(crate) async fn delete_menus(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> HttpResult<Response> {
    let owner = require_role(&caller, Role::AuthenticatedUser)?;
    state.menus.delete_menus(&owner.name);
    Ok(no_content())
}

pub(crate) async fn get_menu(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let owner = require_role(&caller, Role::AuthenticatedUser)?;
    let id = owned_menu_id(&id, owner)?;
    let menu = state.menus.get_menu(&id)?;
    Ok(hal(StatusCode::OK, MenuModel::from(&menu)))
}

pub(crate) async fn delete_menu(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let owner = require_role(&caller, Role::AuthenticatedUser)?;
    let id = owned_menu_id(&id, owner)?;
    state.menus.delete_menu(&DeleteMenu { id })?;
    Ok(no_content())
}
