// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use cena_api::convert::{
    recipe_collection, recipe_href, recipe_ingredient_collection, recipe_ingredient_href,
    RecipeIngredientModel, RecipeModel,
};
use cena_api::dto::{parse_json_body, NewRecipeIngredient, RecipeIngredientRequest, RecipeRequest};
use cena_api::params::{parse_path_id, parse_recipe_list_params};
use cena_core::{IngredientId, RecipeId};
use cena_model::RecipeIngredient;

use super::ingredients::bulk_delete_disabled;
use super::{created, hal, no_content, HttpResult};
use crate::security::{require_role, Caller, Role};
use crate::services::{
    AddIngredientToRecipe, CreateRecipe, DeleteRecipe, RemoveIngredientFromRecipe,
};
use crate::AppState;

fn relation(input: NewRecipeIngredient) -> RecipeIngredient {
    RecipeIngredient::new(input.ingredient, input.quantity, input.main)
}

pub(crate) async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> HttpResult<Response> {
    let params = parse_recipe_list_params(&query)?;
    let recipes = state.recipe_consultation.list(params.ingredient.as_ref());
    Ok(hal(StatusCode::OK, recipe_collection(&recipes)))
}

pub(crate) async fn create_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> HttpResult<Response> {
    let author = require_role(&caller, Role::AuthenticatedUser)?;
    let request: RecipeRequest = parse_json_body(&body)?;
    let input = request.validate()?;
    let recipe = state.recipe_authoring.create_recipe(CreateRecipe {
        id: RecipeId::generate(),
        name: input.name,
        content: input.content,
        author: author.name.clone(),
        servings: input.servings,
        course_types: input.course_types,
        ingredients: input.ingredients.into_iter().map(relation).collect(),
    })?;
    Ok(created(&recipe_href(&recipe.id), RecipeModel::from(&recipe)))
}

pub(crate) async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let id: RecipeId = parse_path_id("recipe", &id)?;
    let recipe = state.recipe_consultation.find(&id)?;
    Ok(hal(StatusCode::OK, RecipeModel::from(&recipe)))
}

pub(crate) async fn delete_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let requester = require_role(&caller, Role::AuthenticatedUser)?;
    let recipe: RecipeId = parse_path_id("recipe", &id)?;
    state.recipe_authoring.delete_recipe(DeleteRecipe {
        recipe,
        requester: requester.clone(),
    })?;
    Ok(no_content())
}

pub(crate) async fn delete_recipes(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> HttpResult<Response> {
    if !state.api.allow_bulk_delete {
        return Err(bulk_delete_disabled().into());
    }
    require_role(&caller, Role::SuperAdministrator)?;
    state.recipe_authoring.delete_recipes();
    Ok(no_content())
}

pub(crate) async fn list_recipe_ingredients(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let id: RecipeId = parse_path_id("recipe", &id)?;
    let recipe = state.recipe_consultation.find(&id)?;
    Ok(hal(StatusCode::OK, recipe_ingredient_collection(&recipe)))
}

pub(crate) async fn add_recipe_ingredient(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    body: Bytes,
) -> HttpResult<Response> {
    let requester = require_role(&caller, Role::AuthenticatedUser)?;
    let recipe: RecipeId = parse_path_id("recipe", &id)?;
    let request: RecipeIngredientRequest = parse_json_body(&body)?;
    let input = request.validate()?;
    let added = state
        .recipe_authoring
        .add_ingredient_to_recipe(AddIngredientToRecipe {
            recipe,
            relation: relation(input),
            requester: requester.clone(),
        })?;
    Ok(created(
        &recipe_ingredient_href(&recipe, &added.ingredient),
        RecipeIngredientModel::new(&recipe, &added),
    ))
}

pub(crate) async fn get_recipe_ingredient(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(String, String)>,
) -> HttpResult<Response> {
    let recipe: RecipeId = parse_path_id("recipe", &id)?;
    let ingredient: IngredientId = parse_path_id("ingredient", &ingredient_id)?;
    let found = state
        .recipe_consultation
        .find_ingredient(&recipe, &ingredient)?;
    Ok(hal(
        StatusCode::OK,
        RecipeIngredientModel::new(&recipe, &found),
    ))
}

pub(crate) async fn remove_recipe_ingredient(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path((id, ingredient_id)): Path<(String, String)>,
) -> HttpResult<Response> {
    let requester = require_role(&caller, Role::AuthenticatedUser)?;
    let recipe: RecipeId = parse_path_id("recipe", &id)?;
    let ingredient: IngredientId = parse_path_id("ingredient", &ingredient_id)?;
    state
        .recipe_authoring
        .remove_ingredient_from_recipe(RemoveIngredientFromRecipe {
            recipe,
            ingredient,
            requester: requester.clone(),
        })?;
    Ok(no_content())
}
