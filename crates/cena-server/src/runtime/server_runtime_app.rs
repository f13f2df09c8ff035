// SPDX-License-Identifier: Apache-2.0

use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;

use crate::http::{handlers, ingredients, menus, recipes};
use crate::middleware::error_rendering::error_rendering_middleware;
use crate::middleware::request_tracing::request_tracing_middleware;
use crate::security::authentication_middleware;
use crate::AppState;

/// Layers run outermost first: tracing, error rendering, authentication.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::index_handler))
        .route("/api/openapi.json", get(handlers::openapi_handler))
        .route(
            "/api/ingredients",
            get(ingredients::list_ingredients)
                .post(ingredients::create_ingredient)
                .delete(ingredients::delete_ingredients),
        )
        .route(
            "/api/ingredients/:id",
            get(ingredients::get_ingredient).delete(ingredients::delete_ingredient),
        )
        .route(
            "/api/recipes",
            get(recipes::list_recipes)
                .post(recipes::create_recipe)
                .delete(recipes::delete_recipes),
        )
        .route(
            "/api/recipes/:id",
            get(recipes::get_recipe).delete(recipes::delete_recipe),
        )
        .route(
            "/api/recipes/:id/ingredients",
            get(recipes::list_recipe_ingredients).post(recipes::add_recipe_ingredient),
        )
        .route(
            "/api/recipes/:id/ingredients/:ingredientId",
            get(recipes::get_recipe_ingredient).delete(recipes::remove_recipe_ingredient),
        )
        .route(
            "/api/menus",
            get(menus::list_menus)
                .post(menus::create_menu)
                .delete(menus::delete_menus),
        )
        .route(
            "/api/menus/:id",
            get(menus::get_menu).delete(menus::delete_menu),
        )
        .route("/actuator/health", get(handlers::health_handler))
        .route("/actuator/info", get(handlers::info_handler))
        .fallback(handlers::not_found_handler)
        .layer(from_fn_with_state(state.clone(), authentication_middleware))
        .layer(from_fn(error_rendering_middleware))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
