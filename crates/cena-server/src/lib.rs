// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use cena_store::{
    IngredientRepository, InMemoryIngredientRepository, InMemoryMenuRepository,
    InMemoryRecipeRepository, MenuRepository, RecipeRepository,
};

mod config;
pub mod http;
mod middleware;
mod runtime;
pub mod security;
pub mod services;

pub use config::{
    load_users, validate_startup_config, ApiConfig, ConfigError, UserAccount, UsersFile,
    DEFAULT_BIND_ADDR,
};
pub use middleware::request_tracing::REQUEST_ID_HEADER;
pub use runtime::build_router;
pub use security::{Caller, CredentialStore, Principal, Role};
use services::{
    CatalogLock, IngredientConsultationService, IngredientManagementService, MenuService,
    RecipeAuthoringService, RecipeConsultationService,
};

pub const CRATE_NAME: &str = "cena-server";

/// Storage ports the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub ingredients: Arc<dyn IngredientRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub menus: Arc<dyn MenuRepository>,
}

impl Repositories {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            ingredients: Arc::new(InMemoryIngredientRepository::default()),
            recipes: Arc::new(InMemoryRecipeRepository::default()),
            menus: Arc::new(InMemoryMenuRepository::default()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub api: ApiConfig,
    pub credentials: Arc<CredentialStore>,
    pub request_id_seed: Arc<AtomicU64>,
    pub ingredient_consultation: Arc<IngredientConsultationService>,
    pub ingredient_management: Arc<IngredientManagementService>,
    pub recipe_consultation: Arc<RecipeConsultationService>,
    pub recipe_authoring: Arc<RecipeAuthoringService>,
    pub menus: Arc<MenuService>,
}

impl AppState {
    #[must_use]
    pub fn new(api: ApiConfig, accounts: &[UserAccount]) -> Self {
        Self::with_repositories(api, accounts, Repositories::in_memory())
    }

    #[must_use]
    pub fn with_repositories(
        api: ApiConfig,
        accounts: &[UserAccount],
        repositories: Repositories,
    ) -> Self {
        let catalog = CatalogLock::new();
        let Repositories {
            ingredients,
            recipes,
            menus,
        } = repositories;
        Self {
            api,
            credentials: Arc::new(CredentialStore::new(accounts)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            ingredient_consultation: Arc::new(IngredientConsultationService::new(
                Arc::clone(&ingredients),
            )),
            ingredient_management: Arc::new(IngredientManagementService::new(
                Arc::clone(&ingredients),
                Arc::clone(&recipes),
                catalog.clone(),
            )),
            recipe_consultation: Arc::new(RecipeConsultationService::new(Arc::clone(&recipes))),
            recipe_authoring: Arc::new(RecipeAuthoringService::new(
                Arc::clone(&recipes),
                ingredients,
                catalog.clone(),
            )),
            menus: Arc::new(MenuService::new(menus, recipes, catalog)),
        }
    }
}
