// SPDX-License-Identifier: Apache-2.0

//! Application services: one read side and one write side per aggregate.
//!
//! Every write that reads the ingredient catalog or the recipes before deciding
//! runs under the shared [`CatalogLock`], so the name uniqueness check, the
//! "no recipe uses this ingredient" check and the menu recipe-existence check
//! cannot interleave with a concurrent write.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

mod ingredients;
mod menus;
mod recipes;

pub use ingredients::{
    CreateIngredient, DeleteIngredient, IngredientConsultationService,
    IngredientManagementService,
};
pub use menus::{CreateMenu, DeleteMenu, GetMenus, MenuService};
pub use recipes::{
    AddIngredientToRecipe, CreateRecipe, DeleteRecipe, RecipeAuthoringService,
    RecipeConsultationService, RemoveIngredientFromRecipe,
};

#[derive(Debug, Clone, Default)]
pub struct CatalogLock(Arc<Mutex<()>>);

impl CatalogLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn acquire(&self) -> MutexGuard<'_, ()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
