// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use cena_core::{Covers, Error, RecipeId, Result};
use cena_model::{DateRange, MealType, Menu, MenuId};
use cena_store::{MenuRepository, RecipeRepository};
use chrono::NaiveDate;
use tracing::info;

use super::CatalogLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMenu {
    pub owner: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub covers: Covers,
    pub main_course_recipe_ids: Vec<RecipeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMenus {
    pub owner: String,
    pub range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMenu {
    pub id: MenuId,
}

/// Menus are private: every operation is keyed by the owner.
pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
    recipes: Arc<dyn RecipeRepository>,
    catalog: CatalogLock,
}

impl MenuService {
    #[must_use]
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        recipes: Arc<dyn RecipeRepository>,
        catalog: CatalogLock,
    ) -> Self {
        Self {
            menus,
            recipes,
            catalog,
        }
    }

    /// The recipe check and the insert share the catalog lock with recipe deletion.
    pub fn create_menu(&self, command: CreateMenu) -> Result<Menu> {
        let _guard = self.catalog.acquire();
        let id = MenuId::new(command.owner, command.date, command.meal_type)?;
        if let Some(unknown) = command
            .main_course_recipe_ids
            .iter()
            .find(|recipe| !self.recipes.exists(recipe))
        {
            return Err(Error::MenuNotCreatableWithUnknownRecipe {
                recipe: unknown.to_string(),
            });
        }
        let menu = self.menus.insert(Menu::new(
            id,
            command.covers,
            command.main_course_recipe_ids,
        ))?;
        info!(menu_id = %menu.id, covers = %menu.covers, "menu created");
        Ok(menu)
    }

    #[must_use]
    pub fn get_menus(&self, query: &GetMenus) -> Vec<Menu> {
        self.menus
            .find_by_owner_and_date_range(&query.owner, &query.range)
    }

    pub fn get_menu(&self, id: &MenuId) -> Result<Menu> {
        self.menus.find_not_null_by_id(id)
    }

    pub fn delete_menu(&self, command: &DeleteMenu) -> Result<()> {
        let menu = self.menus.find_not_null_by_id(&command.id)?;
        self.menus.delete(&menu);
        info!(menu_id = %menu.id, "menu deleted");
        Ok(())
    }

    /// Returns how many of `owner`'s menus were removed.
    pub fn delete_menus(&self, owner: &str) -> usize {
        let count = self.menus.delete_by_owner(owner);
        info!(owner, count, "menus deleted");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateMenu, DeleteMenu, GetMenus, MenuService};
    use crate::security::{Principal, Role};
    use crate::services::{CatalogLock, DeleteRecipe, RecipeAuthoringService};
    use cena_core::{Covers, ErrorCode, Name, RecipeId, Servings};
    use cena_model::{DateRange, MealType, MenuId, Recipe};
    use cena_store::{
        InMemoryIngredientRepository, InMemoryMenuRepository, InMemoryRecipeRepository,
        Repository,
    };
    use chrono::NaiveDate;
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::thread;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).expect("date")
    }

    fn stew() -> Recipe {
        Recipe::new(
            RecipeId::generate(),
            Name::parse("stew").expect("name"),
            "Simmer.",
            "alice",
            Servings::default(),
            BTreeSet::new(),
        )
        .expect("recipe")
    }

    fn service_with_recipe() -> (MenuService, RecipeId) {
        let recipes = Arc::new(InMemoryRecipeRepository::new());
        let recipe = recipes.save(stew());
        let service = MenuService::new(
            Arc::new(InMemoryMenuRepository::new()),
            recipes,
            CatalogLock::new(),
        );
        (service, recipe.id)
    }

    fn create(owner: &str, date: NaiveDate, recipes: Vec<RecipeId>) -> CreateMenu {
        CreateMenu {
            owner: owner.to_string(),
            date,
            meal_type: MealType::Dinner,
            covers: Covers::new(2).expect("covers"),
            main_course_recipe_ids: recipes,
        }
    }

    #[test]
    fn unknown_recipe_blocks_creation_and_persists_nothing() {
        let (service, _) = service_with_recipe();
        let err = service
            .create_menu(create("alice", day(1), vec![RecipeId::generate()]))
            .expect_err("unknown recipe");
        assert_eq!(err.code(), ErrorCode::MenuNotCreatableWithUnknownRecipe);
        let range = DateRange::new(day(1), day(31)).expect("range");
        assert!(service
            .get_menus(&GetMenus {
                owner: "alice".to_string(),
                range,
            })
            .is_empty());
    }

    #[test]
    fn second_menu_for_the_same_slot_is_rejected() {
        let (service, recipe) = service_with_recipe();
        service
            .create_menu(create("alice", day(1), vec![recipe]))
            .expect("first");
        let err = service
            .create_menu(create("alice", day(1), vec![]))
            .expect_err("same slot");
        assert_eq!(err.code(), ErrorCode::AlreadyExistingEntity);
        service
            .create_menu(create("bob", day(1), vec![]))
            .expect("other owner, same slot");
    }

    #[test]
    fn menus_are_owner_scoped() {
        let (service, recipe) = service_with_recipe();
        service
            .create_menu(create("alice", day(2), vec![recipe]))
            .expect("alice");
        service
            .create_menu(create("bob", day(2), vec![recipe]))
            .expect("bob");
        let range = DateRange::new(day(1), day(3)).expect("range");
        let alice = service.get_menus(&GetMenus {
            owner: "alice".to_string(),
            range,
        });
        assert_eq!(alice.len(), 1);
        assert!(alice[0].is_owned_by("alice"));

        let bobs_id = MenuId::new("bob", day(2), MealType::Dinner).expect("id");
        let seen_by_alice = MenuId::new("alice", day(2), MealType::Lunch).expect("id");
        assert!(service.get_menu(&bobs_id).is_ok());
        assert_eq!(
            service
                .delete_menu(&DeleteMenu { id: seen_by_alice })
                .expect_err("absent")
                .code(),
            ErrorCode::EntityNotFound
        );
        assert_eq!(service.delete_menus("alice"), 1);
        assert!(service.get_menu(&bobs_id).is_ok());
    }

    #[test]
    fn menus_never_reference_a_recipe_deleted_concurrently() {
        let menus = Arc::new(InMemoryMenuRepository::new());
        let recipes = Arc::new(InMemoryRecipeRepository::new());
        let catalog = CatalogLock::new();
        let service = Arc::new(MenuService::new(
            menus.clone(),
            recipes.clone(),
            catalog.clone(),
        ));
        let authoring = Arc::new(RecipeAuthoringService::new(
            recipes.clone(),
            Arc::new(InMemoryIngredientRepository::new()),
            catalog,
        ));

        let mut handles = Vec::new();
        for d in 1..=16 {
            let recipe = recipes.save(stew()).id;
            let service = Arc::clone(&service);
            handles.push(thread::spawn(move || {
                let _ = service.create_menu(create("alice", day(d), vec![recipe]));
            }));
            let authoring = Arc::clone(&authoring);
            handles.push(thread::spawn(move || {
                authoring
                    .delete_recipe(DeleteRecipe {
                        recipe,
                        requester: Principal::new("alice", [Role::AuthenticatedUser]),
                    })
                    .expect("author deletes");
            }));
        }
        for handle in handles {
            handle.join().expect("thread");
        }

        assert_eq!(recipes.count(), 0);
        for menu in menus.find_all() {
            for recipe in &menu.main_course_recipe_ids {
                assert!(recipes.exists(recipe), "{} references {recipe}", menu.id);
            }
        }
    }
}
