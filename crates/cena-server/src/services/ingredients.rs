// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use cena_core::{Error, IngredientId, Name, Result};
use cena_model::{Ingredient, MeasurementType};
use cena_store::{IngredientRepository, RecipeRepository};
use tracing::info;

use super::CatalogLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIngredient {
    pub id: IngredientId,
    pub name: Name,
    pub measurement_types: Vec<MeasurementType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteIngredient {
    pub id: IngredientId,
}

pub struct IngredientConsultationService {
    ingredients: Arc<dyn IngredientRepository>,
}

impl IngredientConsultationService {
    #[must_use]
    pub fn new(ingredients: Arc<dyn IngredientRepository>) -> Self {
        Self { ingredients }
    }

    /// All ingredients, or those whose name contains `name_filter` regardless of case.
    #[must_use]
    pub fn list(&self, name_filter: Option<&str>) -> Vec<Ingredient> {
        match name_filter {
            Some(fragment) => self.ingredients.find_by_name_containing(fragment),
            None => self.ingredients.find_all(),
        }
    }

    pub fn find(&self, id: &IngredientId) -> Result<Ingredient> {
        self.ingredients.find_not_null_by_id(id)
    }
}

pub struct IngredientManagementService {
    ingredients: Arc<dyn IngredientRepository>,
    recipes: Arc<dyn RecipeRepository>,
    catalog: CatalogLock,
}

impl IngredientManagementService {
    #[must_use]
    pub fn new(
        ingredients: Arc<dyn IngredientRepository>,
        recipes: Arc<dyn RecipeRepository>,
        catalog: CatalogLock,
    ) -> Self {
        Self {
            ingredients,
            recipes,
            catalog,
        }
    }

    pub fn create_ingredient(&self, command: CreateIngredient) -> Result<Ingredient> {
        let _guard = self.catalog.acquire();
        if self
            .ingredients
            .find_by_name_ignore_case(&command.name)
            .is_some()
        {
            return Err(Error::IngredientNameAlreadyUsed {
                name: command.name.into_inner(),
            });
        }
        let ingredient = self.ingredients.insert(Ingredient::new(
            command.id,
            command.name,
            command.measurement_types,
        ))?;
        info!(ingredient_id = %ingredient.id, name = %ingredient.name, "ingredient created");
        Ok(ingredient)
    }

    pub fn delete_ingredient(&self, command: DeleteIngredient) -> Result<()> {
        let _guard = self.catalog.acquire();
        let ingredient = self.ingredients.find_not_null_by_id(&command.id)?;
        let related = self.recipes.find_by_ingredient(&ingredient.id);
        if !related.is_empty() {
            return Err(Error::IngredientNotDeletableRelatedToObject {
                ingredient: ingredient.id.to_string(),
                related: related.iter().map(|r| r.id.to_string()).collect(),
            });
        }
        self.ingredients.delete(&ingredient);
        info!(ingredient_id = %ingredient.id, "ingredient deleted");
        Ok(())
    }

    /// Clears the catalog. Refused while any recipe exists, since every recipe may refer to it.
    pub fn delete_ingredients(&self) -> Result<()> {
        let _guard = self.catalog.acquire();
        let recipes = self.recipes.find_all();
        if !recipes.is_empty() {
            return Err(Error::IngredientNotDeletableRelatedToObject {
                ingredient: "*".to_string(),
                related: recipes.iter().map(|r| r.id.to_string()).collect(),
            });
        }
        let count = self.ingredients.count();
        self.ingredients.delete_all();
        info!(count, "all ingredients deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateIngredient, DeleteIngredient, IngredientManagementService};
    use crate::services::CatalogLock;
    use cena_core::{ErrorCode, IngredientId, Name, RecipeId, Servings};
    use cena_model::{MeasurementType, Quantity, Recipe, RecipeIngredient};
    use cena_store::{InMemoryIngredientRepository, InMemoryRecipeRepository, Repository};
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::thread;

    fn service() -> (IngredientManagementService, Arc<InMemoryRecipeRepository>) {
        let recipes = Arc::new(InMemoryRecipeRepository::new());
        let service = IngredientManagementService::new(
            Arc::new(InMemoryIngredientRepository::new()),
            recipes.clone(),
            CatalogLock::new(),
        );
        (service, recipes)
    }

    fn create(name: &str) -> CreateIngredient {
        CreateIngredient {
            id: IngredientId::generate(),
            name: Name::parse(name).expect("name"),
            measurement_types: vec![MeasurementType::Unit],
        }
    }

    #[test]
    fn names_are_unique_ignoring_case() {
        let (service, _) = service();
        service.create_ingredient(create("Tomato")).expect("first");
        let err = service
            .create_ingredient(create("tOMATO"))
            .expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::IngredientNameAlreadyUsed);
    }

    #[test]
    fn referenced_ingredient_cannot_be_deleted() {
        let (service, recipes) = service();
        let tomato = service.create_ingredient(create("Tomato")).expect("tomato");
        let mut salad = Recipe::new(
            RecipeId::generate(),
            Name::parse("salad").expect("name"),
            "Mix.",
            "alice",
            Servings::default(),
            BTreeSet::new(),
        )
        .expect("recipe");
        salad
            .add_ingredient(RecipeIngredient::new(tomato.id, Quantity::Undefined, false))
            .expect("relation");
        recipes.save(salad);

        let err = service
            .delete_ingredient(DeleteIngredient { id: tomato.id })
            .expect_err("referenced");
        assert_eq!(err.code(), ErrorCode::IngredientNotDeletableRelatedToObject);
        assert_eq!(
            service.delete_ingredients().expect_err("bulk").code(),
            ErrorCode::IngredientNotDeletableRelatedToObject
        );
    }

    #[test]
    fn unreferenced_ingredient_is_deleted() {
        let (service, _) = service();
        let basil = service.create_ingredient(create("basil")).expect("basil");
        service
            .delete_ingredient(DeleteIngredient { id: basil.id })
            .expect("delete");
        assert_eq!(
            service
                .delete_ingredient(DeleteIngredient { id: basil.id })
                .expect_err("gone")
                .code(),
            ErrorCode::EntityNotFound
        );
    }

    #[test]
    fn concurrent_creations_of_one_name_admit_a_single_winner() {
        let (service, _) = service();
        let service = Arc::new(service);
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.create_ingredient(create("salt")).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
    }
}
