// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::sync::Arc;

use cena_core::{Error, IngredientId, Name, RecipeId, Result, Servings};
use cena_model::{CourseType, Ingredient, Recipe, RecipeIngredient};
use cena_store::{IngredientRepository, RecipeRepository};
use tracing::info;

use super::CatalogLock;
use crate::security::{Principal, Role};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecipe {
    pub id: RecipeId,
    pub name: Name,
    pub content: String,
    pub author: String,
    pub servings: Servings,
    pub course_types: BTreeSet<CourseType>,
    pub ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddIngredientToRecipe {
    pub recipe: RecipeId,
    pub relation: RecipeIngredient,
    pub requester: Principal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveIngredientFromRecipe {
    pub recipe: RecipeId,
    pub ingredient: IngredientId,
    pub requester: Principal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecipe {
    pub recipe: RecipeId,
    pub requester: Principal,
}

pub struct RecipeConsultationService {
    recipes: Arc<dyn RecipeRepository>,
}

impl RecipeConsultationService {
    #[must_use]
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    #[must_use]
    pub fn list(&self, ingredient_filter: Option<&IngredientId>) -> Vec<Recipe> {
        match ingredient_filter {
            Some(ingredient) => self.recipes.find_by_ingredient(ingredient),
            None => self.recipes.find_all(),
        }
    }

    pub fn find(&self, id: &RecipeId) -> Result<Recipe> {
        self.recipes.find_not_null_by_id(id)
    }

    pub fn list_ingredients(&self, id: &RecipeId) -> Result<Vec<RecipeIngredient>> {
        Ok(self.find(id)?.ingredients)
    }

    pub fn find_ingredient(
        &self,
        recipe: &RecipeId,
        ingredient: &IngredientId,
    ) -> Result<RecipeIngredient> {
        let recipe = self.find(recipe)?;
        recipe
            .ingredient(ingredient)
            .cloned()
            .ok_or_else(|| Error::IngredientNotRelatedToRecipe {
                recipe: recipe.id.to_string(),
                ingredient: ingredient.to_string(),
            })
    }
}

pub struct RecipeAuthoringService {
    recipes: Arc<dyn RecipeRepository>,
    ingredients: Arc<dyn IngredientRepository>,
    catalog: CatalogLock,
}

impl RecipeAuthoringService {
    #[must_use]
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        catalog: CatalogLock,
    ) -> Self {
        Self {
            recipes,
            ingredients,
            catalog,
        }
    }

    /// Every listed ingredient must exist and accept the given quantity.
    pub fn create_recipe(&self, command: CreateRecipe) -> Result<Recipe> {
        let _guard = self.catalog.acquire();
        let mut recipe = Recipe::new(
            command.id,
            command.name,
            command.content,
            command.author,
            command.servings,
            command.course_types,
        )?;
        for relation in command.ingredients {
            let ingredient = self.ingredients.find_by_id(&relation.ingredient).ok_or_else(|| {
                Error::RecipeNotCreatableWithUnknownIngredient {
                    ingredient: relation.ingredient.to_string(),
                }
            })?;
            check_quantity(&ingredient, &relation)?;
            recipe.add_ingredient(relation)?;
        }
        let recipe = self.recipes.insert(recipe)?;
        info!(
            recipe_id = %recipe.id,
            author = %recipe.author,
            ingredients = recipe.ingredients.len(),
            "recipe created"
        );
        Ok(recipe)
    }

    pub fn add_ingredient_to_recipe(
        &self,
        command: AddIngredientToRecipe,
    ) -> Result<RecipeIngredient> {
        let _guard = self.catalog.acquire();
        let mut recipe = self.recipes.find_not_null_by_id(&command.recipe)?;
        ensure_can_edit(&recipe, &command.requester)?;
        let ingredient = self
            .ingredients
            .find_not_null_by_id(&command.relation.ingredient)?;
        check_quantity(&ingredient, &command.relation)?;
        recipe.add_ingredient(command.relation.clone())?;
        self.recipes.save(recipe);
        info!(
            recipe_id = %command.recipe,
            ingredient_id = %command.relation.ingredient,
            "ingredient added to recipe"
        );
        Ok(command.relation)
    }

    pub fn remove_ingredient_from_recipe(&self, command: RemoveIngredientFromRecipe) -> Result<()> {
        let _guard = self.catalog.acquire();
        let mut recipe = self.recipes.find_not_null_by_id(&command.recipe)?;
        ensure_can_edit(&recipe, &command.requester)?;
        recipe.remove_ingredient(&command.ingredient)?;
        self.recipes.save(recipe);
        info!(
            recipe_id = %command.recipe,
            ingredient_id = %command.ingredient,
            "ingredient removed from recipe"
        );
        Ok(())
    }

    pub fn delete_recipe(&self, command: DeleteRecipe) -> Result<()> {
        let _guard = self.catalog.acquire();
        let recipe = self.recipes.find_not_null_by_id(&command.recipe)?;
        ensure_can_edit(&recipe, &command.requester)?;
        self.recipes.delete(&recipe);
        info!(recipe_id = %recipe.id, by = %command.requester.name, "recipe deleted");
        Ok(())
    }

    pub fn delete_recipes(&self) {
        let _guard = self.catalog.acquire();
        let count = self.recipes.count();
        self.recipes.delete_all();
        info!(count, "all recipes deleted");
    }
}

fn check_quantity(ingredient: &Ingredient, relation: &RecipeIngredient) -> Result<()> {
    if ingredient.accepts(&relation.quantity) {
        return Ok(());
    }
    Err(Error::InvalidMeasurementUnitForIngredient {
        ingredient: ingredient.name.to_string(),
        unit: relation
            .quantity
            .unit()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    })
}

fn ensure_can_edit(recipe: &Recipe, requester: &Principal) -> Result<()> {
    if recipe.is_authored_by(&requester.name) || requester.has_role(Role::SuperAdministrator) {
        return Ok(());
    }
    Err(Error::access_denied(format!(
        "only the author of recipe `{}` may change it",
        recipe.id
    )))
}

#[cfg(test)]
mod tests {
    use super::{
        AddIngredientToRecipe, CreateRecipe, DeleteRecipe, RecipeAuthoringService,
        RecipeConsultationService, RemoveIngredientFromRecipe,
    };
    use crate::security::{Principal, Role};
    use crate::services::CatalogLock;
    use cena_core::{ErrorCode, IngredientId, Name, RecipeId, Servings};
    use cena_model::{Ingredient, MeasurementType, MeasurementUnit, Quantity, RecipeIngredient};
    use cena_store::{InMemoryIngredientRepository, InMemoryRecipeRepository, Repository};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    struct Fixture {
        authoring: RecipeAuthoringService,
        consultation: RecipeConsultationService,
        flour: Ingredient,
    }

    fn fixture() -> Fixture {
        let ingredients = Arc::new(InMemoryIngredientRepository::new());
        let recipes = Arc::new(InMemoryRecipeRepository::new());
        let flour = ingredients.save(Ingredient::new(
            IngredientId::generate(),
            Name::parse("flour").expect("name"),
            vec![MeasurementType::Weight],
        ));
        Fixture {
            authoring: RecipeAuthoringService::new(
                recipes.clone(),
                ingredients,
                CatalogLock::new(),
            ),
            consultation: RecipeConsultationService::new(recipes),
            flour,
        }
    }

    fn create(author: &str, ingredients: Vec<RecipeIngredient>) -> CreateRecipe {
        CreateRecipe {
            id: RecipeId::generate(),
            name: Name::parse("bread").expect("name"),
            content: "Knead and bake.".to_string(),
            author: author.to_string(),
            servings: Servings::default(),
            course_types: BTreeSet::new(),
            ingredients,
        }
    }

    fn grams(value: f64) -> Quantity {
        Quantity::measured(value, MeasurementUnit::Gram).expect("grams")
    }

    #[test]
    fn unknown_inline_ingredient_blocks_creation() {
        let f = fixture();
        let unknown = RecipeIngredient::new(IngredientId::generate(), Quantity::Undefined, false);
        let err = f
            .authoring
            .create_recipe(create("alice", vec![unknown]))
            .expect_err("unknown");
        assert_eq!(err.code(), ErrorCode::RecipeNotCreatableWithUnknownIngredient);
        assert!(f.consultation.list(None).is_empty());
    }

    #[test]
    fn incompatible_unit_is_rejected_on_add() {
        let f = fixture();
        let recipe = f.authoring.create_recipe(create("alice", vec![])).expect("recipe");
        let litres = Quantity::measured(1.0, MeasurementUnit::Liter).expect("litres");
        let err = f
            .authoring
            .add_ingredient_to_recipe(AddIngredientToRecipe {
                recipe: recipe.id,
                relation: RecipeIngredient::new(f.flour.id, litres, true),
                requester: Principal::new("alice", [Role::AuthenticatedUser]),
            })
            .expect_err("liters of flour");
        assert_eq!(err.code(), ErrorCode::InvalidMeasurementUnitForIngredient);

        f.authoring
            .add_ingredient_to_recipe(AddIngredientToRecipe {
                recipe: recipe.id,
                relation: RecipeIngredient::new(f.flour.id, grams(500.0), true),
                requester: Principal::new("alice", [Role::AuthenticatedUser]),
            })
            .expect("grams of flour");
        let relations = f.consultation.list_ingredients(&recipe.id).expect("relations");
        assert_eq!(relations.len(), 1);
        assert_eq!(f.consultation.list(Some(&f.flour.id)).len(), 1);
    }

    #[test]
    fn only_author_or_super_administrator_may_edit() {
        let f = fixture();
        let recipe = f
            .authoring
            .create_recipe(create(
                "alice",
                vec![RecipeIngredient::new(f.flour.id, grams(200.0), true)],
            ))
            .expect("recipe");

        let err = f
            .authoring
            .remove_ingredient_from_recipe(RemoveIngredientFromRecipe {
                recipe: recipe.id,
                ingredient: f.flour.id,
                requester: Principal::new("bob", [Role::AuthenticatedUser]),
            })
            .expect_err("not the author");
        assert_eq!(err.code(), ErrorCode::AccessDenied);

        f.authoring
            .delete_recipe(DeleteRecipe {
                recipe: recipe.id,
                requester: Principal::new("root", [Role::SuperAdministrator]),
            })
            .expect("admin delete");
        assert_eq!(
            f.consultation.find(&recipe.id).expect_err("gone").code(),
            ErrorCode::EntityNotFound
        );
    }

    #[test]
    fn relation_lookup_distinguishes_missing_recipe_and_missing_relation() {
        let f = fixture();
        let recipe = f.authoring.create_recipe(create("alice", vec![])).expect("recipe");
        assert_eq!(
            f.consultation
                .find_ingredient(&recipe.id, &f.flour.id)
                .expect_err("unrelated")
                .code(),
            ErrorCode::IngredientNotRelatedToRecipe
        );
        assert_eq!(
            f.consultation
                .find_ingredient(&RecipeId::generate(), &f.flour.id)
                .expect_err("no recipe")
                .code(),
            ErrorCode::EntityNotFound
        );
    }
}
