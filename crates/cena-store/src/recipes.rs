// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use cena_core::{IngredientId, RecipeId};
use cena_model::Recipe;

use crate::{Entity, InMemoryRepository, Repository};

impl Entity for Recipe {
    type Id = RecipeId;

    const KIND: &'static str = "recipe";

    fn id(&self) -> &RecipeId {
        &self.id
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        self.name
            .as_str()
            .to_lowercase()
            .cmp(&other.name.as_str().to_lowercase())
            .then_with(|| self.id.cmp(&other.id))
    }
}

pub trait RecipeRepository: Repository<Recipe> {
    fn find_by_ingredient(&self, ingredient: &IngredientId) -> Vec<Recipe>;
}

pub type InMemoryRecipeRepository = InMemoryRepository<Recipe>;

impl RecipeRepository for InMemoryRepository<Recipe> {
    fn find_by_ingredient(&self, ingredient: &IngredientId) -> Vec<Recipe> {
        self.select(|r| r.uses_ingredient(ingredient))
    }
}
