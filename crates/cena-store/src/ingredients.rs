// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use cena_core::{IngredientId, Name};
use cena_model::Ingredient;

use crate::{Entity, InMemoryRepository, Repository};

impl Entity for Ingredient {
    type Id = IngredientId;

    const KIND: &'static str = "ingredient";

    fn id(&self) -> &IngredientId {
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

pub trait IngredientRepository: Repository<Ingredient> {
    fn find_by_name_ignore_case(&self, name: &Name) -> Option<Ingredient>;

    /// Case-insensitive substring match on the name.
    fn find_by_name_containing(&self, fragment: &str) -> Vec<Ingredient>;
}

pub type InMemoryIngredientRepository = InMemoryRepository<Ingredient>;

impl IngredientRepository for InMemoryRepository<Ingredient> {
    fn find_by_name_ignore_case(&self, name: &Name) -> Option<Ingredient> {
        self.read()
            .values()
            .find(|i| i.name.eq_ignore_case(name))
            .cloned()
    }

    fn find_by_name_containing(&self, fragment: &str) -> Vec<Ingredient> {
        let needle = fragment.trim().to_lowercase();
        self.select(|i| i.name.as_str().to_lowercase().contains(&needle))
    }
}
