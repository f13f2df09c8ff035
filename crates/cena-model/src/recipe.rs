// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use cena_core::{Error, IngredientId, Name, RecipeId, Result, Servings};
use serde::{Deserialize, Serialize};

use crate::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Starter,
    MainCourse,
    Dessert,
}

impl CourseType {
    pub const ALL: [Self; 3] = [Self::Starter, Self::MainCourse, Self::Dessert];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "STARTER",
            Self::MainCourse => "MAIN_COURSE",
            Self::Dessert => "DESSERT",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_value("course type", "must be one of [STARTER, MAIN_COURSE, DESSERT]")
            })
    }
}

/// Link between a recipe and one of its ingredients.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient: IngredientId,
    pub quantity: Quantity,
    pub main: bool,
}

impl RecipeIngredient {
    #[must_use]
    pub const fn new(ingredient: IngredientId, quantity: Quantity, main: bool) -> Self {
        Self {
            ingredient,
            quantity,
            main,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: Name,
    pub content: String,
    pub author: String,
    pub servings: Servings,
    pub course_types: BTreeSet<CourseType>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        name: Name,
        content: impl Into<String>,
        author: impl Into<String>,
        servings: Servings,
        course_types: BTreeSet<CourseType>,
    ) -> Result<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(Error::invalid_value("content", "must not be blank"));
        }
        let author = author.into();
        if author.trim().is_empty() {
            return Err(Error::invalid_value("author", "must not be blank"));
        }
        Ok(Self {
            id,
            name,
            content,
            author,
            servings,
            course_types,
            ingredients: Vec::new(),
        })
    }

    #[must_use]
    pub fn is_authored_by(&self, user: &str) -> bool {
        self.author == user
    }

    #[must_use]
    pub fn ingredient(&self, ingredient: &IngredientId) -> Option<&RecipeIngredient> {
        self.ingredients.iter().find(|ri| &ri.ingredient == ingredient)
    }

    #[must_use]
    pub fn uses_ingredient(&self, ingredient: &IngredientId) -> bool {
        self.ingredient(ingredient).is_some()
    }

    pub fn add_ingredient(&mut self, relation: RecipeIngredient) -> Result<()> {
        if self.uses_ingredient(&relation.ingredient) {
            return Err(Error::IngredientAlreadyRelatedToRecipe {
                recipe: self.id.to_string(),
                ingredient: relation.ingredient.to_string(),
            });
        }
        self.ingredients.push(relation);
        Ok(())
    }

    pub fn remove_ingredient(&mut self, ingredient: &IngredientId) -> Result<RecipeIngredient> {
        let position = self
            .ingredients
            .iter()
            .position(|ri| &ri.ingredient == ingredient)
            .ok_or_else(|| Error::IngredientNotRelatedToRecipe {
                recipe: self.id.to_string(),
                ingredient: ingredient.to_string(),
            })?;
        Ok(self.ingredients.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::{CourseType, Recipe, RecipeIngredient};
    use crate::Quantity;
    use cena_core::{ErrorCode, IngredientId, Name, RecipeId, Servings};
    use std::collections::BTreeSet;

    fn recipe() -> Recipe {
        Recipe::new(
            RecipeId::generate(),
            Name::parse("ratatouille").expect("name"),
            "Slice, stew, serve.",
            "remy",
            Servings::default(),
            BTreeSet::from([CourseType::MainCourse]),
        )
        .expect("recipe")
    }

    #[test]
    fn blank_content_is_rejected() {
        let err = Recipe::new(
            RecipeId::generate(),
            Name::parse("soup").expect("name"),
            "  ",
            "remy",
            Servings::default(),
            BTreeSet::new(),
        )
        .expect_err("blank content");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn ingredient_is_added_once() {
        let mut r = recipe();
        let tomato = IngredientId::generate();
        r.add_ingredient(RecipeIngredient::new(tomato, Quantity::Undefined, true))
            .expect("first add");
        let err = r
            .add_ingredient(RecipeIngredient::new(tomato, Quantity::Undefined, false))
            .expect_err("second add");
        assert_eq!(err.code(), ErrorCode::IngredientAlreadyRelatedToRecipe);
        assert_eq!(r.ingredients.len(), 1);
        assert!(r.ingredient(&tomato).expect("relation").main);
    }

    #[test]
    fn removing_unrelated_ingredient_fails() {
        let mut r = recipe();
        let err = r
            .remove_ingredient(&IngredientId::generate())
            .expect_err("unrelated");
        assert_eq!(err.code(), ErrorCode::IngredientNotRelatedToRecipe);
    }

    #[test]
    fn course_type_text_roundtrip() {
        for course in CourseType::ALL {
            assert_eq!(course.as_str().parse::<CourseType>().ok(), Some(course));
        }
        assert!("ENTREE".parse::<CourseType>().is_err());
    }
}
