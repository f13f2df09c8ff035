// SPDX-License-Identifier: Apache-2.0

//! HAL representations of the aggregates.

use std::collections::BTreeMap;

use cena_core::{IngredientId, RecipeId};
use cena_model::{
    CourseType, Ingredient, MealType, MeasurementType, MeasurementUnit, Menu, MenuId, Quantity,
    Recipe, RecipeIngredient, DATE_FORMAT,
};
use serde::Serialize;

use crate::menu_id::format_menu_id;
use crate::{API_ROOT, INGREDIENTS_PATH, MENUS_PATH, RECIPES_PATH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkValue {
    One(Link),
    Many(Vec<Link>),
}

/// The `_links` object, keyed by relation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, LinkValue>);

impl Links {
    #[must_use]
    pub fn self_link(href: impl Into<String>) -> Self {
        Self::default().with("self", href)
    }

    #[must_use]
    pub fn with(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.0
            .insert(rel.to_string(), LinkValue::One(Link { href: href.into() }));
        self
    }

    #[must_use]
    pub fn with_many(mut self, rel: &str, hrefs: Vec<String>) -> Self {
        let links = hrefs.into_iter().map(|href| Link { href }).collect();
        self.0.insert(rel.to_string(), LinkValue::Many(links));
        self
    }

    #[must_use]
    pub fn href(&self, rel: &str) -> Option<&str> {
        match self.0.get(rel)? {
            LinkValue::One(link) => Some(&link.href),
            LinkValue::Many(_) => None,
        }
    }

    #[must_use]
    pub fn rels(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

#[must_use]
pub fn ingredient_href(id: &IngredientId) -> String {
    format!("{INGREDIENTS_PATH}/{id}")
}

#[must_use]
pub fn recipe_href(id: &RecipeId) -> String {
    format!("{RECIPES_PATH}/{id}")
}

#[must_use]
pub fn recipe_ingredients_href(recipe: &RecipeId) -> String {
    format!("{RECIPES_PATH}/{recipe}/ingredients")
}

#[must_use]
pub fn recipe_ingredient_href(recipe: &RecipeId, ingredient: &IngredientId) -> String {
    format!("{RECIPES_PATH}/{recipe}/ingredients/{ingredient}")
}

#[must_use]
pub fn menu_href(id: &MenuId) -> String {
    format!("{MENUS_PATH}/{}", format_menu_id(id))
}

/// `{"_embedded": {rel: [...]}, "_links": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<T>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    #[must_use]
    pub fn new(rel: &'static str, items: Vec<T>, self_href: impl Into<String>) -> Self {
        Self {
            embedded: BTreeMap::from([(rel, items)]),
            links: Links::self_link(self_href),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientModel {
    pub id: IngredientId,
    pub name: String,
    pub measurement_types: Vec<MeasurementType>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&Ingredient> for IngredientModel {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.to_string(),
            measurement_types: ingredient.measurement_types.clone(),
            links: Links::self_link(ingredient_href(&ingredient.id)),
        }
    }
}

#[must_use]
pub fn ingredient_collection(ingredients: &[Ingredient]) -> CollectionModel<IngredientModel> {
    CollectionModel::new(
        "ingredients",
        ingredients.iter().map(IngredientModel::from).collect(),
        INGREDIENTS_PATH,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityModel {
    pub value: f64,
    pub unit: MeasurementUnit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientModel {
    pub id: IngredientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<QuantityModel>,
    pub is_main_ingredient: bool,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl RecipeIngredientModel {
    #[must_use]
    pub fn new(recipe: &RecipeId, relation: &RecipeIngredient) -> Self {
        let quantity = match relation.quantity {
            Quantity::Undefined => None,
            Quantity::Measured { value, unit } => Some(QuantityModel { value, unit }),
        };
        Self {
            id: relation.ingredient,
            quantity,
            is_main_ingredient: relation.main,
            links: Links::self_link(recipe_ingredient_href(recipe, &relation.ingredient))
                .with("ingredient", ingredient_href(&relation.ingredient))
                .with("recipe", recipe_href(recipe)),
        }
    }
}

#[must_use]
pub fn recipe_ingredient_collection(
    recipe: &Recipe,
) -> CollectionModel<RecipeIngredientModel> {
    CollectionModel::new(
        "ingredients",
        recipe
            .ingredients
            .iter()
            .map(|ri| RecipeIngredientModel::new(&recipe.id, ri))
            .collect(),
        recipe_ingredients_href(&recipe.id),
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeModel {
    pub id: RecipeId,
    pub name: String,
    pub content: String,
    pub author: String,
    pub servings: u32,
    pub course_types: Vec<CourseType>,
    pub ingredients: Vec<RecipeIngredientModel>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&Recipe> for RecipeModel {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.to_string(),
            content: recipe.content.clone(),
            author: recipe.author.clone(),
            servings: recipe.servings.get(),
            course_types: recipe.course_types.iter().copied().collect(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ri| RecipeIngredientModel::new(&recipe.id, ri))
                .collect(),
            links: Links::self_link(recipe_href(&recipe.id))
                .with("ingredients", recipe_ingredients_href(&recipe.id)),
        }
    }
}

#[must_use]
pub fn recipe_collection(recipes: &[Recipe]) -> CollectionModel<RecipeModel> {
    CollectionModel::new(
        "recipes",
        recipes.iter().map(RecipeModel::from).collect(),
        RECIPES_PATH,
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuModel {
    pub id: String,
    pub date: String,
    pub meal_type: MealType,
    pub covers: u32,
    pub main_course_recipe_ids: Vec<RecipeId>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<&Menu> for MenuModel {
    fn from(menu: &Menu) -> Self {
        Self {
            id: format_menu_id(&menu.id),
            date: menu.id.date.format(DATE_FORMAT).to_string(),
            meal_type: menu.id.meal_type,
            covers: menu.covers.get(),
            main_course_recipe_ids: menu.main_course_recipe_ids.clone(),
            links: Links::self_link(menu_href(&menu.id)).with_many(
                "mainCourses",
                menu.main_course_recipe_ids.iter().map(recipe_href).collect(),
            ),
        }
    }
}

#[must_use]
pub fn menu_collection(menus: &[Menu]) -> CollectionModel<MenuModel> {
    CollectionModel::new("menus", menus.iter().map(MenuModel::from).collect(), MENUS_PATH)
}

/// `GET /api`: only the relations the caller may follow.
#[derive(Debug, Clone, Serialize)]
pub struct IndexModel {
    #[serde(rename = "_links")]
    pub links: Links,
}

impl IndexModel {
    #[must_use]
    pub fn new(relations: &[(&str, &str)]) -> Self {
        let links = relations
            .iter()
            .fold(Links::self_link(API_ROOT), |links, (rel, href)| {
                links.with(rel, *href)
            });
        Self { links }
    }
}
