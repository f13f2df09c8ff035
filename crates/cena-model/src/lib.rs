// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Cena aggregates.
//!
//! Aggregates never hold each other: a recipe refers to its ingredients by
//! [`IngredientId`](cena_core::IngredientId) and a menu to its courses by
//! [`RecipeId`](cena_core::RecipeId). Cross references are resolved by the
//! application services through the repositories.

mod ingredient;
mod measurement;
mod menu;
mod recipe;

pub use ingredient::Ingredient;
pub use measurement::{MeasurementType, MeasurementUnit, Quantity};
pub use menu::{DateRange, MealType, Menu, MenuId, DATE_FORMAT};
pub use recipe::{CourseType, Recipe, RecipeIngredient};

pub const CRATE_NAME: &str = "cena-model";
