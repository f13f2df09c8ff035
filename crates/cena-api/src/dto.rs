// SPDX-License-Identifier: Apache-2.0

//! Request bodies.
//!
//! Every field is optional at the JSON level so that a single request reports
//! all of its invalid properties at once instead of failing on the first one.

use std::collections::BTreeSet;
use std::str::FromStr;

use cena_core::{Covers, Error, IngredientId, Name, RecipeId, Servings};
use cena_model::{CourseType, MealType, MeasurementType, MeasurementUnit, Quantity, DATE_FORMAT};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::{body_detail, ApiError};

const MUST_NOT_BE_NULL: &str = "must not be null";

pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::unreadable_body(&e.to_string()))
}

#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn push(&mut self, field: &str, reason: &str) {
        self.0.push(body_detail(field, reason));
    }

    fn reject(&mut self, field: &str, err: &Error) {
        let reason = match err {
            Error::InvalidValue { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        self.push(field, &reason);
    }

    fn required<'a, T>(&mut self, field: &str, value: Option<&'a T>) -> Option<&'a T> {
        if value.is_none() {
            self.push(field, MUST_NOT_BE_NULL);
        }
        value
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(ApiError::invalid_body(self.0)),
        }
    }
}

fn parse_enum<T: FromStr<Err = Error>>(
    violations: &mut Violations,
    field: &str,
    raw: &str,
) -> Option<T> {
    raw.parse::<T>()
        .map_err(|e| violations.reject(field, &e))
        .ok()
}

fn parse_count<T>(
    violations: &mut Violations,
    field: &str,
    raw: i64,
    build: fn(u32) -> cena_core::Result<T>,
) -> Option<T> {
    if raw <= 0 {
        violations.push(field, "must be greater than 0");
        return None;
    }
    let raw = u32::try_from(raw).unwrap_or(u32::MAX);
    build(raw).map_err(|e| violations.reject(field, &e)).ok()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequest {
    pub name: Option<String>,
    pub measurement_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    pub name: Name,
    pub measurement_types: Vec<MeasurementType>,
}

impl IngredientRequest {
    pub fn validate(&self) -> Result<NewIngredient, ApiError> {
        let mut violations = Violations::default();
        let name = violations
            .required("name", self.name.as_ref())
            .and_then(|raw| Name::parse(raw).map_err(|e| violations.reject("name", &e)).ok());
        let mut measurement_types = Vec::new();
        for (index, raw) in self.measurement_types.iter().flatten().enumerate() {
            let field = format!("measurementTypes[{index}]");
            if let Some(kind) = parse_enum(&mut violations, &field, raw) {
                measurement_types.push(kind);
            }
        }
        violations.finish(name.map(|name| NewIngredient {
            name,
            measurement_types,
        }))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantityRequest {
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// Body of `POST /api/recipes/{id}/ingredients`, also used inline in a recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientRequest {
    pub id: Option<String>,
    pub quantity: Option<QuantityRequest>,
    pub is_main_ingredient: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipeIngredient {
    pub ingredient: IngredientId,
    pub quantity: Quantity,
    pub main: bool,
}

impl RecipeIngredientRequest {
    pub fn validate(&self) -> Result<NewRecipeIngredient, ApiError> {
        let mut violations = Violations::default();
        let relation = self.collect(&mut violations, "");
        violations.finish(relation)
    }

    fn collect(&self, violations: &mut Violations, prefix: &str) -> Option<NewRecipeIngredient> {
        let id_field = format!("{prefix}id");
        let ingredient = violations
            .required(&id_field, self.id.as_ref())
            .and_then(|raw| match IngredientId::parse(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    violations.push(&id_field, "must be a UUID");
                    None
                }
            });
        let quantity = self.quantity(violations, &format!("{prefix}quantity"));
        Some(NewRecipeIngredient {
            ingredient: ingredient?,
            quantity: quantity?,
            main: self.is_main_ingredient.unwrap_or(false),
        })
    }

    fn quantity(&self, violations: &mut Violations, field: &str) -> Option<Quantity> {
        let Some(raw) = &self.quantity else {
            return Some(Quantity::Undefined);
        };
        let unit = match &raw.unit {
            Some(unit) => Some(parse_enum::<MeasurementUnit>(
                violations,
                &format!("{field}.unit"),
                unit,
            )?),
            None => None,
        };
        Quantity::new(raw.value, unit)
            .map_err(|e| violations.reject(field, &e))
            .ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub servings: Option<i64>,
    pub course_types: Option<Vec<String>>,
    pub ingredients: Option<Vec<RecipeIngredientRequest>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: Name,
    pub content: String,
    pub servings: Servings,
    pub course_types: BTreeSet<CourseType>,
    pub ingredients: Vec<NewRecipeIngredient>,
}

impl RecipeRequest {
    pub fn validate(&self) -> Result<NewRecipe, ApiError> {
        let mut violations = Violations::default();
        let name = violations
            .required("name", self.name.as_ref())
            .and_then(|raw| Name::parse(raw).map_err(|e| violations.reject("name", &e)).ok());
        let content = violations
            .required("content", self.content.as_ref())
            .and_then(|raw| {
                if raw.trim().is_empty() {
                    violations.push("content", "must not be blank");
                    None
                } else {
                    Some(raw.clone())
                }
            });
        let servings = match self.servings {
            None => Some(Servings::default()),
            Some(raw) => parse_count(&mut violations, "servings", raw, Servings::new),
        };
        let mut course_types = BTreeSet::new();
        for (index, raw) in self.course_types.iter().flatten().enumerate() {
            let field = format!("courseTypes[{index}]");
            if let Some(course) = parse_enum(&mut violations, &field, raw) {
                course_types.insert(course);
            }
        }
        let mut ingredients = Vec::new();
        let mut seen = BTreeSet::new();
        for (index, raw) in self.ingredients.iter().flatten().enumerate() {
            let prefix = format!("ingredients[{index}].");
            if let Some(relation) = raw.collect(&mut violations, &prefix) {
                if seen.insert(relation.ingredient) {
                    ingredients.push(relation);
                } else {
                    violations.push(&format!("{prefix}id"), "must not be listed twice");
                }
            }
        }
        let recipe = match (name, content, servings) {
            (Some(name), Some(content), Some(servings)) => Some(NewRecipe {
                name,
                content,
                servings,
                course_types,
                ingredients,
            }),
            _ => None,
        };
        violations.finish(recipe)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    pub date: Option<String>,
    pub meal_type: Option<String>,
    pub covers: Option<i64>,
    pub main_course_recipe_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub covers: Covers,
    pub main_course_recipe_ids: Vec<RecipeId>,
}

impl MenuRequest {
    pub fn validate(&self) -> Result<NewMenu, ApiError> {
        let mut violations = Violations::default();
        let date = violations
            .required("date", self.date.as_ref())
            .and_then(|raw| match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    violations.push("date", "must match yyyy-MM-dd");
                    None
                }
            });
        let meal_type = violations
            .required("mealType", self.meal_type.as_ref())
            .and_then(|raw| parse_enum::<MealType>(&mut violations, "mealType", raw));
        let covers = violations
            .required("covers", self.covers.as_ref())
            .and_then(|raw| parse_count(&mut violations, "covers", *raw, Covers::new));
        let mut main_course_recipe_ids = Vec::new();
        for (index, raw) in self.main_course_recipe_ids.iter().flatten().enumerate() {
            match RecipeId::parse(raw) {
                Ok(id) => main_course_recipe_ids.push(id),
                Err(_) => {
                    violations.push(&format!("mainCourseRecipeIds[{index}]"), "must be a UUID");
                }
            }
        }
        let menu = match (date, meal_type, covers) {
            (Some(date), Some(meal_type), Some(covers)) => Some(NewMenu {
                date,
                meal_type,
                covers,
                main_course_recipe_ids,
            }),
            _ => None,
        };
        violations.finish(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_json_body, IngredientRequest, MenuRequest, RecipeRequest};
    use cena_core::ErrorCode;
    use cena_model::{MeasurementType, Quantity};

    #[test]
    fn empty_recipe_reports_name_and_content() {
        let err = RecipeRequest::default().validate().expect_err("empty");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(
            err.details,
            vec![
                "Invalid request body property 'name': must not be null".to_string(),
                "Invalid request body property 'content': must not be null".to_string(),
            ]
        );
    }

    #[test]
    fn ingredient_body_is_normalized() {
        let request: IngredientRequest =
            parse_json_body(br#"{"name":" tomato ","measurementTypes":["WEIGHT","UNIT"]}"#)
                .expect("json");
        let ingredient = request.validate().expect("valid");
        assert_eq!(ingredient.name.as_str(), "Tomato");
        assert_eq!(
            ingredient.measurement_types,
            vec![MeasurementType::Weight, MeasurementType::Unit]
        );
    }

    #[test]
    fn unknown_enum_values_are_reported_by_position() {
        let request = IngredientRequest {
            name: Some("salt".to_string()),
            measurement_types: Some(vec!["WEIGHT".to_string(), "PINCH".to_string()]),
        };
        let err = request.validate().expect_err("bad type");
        assert_eq!(err.details.len(), 1);
        assert!(err.details[0].starts_with("Invalid request body property 'measurementTypes[1]'"));
    }

    #[test]
    fn inline_recipe_ingredients_are_validated() {
        let request: RecipeRequest = parse_json_body(
            br#"{"name":"soup","content":"boil","servings":0,
                 "ingredients":[{"id":"nope"},{"id":"3f2504e0-4f89-11d3-9a0c-0305e82c3301","quantity":{"value":2}}]}"#,
        )
        .expect("json");
        let err = request.validate().expect_err("invalid");
        assert_eq!(err.details.len(), 3);
        assert!(err.details[0].contains("'servings'"));
        assert!(err.details[1].contains("'ingredients[0].id'"));
        assert!(err.details[2].contains("'ingredients[1].quantity'"));
    }

    #[test]
    fn recipe_defaults_servings_and_undefined_quantity() {
        let request: RecipeRequest = parse_json_body(
            br#"{"name":"soup","content":"boil",
                 "ingredients":[{"id":"3f2504e0-4f89-11d3-9a0c-0305e82c3301","isMainIngredient":true}]}"#,
        )
        .expect("json");
        let recipe = request.validate().expect("valid");
        assert_eq!(recipe.servings.get(), 4);
        assert_eq!(recipe.ingredients[0].quantity, Quantity::Undefined);
        assert!(recipe.ingredients[0].main);
    }

    #[test]
    fn menu_requires_date_meal_type_and_covers() {
        let err = MenuRequest::default().validate().expect_err("empty");
        assert_eq!(err.details.len(), 3);

        let request: MenuRequest = parse_json_body(
            br#"{"date":"01/02/2020","mealType":"LUNCH","covers":2,"mainCourseRecipeIds":[]}"#,
        )
        .expect("json");
        let err = request.validate().expect_err("bad date");
        assert_eq!(
            err.details,
            vec!["Invalid request body property 'date': must match yyyy-MM-dd".to_string()]
        );
    }

    #[test]
    fn malformed_json_is_a_single_detail() {
        let err = parse_json_body::<IngredientRequest>(b"{not json").expect_err("syntax");
        assert_eq!(err.details.len(), 1);
        assert!(err.details[0].starts_with("Invalid request body: "));
    }
}
