// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::str::FromStr;

use cena_core::{ErrorCode, IngredientId};
use cena_model::{DateRange, DATE_FORMAT};
use chrono::NaiveDate;

use crate::errors::{param_detail, ApiError};

pub const FILTER_NAME: &str = "filter[name]";
pub const FILTER_INGREDIENT: &str = "filter[ingredient]";
pub const FILTER_DATE_SINCE: &str = "filter[date][since]";
pub const FILTER_DATE_UNTIL: &str = "filter[date][until]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientListParams {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeListParams {
    pub ingredient: Option<IngredientId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuListParams {
    pub range: DateRange,
}

fn non_blank<'a>(query: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

#[must_use]
pub fn parse_ingredient_list_params(query: &BTreeMap<String, String>) -> IngredientListParams {
    IngredientListParams {
        name: non_blank(query, FILTER_NAME).map(str::to_string),
    }
}

pub fn parse_recipe_list_params(
    query: &BTreeMap<String, String>,
) -> Result<RecipeListParams, ApiError> {
    let ingredient = non_blank(query, FILTER_INGREDIENT)
        .map(|raw| {
            IngredientId::parse(raw)
                .map_err(|_| ApiError::invalid_param(FILTER_INGREDIENT, "must be a UUID"))
        })
        .transpose()?;
    Ok(RecipeListParams { ingredient })
}

pub fn parse_menu_list_params(query: &BTreeMap<String, String>) -> Result<MenuListParams, ApiError> {
    let mut details = Vec::new();
    let mut date = |name: &str| -> Option<NaiveDate> {
        let Some(raw) = non_blank(query, name) else {
            details.push(param_detail(name, "must not be null"));
            return None;
        };
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| details.push(param_detail(name, "must match yyyy-MM-dd")))
            .ok()
    };
    let since = date(FILTER_DATE_SINCE);
    let until = date(FILTER_DATE_UNTIL);
    let (Some(since), Some(until)) = (since, until) else {
        return Err(ApiError::invalid_params(details));
    };
    let range = DateRange::new(since, until).map_err(|e| {
        ApiError::new(
            ErrorCode::InvalidRequest,
            e.to_string(),
            vec![param_detail(
                FILTER_DATE_SINCE,
                "must be before or equal to filter[date][until]",
            )],
        )
    })?;
    Ok(MenuListParams { range })
}

/// Path identifiers that do not parse name nothing, so they are reported as absent.
pub fn parse_path_id<T: FromStr>(kind: &str, raw: &str) -> Result<T, ApiError> {
    raw.parse::<T>()
        .map_err(|_| ApiError::not_found(kind, raw))
}

#[cfg(test)]
mod tests {
    use super::{parse_menu_list_params, parse_path_id, FILTER_DATE_SINCE, FILTER_DATE_UNTIL};
    use cena_core::{ErrorCode, RecipeId};
    use std::collections::BTreeMap;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn menu_range_requires_both_bounds() {
        let err = parse_menu_list_params(&query(&[(FILTER_DATE_SINCE, "2020-01-01")]))
            .expect_err("missing until");
        assert_eq!(
            err.details,
            vec!["Invalid request parameter 'filter[date][until]': must not be null".to_string()]
        );
    }

    #[test]
    fn reversed_menu_range_is_an_invalid_request() {
        let err = parse_menu_list_params(&query(&[
            (FILTER_DATE_SINCE, "2020-02-01"),
            (FILTER_DATE_UNTIL, "2020-01-01"),
        ]))
        .expect_err("reversed");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn unparseable_path_ids_are_not_found() {
        let err = parse_path_id::<RecipeId>("recipe", "banana").expect_err("not a uuid");
        assert_eq!(err.code, ErrorCode::EntityNotFound);
    }
}
