// SPDX-License-Identifier: Apache-2.0

use cena_model::{MealType, MenuId, DATE_FORMAT};
use chrono::NaiveDate;

const DATE_LEN: usize = "yyyy-MM-dd".len();

/// Public form of a menu identity: `yyyy-MM-dd-MEAL_TYPE`. The owner never appears in URLs.
#[must_use]
pub fn format_menu_id(id: &MenuId) -> String {
    format!("{}-{}", id.date.format(DATE_FORMAT), id.meal_type)
}

/// Rebuilds the identity of one of `owner`'s menus. Any malformed input yields `None`.
#[must_use]
pub fn parse_menu_id(raw: &str, owner: &str) -> Option<MenuId> {
    let date = raw.get(..DATE_LEN)?;
    let meal = raw.get(DATE_LEN..)?.strip_prefix('-')?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let meal_type = MealType::parse_ignore_case(meal)?;
    MenuId::new(owner, date, meal_type).ok()
}
