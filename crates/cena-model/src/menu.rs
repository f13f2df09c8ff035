// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use cena_core::{Covers, Error, RecipeId, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `yyyy-MM-dd`, the only accepted calendar date format on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
        }
    }

    #[must_use]
    pub fn parse_ignore_case(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_value("meal type", "must be one of [BREAKFAST, LUNCH, DINNER]")
            })
    }
}

/// A menu is identified by who planned it, for which day and which meal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId {
    pub owner: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
}

impl MenuId {
    pub fn new(owner: impl Into<String>, date: NaiveDate, meal_type: MealType) -> Result<Self> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(Error::invalid_value("owner", "must not be blank"));
        }
        Ok(Self {
            owner,
            date,
            meal_type,
        })
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}-{}",
            self.owner,
            self.date.format(DATE_FORMAT),
            self.meal_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: MenuId,
    pub covers: Covers,
    pub main_course_recipe_ids: Vec<RecipeId>,
}

impl Menu {
    /// Duplicate recipe references are collapsed, first occurrence wins.
    #[must_use]
    pub fn new(id: MenuId, covers: Covers, main_course_recipe_ids: Vec<RecipeId>) -> Self {
        let mut unique = Vec::with_capacity(main_course_recipe_ids.len());
        for recipe in main_course_recipe_ids {
            if !unique.contains(&recipe) {
                unique.push(recipe);
            }
        }
        Self {
            id,
            covers,
            main_course_recipe_ids: unique,
        }
    }

    #[must_use]
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.id.owner == owner
    }
}

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    since: NaiveDate,
    until: NaiveDate,
}

impl DateRange {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self> {
        if since > until {
            return Err(Error::InvalidDateRange {
                since: since.format(DATE_FORMAT).to_string(),
                until: until.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self { since, until })
    }

    #[must_use]
    pub const fn since(&self) -> NaiveDate {
        self.since
    }

    #[must_use]
    pub const fn until(&self) -> NaiveDate {
        self.until
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since <= date && date <= self.until
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, MealType, Menu, MenuId};
    use cena_core::{Covers, ErrorCode, RecipeId};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).expect("date")
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange::new(day(1), day(3)).expect("range");
        assert!(range.contains(day(1)));
        assert!(range.contains(day(3)));
        assert!(!range.contains(day(4)));
    }

    #[test]
    fn reversed_date_range_is_rejected() {
        let err = DateRange::new(day(5), day(1)).expect_err("reversed");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn single_day_range_is_valid() {
        assert!(DateRange::new(day(2), day(2)).is_ok());
    }

    #[test]
    fn menu_owner_must_not_be_blank() {
        assert!(MenuId::new(" ", day(1), MealType::Lunch).is_err());
    }

    #[test]
    fn menu_collapses_duplicate_recipes() {
        let recipe = RecipeId::generate();
        let id = MenuId::new("alice", day(1), MealType::Dinner).expect("id");
        let menu = Menu::new(id, Covers::new(2).expect("covers"), vec![recipe, recipe]);
        assert_eq!(menu.main_course_recipe_ids, vec![recipe]);
        assert!(menu.is_owned_by("alice"));
    }

    #[test]
    fn meal_type_ignore_case_lookup() {
        assert_eq!(MealType::parse_ignore_case("lunch"), Some(MealType::Lunch));
        assert_eq!(MealType::parse_ignore_case("brunch"), None);
    }
}
