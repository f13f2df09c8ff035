// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::ErrorCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Domain and application failures. Translated to HTTP only at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    InvalidValue {
        field: &'static str,
        reason: String,
    },
    InvalidDateRange {
        since: String,
        until: String,
    },
    EntityNotFound {
        kind: &'static str,
        id: String,
    },
    AlreadyExistingEntity {
        kind: &'static str,
        id: String,
    },
    AccessDenied {
        reason: String,
    },
    IngredientNameAlreadyUsed {
        name: String,
    },
    IngredientNotDeletableRelatedToObject {
        ingredient: String,
        related: Vec<String>,
    },
    InvalidMeasurementUnitForIngredient {
        ingredient: String,
        unit: String,
    },
    IngredientNotRelatedToRecipe {
        recipe: String,
        ingredient: String,
    },
    IngredientAlreadyRelatedToRecipe {
        recipe: String,
        ingredient: String,
    },
    RecipeNotCreatableWithUnknownIngredient {
        ingredient: String,
    },
    MenuNotCreatableWithUnknownRecipe {
        recipe: String,
    },
    Internal(String),
}

impl Error {
    #[must_use]
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::EntityNotFound {
            kind,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn already_existing(kind: &'static str, id: impl ToString) -> Self {
        Self::AlreadyExistingEntity {
            kind,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidValue { .. } | Self::InvalidDateRange { .. } => ErrorCode::InvalidRequest,
            Self::EntityNotFound { .. } => ErrorCode::EntityNotFound,
            Self::AlreadyExistingEntity { .. } => ErrorCode::AlreadyExistingEntity,
            Self::AccessDenied { .. } => ErrorCode::AccessDenied,
            Self::IngredientNameAlreadyUsed { .. } => ErrorCode::IngredientNameAlreadyUsed,
            Self::IngredientNotDeletableRelatedToObject { .. } => {
                ErrorCode::IngredientNotDeletableRelatedToObject
            }
            Self::InvalidMeasurementUnitForIngredient { .. } => {
                ErrorCode::InvalidMeasurementUnitForIngredient
            }
            Self::IngredientNotRelatedToRecipe { .. } => ErrorCode::IngredientNotRelatedToRecipe,
            Self::IngredientAlreadyRelatedToRecipe { .. } => {
                ErrorCode::IngredientAlreadyRelatedToRecipe
            }
            Self::RecipeNotCreatableWithUnknownIngredient { .. } => {
                ErrorCode::RecipeNotCreatableWithUnknownIngredient
            }
            Self::MenuNotCreatableWithUnknownRecipe { .. } => {
                ErrorCode::MenuNotCreatableWithUnknownRecipe
            }
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::InvalidDateRange { since, until } => {
                write!(f, "date range is invalid: since {since} is after until {until}")
            }
            Self::EntityNotFound { kind, id } => write!(f, "{kind} `{id}` not found"),
            Self::AlreadyExistingEntity { kind, id } => write!(f, "{kind} `{id}` already exists"),
            Self::AccessDenied { reason } => write!(f, "access denied: {reason}"),
            Self::IngredientNameAlreadyUsed { name } => {
                write!(f, "an ingredient named `{name}` already exists")
            }
            Self::IngredientNotDeletableRelatedToObject {
                ingredient,
                related,
            } => write!(
                f,
                "ingredient `{ingredient}` is used by {} recipe(s) and cannot be deleted",
                related.len()
            ),
            Self::InvalidMeasurementUnitForIngredient { ingredient, unit } => write!(
                f,
                "measurement unit {unit} is not allowed for ingredient `{ingredient}`"
            ),
            Self::IngredientNotRelatedToRecipe { recipe, ingredient } => write!(
                f,
                "ingredient `{ingredient}` is not part of recipe `{recipe}`"
            ),
            Self::IngredientAlreadyRelatedToRecipe { recipe, ingredient } => write!(
                f,
                "ingredient `{ingredient}` is already part of recipe `{recipe}`"
            ),
            Self::RecipeNotCreatableWithUnknownIngredient { ingredient } => write!(
                f,
                "recipe references unknown ingredient `{ingredient}`"
            ),
            Self::MenuNotCreatableWithUnknownRecipe { recipe } => {
                write!(f, "menu references unknown recipe `{recipe}`")
            }
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::ErrorCode;

    #[test]
    fn date_range_errors_are_invalid_requests() {
        let err = Error::InvalidDateRange {
            since: "2020-02-01".to_string(),
            until: "2020-01-01".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(err.to_string().contains("2020-02-01"));
    }

    #[test]
    fn not_found_message_names_the_entity() {
        let err = Error::not_found("ingredient", "abc");
        assert_eq!(err.code().value(), 102_000);
        assert_eq!(err.to_string(), "ingredient `abc` not found");
    }
}
