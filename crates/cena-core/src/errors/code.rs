// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Stable numeric error codes exposed to clients.
///
/// General errors live in the `100000` range, recipe catalog errors in `900000`
/// and menu errors in `901000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    InternalError,
    InvalidRequest,
    EntityNotFound,
    AlreadyExistingEntity,
    AuthenticationRequired,
    AccessDenied,
    PayloadTooLarge,
    MethodNotAllowed,
    IngredientNameAlreadyUsed,
    IngredientNotDeletableRelatedToObject,
    InvalidMeasurementUnitForIngredient,
    IngredientNotRelatedToRecipe,
    IngredientAlreadyRelatedToRecipe,
    RecipeNotCreatableWithUnknownIngredient,
    MenuNotCreatableWithUnknownRecipe,
}

pub const ERROR_CODES: [ErrorCode; 15] = [
    ErrorCode::InternalError,
    ErrorCode::InvalidRequest,
    ErrorCode::EntityNotFound,
    ErrorCode::AlreadyExistingEntity,
    ErrorCode::AuthenticationRequired,
    ErrorCode::AccessDenied,
    ErrorCode::PayloadTooLarge,
    ErrorCode::MethodNotAllowed,
    ErrorCode::IngredientNameAlreadyUsed,
    ErrorCode::IngredientNotDeletableRelatedToObject,
    ErrorCode::InvalidMeasurementUnitForIngredient,
    ErrorCode::IngredientNotRelatedToRecipe,
    ErrorCode::IngredientAlreadyRelatedToRecipe,
    ErrorCode::RecipeNotCreatableWithUnknownIngredient,
    ErrorCode::MenuNotCreatableWithUnknownRecipe,
];

impl ErrorCode {
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::InternalError => 100_000,
            Self::InvalidRequest => 101_000,
            Self::EntityNotFound => 102_000,
            Self::AlreadyExistingEntity => 103_000,
            Self::AuthenticationRequired => 104_000,
            Self::AccessDenied => 105_000,
            Self::PayloadTooLarge => 106_000,
            Self::MethodNotAllowed => 107_000,
            Self::IngredientNameAlreadyUsed => 900_000,
            Self::IngredientNotDeletableRelatedToObject => 900_100,
            Self::InvalidMeasurementUnitForIngredient => 900_200,
            Self::IngredientNotRelatedToRecipe => 900_300,
            Self::IngredientAlreadyRelatedToRecipe => 900_400,
            Self::RecipeNotCreatableWithUnknownIngredient => 900_500,
            Self::MenuNotCreatableWithUnknownRecipe => 901_000,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::EntityNotFound => "ENTITY_NOT_FOUND",
            Self::AlreadyExistingEntity => "ALREADY_EXISTING_ENTITY",
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::IngredientNameAlreadyUsed => "INGREDIENT_NAME_ALREADY_USED",
            Self::IngredientNotDeletableRelatedToObject => {
                "INGREDIENT_NOT_DELETABLE_RELATED_TO_OBJECT"
            }
            Self::InvalidMeasurementUnitForIngredient => "INVALID_MEASUREMENT_UNIT_FOR_INGREDIENT",
            Self::IngredientNotRelatedToRecipe => "INGREDIENT_NOT_RELATED_TO_RECIPE",
            Self::IngredientAlreadyRelatedToRecipe => "INGREDIENT_ALREADY_RELATED_TO_RECIPE",
            Self::RecipeNotCreatableWithUnknownIngredient => {
                "RECIPE_NOT_CREATABLE_WITH_UNKNOWN_INGREDIENT"
            }
            Self::MenuNotCreatableWithUnknownRecipe => "MENU_NOT_CREATABLE_WITH_UNKNOWN_RECIPE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
