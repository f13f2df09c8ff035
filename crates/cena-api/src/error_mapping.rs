// SPDX-License-Identifier: Apache-2.0

use cena_core::ErrorCode;

pub const API_ERROR_SCHEMA_REF: &str = "#/components/schemas/ApiError";

#[must_use]
pub fn map_error_code(code: ErrorCode) -> u16 {
    match code {
        ErrorCode::InvalidRequest
        | ErrorCode::InvalidMeasurementUnitForIngredient
        | ErrorCode::RecipeNotCreatableWithUnknownIngredient
        | ErrorCode::MenuNotCreatableWithUnknownRecipe => 400,
        ErrorCode::AuthenticationRequired => 401,
        ErrorCode::AccessDenied => 403,
        ErrorCode::MethodNotAllowed => 405,
        ErrorCode::PayloadTooLarge => 413,
        ErrorCode::EntityNotFound | ErrorCode::IngredientNotRelatedToRecipe => 404,
        ErrorCode::AlreadyExistingEntity
        | ErrorCode::IngredientNameAlreadyUsed
        | ErrorCode::IngredientNotDeletableRelatedToObject
        | ErrorCode::IngredientAlreadyRelatedToRecipe => 409,
        _ => 500,
    }
}

#[must_use]
pub const fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        413 => "Payload Too Large",
        _ => "Internal Server Error",
    }
}
