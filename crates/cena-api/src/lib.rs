// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod convert;
pub mod dto;
pub mod error_mapping;
pub mod errors;
pub mod menu_id;
pub mod openapi;
pub mod params;

pub use convert::{CollectionModel, IndexModel, Link, Links};
pub use errors::{ApiError, ApiErrorBody};
pub use menu_id::{format_menu_id, parse_menu_id};
pub use openapi::openapi_v1_spec;

pub const CRATE_NAME: &str = "cena-api";
pub const API_ROOT: &str = "/api";
pub const INGREDIENTS_PATH: &str = "/api/ingredients";
pub const RECIPES_PATH: &str = "/api/recipes";
pub const MENUS_PATH: &str = "/api/menus";
pub const OPENAPI_PATH: &str = "/api/openapi.json";
pub const HEALTH_PATH: &str = "/actuator/health";
pub const INFO_PATH: &str = "/actuator/info";
