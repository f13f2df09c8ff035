// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

pub mod errors;
pub mod types;

pub use errors::{Error, ErrorCode, Result, ERROR_CODES};
pub use types::{Covers, IngredientId, Name, RecipeId, Servings};

pub const CRATE_NAME: &str = "cena-core";

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
