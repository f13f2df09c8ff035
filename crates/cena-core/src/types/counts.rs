// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Number of people a recipe feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Servings(u16);

/// Number of guests a menu is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Covers(u16);

impl Default for Servings {
    fn default() -> Self {
        Self(4)
    }
}

macro_rules! impl_positive_count {
    ($name:ident, $field:literal) => {
        impl $name {
            pub fn new(value: u32) -> Result<Self> {
                if value == 0 {
                    return Err(Error::invalid_value($field, "must be greater than 0"));
                }
                u16::try_from(value)
                    .map(Self)
                    .map_err(|_| Error::invalid_value($field, "must be at most 65535"))
            }

            #[must_use]
            pub const fn get(self) -> u32 {
                self.0 as u32
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.get()
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(value: u32) -> Result<Self> {
                Self::new(value)
            }
        }
    };
}

impl_positive_count!(Servings, "servings");
impl_positive_count!(Covers, "covers");
