// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use cena_core::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementType {
    Weight,
    Volume,
    Unit,
    Spoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementUnit {
    Gram,
    Kilogram,
    Milliliter,
    Centiliter,
    Liter,
    Unit,
    Teaspoon,
    Tablespoon,
}

impl MeasurementType {
    pub const ALL: [Self; 4] = [Self::Weight, Self::Volume, Self::Unit, Self::Spoon];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "WEIGHT",
            Self::Volume => "VOLUME",
            Self::Unit => "UNIT",
            Self::Spoon => "SPOON",
        }
    }
}

impl MeasurementUnit {
    pub const ALL: [Self; 8] = [
        Self::Gram,
        Self::Kilogram,
        Self::Milliliter,
        Self::Centiliter,
        Self::Liter,
        Self::Unit,
        Self::Teaspoon,
        Self::Tablespoon,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gram => "GRAM",
            Self::Kilogram => "KILOGRAM",
            Self::Milliliter => "MILLILITER",
            Self::Centiliter => "CENTILITER",
            Self::Liter => "LITER",
            Self::Unit => "UNIT",
            Self::Teaspoon => "TEASPOON",
            Self::Tablespoon => "TABLESPOON",
        }
    }

    #[must_use]
    pub const fn measurement_type(self) -> MeasurementType {
        match self {
            Self::Gram | Self::Kilogram => MeasurementType::Weight,
            Self::Milliliter | Self::Centiliter | Self::Liter => MeasurementType::Volume,
            Self::Unit => MeasurementType::Unit,
            Self::Teaspoon | Self::Tablespoon => MeasurementType::Spoon,
        }
    }
}

macro_rules! impl_enum_text {
    ($name:ident, $field:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        Error::invalid_value(
                            $field,
                            format!("must be one of [{}]", allowed.join(", ")),
                        )
                    })
            }
        }
    };
}

impl_enum_text!(MeasurementType, "measurement type");
impl_enum_text!(MeasurementUnit, "measurement unit");

/// Amount of an ingredient used by a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quantity {
    #[default]
    Undefined,
    Measured {
        value: f64,
        unit: MeasurementUnit,
    },
}

impl Quantity {
    /// Value and unit must be given together or not at all.
    pub fn new(value: Option<f64>, unit: Option<MeasurementUnit>) -> Result<Self> {
        match (value, unit) {
            (None, None) => Ok(Self::Undefined),
            (Some(value), Some(unit)) => Self::measured(value, unit),
            (Some(_), None) => Err(Error::invalid_value(
                "quantity",
                "a unit is required when a value is given",
            )),
            (None, Some(_)) => Err(Error::invalid_value(
                "quantity",
                "a value is required when a unit is given",
            )),
        }
    }

    pub fn measured(value: f64, unit: MeasurementUnit) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid_value(
                "quantity",
                "value must be a positive number",
            ));
        }
        Ok(Self::Measured { value, unit })
    }

    #[must_use]
    pub const fn unit(&self) -> Option<MeasurementUnit> {
        match self {
            Self::Undefined => None,
            Self::Measured { unit, .. } => Some(*unit),
        }
    }

    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Undefined => None,
            Self::Measured { value, .. } => Some(*value),
        }
    }

    #[must_use]
    pub fn is_compatible_with(&self, accepted: &[MeasurementType]) -> bool {
        match self.unit() {
            None => true,
            Some(unit) => accepted.contains(&unit.measurement_type()),
        }
    }
}
