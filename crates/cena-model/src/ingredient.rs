// SPDX-License-Identifier: Apache-2.0

use cena_core::{IngredientId, Name};

use crate::{MeasurementType, Quantity};

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: Name,
    pub measurement_types: Vec<MeasurementType>,
}

impl Ingredient {
    /// Duplicate measurement types are dropped, first occurrence wins.
    #[must_use]
    pub fn new(id: IngredientId, name: Name, measurement_types: Vec<MeasurementType>) -> Self {
        let mut unique = Vec::with_capacity(measurement_types.len());
        for kind in measurement_types {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self {
            id,
            name,
            measurement_types: unique,
        }
    }

    #[must_use]
    pub fn accepts(&self, quantity: &Quantity) -> bool {
        quantity.is_compatible_with(&self.measurement_types)
    }
}
