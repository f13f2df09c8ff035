// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use cena_model::{DateRange, Menu, MenuId};

use crate::{Entity, InMemoryRepository, Repository};

impl Entity for Menu {
    type Id = MenuId;

    const KIND: &'static str = "menu";

    fn id(&self) -> &MenuId {
        &self.id
    }

    fn listing_order(&self, other: &Self) -> Ordering {
        self.id
            .date
            .cmp(&other.id.date)
            .then_with(|| self.id.meal_type.cmp(&other.id.meal_type))
            .then_with(|| self.id.owner.cmp(&other.id.owner))
    }
}

pub trait MenuRepository: Repository<Menu> {
    fn find_by_owner_and_date_range(&self, owner: &str, range: &DateRange) -> Vec<Menu>;

    fn find_by_owner(&self, owner: &str) -> Vec<Menu>;

    /// Returns how many menus were removed.
    fn delete_by_owner(&self, owner: &str) -> usize;
}

pub type InMemoryMenuRepository = InMemoryRepository<Menu>;

impl MenuRepository for InMemoryRepository<Menu> {
    fn find_by_owner_and_date_range(&self, owner: &str, range: &DateRange) -> Vec<Menu> {
        self.select(|m| m.is_owned_by(owner) && range.contains(m.id.date))
    }

    fn find_by_owner(&self, owner: &str) -> Vec<Menu> {
        self.select(|m| m.is_owned_by(owner))
    }

    fn delete_by_owner(&self, owner: &str) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|id, _| id.owner != owner);
        before - entries.len()
    }
}
