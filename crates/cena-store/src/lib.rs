// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use cena_core::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod ingredients;
mod menus;
mod recipes;

pub use ingredients::{InMemoryIngredientRepository, IngredientRepository};
pub use menus::{InMemoryMenuRepository, MenuRepository};
pub use recipes::{InMemoryRecipeRepository, RecipeRepository};

pub const CRATE_NAME: &str = "cena-store";

/// An aggregate that can be stored under its own identity.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + ToString + Send + Sync + 'static;

    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Order used by `find_all` so listings are stable across calls.
    fn listing_order(&self, other: &Self) -> Ordering;
}

pub trait Repository<E: Entity>: Send + Sync {
    fn exists(&self, id: &E::Id) -> bool;

    fn find_by_id(&self, id: &E::Id) -> Option<E>;

    fn find_not_null_by_id(&self, id: &E::Id) -> Result<E> {
        self.find_by_id(id)
            .ok_or_else(|| Error::not_found(E::KIND, id.to_string()))
    }

    /// Upsert keyed by identity.
    fn save(&self, entity: E) -> E;

    /// Inserts only when the identity is free; the check and the write are atomic.
    fn insert(&self, entity: E) -> Result<E>;

    fn delete(&self, entity: &E);

    fn delete_all(&self);

    fn find_all(&self) -> Vec<E>;

    fn count(&self) -> usize;
}

/// `HashMap` behind a `RwLock`; every repository operation holds the lock for its whole duration.
pub struct InMemoryRepository<E: Entity> {
    entries: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Entity> InMemoryRepository<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single map call, so a poisoned map is still consistent.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<E::Id, E>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, HashMap<E::Id, E>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn select<F>(&self, mut keep: F) -> Vec<E>
    where
        F: FnMut(&E) -> bool,
    {
        let mut out: Vec<E> = self.read().values().filter(|e| keep(*e)).cloned().collect();
        out.sort_by(E::listing_order);
        out
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn exists(&self, id: &E::Id) -> bool {
        self.read().contains_key(id)
    }

    fn find_by_id(&self, id: &E::Id) -> Option<E> {
        self.read().get(id).cloned()
    }

    fn save(&self, entity: E) -> E {
        self.write().insert(entity.id().clone(), entity.clone());
        entity
    }

    fn insert(&self, entity: E) -> Result<E> {
        let mut entries = self.write();
        if entries.contains_key(entity.id()) {
            return Err(Error::already_existing(E::KIND, entity.id().to_string()));
        }
        entries.insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }

    fn delete(&self, entity: &E) {
        self.write().remove(entity.id());
    }

    fn delete_all(&self) {
        self.write().clear();
    }

    fn find_all(&self) -> Vec<E> {
        self.select(|_| true)
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}
