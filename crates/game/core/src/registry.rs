//! Typed store for loaded entity definitions.
//!
//! The registry is the sole source of truth for static content. It is
//! constructed once at startup by the content loaders and then passed by
//! shared reference into the session and battle code; nothing mutates it
//! during play. Identifier resolution is the only operation gameplay code
//! ever performs against it.

use std::collections::HashMap;

use crate::defs::{AreaDefinition, CreatureDefinition, DoorDefinition, ItemDefinition};

/// An identifier failed to resolve against the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no {kind} definition with id `{id}`")]
pub struct LookupError {
    pub kind: &'static str,
    pub id: String,
}

impl LookupError {
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// A definition type the registry can store and resolve.
///
/// The associated functions select the typed store inside [`Registry`], so
/// `get` and `load` stay generic without type erasure.
pub trait Definition: Sized {
    /// Human-readable kind name used in lookup errors ("item", "area", ...).
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn store(registry: &Registry) -> &HashMap<String, Self>;

    fn store_mut(registry: &mut Registry) -> &mut HashMap<String, Self>;
}

/// Keyed store of all loaded entity definitions.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    items: HashMap<String, ItemDefinition>,
    creatures: HashMap<String, CreatureDefinition>,
    doors: HashMap<String, DoorDefinition>,
    areas: HashMap<String, AreaDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store for `T` with the given definitions.
    ///
    /// Loading is idempotent per type: re-loading a kind replaces the
    /// previous set rather than merging into it.
    pub fn load<T: Definition>(&mut self, defs: impl IntoIterator<Item = T>) {
        let store = T::store_mut(self);
        store.clear();
        for def in defs {
            store.insert(def.id().to_owned(), def);
        }
        tracing::debug!(kind = T::KIND, count = T::store(self).len(), "loaded definitions");
    }

    /// Resolve an identifier to a definition of type `T`.
    pub fn get<T: Definition>(&self, id: &str) -> Result<&T, LookupError> {
        T::store(self)
            .get(id)
            .ok_or_else(|| LookupError::new(T::KIND, id))
    }

    pub fn contains<T: Definition>(&self, id: &str) -> bool {
        T::store(self).contains_key(id)
    }

    pub fn count<T: Definition>(&self) -> usize {
        T::store(self).len()
    }

    /// All loaded identifiers of a kind, in no particular order.
    pub fn ids<T: Definition>(&self) -> Vec<String> {
        T::store(self).keys().cloned().collect()
    }
}

impl Definition for ItemDefinition {
    const KIND: &'static str = "item";

    fn id(&self) -> &str {
        &self.id
    }

    fn store(registry: &Registry) -> &HashMap<String, Self> {
        &registry.items
    }

    fn store_mut(registry: &mut Registry) -> &mut HashMap<String, Self> {
        &mut registry.items
    }
}

impl Definition for CreatureDefinition {
    const KIND: &'static str = "creature";

    fn id(&self) -> &str {
        &self.id
    }

    fn store(registry: &Registry) -> &HashMap<String, Self> {
        &registry.creatures
    }

    fn store_mut(registry: &mut Registry) -> &mut HashMap<String, Self> {
        &mut registry.creatures
    }
}

impl Definition for DoorDefinition {
    const KIND: &'static str = "door";

    fn id(&self) -> &str {
        &self.id
    }

    fn store(registry: &Registry) -> &HashMap<String, Self> {
        &registry.doors
    }

    fn store_mut(registry: &mut Registry) -> &mut HashMap<String, Self> {
        &mut registry.doors
    }
}

impl Definition for AreaDefinition {
    const KIND: &'static str = "area";

    fn id(&self) -> &str {
        &self.id
    }

    fn store(registry: &Registry) -> &HashMap<String, Self> {
        &registry.areas
    }

    fn store_mut(registry: &mut Registry) -> &mut HashMap<String, Self> {
        &mut registry.areas
    }
}
