//! The document-wide entity map.
//!
//! Keys are assigned per document in insertion order and serialize as string
//! keys (`{"0": {...}, "1": {...}}`), matching the raw interchange format.
//!
//! Some consumers of the raw format reject an empty entity map. For them an
//! empty map can be put in *placeholder* state, which serializes as the single
//! malformed entry `{"data": "", "mutability": "", "type": ""}` instead of
//! `{}`. Inserting an entity clears the placeholder.

use crate::model::nodes::{Entity, EntityKey};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

const PLACEHOLDER_FIELDS: [&str; 3] = ["data", "mutability", "type"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityMap {
    entries: BTreeMap<EntityKey, Entity>,
    placeholder: bool,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty map that serializes as the compatibility placeholder entry.
    pub fn placeholder() -> Self {
        EntityMap {
            entries: BTreeMap::new(),
            placeholder: true,
        }
    }

    pub fn insert(&mut self, key: EntityKey, entity: Entity) -> Option<Entity> {
        self.placeholder = false;
        self.entries.insert(key, entity)
    }

    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder && self.entries.is_empty()
    }
}

impl FromIterator<(EntityKey, Entity)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (EntityKey, Entity)>>(iter: I) -> Self {
        EntityMap {
            entries: iter.into_iter().collect(),
            placeholder: false,
        }
    }
}

impl Serialize for EntityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_placeholder() {
            let mut map = serializer.serialize_map(Some(PLACEHOLDER_FIELDS.len()))?;
            for field in PLACEHOLDER_FIELDS {
                map.serialize_entry(field, "")?;
            }
            return map.end();
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entity) in &self.entries {
            map.serialize_entry(&key.to_string(), entity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EntityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntityMapVisitor)
    }
}

struct EntityMapVisitor;

impl<'de> Visitor<'de> for EntityMapVisitor {
    type Value = EntityMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of numeric entity keys to entities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        let mut placeholder = false;

        while let Some(key) = access.next_key::<String>()? {
            match key.parse::<EntityKey>() {
                Ok(entity_key) => {
                    entries.insert(entity_key, access.next_value::<Entity>()?);
                }
                Err(_) if PLACEHOLDER_FIELDS.contains(&key.as_str()) => {
                    access.next_value::<IgnoredAny>()?;
                    placeholder = true;
                }
                Err(_) => {
                    return Err(de::Error::custom(format!("invalid entity key `{key}`")));
                }
            }
        }

        Ok(EntityMap {
            placeholder: placeholder && entries.is_empty(),
            entries,
        })
    }
}
