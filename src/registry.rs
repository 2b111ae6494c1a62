use std::collections::{btree_map::Entry, BTreeMap};

use tracing::debug;

use crate::{Error, Result};

/// A record that can be stored in a `Registry`.
pub trait Record {
    /// Registry key. Lookups compare it exactly, case included.
    fn id(&self) -> &str;
}

/// Read-only, id-keyed collection of records.
///
/// A registry is built once and then only read. Evaluators borrow it, so
/// a single registry can back any number of concurrent checks.
#[derive(Debug, Clone)]
pub struct Registry<T>(BTreeMap<String, T>);

impl<T> Registry<T>
where
    T: Record,
{
    /// Builds a registry, rejecting duplicate ids.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut map = BTreeMap::new();
        for record in records {
            match map.entry(record.id().to_string()) {
                Entry::Vacant(item) => {
                    item.insert(record);
                }
                Entry::Occupied(item) => {
                    return Err(Error::Validation(format!(
                        "duplicate id \"{}\"",
                        item.key()
                    )));
                }
            }
        }

        debug!(records = map.len(), "registry built");
        Ok(Registry(map))
    }

    pub fn get(&self, id: &str) -> Result<&T> {
        self.0
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry(BTreeMap::new())
    }
}
