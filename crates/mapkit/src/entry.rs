//! The [`Entry`] pair type and mapping-to-entries materialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single key-value pair materialized from a mapping.
///
/// Entries are plain data with no identity beyond their key and value; they
/// do not reference the mapping they were read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K, V> {
    /// The entry key.
    pub key: K,
    /// The entry value.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Create an entry from a key and a value.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Materialize every pair in the mapping as an [`Entry`].
///
/// The result is in an indeterminate order. An empty mapping yields an
/// empty vector.
pub fn entries<K, V>(m: &HashMap<K, V>) -> Vec<Entry<K, V>>
where
    K: Clone,
    V: Clone,
{
    m.iter()
        .map(|(k, v)| Entry::new(k.clone(), v.clone()))
        .collect()
}
