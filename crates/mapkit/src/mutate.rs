//! In-place mutators and whole-mapping comparison.
//!
//! These operate on a caller-supplied mapping; nothing here allocates a
//! result except [`clone_map`]. Callers needing concurrent access must
//! apply their own synchronization around these calls.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Overwrite the value for `key` only if the key already exists.
///
/// Returns whether the write occurred.
pub fn set_if_present<K, V>(m: &mut HashMap<K, V>, key: &K, value: V) -> bool
where
    K: Eq + Hash,
{
    match m.get_mut(key) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

/// Insert the value for `key` only if the key does not exist yet.
///
/// Returns whether the write occurred.
pub fn set_if_absent<K, V>(m: &mut HashMap<K, V>, key: K, value: V) -> bool
where
    K: Eq + Hash,
{
    match m.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
        Entry::Occupied(_) => false,
    }
}

/// Remove all entries, reusing the same mapping instance.
pub fn clear<K, V>(m: &mut HashMap<K, V>) {
    m.clear();
}

/// Shallow duplicate of the mapping.
///
/// An absent input maps to an absent result, which is distinct from an
/// empty mapping. Values holding shared references are shared, not
/// deep-copied.
pub fn clone_map<K, V>(m: Option<&HashMap<K, V>>) -> Option<HashMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    m.map(|inner| {
        inner
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    })
}

/// Write every entry of `src` into `dst` in place.
///
/// Colliding keys in `dst` are overwritten; its other entries are
/// preserved. `src` is untouched.
pub fn copy<K, V>(src: &HashMap<K, V>, dst: &mut HashMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    for (key, value) in src {
        dst.insert(key.clone(), value.clone());
    }
}

/// Whether the two mappings have the same cardinality and per-key equal
/// values.
pub fn maps_equal<K, V>(m1: &HashMap<K, V>, m2: &HashMap<K, V>) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
{
    if m1.len() != m2.len() {
        return false;
    }
    m1.iter().all(|(key, value)| m2.get(key) == Some(value))
}
