//! Key, value, and existence-aware lookup helpers.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// All keys in the mapping, in an indeterminate order.
pub fn keys<K, V>(m: &HashMap<K, V>) -> Vec<K>
where
    K: Clone,
{
    m.keys().cloned().collect()
}

/// All values in the mapping, in an indeterminate order.
///
/// The result has the same length as [`keys`] would return, but the two are
/// not index-aligned across separate calls.
pub fn values<K, V>(m: &HashMap<K, V>) -> Vec<V>
where
    V: Clone,
{
    m.values().cloned().collect()
}

/// The value stored for `key`, or `fallback` if the key is absent.
pub fn get_or_default<K, V>(m: &HashMap<K, V>, key: &K, fallback: V) -> V
where
    K: Eq + Hash,
    V: Clone,
{
    m.get(key).cloned().unwrap_or(fallback)
}

/// The value stored for `key`.
///
/// Panics if the key is absent. Absence here is a caller-logic invariant
/// violation, not a normal error path; callers expecting absence must check
/// first or use [`get_or_default`].
pub fn get_or_panic<K, V>(m: &HashMap<K, V>, key: &K) -> V
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    match m.get(key) {
        Some(value) => value.clone(),
        None => panic!("key {key:?} does not exist in the mapping"),
    }
}
