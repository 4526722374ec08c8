//! Merge engine: fold multiple mappings into one.
//!
//! Source mappings are folded left to right. The first occurrence of a key
//! is inserted directly; every later occurrence hands the accumulated and
//! incoming values to a caller-supplied resolver, whose return value
//! replaces the accumulator entry. Inputs are never mutated.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

/// A resolver that always keeps the incoming (right-hand) value.
pub fn overwrite<V>() -> impl Fn(V, V) -> V {
    |_existing, incoming| incoming
}

/// A resolver that always keeps the existing (left-hand) value.
pub fn keep_existing<V>() -> impl Fn(V, V) -> V {
    |existing, _incoming| existing
}

/// Merge the source mappings into a single new mapping.
///
/// On a key collision the resolver is called with
/// `(accumulated, incoming)` and its return value wins. The resolver is
/// never called for the first occurrence of a key, so merging zero or one
/// mappings involves no resolution at all.
pub fn merge<K, V, R>(mut resolver: R, sources: &[&HashMap<K, V>]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    R: FnMut(V, V) -> V,
{
    let mut merged = HashMap::new();
    let mut collisions = 0usize;

    for source in sources {
        for (key, value) in source.iter() {
            match merged.remove(key) {
                Some(existing) => {
                    collisions += 1;
                    merged.insert(key.clone(), resolver(existing, value.clone()));
                }
                None => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
    }

    debug!(
        sources = sources.len(),
        entries = merged.len(),
        collisions,
        "merged mappings"
    );
    merged
}

/// Two mappings carried different values for the same key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("conflicting values for key {key:?}: existing {existing:?}, incoming {incoming:?}")]
pub struct MergeConflict<K: Debug, V: Debug> {
    /// The key present in more than one source with differing values.
    pub key: K,
    /// The value already accumulated for the key.
    pub existing: V,
    /// The value the later source carried for the key.
    pub incoming: V,
}

/// Merge the source mappings, failing on the first genuine conflict.
///
/// A key appearing in several sources with equal values is not a conflict;
/// only differing values abort the merge. Which conflicting key is reported
/// is unspecified when several exist.
pub fn try_merge<K, V>(sources: &[&HashMap<K, V>]) -> Result<HashMap<K, V>, MergeConflict<K, V>>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Debug,
{
    let mut merged: HashMap<K, V> = HashMap::new();

    for source in sources {
        for (key, value) in source.iter() {
            match merged.get(key) {
                Some(existing) if existing == value => {}
                Some(existing) => {
                    return Err(MergeConflict {
                        key: key.clone(),
                        existing: existing.clone(),
                        incoming: value.clone(),
                    });
                }
                None => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
    }

    Ok(merged)
}
