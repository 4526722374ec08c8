//! Diff engine: per-key structural comparison of two mappings.
//!
//! [`diff`] classifies every differing key as a value mismatch or as
//! missing from one side, and attaches a rendered whole-mapping diff text
//! to each result entry. [`key_diff`] is the lighter key-presence pass.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use mapkit_render::render_diff;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a key appears in a diff result.
///
/// The three outcomes are disjoint; a key present with equal values on both
/// sides never appears at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffReason {
    /// The key is present on both sides with differing values.
    ValueMismatch,
    /// The key is present in the right mapping but not the left.
    MissingInLeft,
    /// The key is present in the left mapping but not the right.
    MissingInRight,
}

/// The comparison result for one differing key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryComparison<V> {
    /// The left-side value, or `V::default()` if the key is absent there.
    pub left: V,
    /// The right-side value, or `V::default()` if the key is absent there.
    pub right: V,
    /// Rendered text describing the whole-mapping difference.
    ///
    /// Every entry of one diff result carries the same text. Informational
    /// only; the structured fields are authoritative.
    pub diff: String,
    /// Which of the three disjoint outcomes this key fell into.
    pub reason: DiffReason,
}

/// Compare two mappings and return the keys that differ.
///
/// Keys present on one side only are reported as missing from the other;
/// keys present on both sides with unequal values are reported as
/// mismatches. Keys with equal values produce no entry.
pub fn diff<K, V>(left: &HashMap<K, V>, right: &HashMap<K, V>) -> HashMap<K, EntryComparison<V>>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone + Default + Debug,
{
    // Rendered once per call; every result entry shares it.
    let rendered = render_diff(left, right);
    let mut result = HashMap::new();

    // Pass 1: keys missing from the right side, and value mismatches.
    for (key, value) in left {
        match right.get(key) {
            Some(other) if other == value => {}
            Some(other) => {
                result.insert(
                    key.clone(),
                    EntryComparison {
                        left: value.clone(),
                        right: other.clone(),
                        diff: rendered.clone(),
                        reason: DiffReason::ValueMismatch,
                    },
                );
            }
            None => {
                result.insert(
                    key.clone(),
                    EntryComparison {
                        left: value.clone(),
                        right: V::default(),
                        diff: rendered.clone(),
                        reason: DiffReason::MissingInRight,
                    },
                );
            }
        }
    }

    // Pass 2: keys missing from the left side. Mismatched keys re-derive
    // the pass-1 entry with the same values.
    for (key, value) in right {
        match left.get(key) {
            Some(other) if other == value => {}
            Some(other) => {
                result.insert(
                    key.clone(),
                    EntryComparison {
                        left: other.clone(),
                        right: value.clone(),
                        diff: rendered.clone(),
                        reason: DiffReason::ValueMismatch,
                    },
                );
            }
            None => {
                result.insert(
                    key.clone(),
                    EntryComparison {
                        left: V::default(),
                        right: value.clone(),
                        diff: rendered.clone(),
                        reason: DiffReason::MissingInLeft,
                    },
                );
            }
        }
    }

    debug!(differing = result.len(), "diffed mappings");
    result
}

/// Return the keys present in only one of the two mappings.
///
/// The first vector holds keys in `left` but not `right`, the second the
/// reverse. Values are never compared; both vectors are in an
/// indeterminate order.
pub fn key_diff<K, V>(left: &HashMap<K, V>, right: &HashMap<K, V>) -> (Vec<K>, Vec<K>)
where
    K: Eq + Hash + Clone,
{
    let left_only = left
        .keys()
        .filter(|key| !right.contains_key(*key))
        .cloned()
        .collect();
    let right_only = right
        .keys()
        .filter(|key| !left.contains_key(*key))
        .cloned()
        .collect();

    (left_only, right_only)
}
