//! Transforms: filtering, re-mapping, and inverting mappings.
//!
//! Every function here builds a new collection; inputs are borrowed and
//! never mutated. Where a transform can produce duplicate output keys
//! ([`map_entries`], [`invert`]), the later-processed entry silently wins,
//! and processing order over a hash mapping is unspecified.

use std::collections::HashMap;
use std::hash::Hash;

/// New mapping holding the entries that satisfy the predicate.
///
/// An empty result is a valid, present mapping.
pub fn filter<K, V, P>(m: &HashMap<K, V>, mut predicate: P) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    let mut result = HashMap::new();
    for (key, value) in m {
        if predicate(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Stream the entries that satisfy the predicate to `action`.
///
/// Like [`filter`] without the intermediate mapping allocation, for callers
/// that only need to act on the matches.
pub fn take_if<K, V, P, F>(m: &HashMap<K, V>, mut predicate: P, mut action: F)
where
    P: FnMut(&K, &V) -> bool,
    F: FnMut(&K, &V),
{
    for (key, value) in m {
        if predicate(key, value) {
            action(key, value);
        }
    }
}

/// Apply `mapper` to every entry, collecting a new, possibly re-typed
/// mapping.
///
/// If the mapper produces duplicate output keys, the later-processed entry
/// wins; over a hash mapping that winner is unspecified.
pub fn map_entries<K1, V1, K2, V2, F>(m: &HashMap<K1, V1>, mut mapper: F) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K1, &V1) -> (K2, V2),
{
    let mut result = HashMap::with_capacity(m.len());
    for (key, value) in m {
        let (new_key, new_value) = mapper(key, value);
        result.insert(new_key, new_value);
    }
    result
}

/// Apply `mapper` to every entry, collecting the results in a vector.
///
/// Cardinality equals the input size; order is unspecified.
pub fn map_to_vec<K, V, R, F>(m: &HashMap<K, V>, mut mapper: F) -> Vec<R>
where
    F: FnMut(&K, &V) -> R,
{
    m.iter().map(|(key, value)| mapper(key, value)).collect()
}

/// New mapping with keys and values swapped.
///
/// Duplicate values collapse to a single entry whose key is unspecified.
pub fn invert<K, V>(m: &HashMap<K, V>) -> HashMap<V, K>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    let mut result = HashMap::with_capacity(m.len());
    for (key, value) in m {
        result.insert(value.clone(), key.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_map(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn filter_keeps_only_matching_entries() {
        let m = make_map(&[("a", 1), ("b", 2), ("c", 3)]);

        let odd = filter(&m, |_, v| v % 2 == 1);
        assert_eq!(odd, make_map(&[("a", 1), ("c", 3)]));
    }

    #[test]
    fn filter_may_produce_an_empty_mapping() {
        let m = make_map(&[("a", 1)]);

        let none = filter(&m, |_, _| false);
        assert!(none.is_empty());
    }

    #[test]
    fn take_if_streams_matches_without_allocation() {
        let m = make_map(&[("a", 1), ("b", 2), ("c", 3)]);

        let mut seen = Vec::new();
        take_if(&m, |_, v| *v > 1, |k, v| seen.push((k.clone(), *v)));

        seen.sort();
        assert_eq!(seen, vec![("b".to_string(), 2), ("c".to_string(), 3)]);
    }

    #[test]
    fn map_entries_retypes_keys_and_values() {
        let m = make_map(&[("a", 1), ("bb", 2)]);

        let lengths: HashMap<usize, String> =
            map_entries(&m, |k, v| (k.len(), format!("{k}={v}")));

        assert_eq!(lengths.len(), 2);
        assert_eq!(lengths[&1], "a=1");
        assert_eq!(lengths[&2], "bb=2");
    }

    #[test]
    fn map_entries_duplicate_output_keys_collapse() {
        let m = make_map(&[("a", 1), ("b", 2), ("c", 3)]);

        let collapsed: HashMap<&str, i32> = map_entries(&m, |_, v| ("same", *v));

        assert_eq!(collapsed.len(), 1);
        assert!([1, 2, 3].contains(&collapsed["same"]));
    }

    #[test]
    fn map_to_vec_preserves_cardinality() {
        let m = make_map(&[("a", 1), ("b", 2)]);

        let mut rendered = map_to_vec(&m, |k, v| format!("{k}:{v}"));
        rendered.sort();
        assert_eq!(rendered, vec!["a:1".to_string(), "b:2".to_string()]);
    }

    #[test]
    fn invert_swaps_keys_and_values() {
        let m = make_map(&[("x", 1), ("y", 2)]);

        let inverted = invert(&m);
        assert_eq!(inverted.len(), 2);
        assert_eq!(inverted[&1], "x");
        assert_eq!(inverted[&2], "y");
    }

    #[test]
    fn invert_duplicate_values_keep_one_key() {
        let m = make_map(&[("x", 1), ("y", 1)]);

        let inverted = invert(&m);
        assert_eq!(inverted.len(), 1);
        let winner = &inverted[&1];
        assert!(winner == "x" || winner == "y");
        assert_eq!(m[winner], 1);
    }

    proptest! {
        #[test]
        fn filter_result_is_a_subset_satisfying_the_predicate(
            m in prop::collection::hash_map(any::<u32>(), any::<i64>(), 0..16),
        ) {
            let kept = filter(&m, |k, v| (*k as i64) < *v);

            for (key, value) in &kept {
                prop_assert_eq!(m.get(key), Some(value));
                prop_assert!((*key as i64) < *value);
            }
            for (key, value) in &m {
                if !kept.contains_key(key) {
                    prop_assert!((*key as i64) >= *value);
                }
            }
        }

        #[test]
        fn invert_of_injective_mapping_round_trips(
            keys in prop::collection::hash_set(any::<u32>(), 0..16),
        ) {
            // Build an injective mapping so inversion loses nothing.
            let m: HashMap<u32, u64> = keys.iter().map(|k| (*k, *k as u64 + 1)).collect();

            let inverted = invert(&m);
            prop_assert_eq!(inverted.len(), m.len());
            for (key, value) in &m {
                prop_assert_eq!(inverted.get(value), Some(key));
            }
        }
    }
}
