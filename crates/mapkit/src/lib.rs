//! Generic utilities over hash mappings.
//!
//! Mapkit is a flat collection of stateless helpers over
//! `std::collections::HashMap`: a conflict-resolving merge engine, a
//! structural diff engine, accessors, in-place mutators, and transforms.
//! Every operation is a single pass over its inputs; result mappings are
//! newly allocated, and only the mutators touch a caller-supplied mapping.
//!
//! The mapping type is unsynchronized; callers needing concurrent access
//! apply their own mutual exclusion around these calls.
//!
//! # Key Types
//!
//! - [`Entry`] — A materialized key-value pair
//! - [`EntryComparison`] / [`DiffReason`] — Per-key diff results and their
//!   classification
//! - [`MergeConflict`] — The error returned by the checked merge
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let left: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let right: HashMap<&str, i32> = [("a", 10)].into_iter().collect();
//!
//! let merged = mapkit::merge(|existing, incoming| existing + incoming, &[&left, &right]);
//! assert_eq!(merged["a"], 11);
//! assert_eq!(merged["b"], 2);
//! ```

pub mod access;
pub mod diff;
pub mod entry;
pub mod merge;
pub mod mutate;
pub mod transform;

pub use access::{get_or_default, get_or_panic, keys, values};
pub use diff::{diff, key_diff, DiffReason, EntryComparison};
pub use entry::{entries, Entry};
pub use merge::{keep_existing, merge, overwrite, try_merge, MergeConflict};
pub use mutate::{clear, clone_map, copy, maps_equal, set_if_absent, set_if_present};
pub use transform::{filter, invert, map_entries, map_to_vec, take_if};
