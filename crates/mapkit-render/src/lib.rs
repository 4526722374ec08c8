//! Textual rendering of mapping differences.
//!
//! Formats each mapping as one `key: value` line per entry, sorted
//! lexicographically, then compares the two renderings with a Myers line
//! diff (the `similar` crate). The sort step makes the output deterministic
//! regardless of hash iteration order.
//!
//! The output is informational: identical mappings render to an empty
//! string, differing mappings to `-`/`+`/space-prefixed lines in the style
//! of a unified diff. Callers must never parse it to decide equality.

use std::collections::HashMap;
use std::fmt::Debug;

use similar::{ChangeTag, TextDiff};

/// Render a human-readable description of how two mappings differ.
///
/// Returns an empty string when the mappings render identically. Repeated
/// calls on the same inputs produce byte-identical output.
pub fn render_diff<K, V>(left: &HashMap<K, V>, right: &HashMap<K, V>) -> String
where
    K: Debug,
    V: Debug,
{
    let old = render_lines(left);
    let new = render_lines(right);

    // Identical renderings.
    if old == new {
        return String::new();
    }

    let text_diff = TextDiff::from_lines(old.as_str(), new.as_str());

    let mut out = String::new();
    for change in text_diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        out.push(sign);
        out.push_str(change.value().trim_end_matches('\n'));
        out.push('\n');
    }
    out
}

/// Format a mapping as sorted `key: value` lines.
fn render_lines<K, V>(m: &HashMap<K, V>) -> String
where
    K: Debug,
    V: Debug,
{
    let mut lines: Vec<String> = m.iter().map(|(k, v)| format!("{k:?}: {v:?}")).collect();
    lines.sort_unstable();

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_map(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn identical_mappings_render_empty() {
        let m = make_map(&[("a", 1), ("b", 2)]);
        assert_eq!(render_diff(&m, &m), "");
    }

    #[test]
    fn both_empty_render_empty() {
        let empty: HashMap<String, i32> = HashMap::new();
        assert_eq!(render_diff(&empty, &empty), "");
    }

    #[test]
    fn added_key_rendered_as_insertion() {
        let left = make_map(&[("a", 1)]);
        let right = make_map(&[("a", 1), ("b", 2)]);

        let text = render_diff(&left, &right);
        assert!(text.contains("+\"b\": 2"), "unexpected rendering: {text}");
        assert!(text.contains(" \"a\": 1"), "unchanged line should be context: {text}");
    }

    #[test]
    fn removed_key_rendered_as_deletion() {
        let left = make_map(&[("a", 1), ("gone", 9)]);
        let right = make_map(&[("a", 1)]);

        let text = render_diff(&left, &right);
        assert!(text.contains("-\"gone\": 9"), "unexpected rendering: {text}");
    }

    #[test]
    fn changed_value_rendered_as_remove_and_add() {
        let left = make_map(&[("count", 1)]);
        let right = make_map(&[("count", 2)]);

        let text = render_diff(&left, &right);
        assert!(text.contains("-\"count\": 1"), "unexpected rendering: {text}");
        assert!(text.contains("+\"count\": 2"), "unexpected rendering: {text}");
    }

    #[test]
    fn output_is_deterministic() {
        let left: HashMap<u32, &str> = (0..32).map(|i| (i, "left")).collect();
        let right: HashMap<u32, &str> = (16..48).map(|i| (i, "right")).collect();

        let first = render_diff(&left, &right);
        let second = render_diff(&left, &right);
        assert_eq!(first, second);
    }

    #[test]
    fn non_string_keys_render() {
        let left: HashMap<u64, bool> = [(1, true)].into_iter().collect();
        let right: HashMap<u64, bool> = [(1, false)].into_iter().collect();

        let text = render_diff(&left, &right);
        assert!(text.contains("-1: true"), "unexpected rendering: {text}");
        assert!(text.contains("+1: false"), "unexpected rendering: {text}");
    }
}
