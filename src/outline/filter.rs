//! Outline filtering
//!
//! Plain substring matching over the heading text and scene number. Case
//! folding is ordinal uppercase (no locale tables), with a byte-wise path for
//! ASCII input that avoids allocating per scene.

use super::types::SceneRecord;

/// Fold a query once so it can be matched against many scenes.
pub fn fold_query(query: &str) -> String {
    query.to_uppercase()
}

/// Check if haystack contains `needle_folded` ignoring case.
/// `needle_folded` must come from [`fold_query`].
#[inline]
pub fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    if needle_folded.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_folded.is_ascii() {
        return contains_ignore_ascii_case(haystack.as_bytes(), needle_folded.as_bytes());
    }
    haystack.to_uppercase().contains(needle_folded)
}

/// O(n*m) worst case, no allocation.
#[inline]
fn contains_ignore_ascii_case(h: &[u8], n: &[u8]) -> bool {
    if n.len() > h.len() {
        return false;
    }
    'outer: for i in 0..=(h.len() - n.len()) {
        for j in 0..n.len() {
            if h[i + j].to_ascii_uppercase() != n[j] {
                continue 'outer;
            }
        }
        return true;
    }
    false
}

impl SceneRecord {
    /// True if the heading or the scene number contains the folded query
    pub fn matches(&self, query_folded: &str) -> bool {
        contains_folded(&self.display_text, query_folded)
            || contains_folded(self.scene_number_or_empty(), query_folded)
    }
}

/// Indices into `scenes` of every match, in outline order.
///
/// An empty query selects the whole outline.
pub fn filter_indices(scenes: &[SceneRecord], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..scenes.len()).collect();
    }

    let query_folded = fold_query(query);
    scenes
        .iter()
        .enumerate()
        .filter(|(_, scene)| scene.matches(&query_folded))
        .map(|(idx, _)| idx)
        .collect()
}

/// Matching scenes in outline order.
pub fn filter_outline<'a>(scenes: &'a [SceneRecord], query: &str) -> Vec<&'a SceneRecord> {
    filter_indices(scenes, query)
        .into_iter()
        .map(|idx| &scenes[idx])
        .collect()
}
