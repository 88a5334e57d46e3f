//! Pure map operations reusable by CLI and library users.

use crate::types::{TranslationMap, is_marked, mark};

/// Merges an incoming translation set over a destination set.
///
/// Rules:
/// - Every destination value is presumed unconfirmed and gets the marker.
/// - Every incoming value overwrites its key verbatim, unmarked.
/// - The result key set is the union of both inputs; on conflict the
///   incoming value always wins.
pub fn merge_maps(from: &TranslationMap, to: &TranslationMap) -> TranslationMap {
    let mut result = TranslationMap::new();

    for (key, value) in to {
        result.insert(key, &mark(value));
    }
    for (key, value) in from {
        result.insert(key, value);
    }

    result
}

/// Filters a map down to the entries still carrying the marker.
///
/// Values are preserved verbatim, marker included, so a translator can see
/// which entries need attention.
pub fn extract_marked(map: &TranslationMap) -> TranslationMap {
    let mut result = TranslationMap::new();

    for (key, value) in map {
        if is_marked(value) {
            result.insert(key, value);
        }
    }

    result
}
