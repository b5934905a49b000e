use crate::core::results::{KeySet, KeyType, NonMatchResult};

/// Origin keys absent from `universe`, in origin order
pub fn non_matching(origin: &KeySet, universe: &KeySet) -> Vec<String> {
    origin
        .iter()
        .filter(|key| !universe.contains(key))
        .map(str::to_string)
        .collect()
}

/// Labelled comparison result for the writer
pub fn compare(key_type: KeyType, origin: &KeySet, universe: &KeySet) -> NonMatchResult {
    NonMatchResult {
        key_type,
        keys: non_matching(origin, universe),
    }
}
