//! Path reconstruction from shortest-path back-pointers.

use std::collections::HashMap;

use crate::domain::StationId;

/// Walk back-pointers from `target` to `source`.
///
/// Returns `[source, ..., target]`, or an empty vector when the chain never
/// reaches `source` (the target is unreachable, or the back-pointers are
/// broken). A path from a station to itself is just that station.
pub fn restore_path(
    predecessor: &HashMap<StationId, StationId>,
    source: &StationId,
    target: &StationId,
) -> Vec<StationId> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        // A valid chain visits each back-pointer at most once.
        if path.len() > predecessor.len() {
            return Vec::new();
        }
        let Some(previous) = predecessor.get(current) else {
            return Vec::new();
        };
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    path
}
