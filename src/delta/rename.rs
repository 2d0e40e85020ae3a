//! Rename inference over unset and set candidates.

use crate::value::{loose_eq, Value};
use indexmap::IndexMap;
use tracing::trace;

/// Pairs removed leaves with added leaves holding a loosely equal value and
/// records each pair as a rename.
///
/// Unset candidates are taken in insertion order; each one is paired with
/// the first set candidate, in insertion order, whose value is loosely equal
/// and whose path differs. Paired entries are removed from both maps, so a
/// path takes part in at most one rename. Container values never pair.
///
/// This is a heuristic: two unrelated leaves that happen to hold equal values
/// are reported as a move.
pub fn infer_renames(
    unset: &mut IndexMap<String, Value>,
    set: &mut IndexMap<String, Value>,
) -> IndexMap<String, String> {
    let mut renames = IndexMap::new();
    let mut i = 0;

    loop {
        let Some((from, removed)) = unset.get_index(i) else {
            break;
        };
        let target = set
            .iter()
            .position(|(to, added)| to != from && loose_eq(removed, added));

        match target.and_then(|j| set.shift_remove_index(j)) {
            Some((to, _)) => {
                if let Some((from, _)) = unset.shift_remove_index(i) {
                    trace!(from = %from, to = %to, "inferred rename");
                    renames.insert(from, to);
                }
            }
            None => i += 1,
        }
    }

    renames
}
