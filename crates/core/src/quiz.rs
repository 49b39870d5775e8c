//! Quiz question selection.
//!
//! The next question is drawn uniformly from the candidates whose ids have
//! not been served yet. When that set is empty the quiz is exhausted.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::{DbId, ALL_CATEGORIES};

/// Category filter for building the candidate pool.
///
/// Returns `None` for [`ALL_CATEGORIES`] (every question is a candidate) and
/// `Some(id)` otherwise.
pub fn category_filter(category_id: DbId) -> Option<DbId> {
    (category_id != ALL_CATEGORIES).then_some(category_id)
}

/// Candidates whose id is not in `served`, preserving input order.
pub fn unserved<'a, T>(
    candidates: &'a [T],
    served: &[DbId],
    id_of: impl Fn(&T) -> DbId,
) -> Vec<&'a T> {
    let served: HashSet<DbId> = served.iter().copied().collect();
    candidates
        .iter()
        .filter(|c| !served.contains(&id_of(*c)))
        .collect()
}

/// Pick a random candidate that has not been served.
///
/// Ids in `served` that are not in `candidates` (for example left over from
/// another category) are ignored. Returns `None` once every candidate has
/// been served, including when `candidates` is empty.
pub fn pick_unserved<'a, T, R>(
    candidates: &'a [T],
    served: &[DbId],
    id_of: impl Fn(&T) -> DbId,
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    unserved(candidates, served, id_of).choose(rng).copied()
}
