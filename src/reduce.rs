//! Collective reduction primitives.
//!
//! The engine needs exactly two reductions per sweep: element-wise minimum
//! over the workers' candidate distance vectors, and logical OR over their
//! change flags. Every worker must observe the merged results before its
//! next sweep; the transport that guarantees this lives with the drivers
//! (channels in-process, active messages across PEs), not here.

/// Merges one candidate vector into the running minimum, element-wise.
pub fn merge_min(global: &mut [i64], candidate: &[i64]) {
    debug_assert_eq!(global.len(), candidate.len());
    for (merged, &proposed) in global.iter_mut().zip(candidate) {
        if proposed < *merged {
            *merged = proposed;
        }
    }
}

/// Minimum-reduction across all workers' full-length candidate vectors.
/// Returns `None` only for an empty worker set.
pub fn reduce_min(candidates: Vec<Vec<i64>>) -> Option<Vec<i64>> {
    let mut candidates = candidates.into_iter();
    let mut merged = candidates.next()?;
    for candidate in candidates {
        merge_min(&mut merged, &candidate);
    }
    Some(merged)
}

/// OR-reduction of the workers' "did anything change" flags.
pub fn reduce_or(flags: impl IntoIterator<Item = bool>) -> bool {
    flags.into_iter().any(|changed| changed)
}
