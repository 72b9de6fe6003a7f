//! Group splitting and sub-pool division.
//!
//! The competitor list (already shuffled) is first cut into main groups of at
//! most `2 * target` competitors, as evenly as possible. Any main group larger
//! than the bracket size is then halved into two sub-pools. Both steps slice
//! contiguously, so the input order decides membership.

use log::debug;

use super::models::{Pool, SubPool, TargetSize, pool_label, sub_pool_label};
use crate::roster::Competitor;

/// Split `items` into `parts` contiguous slices whose sizes differ by at most one.
///
/// The first `len % parts` slices take the extra element. Returns no slices for
/// empty input or zero parts.
pub fn split_into_parts<T>(items: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    if items.is_empty() || parts == 0 {
        return Vec::new();
    }

    let base = items.len() / parts;
    let extra = items.len() % parts;

    let mut rest = items.into_iter();
    (0..parts)
        .map(|i| {
            let size = if i < extra { base + 1 } else { base };
            rest.by_ref().take(size).collect::<Vec<T>>()
        })
        .collect()
}

/// Split `items` into the fewest groups of at most `max_group_size`, balanced.
pub fn split_evenly<T>(items: Vec<T>, max_group_size: usize) -> Vec<Vec<T>> {
    let num_groups = items.len().div_ceil(max_group_size.max(1));
    split_into_parts(items, num_groups)
}

/// Divide a main group into one sub-pool, or two when it exceeds `target_size`.
pub fn divide<T>(group: Vec<T>, target_size: usize) -> Vec<Vec<T>> {
    if group.len() <= target_size {
        vec![group]
    } else {
        split_into_parts(group, 2)
    }
}

/// Run the full split: main groups, then sub-pools, then labels.
///
/// The order of `competitors` is taken as-is; shuffle before calling.
pub fn partition(competitors: Vec<Competitor>, target_size: TargetSize) -> Vec<Pool> {
    let groups = split_evenly(competitors, target_size.group_capacity());

    let pools: Vec<Pool> = groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let label = pool_label(i);
            let sub_pools = divide(group, target_size.size())
                .into_iter()
                .enumerate()
                .map(|(ordinal, players)| {
                    SubPool::new(sub_pool_label(&label, ordinal), players, target_size)
                })
                .collect();
            Pool { label, sub_pools }
        })
        .collect();

    debug!(
        "Partitioned into {} pool(s), shape {:?}",
        pools.len(),
        pools.iter().map(Pool::shape).collect::<Vec<_>>()
    );

    pools
}
