//! Grouping primitives shared by the per-kind builders.
//!
//! Groups are keyed by exact value equality and kept in a `BTreeMap`, so
//! every view comes out ordered by key regardless of input row order. Rows
//! whose key is missing are skipped.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

/// Per-key row tally.
///
/// A row with a present key always creates its group; it adds to the count
/// only when `counted` is true. This mirrors counting a column's non-missing
/// values within each group.
pub(crate) fn tally<K: Ord>(
    rows: impl IntoIterator<Item = (Option<K>, bool)>,
) -> BTreeMap<K, u64> {
    let mut groups = BTreeMap::new();
    for (key, counted) in rows {
        let Some(key) = key else {
            continue;
        };
        let entry = groups.entry(key).or_insert(0u64);
        if counted {
            *entry += 1;
        }
    }
    groups
}

/// Mean of the present values in each group.
///
/// Sums are accumulated as integers so the result does not depend on row
/// order. Groups without any value are omitted.
pub(crate) fn mean<K: Ord>(
    rows: impl IntoIterator<Item = (Option<K>, Option<i64>)>,
) -> BTreeMap<K, f64> {
    let mut sums: BTreeMap<K, (i128, u64)> = BTreeMap::new();
    for (key, value) in rows {
        let (Some(key), Some(value)) = (key, value) else {
            continue;
        };
        let slot = sums.entry(key).or_insert((0, 0));
        slot.0 += i128::from(value);
        slot.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum as f64 / n as f64))
        .collect()
}

/// Distinct present values per group, sorted ascending.
pub(crate) fn distinct<K: Ord>(
    rows: impl IntoIterator<Item = (Option<K>, Option<String>)>,
) -> BTreeMap<K, Vec<String>> {
    let mut groups: BTreeMap<K, BTreeSet<String>> = BTreeMap::new();
    for (key, value) in rows {
        let Some(key) = key else {
            continue;
        };
        let values = groups.entry(key).or_default();
        if let Some(value) = value {
            values.insert(value);
        }
    }
    groups
        .into_iter()
        .map(|(key, values)| (key, values.into_iter().collect()))
        .collect()
}

/// Orders value-count records by count descending, then by key ascending.
pub(crate) fn sort_by_count_desc<T>(
    records: &mut [T],
    count: impl Fn(&T) -> u64,
    key: impl Fn(&T) -> &str,
) {
    records.sort_by(|a, b| {
        Reverse(count(a))
            .cmp(&Reverse(count(b)))
            .then_with(|| key(a).cmp(key(b)))
    });
}
