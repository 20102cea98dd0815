//! Shared reduce-by-key machinery for report generation
//!
//! Every aggregate report is a single linear scan followed by a group-by-key
//! reduce. Keys go into a `BTreeMap`, so ascending key order falls out of the
//! data structure instead of a separate sort pass. A key function returning
//! `None` drops the record, which is how filtered reports (Transportation
//! only, Groceries only, ...) share the same scan.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money};

/// Group records by a derived key and sum a derived amount per group
pub(crate) fn sum_by_key<K, KF, VF>(
    records: &[ExpenseRecord],
    mut key: KF,
    value: VF,
) -> BTreeMap<K, Money>
where
    K: Ord,
    KF: FnMut(&ExpenseRecord) -> Option<K>,
    VF: Fn(&ExpenseRecord) -> Money,
{
    let mut totals = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *totals.entry(k).or_insert_with(Money::zero) += value(record);
        }
    }
    totals
}

/// Group records by a derived key, summing `amount_paid` and counting members
pub(crate) fn sum_and_count_by_key<K, KF>(
    records: &[ExpenseRecord],
    mut key: KF,
) -> BTreeMap<K, (Money, usize)>
where
    K: Ord,
    KF: FnMut(&ExpenseRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, (Money, usize)> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            let entry = groups.entry(k).or_insert((Money::zero(), 0));
            entry.0 += record.amount_paid;
            entry.1 += 1;
        }
    }
    groups
}

/// Sum of `amount_paid` across the whole collection
pub(crate) fn grand_total(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount_paid).sum()
}
