//! Identity-keyed grouping that keeps first-seen order.

use crate::topology::{PeerIdentity, PeerRecord};
use std::collections::HashMap;

/// Group records by [`PeerIdentity`].
///
/// Groups are returned in the order their identity first appears; records
/// inside a group keep their input order.
pub fn group_by_identity<'a, I>(records: I) -> Vec<Vec<&'a PeerRecord>>
where
    I: IntoIterator<Item = &'a PeerRecord>,
{
    let mut index: HashMap<PeerIdentity<'a>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&'a PeerRecord>> = Vec::new();

    for record in records {
        match index.get(&record.identity()) {
            Some(&slot) => groups[slot].push(record),
            None => {
                index.insert(record.identity(), groups.len());
                groups.push(vec![record]);
            }
        }
    }

    groups
}
