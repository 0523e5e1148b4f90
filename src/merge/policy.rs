//! Field resolution: the first present value wins.

use crate::topology::PeerRecord;

/// First `Some` value in iteration order, cloned.
pub fn first_present<'a, T, I>(values: I) -> Option<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Option<T>>,
{
    values.into_iter().find_map(Option::as_ref).cloned()
}

/// Collapse a group of records sharing one identity into a single record.
///
/// Host address and port come from the first record. Each optional field is
/// resolved independently with [`first_present`], scanning the group in order.
/// Returns `None` only for an empty group.
pub fn resolve_group(group: &[&PeerRecord]) -> Option<PeerRecord> {
    let head = group.first()?;
    Some(PeerRecord {
        host_address: head.host_address.clone(),
        port: head.port,
        valency: first_present(group.iter().map(|r| &r.valency)),
        node_name: first_present(group.iter().map(|r| &r.node_name)),
        friendly_name: first_present(group.iter().map(|r| &r.friendly_name)),
        operator: first_present(group.iter().map(|r| &r.operator)),
    })
}
