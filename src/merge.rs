//! Merge Engine
//!
//! Combines a preferred topology and any number of additional topologies into one,
//! keeping exactly one record per peer identity.
//!
//! Records are visited preferred-first, then additional topologies in argument order,
//! each in its own file order. For every identity the first record supplies host and
//! port, and each optional field takes the first present value across the group (see
//! [`policy::first_present`]). Output peers appear in the order their identity was
//! first seen.

use crate::topology::{PeerRecord, Topology};
use tracing::{debug, trace};

pub mod grouping;
pub mod policy;

pub use grouping::group_by_identity;
pub use policy::{first_present, resolve_group};

/// Merge topologies, preferring earlier sources field by field.
///
/// Returns `None` only when `preferred` and every additional topology are absent.
/// A single present input is deduplicated against itself.
pub fn merge<'a, I>(preferred: Option<&'a Topology>, additional: I) -> Option<Topology>
where
    I: IntoIterator<Item = Option<&'a Topology>>,
{
    let sources: Vec<&Topology> = preferred
        .into_iter()
        .chain(additional.into_iter().flatten())
        .collect();

    if sources.is_empty() {
        debug!("No topology present, nothing to merge");
        return None;
    }

    Some(merge_sources(&sources))
}

/// Collapse repeated peers within one topology.
pub fn dedup(topology: &Topology) -> Topology {
    merge_sources(&[topology])
}

fn merge_sources(sources: &[&Topology]) -> Topology {
    let input_records: usize = sources.iter().map(|t| t.len()).sum();
    let groups = group_by_identity(sources.iter().copied().flat_map(Topology::iter));

    let producers: Vec<PeerRecord> = groups
        .iter()
        .filter_map(|group| {
            if group.len() > 1 {
                trace!(
                    peer = %group[0].identity(),
                    entries = group.len(),
                    "Collapsing duplicate peer entries"
                );
            }
            resolve_group(group)
        })
        .collect();

    debug!(
        sources = sources.len(),
        input_records,
        peers = producers.len(),
        "Merged topologies"
    );

    Topology::new(producers)
}

impl Topology {
    /// See [`dedup`].
    pub fn dedup(&self) -> Topology {
        dedup(self)
    }

    /// Merge with `self` as the preferred topology.
    pub fn merged_with<'a, I>(&'a self, others: I) -> Topology
    where
        I: IntoIterator<Item = &'a Topology>,
    {
        let mut sources = vec![self];
        sources.extend(others);
        merge_sources(&sources)
    }
}
