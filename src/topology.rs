//! Descriptor Model
//!
//! A topology lists the peer nodes a node should dial at startup. Each entry is a
//! [`PeerRecord`]; two records refer to the same peer when their [`PeerIdentity`]
//! (host address and port) match exactly.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Peer list for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Peers to connect to, in file order. May contain the same identity twice.
    #[serde(rename = "Producers", default, deserialize_with = "null_as_empty")]
    pub producers: Vec<PeerRecord>,
}

/// `"Producers": null` is written by older tooling for an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PeerRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PeerRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Connection details for one peer plus optional metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRecord {
    /// DNS name or IP literal of the peer.
    #[serde(rename = "addr")]
    pub host_address: String,

    /// TCP port of the peer.
    pub port: u16,

    /// Number of addresses the host name may resolve to. Should be 1 for IP literals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valency: Option<u32>,

    #[serde(rename = "node", default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

/// The (host address, port) pair that decides whether two records are the same peer.
///
/// Compared exactly: no case folding, no normalization, no DNS resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerIdentity<'a> {
    pub host_address: &'a str,
    pub port: u16,
}

impl fmt::Display for PeerIdentity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_address, self.port)
    }
}

/// Identity of a record.
pub fn identity_of(record: &PeerRecord) -> PeerIdentity<'_> {
    PeerIdentity {
        host_address: &record.host_address,
        port: record.port,
    }
}

/// Whether two records refer to the same peer. Metadata fields are ignored.
pub fn same_identity(a: &PeerRecord, b: &PeerRecord) -> bool {
    identity_of(a) == identity_of(b)
}

impl PeerRecord {
    /// Create a record with no metadata.
    pub fn new(host_address: impl Into<String>, port: u16) -> Self {
        Self {
            host_address: host_address.into(),
            port,
            valency: None,
            node_name: None,
            friendly_name: None,
            operator: None,
        }
    }

    pub fn with_valency(mut self, valency: u32) -> Self {
        self.valency = Some(valency);
        self
    }

    pub fn with_node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = Some(node_name.into());
        self
    }

    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn identity(&self) -> PeerIdentity<'_> {
        identity_of(self)
    }

    /// See [`same_identity`].
    pub fn same_as(&self, other: &PeerRecord) -> bool {
        same_identity(self, other)
    }
}

impl Topology {
    pub fn new(producers: Vec<PeerRecord>) -> Self {
        Self { producers }
    }

    pub fn producers(&self) -> &[PeerRecord] {
        &self.producers
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeerRecord> {
        self.producers.iter()
    }

    /// First record with the given identity, if any.
    pub fn find(&self, identity: PeerIdentity<'_>) -> Option<&PeerRecord> {
        self.producers.iter().find(|r| r.identity() == identity)
    }

    /// Number of distinct peer identities listed.
    pub fn distinct_identities(&self) -> usize {
        self.producers
            .iter()
            .map(PeerRecord::identity)
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}

impl FromIterator<PeerRecord> for Topology {
    fn from_iter<I: IntoIterator<Item = PeerRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Topology {
    type Item = PeerRecord;
    type IntoIter = std::vec::IntoIter<PeerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.producers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Topology {
    type Item = &'a PeerRecord;
    type IntoIter = std::slice::Iter<'a, PeerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.producers.iter()
    }
}
