//! Topomerge: peer topology descriptors and their merge engine
//!
//! A topology lists the peers a node dials at startup. This crate reads and writes
//! topology files and merges several of them (a base file plus overrides) into one,
//! keeping one entry per `host:port` and resolving metadata field by field.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod topology;

pub use codec::{decode, encode, read_topology, write_topology};
pub use error::{ConfigError, TopologyError};
pub use merge::{dedup, merge};
pub use topology::{identity_of, same_identity, PeerIdentity, PeerRecord, Topology};
