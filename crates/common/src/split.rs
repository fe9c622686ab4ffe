//! The contract between connectors and the scheduler for units of scan work.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::net::SocketAddr;

/// A unit of scan work handed from the planner to a worker.
pub trait ConnectorSplit: Debug + Send + Sync {
    /// Hosts that hold the split's data locally. Empty means the split may be
    /// scheduled on any worker.
    fn addresses(&self) -> &[SocketAddr];

    /// Key/value projection shown by introspection tooling. Never used for
    /// scheduling decisions.
    fn split_info(&self) -> BTreeMap<String, String>;

    /// Estimated bytes retained by this split while it is in flight.
    fn retained_size_in_bytes(&self) -> usize;

    /// Whether a worker without local data may execute the split.
    fn is_remotely_accessible(&self) -> bool {
        true
    }
}
