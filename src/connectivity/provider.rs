// Connectivity provider trait
//
// The injected seam over the OS connectivity subsystem: enumerate networks,
// inspect capabilities, bind the process. The real Linux backend lives in
// `platform`; tests substitute fakes.

use std::sync::Arc;

use super::types::{BindError, CapabilitySet, NetworkHandle};

/// Query/control surface over the OS connectivity subsystem.
pub trait ConnectivityProvider: Send + Sync {
    /// Point-in-time snapshot of the networks the OS currently knows about.
    ///
    /// Order is OS-defined and not guaranteed stable across calls.
    fn networks(&self) -> Result<Vec<NetworkHandle>, BindError>;

    /// Capability set for one network, or `None` when the OS has no
    /// information for that handle. `None` is not an error.
    fn capabilities(&self, network: &NetworkHandle) -> Option<CapabilitySet>;

    /// Bind all of this process's future outbound connections to `network`.
    ///
    /// The effect persists until re-bound or the process exits; no un-bind
    /// is exposed.
    fn bind_process(&self, network: &NetworkHandle) -> Result<(), BindError>;
}

impl<P: ConnectivityProvider + ?Sized> ConnectivityProvider for Arc<P> {
    fn networks(&self) -> Result<Vec<NetworkHandle>, BindError> {
        (**self).networks()
    }

    fn capabilities(&self, network: &NetworkHandle) -> Option<CapabilitySet> {
        (**self).capabilities(network)
    }

    fn bind_process(&self, network: &NetworkHandle) -> Result<(), BindError> {
        (**self).bind_process(network)
    }
}
