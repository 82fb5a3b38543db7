// Network data model — handles, transports, capability sets.
//
// Everything here is an OS-supplied snapshot: a handle identifies one active
// network interface, its capability set describes the transports that network
// advertises. Nothing is owned past the duration of a single binding call.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Opaque identifier for one active network known to the OS.
///
/// On Linux a network is an interface, so the handle carries the interface
/// name and its kernel index. Callers treat it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkHandle {
    /// Interface name, e.g. "wlan0".
    pub name: String,
    /// Kernel interface index.
    pub ifindex: u32,
}

impl NetworkHandle {
    pub fn new(name: impl Into<String>, ifindex: u32) -> Self {
        Self {
            name: name.into(),
            ifindex,
        }
    }
}

/// Transport category a network advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Wifi,
    Cellular,
    Ethernet,
}

/// OS-reported capability descriptor for one network handle.
///
/// Read-only: queried, never mutated. A handle for which the OS reports no
/// capabilities at all is represented by the absence of a `CapabilitySet`,
/// not by an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    transports: Vec<Transport>,
}

impl CapabilitySet {
    pub fn new(transports: Vec<Transport>) -> Self {
        Self { transports }
    }

    /// Whether this network advertises the given transport.
    pub fn has_transport(&self, transport: Transport) -> bool {
        self.transports.contains(&transport)
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }
}

/// Failures a connectivity provider can report.
///
/// Callers above the provider treat these as best-effort: logged, never
/// propagated to the channel.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("failed to enumerate networks: {0}")]
    Enumerate(io::Error),

    #[error("failed to bind process to {interface}: {source}")]
    Bind {
        interface: String,
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_set_transport_predicate() {
        let caps = CapabilitySet::new(vec![Transport::Wifi, Transport::Cellular]);
        assert!(caps.has_transport(Transport::Wifi));
        assert!(caps.has_transport(Transport::Cellular));
        assert!(!caps.has_transport(Transport::Ethernet));
    }

    #[test]
    fn empty_capability_set_has_no_transports() {
        let caps = CapabilitySet::default();
        assert!(!caps.has_transport(Transport::Wifi));
    }
}
