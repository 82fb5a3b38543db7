// Connectivity module — the OS-facing query/control surface.
//
// `ConnectivityProvider` is the injected seam over the OS connectivity
// subsystem: enumerate active networks, inspect their capability sets, bind
// the process to one. `platform` is the real Linux backend; tests substitute
// fake providers.

pub mod provider;
pub mod types;

#[cfg(target_os = "linux")]
pub mod platform;

pub use provider::ConnectivityProvider;
pub use types::{BindError, CapabilitySet, NetworkHandle, Transport};
