// Method-call channel — the caller-facing boundary.
//
// The surrounding application invokes named operations over a channel and
// receives a completion signal back. Dispatch is a table from operation name
// to handler with an explicit NotImplemented default branch.

pub mod bind;
pub mod registry;
pub mod types;

pub use bind::BindToWifi;
pub use registry::{MethodHandler, MethodRegistry};
pub use types::{MethodCall, MethodOutcome};

use std::sync::Arc;

use crate::binder::NetworkBinder;
use crate::connectivity::ConnectivityProvider;

/// Build the registry this shim exposes: one channel, one operation.
pub fn default_registry<P>(provider: P, channel: impl Into<String>) -> MethodRegistry
where
    P: ConnectivityProvider + 'static,
{
    let mut registry = MethodRegistry::new(channel);
    registry.register(Arc::new(BindToWifi::new(NetworkBinder::new(provider))));
    registry
}
