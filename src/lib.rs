// netbind - process-level Wi-Fi network binding
// Library exports

pub mod binder;
pub mod channel;
pub mod config;
pub mod connectivity;

pub use binder::NetworkBinder;
pub use channel::{default_registry, MethodCall, MethodOutcome, MethodRegistry};
pub use config::{load_config, Config};
pub use connectivity::{CapabilitySet, ConnectivityProvider, NetworkHandle, Transport};
