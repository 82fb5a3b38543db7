// The bindToWifi operation.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::registry::MethodHandler;
use crate::binder::NetworkBinder;
use crate::connectivity::ConnectivityProvider;

/// Channel handler that binds process traffic to a Wi-Fi network.
///
/// Completion is signaled unconditionally; whether a bind actually happened
/// is never reported back to the caller.
pub struct BindToWifi<P> {
    binder: NetworkBinder<P>,
}

impl<P: ConnectivityProvider> BindToWifi<P> {
    pub fn new(binder: NetworkBinder<P>) -> Self {
        Self { binder }
    }
}

#[async_trait]
impl<P: ConnectivityProvider + 'static> MethodHandler for BindToWifi<P> {
    fn name(&self) -> &str {
        "bindToWifi"
    }

    async fn handle(&self, _arguments: Value) -> Result<Option<Value>> {
        self.binder.bind_to_wifi();
        Ok(None)
    }
}
