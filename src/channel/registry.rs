// Method registry — dispatch table from operation name to handler.
//
// Unknown names get an explicit NotImplemented answer, never a silent
// success. Handler failures are logged and answered as bare success; every
// operation on this channel is best-effort.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::types::{MethodCall, MethodOutcome};

/// Handler for one named operation on the channel.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Operation name this handler answers to.
    fn name(&self) -> &str;

    /// Run the operation. `Ok(None)` is a bare completion signal.
    async fn handle(&self, arguments: Value) -> Result<Option<Value>>;
}

/// Dispatch table for one method-call channel.
pub struct MethodRegistry {
    channel: String,
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl MethodRegistry {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its own name. Re-registering a name replaces
    /// the previous handler.
    pub fn register(&mut self, handler: Arc<dyn MethodHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Dispatch one call to its handler, or answer NotImplemented.
    #[instrument(skip(self, call), fields(channel = %self.channel, method = %call.method))]
    pub async fn dispatch(&self, call: MethodCall) -> MethodOutcome {
        let handler = match self.handlers.get(&call.method) {
            Some(handler) => handler,
            None => {
                warn!("unknown method; answering not implemented");
                return MethodOutcome::NotImplemented;
            }
        };

        debug!("dispatching method call");
        match handler.handle(call.arguments).await {
            Ok(value) => MethodOutcome::Success(value),
            Err(err) => {
                warn!(%err, "handler failed; answering bare success");
                MethodOutcome::Success(None)
            }
        }
    }
}
