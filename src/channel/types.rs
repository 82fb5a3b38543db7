// Method-call channel types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named operation invocation arriving over the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,

    /// Arguments payload. The operations registered here take none, but the
    /// channel carries whatever the caller sends.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }
}

/// What the caller hears back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodOutcome {
    /// The operation ran to completion. `None` is a bare completion signal.
    Success(Option<Value>),
    /// No handler is registered under the requested name.
    NotImplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arguments_default_to_null() {
        let call: MethodCall = serde_json::from_str(r#"{"method": "bindToWifi"}"#).unwrap();
        assert_eq!(call.method, "bindToWifi");
        assert_eq!(call.arguments, Value::Null);
    }
}
