// Configuration structs

use serde::{Deserialize, Serialize};

/// Channel name the registry answers on, kept from the application this
/// shim serves.
pub const DEFAULT_CHANNEL: &str = "network/bind";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Channel the method registry is exposed on.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Pin the legacy SO_BINDTODEVICE strategy instead of probing for
    /// SO_BINDTOIFINDEX. Operational escape hatch; off by default.
    #[serde(default)]
    pub force_legacy_bind: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            force_legacy_bind: false,
        }
    }
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}
