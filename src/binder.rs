// Wi-Fi network binder.
//
// The one real operation of this crate: snapshot the networks the OS knows
// about, pick the first one advertising Wi-Fi transport, bind the process's
// outbound traffic to it. Best-effort throughout: failures are logged and
// swallowed, absence of a match is a silent no-op.

use tracing::{debug, info, instrument, warn};

use crate::connectivity::{ConnectivityProvider, Transport};

/// Binds process traffic to a Wi-Fi-capable network, if one is available.
pub struct NetworkBinder<P> {
    provider: P,
}

impl<P: ConnectivityProvider> NetworkBinder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Bind process traffic to the first Wi-Fi-capable network in the
    /// provider's enumeration order.
    ///
    /// Always runs to completion. Whether a network was actually bound is
    /// observable only through subsequent routing behavior, never through a
    /// return value or error.
    #[instrument(skip(self))]
    pub fn bind_to_wifi(&self) {
        let networks = match self.provider.networks() {
            Ok(networks) => networks,
            Err(err) => {
                warn!(%err, "network enumeration failed; leaving routing untouched");
                return;
            }
        };

        for network in &networks {
            let caps = match self.provider.capabilities(network) {
                Some(caps) => caps,
                None => {
                    debug!(interface = %network.name, "no capability information; skipping");
                    continue;
                }
            };
            if !caps.has_transport(Transport::Wifi) {
                continue;
            }

            // First match wins; enumeration order is the tie-break.
            match self.provider.bind_process(network) {
                Ok(()) => {
                    info!(interface = %network.name, "bound process traffic to Wi-Fi network");
                }
                Err(err) => {
                    warn!(interface = %network.name, %err, "bind failed; leaving routing untouched");
                }
            }
            return;
        }

        debug!(
            count = networks.len(),
            "no Wi-Fi-capable network found; nothing to do"
        );
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
