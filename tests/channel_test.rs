// Integration tests for the method-call channel, end to end against a fake
// connectivity provider.

use std::sync::{Arc, Mutex};

use netbind::channel::{default_registry, MethodCall, MethodOutcome};
use netbind::connectivity::{BindError, CapabilitySet, ConnectivityProvider, NetworkHandle, Transport};

struct FakeProvider {
    networks: Vec<(NetworkHandle, Option<CapabilitySet>)>,
    bound: Mutex<Vec<NetworkHandle>>,
}

impl FakeProvider {
    fn new(networks: Vec<(NetworkHandle, Option<CapabilitySet>)>) -> Self {
        Self {
            networks,
            bound: Mutex::new(Vec::new()),
        }
    }

    fn bound(&self) -> Vec<NetworkHandle> {
        self.bound.lock().unwrap().clone()
    }
}

impl ConnectivityProvider for FakeProvider {
    fn networks(&self) -> Result<Vec<NetworkHandle>, BindError> {
        Ok(self.networks.iter().map(|(h, _)| h.clone()).collect())
    }

    fn capabilities(&self, network: &NetworkHandle) -> Option<CapabilitySet> {
        self.networks
            .iter()
            .find(|(h, _)| h == network)
            .and_then(|(_, caps)| caps.clone())
    }

    fn bind_process(&self, network: &NetworkHandle) -> Result<(), BindError> {
        self.bound.lock().unwrap().push(network.clone());
        Ok(())
    }
}

fn wifi_and_cellular_networks() -> Arc<FakeProvider> {
    Arc::new(FakeProvider::new(vec![
        (
            NetworkHandle::new("wwan0", 1),
            Some(CapabilitySet::new(vec![Transport::Cellular])),
        ),
        (
            NetworkHandle::new("wlan0", 2),
            Some(CapabilitySet::new(vec![Transport::Wifi])),
        ),
    ]))
}

#[tokio::test]
async fn bind_to_wifi_answers_bare_success_and_binds() {
    let provider = wifi_and_cellular_networks();
    let registry = default_registry(Arc::clone(&provider), "network/bind");

    let outcome = registry.dispatch(MethodCall::new("bindToWifi")).await;

    assert_eq!(outcome, MethodOutcome::Success(None));
    assert_eq!(provider.bound(), vec![NetworkHandle::new("wlan0", 2)]);
}

#[tokio::test]
async fn unknown_method_is_not_implemented_with_no_side_effect() {
    let provider = wifi_and_cellular_networks();
    let registry = default_registry(Arc::clone(&provider), "network/bind");

    let outcome = registry.dispatch(MethodCall::new("bindToCellular")).await;

    assert_eq!(outcome, MethodOutcome::NotImplemented);
    assert!(provider.bound().is_empty());
}

#[tokio::test]
async fn no_wifi_network_still_answers_success() {
    let provider = Arc::new(FakeProvider::new(vec![(
        NetworkHandle::new("wwan0", 1),
        Some(CapabilitySet::new(vec![Transport::Cellular])),
    )]));
    let registry = default_registry(Arc::clone(&provider), "network/bind");

    let outcome = registry.dispatch(MethodCall::new("bindToWifi")).await;

    assert_eq!(outcome, MethodOutcome::Success(None));
    assert!(provider.bound().is_empty());
}

#[tokio::test]
async fn empty_network_set_still_answers_success() {
    let provider = Arc::new(FakeProvider::new(vec![]));
    let registry = default_registry(Arc::clone(&provider), "network/bind");

    let outcome = registry.dispatch(MethodCall::new("bindToWifi")).await;

    assert_eq!(outcome, MethodOutcome::Success(None));
    assert!(provider.bound().is_empty());
}

#[tokio::test]
async fn repeat_dispatch_is_idempotent_in_outcome() {
    let provider = wifi_and_cellular_networks();
    let registry = default_registry(Arc::clone(&provider), "network/bind");

    let first = registry.dispatch(MethodCall::new("bindToWifi")).await;
    let second = registry.dispatch(MethodCall::new("bindToWifi")).await;

    assert_eq!(first, second);
    assert_eq!(
        provider.bound(),
        vec![NetworkHandle::new("wlan0", 2), NetworkHandle::new("wlan0", 2)]
    );
}
