// Linux connectivity provider.
//
// Networks are enumerated from /sys/class/net and classified from sysfs
// attributes: a `wireless/` directory means Wi-Fi, wwan*/rmnet* naming means
// cellular, an ARPHRD_ETHER link type otherwise means Ethernet.
//
// Binding uses SO_BINDTOIFINDEX (per-interface-index, kernel 5.0+) when the
// kernel has it and falls back to SO_BINDTODEVICE (by name) on older ones.
// The probe runs once at construction, not inline per call.

use std::fs;
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use once_cell::sync::Lazy;
use socket2::{Domain, Protocol, Socket, Type};
use tracing::{debug, info, warn};

use super::provider::ConnectivityProvider;
use super::types::{BindError, CapabilitySet, NetworkHandle, Transport};

/// ARPHRD_ETHER from if_arp.h.
const LINK_TYPE_ETHER: u32 = 1;

/// How process-level binding is applied to sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStrategy {
    /// SO_BINDTOIFINDEX — bind by interface index (kernel 5.0+).
    IfIndex,
    /// SO_BINDTODEVICE — bind by interface name (legacy fallback).
    DeviceName,
}

#[derive(Debug, Clone)]
struct BoundNetwork {
    handle: NetworkHandle,
    strategy: BindStrategy,
}

/// The network this process is currently bound to, if any. Written on bind,
/// consulted when new sockets are opened through [`apply_to_socket`]. Last
/// writer wins.
static BOUND: Lazy<RwLock<Option<BoundNetwork>>> = Lazy::new(|| RwLock::new(None));

/// Connectivity provider backed by sysfs and socket options.
pub struct PlatformProvider {
    sysfs_root: PathBuf,
    strategy: BindStrategy,
}

impl PlatformProvider {
    /// Probe the kernel once and build a provider using the newest available
    /// binding mechanism.
    pub fn new() -> Self {
        Self::with_strategy(probe_strategy())
    }

    /// Build a provider with a fixed strategy, skipping the probe.
    pub fn with_strategy(strategy: BindStrategy) -> Self {
        info!(?strategy, "using binding strategy");
        Self {
            sysfs_root: PathBuf::from("/sys/class/net"),
            strategy,
        }
    }

    #[cfg(test)]
    fn with_sysfs_root(root: impl Into<PathBuf>, strategy: BindStrategy) -> Self {
        Self {
            sysfs_root: root.into(),
            strategy,
        }
    }

    pub fn strategy(&self) -> BindStrategy {
        self.strategy
    }

    /// Apply the recorded process-level binding to a socket. No-op when the
    /// process has not been bound.
    pub fn apply_to_socket(socket: &Socket) -> Result<(), BindError> {
        let slot = BOUND.read().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(bound) => bind_socket(socket, &bound.handle, bound.strategy),
            None => Ok(()),
        }
    }

    /// Currently recorded process binding, for diagnostics.
    pub fn bound_network() -> Option<NetworkHandle> {
        let slot = BOUND.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|bound| bound.handle.clone())
    }
}

impl Default for PlatformProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityProvider for PlatformProvider {
    fn networks(&self) -> Result<Vec<NetworkHandle>, BindError> {
        let entries = fs::read_dir(&self.sysfs_root).map_err(BindError::Enumerate)?;
        let mut networks = Vec::new();

        for entry in entries {
            let entry = entry.map_err(BindError::Enumerate)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == "lo" {
                continue;
            }
            match read_ifindex(&entry.path()) {
                Some(ifindex) => networks.push(NetworkHandle::new(name, ifindex)),
                None => debug!(interface = %name, "no ifindex; skipping"),
            }
        }

        debug!(count = networks.len(), "enumerated networks");
        Ok(networks)
    }

    fn capabilities(&self, network: &NetworkHandle) -> Option<CapabilitySet> {
        let dir = self.sysfs_root.join(&network.name);
        // Interface can vanish between enumeration and lookup.
        if !dir.is_dir() {
            return None;
        }

        let mut transports = Vec::new();
        if dir.join("wireless").is_dir() || dir.join("phy80211").is_dir() {
            transports.push(Transport::Wifi);
        }
        if network.name.starts_with("wwan") || network.name.starts_with("rmnet") {
            transports.push(Transport::Cellular);
        }
        if transports.is_empty() && read_link_type(&dir) == Some(LINK_TYPE_ETHER) {
            transports.push(Transport::Ethernet);
        }

        Some(CapabilitySet::new(transports))
    }

    fn bind_process(&self, network: &NetworkHandle) -> Result<(), BindError> {
        // Confirm the strategy works against this interface before recording
        // it as the process default.
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)).map_err(
            |source| BindError::Bind {
                interface: network.name.clone(),
                source,
            },
        )?;
        bind_socket(&socket, network, self.strategy)?;

        let mut slot = BOUND.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(BoundNetwork {
            handle: network.clone(),
            strategy: self.strategy,
        });
        info!(
            interface = %network.name,
            ifindex = network.ifindex,
            strategy = ?self.strategy,
            "process traffic bound"
        );
        Ok(())
    }
}

fn bind_socket(
    socket: &Socket,
    network: &NetworkHandle,
    strategy: BindStrategy,
) -> Result<(), BindError> {
    let result = match strategy {
        BindStrategy::IfIndex => set_bind_to_ifindex(socket, network.ifindex),
        BindStrategy::DeviceName => socket.bind_device(Some(network.name.as_bytes())),
    };
    result.map_err(|source| BindError::Bind {
        interface: network.name.clone(),
        source,
    })
}

fn set_bind_to_ifindex(socket: &Socket, ifindex: u32) -> io::Result<()> {
    let ret = unsafe {
        libc::setsockopt(
            socket.as_raw_fd(),
            libc::SOL_SOCKET,
            libc::SO_BINDTOIFINDEX,
            &ifindex as *const u32 as *const libc::c_void,
            std::mem::size_of::<u32>() as libc::socklen_t,
        )
    };
    if ret == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Decide which binding mechanism this kernel supports. Index 0 clears any
/// binding, so a successful probe leaves no trace.
fn probe_strategy() -> BindStrategy {
    let socket = match Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)) {
        Ok(socket) => socket,
        Err(err) => {
            warn!(%err, "could not open probe socket; assuming legacy device-name binding");
            return BindStrategy::DeviceName;
        }
    };
    match set_bind_to_ifindex(&socket, 0) {
        Ok(()) => BindStrategy::IfIndex,
        Err(err) => {
            debug!(%err, "SO_BINDTOIFINDEX unavailable; falling back to SO_BINDTODEVICE");
            BindStrategy::DeviceName
        }
    }
}

fn read_ifindex(dir: &Path) -> Option<u32> {
    fs::read_to_string(dir.join("ifindex"))
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn read_link_type(dir: &Path) -> Option<u32> {
    fs::read_to_string(dir.join("type"))
        .ok()?
        .trim()
        .parse()
        .ok()
}
