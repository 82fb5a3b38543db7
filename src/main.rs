// netbind — bind process traffic to a Wi-Fi network on demand.
//
// The library is the product; this binary exists so the channel can be
// exercised and observed from a shell. It dispatches one method call
// (argv[1], default "bindToWifi") and prints the outcome.

#[cfg(target_os = "linux")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use netbind::channel::{default_registry, MethodCall};
    use netbind::config::load_config;
    use netbind::connectivity::platform::{BindStrategy, PlatformProvider};

    tracing_subscriber::fmt::init();

    let config = load_config()?;
    let provider = if config.force_legacy_bind {
        PlatformProvider::with_strategy(BindStrategy::DeviceName)
    } else {
        PlatformProvider::new()
    };

    let registry = default_registry(provider, config.channel.clone());
    let method = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bindToWifi".to_string());

    let outcome = registry.dispatch(MethodCall::new(method)).await;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("netbind requires Linux: process-level binding uses SO_BINDTOIFINDEX / SO_BINDTODEVICE");
    std::process::exit(1);
}
