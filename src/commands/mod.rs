pub mod bridge;
pub mod tx;
pub mod wallet;

use std::sync::Arc;

use crate::adapter::WalletAdapter;
use crate::bridge::BridgeProbe;
use crate::cli::Cli;
use crate::config::Config;

/// Resolve the bridge URL from CLI flag or config.
pub fn resolve_bridge_url(cli: &Cli, config: &Config) -> String {
	cli.bridge_url
		.clone()
		.unwrap_or_else(|| config.bridge.url.clone())
}

/// Build a wallet adapter over the configured bridge endpoint.
pub fn build_adapter(cli: &Cli, config: &Config) -> WalletAdapter {
	let url = resolve_bridge_url(cli, config);
	WalletAdapter::new(Arc::new(BridgeProbe::new(&url)))
		.with_install_url(config.bridge.install_url.clone())
		.with_failure_hook(|err| eprintln!("Wallet refused the request: {err}"))
}
