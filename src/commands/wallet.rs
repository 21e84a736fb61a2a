use anyhow::Result;
use chrono::Utc;

use crate::bridge::BridgeProbe;
use crate::cli::{Cli, WalletCommand};
use crate::commands::{build_adapter, resolve_bridge_url};
use crate::config::Config;
use crate::provider::{ProbeResult, ProviderProbe};

pub async fn run(cli: &Cli, cmd: &WalletCommand) -> Result<()> {
	match cmd {
		WalletCommand::Connect => connect(cli).await,
		WalletCommand::Disconnect => disconnect(),
		WalletCommand::Status => status(cli).await,
	}
}

async fn connect(cli: &Cli) -> Result<()> {
	let mut config = Config::load()?;
	let adapter = build_adapter(cli, &config);

	println!("Requesting account access from the wallet...");
	adapter.connect().await?;

	// A provider that refused the request leaves the adapter disconnected
	// without an error; the state is the signal.
	if !adapter.connected() {
		anyhow::bail!("the wallet did not grant account access");
	}

	let address = adapter.public_key();
	println!("Connected: {address}");

	config.wallet.address = Some(address.to_string());
	config.wallet.connected_at = Some(Utc::now());
	config.save()?;
	println!("Address saved to config.");

	Ok(())
}

fn disconnect() -> Result<()> {
	let mut config = Config::load()?;

	if config.wallet.address.take().is_none() {
		println!("No wallet connected.");
		return Ok(());
	}

	config.wallet.connected_at = None;
	config.save()?;
	println!("Disconnected; stored address cleared.");
	Ok(())
}

async fn status(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let url = resolve_bridge_url(cli, &config);

	let slot = match BridgeProbe::new(&url).probe().await {
		ProbeResult::MathWallet(_) => "MathWallet detected",
		ProbeResult::OtherWallet => "occupied by another wallet family",
		ProbeResult::NotPresent => "not reachable",
	};

	let address = config.wallet.address.as_deref().unwrap_or("not connected");

	println!("Wallet");
	println!("  Address:   {address}");
	if let Some(at) = &config.wallet.connected_at {
		println!("  Connected: {}", at.to_rfc3339());
	}
	println!("  Bridge:    {url} ({slot})");
	Ok(())
}
