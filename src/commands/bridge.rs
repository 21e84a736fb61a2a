use anyhow::Result;

use crate::bridge::BridgeProbe;
use crate::cli::{BridgeCommand, Cli};
use crate::commands::resolve_bridge_url;
use crate::config::Config;
use crate::provider::{ProbeResult, ProviderProbe};

pub async fn run(cli: &Cli, cmd: &BridgeCommand) -> Result<()> {
	match cmd {
		BridgeCommand::Status => status(cli).await,
	}
}

async fn status(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let url = resolve_bridge_url(cli, &config);

	println!("Bridge: {url}");
	match BridgeProbe::new(&url).probe().await {
		ProbeResult::MathWallet(_) => println!("Slot:   MathWallet provider detected"),
		ProbeResult::OtherWallet => println!("Slot:   occupied by another wallet family"),
		ProbeResult::NotPresent => println!("Slot:   no wallet bridge reachable"),
	}
	Ok(())
}
