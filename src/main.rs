use anyhow::Result;
use clap::Parser;

use sol_wallet_cli::cli::{Cli, Command};
use sol_wallet_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	match &cli.command {
		Command::Wallet { command } => commands::wallet::run(&cli, command).await,
		Command::Tx { command } => commands::tx::run(&cli, command).await,
		Command::Bridge { command } => commands::bridge::run(&cli, command).await,
	}
}
