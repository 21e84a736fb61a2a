use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "sol-wallet",
	about = "Keyless CLI for signing Solana transactions through a MathWallet-family wallet.",
	version
)]
pub struct Cli {
	/// Override the wallet bridge endpoint URL.
	#[arg(long, global = true)]
	pub bridge_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Connect, inspect, and disconnect the external wallet.
	Wallet {
		#[command(subcommand)]
		command: WalletCommand,
	},

	/// Sign transaction payloads with the connected wallet.
	Tx {
		#[command(subcommand)]
		command: TxCommand,
	},

	/// Inspect the local wallet bridge.
	Bridge {
		#[command(subcommand)]
		command: BridgeCommand,
	},
}

// -- Wallet subcommands --

#[derive(Subcommand)]
pub enum WalletCommand {
	/// Request account access and store the wallet address.
	Connect,

	/// Forget the stored wallet address.
	Disconnect,

	/// Show the stored address and probe the bridge.
	Status,
}

// -- Tx subcommands --

#[derive(Subcommand)]
pub enum TxCommand {
	/// Sign a single transaction payload.
	Sign {
		/// Hex-encoded transaction payload (0x-prefixed or bare).
		payload: Option<String>,

		/// Read the payload from a file instead.
		#[arg(long)]
		file: Option<PathBuf>,
	},

	/// Sign every transaction in a JSON array of hex payloads.
	SignAll {
		/// File containing the JSON array.
		#[arg(long)]
		file: PathBuf,
	},
}

// -- Bridge subcommands --

#[derive(Subcommand)]
pub enum BridgeCommand {
	/// Report which wallet family (if any) occupies the bridge.
	Status,
}
