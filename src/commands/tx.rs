use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::{Cli, TxCommand};
use crate::commands::build_adapter;
use crate::config::Config;
use crate::transaction::Transaction;

pub async fn run(cli: &Cli, cmd: &TxCommand) -> Result<()> {
	match cmd {
		TxCommand::Sign { payload, file } => sign(cli, payload.as_deref(), file.as_deref()).await,
		TxCommand::SignAll { file } => sign_all(cli, file).await,
	}
}

async fn sign(cli: &Cli, payload: Option<&str>, file: Option<&Path>) -> Result<()> {
	let raw = match (payload, file) {
		(Some(p), None) => p.trim().to_owned(),
		(None, Some(f)) => std::fs::read_to_string(f)
			.with_context(|| format!("could not read {}", f.display()))?
			.trim()
			.to_owned(),
		_ => anyhow::bail!("provide the payload either inline or via --file, not both"),
	};
	let tx = Transaction::from_hex(&raw)?;

	let config = Config::load()?;
	let adapter = build_adapter(cli, &config);
	let signed = adapter.sign_transaction(tx.clone()).await?;

	if signed == tx {
		eprintln!("No wallet detected; transaction returned unsigned.");
	}
	println!("{}", signed.to_hex());
	Ok(())
}

async fn sign_all(cli: &Cli, file: &PathBuf) -> Result<()> {
	let content = std::fs::read_to_string(file)
		.with_context(|| format!("could not read {}", file.display()))?;
	let txs: Vec<Transaction> = serde_json::from_str(&content)
		.context("expected a JSON array of hex-encoded transactions")?;

	let config = Config::load()?;
	let adapter = build_adapter(cli, &config);
	let signed = adapter.sign_all_transactions(txs.clone()).await?;

	if signed == txs {
		eprintln!("No wallet detected; transactions returned unsigned.");
	}
	println!("{}", serde_json::to_string_pretty(&signed)?);
	Ok(())
}
