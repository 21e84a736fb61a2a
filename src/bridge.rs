use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::WalletError;
use crate::provider::{ProbeResult, ProviderProbe, WalletProvider};
use crate::pubkey::Pubkey;
use crate::transaction::Transaction;

/// Where a wallet extension's companion bridge listens by default.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:8765";

/// Thin JSON-RPC client for the local wallet bridge.
///
/// The bridge is the wallet's half of the conversation: it owns the keys
/// and the approval UI. This client only ships requests across and unwraps
/// the `result`/`error` envelope. No timeouts and no retries; a request
/// the user never answers simply stays pending.
pub struct BridgeClient {
	url: String,
	http: reqwest::Client,
}

impl BridgeClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.to_owned(),
			http: reqwest::Client::new(),
		}
	}

	async fn call(&self, method: &str, params: Value) -> Result<Value, WalletError> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": method,
			"params": params
		});

		let resp: Value = self.http.post(&self.url).json(&body).send().await?.json().await?;

		if let Some(err) = resp.get("error").filter(|e| !e.is_null()) {
			return Err(WalletError::Rpc(err.to_string()));
		}

		resp.get("result")
			.cloned()
			.ok_or_else(|| WalletError::Protocol("response has no result field".into()))
	}

	/// Fetch the marker flags of whatever wallet currently owns the bridge.
	pub async fn capabilities(&self) -> Result<Capabilities, WalletError> {
		let result = self.call("getCapabilities", json!([])).await?;
		serde_json::from_value(result)
			.map_err(|e| WalletError::Protocol(format!("bad capabilities object: {e}")))
	}
}

/// Marker flags distinguishing the wallet families that can occupy the
/// bridge. Flags a wallet does not report default to false.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Capabilities {
	pub is_math_wallet: bool,
	pub is_phantom: bool,
}

/// [`WalletProvider`] over the bridge protocol.
pub struct BridgeProvider {
	client: BridgeClient,
}

impl BridgeProvider {
	pub fn new(client: BridgeClient) -> Self {
		Self { client }
	}
}

#[async_trait::async_trait]
impl WalletProvider for BridgeProvider {
	async fn get_account(&self) -> Result<Pubkey, WalletError> {
		let result = self.client.call("getAccount", json!([])).await?;
		let account = result
			.as_str()
			.ok_or_else(|| WalletError::Protocol("getAccount should return a string".into()))?;
		Ok(Pubkey::new(account))
	}

	async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, WalletError> {
		let result = self.client.call("signTransaction", json!([tx.to_hex()])).await?;
		let signed = result.as_str().ok_or_else(|| {
			WalletError::Protocol("signTransaction should return a hex string".into())
		})?;
		Transaction::from_hex(signed)
	}

	async fn sign_all_transactions(
		&self,
		txs: Vec<Transaction>,
	) -> Result<Vec<Transaction>, WalletError> {
		let payloads: Vec<String> = txs.iter().map(Transaction::to_hex).collect();
		let result = self
			.client
			.call("signAllTransactions", json!([payloads]))
			.await?;

		let items = result.as_array().ok_or_else(|| {
			WalletError::Protocol("signAllTransactions should return an array".into())
		})?;

		items
			.iter()
			.map(|item| {
				let s = item.as_str().ok_or_else(|| {
					WalletError::Protocol("signed transaction should be a hex string".into())
				})?;
				Transaction::from_hex(s)
			})
			.collect()
	}
}

/// Probes the bridge endpoint: this is the Rust-side rendition of checking
/// the shared browser global for a provider object.
pub struct BridgeProbe {
	url: String,
}

impl BridgeProbe {
	pub fn new(url: &str) -> Self {
		Self { url: url.to_owned() }
	}
}

#[async_trait::async_trait]
impl ProviderProbe for BridgeProbe {
	async fn probe(&self) -> ProbeResult {
		// A fresh handle every probe; availability changes between calls
		// are picked up without explicit invalidation.
		let client = BridgeClient::new(&self.url);
		match client.capabilities().await {
			Ok(caps) if caps.is_math_wallet => {
				ProbeResult::MathWallet(Arc::new(BridgeProvider::new(client)))
			}
			Ok(_) => ProbeResult::OtherWallet,
			Err(_) => ProbeResult::NotPresent,
		}
	}
}
