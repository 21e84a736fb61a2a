use std::sync::Arc;

use crate::error::WalletError;
use crate::pubkey::Pubkey;
use crate::transaction::Transaction;

/// Capability surface of a MathWallet-family provider. Every operation is
/// performed by the external wallet; nothing is signed locally.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
	/// Ask the wallet for its active account.
	async fn get_account(&self) -> Result<Pubkey, WalletError>;

	/// Present a transaction to the wallet for approval and signing.
	async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, WalletError>;

	/// Batch variant of [`WalletProvider::sign_transaction`].
	async fn sign_all_transactions(
		&self,
		txs: Vec<Transaction>,
	) -> Result<Vec<Transaction>, WalletError>;
}

/// What currently occupies the shared provider slot. Several wallet
/// families can claim the same slot; the marker flags tell them apart.
pub enum ProbeResult {
	/// Nothing is listening.
	NotPresent,
	/// A MathWallet-family provider, ready to use.
	MathWallet(Arc<dyn WalletProvider>),
	/// The slot is taken by a different wallet family.
	OtherWallet,
}

/// Resolves the provider slot. Implementations are queried on every access
/// and must not cache the result: the adapter does not own the wallet's
/// lifecycle, so availability can change between calls.
#[async_trait::async_trait]
pub trait ProviderProbe: Send + Sync {
	async fn probe(&self) -> ProbeResult;
}

/// Opens the vendor's install page when no compatible wallet is found.
pub trait InstallPrompt: Send + Sync {
	fn open(&self, url: &str);
}

/// Production prompt: hand the URL to the system browser.
pub struct BrowserInstallPrompt;

impl InstallPrompt for BrowserInstallPrompt {
	fn open(&self, url: &str) {
		if let Err(err) = opener::open_browser(url) {
			eprintln!("Could not open {url}: {err}");
		}
	}
}
