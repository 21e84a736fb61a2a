use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::error::WalletError;
use crate::events::{EventEmitter, WalletEvent};
use crate::provider::{BrowserInstallPrompt, InstallPrompt, ProbeResult, ProviderProbe};
use crate::pubkey::Pubkey;
use crate::transaction::Transaction;

/// Vendor page opened when no compatible wallet is installed.
pub const MATHWALLET_INSTALL_URL: &str = "https://mathwallet.org/";

type FailureHook = Box<dyn Fn(&WalletError) + Send + Sync>;

/// Uniform connect/sign facade over a MathWallet-family provider.
///
/// The adapter owns the cached identity and connection flag, nothing else.
/// The provider itself is re-probed on every access and never cached, so a
/// wallet appearing or disappearing between calls is picked up naturally.
///
/// A failed account retrieval is deliberately quiet: `connect()` still
/// returns Ok, the attempt is rolled back to the disconnected state, and a
/// `Disconnect` event fires. Callers observe connection state (or register
/// a failure hook for diagnostics) rather than catch an error.
pub struct WalletAdapter {
	probe: Arc<dyn ProviderProbe>,
	install_prompt: Box<dyn InstallPrompt>,
	install_url: String,
	failure_hook: Option<FailureHook>,
	events: EventEmitter,
	/// Some iff `connected` is true; both change under this lock.
	identity: Mutex<Option<Pubkey>>,
	connected: AtomicBool,
	in_progress: AtomicBool,
}

impl WalletAdapter {
	pub fn new(probe: Arc<dyn ProviderProbe>) -> Self {
		Self {
			probe,
			install_prompt: Box::new(BrowserInstallPrompt),
			install_url: MATHWALLET_INSTALL_URL.to_owned(),
			failure_hook: None,
			events: EventEmitter::new(),
			identity: Mutex::new(None),
			connected: AtomicBool::new(false),
			in_progress: AtomicBool::new(false),
		}
	}

	/// Replace the install-page side channel (tests, headless hosts).
	pub fn with_install_prompt(mut self, prompt: Box<dyn InstallPrompt>) -> Self {
		self.install_prompt = prompt;
		self
	}

	pub fn with_install_url(mut self, url: impl Into<String>) -> Self {
		self.install_url = url.into();
		self
	}

	/// Register a diagnostic hook invoked with the underlying error when a
	/// connect attempt is rolled back.
	pub fn with_failure_hook(
		mut self,
		hook: impl Fn(&WalletError) + Send + Sync + 'static,
	) -> Self {
		self.failure_hook = Some(Box::new(hook));
		self
	}

	/// Subscribe to `Connect`/`Disconnect` lifecycle events.
	pub fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
		self.events.subscribe()
	}

	pub fn connected(&self) -> bool {
		self.connected.load(Ordering::SeqCst)
	}

	/// This wallet family always asks the user before signing.
	pub fn auto_approve(&self) -> bool {
		false
	}

	/// The connected account, or the placeholder identity when disconnected.
	pub fn public_key(&self) -> Pubkey {
		self.identity
			.lock()
			.expect("wallet state lock")
			.clone()
			.unwrap_or_default()
	}

	/// Request account access from the wallet.
	///
	/// A call arriving while another connect is in flight is a no-op. When
	/// no compatible provider is found, the vendor install page is opened
	/// and `ProviderNotFound` is returned. A provider that refuses the
	/// account request does not produce an error here; the attempt is
	/// rolled back quietly.
	pub async fn connect(&self) -> Result<(), WalletError> {
		if self.in_progress.load(Ordering::SeqCst) {
			return Ok(());
		}

		let provider = match self.probe.probe().await {
			ProbeResult::MathWallet(provider) => provider,
			ProbeResult::NotPresent | ProbeResult::OtherWallet => {
				self.install_prompt.open(&self.install_url);
				return Err(WalletError::ProviderNotFound);
			}
		};

		// Lost a race against a connect that started during our probe.
		if self.in_progress.swap(true, Ordering::SeqCst) {
			return Ok(());
		}

		match provider.get_account().await {
			Ok(key) => {
				{
					let mut identity = self.identity.lock().expect("wallet state lock");
					*identity = Some(key.clone());
					self.connected.store(true, Ordering::SeqCst);
				}
				self.events.emit(WalletEvent::Connect(key));
			}
			Err(err) => {
				if let Some(hook) = &self.failure_hook {
					hook(&err);
				}
				// Roll back to a clean disconnected state. The failed
				// attempt always announces itself, even when no identity
				// had been stored yet.
				self.clear_identity();
				self.events.emit(WalletEvent::Disconnect);
			}
		}

		self.in_progress.store(false, Ordering::SeqCst);
		Ok(())
	}

	/// Drop the cached identity. Idempotent: without one this is a no-op
	/// and no event fires.
	pub fn disconnect(&self) {
		if self.clear_identity() {
			self.events.emit(WalletEvent::Disconnect);
		}
	}

	/// Have the wallet sign a transaction. Without a resolvable provider
	/// the input is returned unchanged, letting callers run in degraded
	/// mode; provider rejections propagate verbatim.
	pub async fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, WalletError> {
		match self.probe.probe().await {
			ProbeResult::MathWallet(provider) => provider.sign_transaction(tx).await,
			ProbeResult::NotPresent | ProbeResult::OtherWallet => Ok(tx),
		}
	}

	/// Batch variant of [`WalletAdapter::sign_transaction`], same fallback.
	pub async fn sign_all_transactions(
		&self,
		txs: Vec<Transaction>,
	) -> Result<Vec<Transaction>, WalletError> {
		match self.probe.probe().await {
			ProbeResult::MathWallet(provider) => provider.sign_all_transactions(txs).await,
			ProbeResult::NotPresent | ProbeResult::OtherWallet => Ok(txs),
		}
	}

	/// Clear identity + connected flag together; true when an identity was
	/// actually dropped.
	fn clear_identity(&self) -> bool {
		let mut identity = self.identity.lock().expect("wallet state lock");
		let had_identity = identity.take().is_some();
		if had_identity {
			self.connected.store(false, Ordering::SeqCst);
		}
		had_identity
	}
}
