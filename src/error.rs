use thiserror::Error;

/// Failures surfaced by the wallet adapter and the bridge transport.
#[derive(Debug, Error)]
pub enum WalletError {
	/// The provider slot is empty or occupied by a foreign wallet family.
	/// Raised by `connect()` after the vendor install page has been opened.
	#[error("no compatible wallet found (is MathWallet installed?)")]
	ProviderNotFound,

	/// The wallet answered with a JSON-RPC error object, e.g. the user
	/// rejected the account or signing request.
	#[error("wallet rejected the request: {0}")]
	Rpc(String),

	/// Transport failure while talking to the local wallet bridge.
	#[error("wallet bridge unreachable: {0}")]
	Bridge(#[from] reqwest::Error),

	/// The bridge answered with something that is not valid for the method.
	#[error("malformed bridge response: {0}")]
	Protocol(String),

	/// A transaction payload was not valid hex.
	#[error("invalid transaction encoding: {0}")]
	Encoding(#[from] hex::FromHexError),
}
