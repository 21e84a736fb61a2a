use std::fmt;

/// Well-known placeholder account that stands in for "no wallet connected",
/// so callers always receive a value-shaped identity.
pub const DEFAULT_PUBLIC_KEY: &str = "11111111111111111111111111111111";

/// A base58 account identifier as reported by the wallet. The adapter never
/// decodes it; it is an opaque identity on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pubkey(String);

impl Pubkey {
	pub fn new(account: impl Into<String>) -> Self {
		Self(account.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// True when this is the placeholder rather than a real account.
	pub fn is_placeholder(&self) -> bool {
		self.0 == DEFAULT_PUBLIC_KEY
	}
}

impl Default for Pubkey {
	fn default() -> Self {
		Self(DEFAULT_PUBLIC_KEY.into())
	}
}

impl fmt::Display for Pubkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
