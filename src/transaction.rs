use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WalletError;

/// An opaque serialized transaction. The adapter forwards these to the
/// wallet for signing and never inspects or rewrites the bytes itself;
/// equality is byte equality, so an unsigned passthrough is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	bytes: Vec<u8>,
}

impl Transaction {
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Parse the 0x-prefixed (or bare) hex wire encoding.
	pub fn from_hex(s: &str) -> Result<Self, WalletError> {
		let clean = s.strip_prefix("0x").unwrap_or(s);
		Ok(Self { bytes: hex::decode(clean)? })
	}

	/// Encode for the bridge protocol and CLI output.
	pub fn to_hex(&self) -> String {
		format!("0x{}", hex::encode(&self.bytes))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}
}

// On the wire a transaction is always its hex string.

impl Serialize for Transaction {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex())
	}
}

impl<'de> Deserialize<'de> for Transaction {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		Self::from_hex(&s).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_prefix_is_optional() {
		let with = Transaction::from_hex("0xdeadbeef").unwrap();
		let without = Transaction::from_hex("deadbeef").unwrap();
		assert_eq!(with, without);
		assert_eq!(with.to_hex(), "0xdeadbeef");
	}

	#[test]
	fn rejects_garbage() {
		assert!(Transaction::from_hex("0xnothex").is_err());
		assert!(Transaction::from_hex("abc").is_err(), "odd-length hex");
	}

	#[test]
	fn serde_uses_the_hex_form() {
		let tx = Transaction::from_bytes(vec![0xde, 0xad]);
		let json = serde_json::to_string(&tx).unwrap();
		assert_eq!(json, "\"0xdead\"");

		let back: Transaction = serde_json::from_str(&json).unwrap();
		assert_eq!(back, tx);
	}
}
