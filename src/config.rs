use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapter::MATHWALLET_INSTALL_URL;
use crate::bridge::DEFAULT_BRIDGE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub bridge: BridgeConfig,
	pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
	pub url: String,
	pub install_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
	pub address: Option<String>,
	pub connected_at: Option<DateTime<Utc>>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			bridge: BridgeConfig {
				url: DEFAULT_BRIDGE_URL.into(),
				install_url: MATHWALLET_INSTALL_URL.into(),
			},
			wallet: WalletConfig {
				address: None,
				connected_at: None,
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.sol-wallet/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".sol-wallet")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_sensible() {
		let c = Config::default();
		assert_eq!(c.bridge.url, "http://127.0.0.1:8765");
		assert_eq!(c.bridge.install_url, "https://mathwallet.org/");
		assert!(c.wallet.address.is_none());
		assert!(c.wallet.connected_at.is_none());
	}

	#[test]
	fn toml_roundtrip() {
		let mut c = Config::default();
		c.wallet.address = Some("ABC123".into());
		c.wallet.connected_at = Some(Utc::now());

		let serialized = toml::to_string_pretty(&c).unwrap();
		let parsed: Config = toml::from_str(&serialized).unwrap();

		assert_eq!(parsed.wallet.address.as_deref(), Some("ABC123"));
		assert_eq!(parsed.wallet.connected_at, c.wallet.connected_at);
		assert_eq!(parsed.bridge.url, c.bridge.url);
	}

	#[test]
	fn missing_wallet_fields_deserialize_as_none() {
		let parsed: Config = toml::from_str(
			"[bridge]\nurl = \"http://127.0.0.1:9000\"\ninstall_url = \"https://mathwallet.org/\"\n\n[wallet]\n",
		)
		.unwrap();
		assert_eq!(parsed.bridge.url, "http://127.0.0.1:9000");
		assert!(parsed.wallet.address.is_none());
	}
}
