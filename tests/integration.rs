//! Integration tests against a live wallet bridge on localhost.
//!
//! The bridge-dependent tests are marked `#[ignore]` by default because
//! they require a running wallet with its companion bridge. Run them
//! explicitly with:
//!
//!   cargo test --test integration -- --ignored

use std::sync::Arc;

use sol_wallet_cli::adapter::WalletAdapter;
use sol_wallet_cli::bridge::{BridgeProbe, DEFAULT_BRIDGE_URL};
use sol_wallet_cli::provider::{ProbeResult, ProviderProbe};
use sol_wallet_cli::transaction::Transaction;

/// Nothing should ever be listening here during tests.
const DEAD_BRIDGE: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn probing_a_dead_endpoint_reports_not_present() {
	match BridgeProbe::new(DEAD_BRIDGE).probe().await {
		ProbeResult::NotPresent => {}
		_ => panic!("a dead endpoint should probe as NotPresent"),
	}
}

#[tokio::test]
async fn signing_passes_through_without_a_bridge() {
	let adapter = WalletAdapter::new(Arc::new(BridgeProbe::new(DEAD_BRIDGE)));
	let tx = Transaction::from_hex("0xdeadbeef").unwrap();

	let signed = adapter.sign_transaction(tx.clone()).await.unwrap();
	assert_eq!(signed, tx);

	let batch = vec![tx.clone(), tx];
	let signed = adapter.sign_all_transactions(batch.clone()).await.unwrap();
	assert_eq!(signed, batch);
}

#[tokio::test]
#[ignore]
async fn bridge_slot_reports_a_wallet_family() {
	match BridgeProbe::new(DEFAULT_BRIDGE_URL).probe().await {
		ProbeResult::MathWallet(_) => println!("MathWallet detected"),
		ProbeResult::OtherWallet => println!("foreign wallet detected"),
		ProbeResult::NotPresent => panic!("no bridge reachable on {DEFAULT_BRIDGE_URL}"),
	}
}

#[tokio::test]
#[ignore]
async fn connect_retrieves_an_account() {
	let adapter = WalletAdapter::new(Arc::new(BridgeProbe::new(DEFAULT_BRIDGE_URL)));
	let mut events = adapter.subscribe();

	adapter.connect().await.expect("no compatible wallet found");

	// The wallet may have refused; connected state is the signal.
	if adapter.connected() {
		assert!(!adapter.public_key().is_placeholder());
		assert!(events.try_recv().is_ok(), "connect event should have fired");
		println!("connected as {}", adapter.public_key());
	} else {
		println!("wallet refused account access");
	}
}
