use tokio::sync::broadcast;

use crate::pubkey::Pubkey;

/// Events to buffer per subscriber before the channel starts lagging.
const EVENT_CAPACITY: usize = 16;

/// Lifecycle notifications published by the wallet adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
	/// Account access was granted; carries the wallet's public key.
	Connect(Pubkey),
	/// The cached identity was dropped.
	Disconnect,
}

/// Broadcast-backed emitter the adapter owns. Hosts subscribe for a
/// receiver; emitting with no live subscriber is not an error.
#[derive(Debug)]
pub struct EventEmitter {
	sender: broadcast::Sender<WalletEvent>,
}

impl EventEmitter {
	pub fn new() -> Self {
		let (sender, _) = broadcast::channel(EVENT_CAPACITY);
		Self { sender }
	}

	pub fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
		self.sender.subscribe()
	}

	pub fn emit(&self, event: WalletEvent) {
		// A send error only means nobody is listening right now.
		let _ = self.sender.send(event);
	}
}

impl Default for EventEmitter {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn subscriber_receives_events_in_order() {
		let emitter = EventEmitter::new();
		let mut rx = emitter.subscribe();

		emitter.emit(WalletEvent::Connect(Pubkey::new("ABC123")));
		emitter.emit(WalletEvent::Disconnect);

		assert_eq!(rx.recv().await.unwrap(), WalletEvent::Connect(Pubkey::new("ABC123")));
		assert_eq!(rx.recv().await.unwrap(), WalletEvent::Disconnect);
	}

	#[test]
	fn emitting_without_subscribers_does_not_panic() {
		let emitter = EventEmitter::new();
		emitter.emit(WalletEvent::Disconnect);
	}

	#[tokio::test]
	async fn late_subscribers_miss_earlier_events() {
		let emitter = EventEmitter::new();
		emitter.emit(WalletEvent::Disconnect);

		let mut rx = emitter.subscribe();
		assert!(rx.try_recv().is_err());
	}
}
