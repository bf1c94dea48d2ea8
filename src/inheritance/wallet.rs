use leptos::prelude::*;
use log::info;

/// Address handed out by the mock wallet connection.
pub const MOCK_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb";

/// Connected wallet, shared through context.
#[derive(Clone, Copy, Debug)]
pub struct Wallet {
	address: RwSignal<Option<String>>,
}

impl Default for Wallet {
	fn default() -> Self {
		Self::new()
	}
}

impl Wallet {
	pub fn new() -> Self {
		Self {
			address: RwSignal::new(None),
		}
	}

	pub fn connect(&self) {
		info!("wallet connected: {}", MOCK_ADDRESS);
		self.address.set(Some(MOCK_ADDRESS.into()));
	}

	pub fn disconnect(&self) {
		info!("wallet disconnected");
		self.address.set(None);
	}

	pub fn address(&self) -> Option<String> {
		self.address.get()
	}

	pub fn is_connected(&self) -> bool {
		self.address.with(Option::is_some)
	}

	pub fn address_untracked(&self) -> Option<String> {
		self.address.get_untracked()
	}
}

/// `0x742d...0bEb` style abbreviation.
pub fn short_address(address: &str) -> String {
	let chars: Vec<char> = address.chars().collect();
	if chars.len() <= 10 {
		return address.into();
	}
	let head: String = chars[..6].iter().collect();
	let tail: String = chars[chars.len() - 4..].iter().collect();
	format!("{head}...{tail}")
}
