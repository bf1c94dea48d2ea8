pub const EXPLORER_TX_URL: &str = "https://sepolia.arbiscan.io/tx/";

const HEX: &[u8] = b"0123456789abcdef";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// What the mock submission reports back. None of these values exist anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Receipt {
	pub tx_hash: String,
	pub secret_id: String,
	pub cid: String,
}

fn random_string(alphabet: &[u8], len: usize, random: &mut impl FnMut() -> f64) -> String {
	(0..len)
		.map(|_| {
			// random() is in [0, 1); clamp anyway so 1.0 cannot index past the end.
			let i = ((random() * alphabet.len() as f64) as usize).min(alphabet.len() - 1);
			alphabet[i] as char
		})
		.collect()
}

impl Receipt {
	/// `random` yields values in `[0, 1)`; `now_ms` is the epoch time in milliseconds.
	pub fn generate(mut random: impl FnMut() -> f64, now_ms: f64) -> Self {
		Self {
			tx_hash: format!("0x{}", random_string(HEX, 64, &mut random)),
			secret_id: format!("inheritance-{}", now_ms as u64),
			cid: format!("bafybeig{}", random_string(BASE36, 13, &mut random)),
		}
	}

	pub fn explorer_url(&self) -> String {
		format!("{EXPLORER_TX_URL}{}", self.tx_hash)
	}
}
