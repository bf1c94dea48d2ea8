pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// An inheritance addressed to the connected wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct InheritanceRecord {
	pub id: String,
	pub file_name: String,
	pub from: String,
	pub received_date: String,
	pub file_size: String,
	pub tags: Vec<String>,
	pub tx_hash: String,
	pub cid: String,
}

impl InheritanceRecord {
	/// Case-insensitive substring match on file name, any tag, or sender.
	pub fn matches(&self, query: &str) -> bool {
		let query = query.to_lowercase();
		self.file_name.to_lowercase().contains(&query)
			|| self.tags.iter().any(|t| t.to_lowercase().contains(&query))
			|| self.from.to_lowercase().contains(&query)
	}

	pub fn gateway_url(&self) -> String {
		format!("{IPFS_GATEWAY}{}", self.cid)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordStatus {
	Available,
	Decrypting,
}

impl RecordStatus {
	/// Status of record `id` given the id currently being downloaded, if any.
	pub fn of(id: &str, downloading: Option<&str>) -> Self {
		if downloading == Some(id) {
			RecordStatus::Decrypting
		} else {
			RecordStatus::Available
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			RecordStatus::Available => "Available",
			RecordStatus::Decrypting => "Decrypting",
		}
	}
}

pub fn filter_records(records: &[InheritanceRecord], query: &str) -> Vec<InheritanceRecord> {
	records.iter().filter(|r| r.matches(query)).cloned().collect()
}

pub fn file_count_label(count: usize) -> String {
	if count == 1 {
		"1 file".into()
	} else {
		format!("{count} files")
	}
}

#[allow(clippy::too_many_arguments)]
fn record(
	id: &str,
	file_name: &str,
	from: &str,
	received_date: &str,
	file_size: &str,
	tags: &[&str],
	tx_hash: &str,
	cid: &str,
) -> InheritanceRecord {
	InheritanceRecord {
		id: id.into(),
		file_name: file_name.into(),
		from: from.into(),
		received_date: received_date.into(),
		file_size: file_size.into(),
		tags: tags.iter().map(|&t| t.into()).collect(),
		tx_hash: tx_hash.into(),
		cid: cid.into(),
	}
}

/// Sample inheritances shown on the receive screen.
pub fn received_inheritances() -> Vec<InheritanceRecord> {
	vec![
		record(
			"inh-001",
			"Family_Will_2024.pdf",
			"0x9f2a35Cc6634C0532925a3b844Bc9e7595f8c1b",
			"2024-11-09",
			"2.4 MB",
			&["will", "legal"],
			"0xabcd1234567890abcdef1234567890abcdef1234567890abcdef1234567890ab",
			"bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
		),
		record(
			"inh-002",
			"Restaurant_Menu_Collection.pdf",
			"0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
			"2024-11-07",
			"8.1 MB",
			&["menu", "restaurant"],
			"0x9876543210abcdef9876543210abcdef9876543210abcdef9876543210abcdef",
			"bafybeihkoviema5eqxcfqt6w2dksxsasnxzwcgvuqzekn5u2hlhqpiyxuy",
		),
		record(
			"inh-003",
			"Property_Deed_Documents.pdf",
			"0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b",
			"2024-11-05",
			"1.8 MB",
			&["property", "legal", "deed"],
			"0x1111222233334444555566667777888899990000aaaabbbbccccddddeeeeffff",
			"bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq",
		),
		record(
			"inh-004",
			"Investment_Portfolio_Summary.pdf",
			"0x8f7e6d5c4b3a2918f7e6d5c4b3a2918f7e6d5c4b",
			"2024-11-03",
			"3.2 MB",
			&["finance", "investment"],
			"0xaaaabbbbccccddddeeeeffffgggghhhhiiiijjjjkkkkllllmmmmnnnnoooopppp",
			"bafybeic2yq3w3yrh3qmdxgiwvgq67jvnqqxcvgbtghp4t4t5hxgf5w7f3a",
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(records: &[InheritanceRecord]) -> Vec<&str> {
		records.iter().map(|r| r.id.as_str()).collect()
	}

	#[test]
	fn empty_query_keeps_everything() {
		let all = received_inheritances();
		assert_eq!(filter_records(&all, "").len(), 4);
	}

	#[test]
	fn matches_file_name_case_insensitively() {
		let all = received_inheritances();
		assert_eq!(ids(&filter_records(&all, "MENU_coll")), ["inh-002"]);
	}

	#[test]
	fn matches_any_tag() {
		let all = received_inheritances();
		assert_eq!(ids(&filter_records(&all, "legal")), ["inh-001", "inh-003"]);
		assert_eq!(ids(&filter_records(&all, "INVEST")), ["inh-004"]);
	}

	#[test]
	fn matches_sender() {
		let all = received_inheritances();
		assert_eq!(ids(&filter_records(&all, "0x742D35")), ["inh-002"]);
	}

	#[test]
	fn no_match_is_empty() {
		let all = received_inheritances();
		assert!(filter_records(&all, "spreadsheet").is_empty());
	}

	#[test]
	fn count_label_pluralizes() {
		assert_eq!(file_count_label(0), "0 files");
		assert_eq!(file_count_label(1), "1 file");
		assert_eq!(file_count_label(4), "4 files");
	}

	#[test]
	fn status_follows_downloading_id() {
		let all = received_inheritances();
		assert_eq!(RecordStatus::of(&all[0].id, Some("inh-001")), RecordStatus::Decrypting);
		assert_eq!(RecordStatus::of(&all[1].id, Some("inh-001")), RecordStatus::Available);
		assert_eq!(RecordStatus::of(&all[1].id, None).label(), "Available");
		assert_eq!(
			all[2].gateway_url(),
			"https://ipfs.io/ipfs/bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq"
		);
	}
}
