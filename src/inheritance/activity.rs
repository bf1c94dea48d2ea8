/// Direction of a past handoff, seen from the connected wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Sent,
	Received,
}

impl Direction {
	pub fn label(&self) -> &'static str {
		match self {
			Direction::Sent => "Sent",
			Direction::Received => "Received",
		}
	}

	pub fn class(&self) -> &'static str {
		match self {
			Direction::Sent => "activity-sent",
			Direction::Received => "activity-received",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
	pub direction: Direction,
	pub file_name: &'static str,
	pub counterparty: &'static str,
	pub timestamp: &'static str,
}

impl Activity {
	/// "To 0x..." or "From 0x..." depending on direction.
	pub fn counterparty_line(&self) -> String {
		match self.direction {
			Direction::Sent => format!("To {}", self.counterparty),
			Direction::Received => format!("From {}", self.counterparty),
		}
	}
}

/// Headline numbers on the dashboard cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
	pub total_inheritances: u32,
	pub sent: u32,
	pub received: u32,
	pub active_chains: u32,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
	total_inheritances: 12,
	sent: 3,
	received: 4,
	active_chains: 5,
};

pub fn recent_activity() -> Vec<Activity> {
	vec![
		Activity {
			direction: Direction::Sent,
			file_name: "Family_Will_2024.pdf",
			counterparty: "0x8a5c...2d4f",
			timestamp: "2 hours ago",
		},
		Activity {
			direction: Direction::Received,
			file_name: "Restaurant_Menu_Collection.pdf",
			counterparty: "0x742d...0bEb",
			timestamp: "5 hours ago",
		},
		Activity {
			direction: Direction::Sent,
			file_name: "Property_Deed_Documents.pdf",
			counterparty: "0x1a2b...9a0b",
			timestamp: "1 day ago",
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counterparty_line_follows_direction() {
		let entries = recent_activity();
		assert_eq!(entries[0].counterparty_line(), "To 0x8a5c...2d4f");
		assert_eq!(entries[1].counterparty_line(), "From 0x742d...0bEb");
		assert_eq!(entries[1].direction.label(), "Received");
	}
}
