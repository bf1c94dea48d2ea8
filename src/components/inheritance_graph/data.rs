use super::types::{GraphData, GraphError, GraphNode, NodeRole};

/// The sample inheritance network shown on the dashboard.
pub fn inheritance_network() -> Result<GraphData, GraphError> {
	use NodeRole::*;

	GraphData::new(vec![
		// Originator
		GraphNode::new("A", "0x742d...0bEb", 0, (400.0, 50.0), Root).with_links(&["B", "C"]),
		// Re-inherited
		GraphNode::new("B", "0x8a5c...2d4f", 1, (250.0, 150.0), Intermediate)
			.with_links(&["D", "E"]),
		GraphNode::new("C", "0x1a2b...9a0b", 1, (550.0, 150.0), Intermediate).with_links(&["F"]),
		GraphNode::new("D", "0x9f2a...8c1b", 2, (150.0, 250.0), Intermediate).with_links(&["G"]),
		GraphNode::new("E", "0x4d5e...7a8b", 2, (350.0, 250.0), Leaf),
		GraphNode::new("F", "0x6f7e...4b3a", 2, (550.0, 250.0), Intermediate)
			.with_links(&["H", "I"]),
		// Final recipients
		GraphNode::new("G", "0x2918...5c4b", 3, (150.0, 350.0), Leaf),
		GraphNode::new("H", "0xaaaa...bbbb", 3, (480.0, 350.0), Leaf),
		GraphNode::new("I", "0xcccc...dddd", 3, (620.0, 350.0), Leaf),
	])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn network_is_valid_and_ordered() {
		let data = inheritance_network().unwrap();
		let ids: Vec<_> = data.nodes().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
		assert_eq!(data.get("F").map(|n| n.links.len()), Some(2));
	}
}
