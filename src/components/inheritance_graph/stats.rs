use super::types::{GraphData, NodeRole};

/// Summary figures shown under the graph. Recomputed on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
	pub total_nodes: usize,
	pub max_depth: u32,
	pub chains: usize,
	pub total_links: usize,
}

impl GraphStats {
	pub fn of(data: &GraphData) -> Self {
		let nodes = data.nodes();
		Self {
			total_nodes: nodes.len(),
			// An empty set has no depth at all.
			max_depth: nodes.iter().map(|n| n.level + 1).max().unwrap_or(0),
			chains: nodes.iter().filter(|n| n.role == NodeRole::Root).count(),
			total_links: nodes.iter().map(|n| n.links.len()).sum(),
		}
	}
}
