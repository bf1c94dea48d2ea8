use super::types::{GraphData, GraphNode};

pub const NODE_RADIUS: f64 = 28.0;
pub const HOVER_GROWTH: f64 = 4.0;

/// Appearance and surface settings for the graph view.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub width: f64,
	pub height: f64,
	pub node_radius: f64,
	pub hover_growth: f64,
	pub edge_color: String,
	pub edge_width: f64,
	pub border_width: f64,
	pub border_color: String,
	pub hover_border_color: String,
	pub label_color: String,
	pub label_font: String,
	/// Offset of the tooltip from the pointer, on both axes.
	pub tooltip_offset: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 420.0,
			node_radius: NODE_RADIUS,
			hover_growth: HOVER_GROWTH,
			edge_color: "#d4d4d8".into(),
			edge_width: 2.0,
			border_width: 3.0,
			border_color: "#ffffff".into(),
			hover_border_color: "#1e293b".into(),
			label_color: "#ffffff".into(),
			label_font: "bold 14px sans-serif".into(),
			tooltip_offset: 15.0,
		}
	}
}

impl GraphConfig {
	/// Hit radius matches the un-hovered draw radius.
	pub fn hit_radius(&self) -> f64 {
		self.node_radius
	}

	pub fn radius(&self, hovered: bool) -> f64 {
		if hovered {
			self.node_radius + self.hover_growth
		} else {
			self.node_radius
		}
	}
}

pub struct GraphState {
	pub data: GraphData,
	pub config: GraphConfig,
	hovered: Option<usize>,
}

impl GraphState {
	pub fn new(data: GraphData, config: GraphConfig) -> Self {
		Self {
			data,
			config,
			hovered: None,
		}
	}

	/// First node in canonical order whose center lies strictly within the
	/// hit radius of `(x, y)`.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let radius = self.config.hit_radius();
		self.data
			.nodes()
			.iter()
			.position(|node| node.distance_to(x, y) < radius)
	}

	/// Returns true when the selection actually changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		true
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
		let hit = self.node_at_position(x, y);
		self.set_hover(hit)
	}

	pub fn pointer_left(&mut self) -> bool {
		self.set_hover(None)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn hovered_node(&self) -> Option<&GraphNode> {
		self.hovered.and_then(|i| self.data.nodes().get(i))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::inheritance_graph::data::inheritance_network;
	use crate::components::inheritance_graph::types::NodeRole;

	fn network_state() -> GraphState {
		GraphState::new(inheritance_network().unwrap(), GraphConfig::default())
	}

	#[test]
	fn hits_every_recorded_position() {
		let state = network_state();
		for (i, node) in state.data.nodes().iter().enumerate() {
			assert_eq!(state.node_at_position(node.x, node.y), Some(i), "{}", node.id);
		}
	}

	#[test]
	fn misses_far_from_every_node() {
		let state = network_state();
		assert_eq!(state.node_at_position(780.0, 410.0), None);
		assert_eq!(state.node_at_position(-100.0, -100.0), None);
	}

	#[test]
	fn hit_radius_is_exclusive() {
		let state = network_state();
		// A sits at (400, 50); nothing else is near.
		assert_eq!(state.node_at_position(400.0, 50.0 + 27.9), Some(0));
		assert_eq!(state.node_at_position(400.0, 50.0 + 28.0), None);
	}

	#[test]
	fn overlapping_nodes_resolve_to_first() {
		let data = GraphData::new(vec![
			GraphNode::new("P", "p", 0, (100.0, 100.0), NodeRole::Root),
			GraphNode::new("Q", "q", 1, (120.0, 100.0), NodeRole::Leaf),
		])
		.unwrap();
		let state = GraphState::new(data, GraphConfig::default());
		// Equidistant from both centers.
		assert_eq!(state.node_at_position(110.0, 100.0), Some(0));
		// Closer to Q, still inside P.
		assert_eq!(state.node_at_position(118.0, 100.0), Some(0));
		// Only inside Q.
		assert_eq!(state.node_at_position(140.0, 100.0), Some(1));
	}

	#[test]
	fn hover_changes_are_reported_once() {
		let mut state = network_state();
		assert!(state.pointer_moved(400.0, 50.0));
		assert!(!state.pointer_moved(405.0, 52.0));
		assert_eq!(state.hovered_node().map(|n| n.id.as_str()), Some("A"));
		assert!(state.pointer_moved(250.0, 150.0));
		assert_eq!(state.hovered_node().map(|n| n.id.as_str()), Some("B"));
		assert!(state.pointer_left());
		assert!(!state.pointer_left());
		assert!(state.hovered_node().is_none());
	}
}
