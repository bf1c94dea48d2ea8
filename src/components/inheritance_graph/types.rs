use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Presentational classification of a node, independent of its link count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
	Root,
	Intermediate,
	Leaf,
}

impl NodeRole {
	pub fn as_str(&self) -> &'static str {
		match self {
			NodeRole::Root => "root",
			NodeRole::Intermediate => "intermediate",
			NodeRole::Leaf => "leaf",
		}
	}

	/// Fill color for the node circle, darker when hovered.
	pub fn fill(&self, hovered: bool) -> &'static str {
		match (self, hovered) {
			(NodeRole::Root, false) => "#60a5fa",
			(NodeRole::Root, true) => "#3b82f6",
			(NodeRole::Leaf, false) => "#34d399",
			(NodeRole::Leaf, true) => "#10b981",
			(NodeRole::Intermediate, false) => "#a78bfa",
			(NodeRole::Intermediate, true) => "#8b5cf6",
		}
	}

	/// CSS class used for the swatch in the tooltip and legend.
	pub fn swatch_class(&self) -> &'static str {
		match self {
			NodeRole::Root => "swatch swatch-root",
			NodeRole::Intermediate => "swatch swatch-intermediate",
			NodeRole::Leaf => "swatch swatch-leaf",
		}
	}
}

impl fmt::Display for NodeRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub level: u32,
	pub x: f64,
	pub y: f64,
	pub links: Vec<String>,
	pub role: NodeRole,
}

impl GraphNode {
	pub fn new(id: &str, label: &str, level: u32, (x, y): (f64, f64), role: NodeRole) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			level,
			x,
			y,
			links: Vec::new(),
			role,
		}
	}

	pub fn with_links(mut self, links: &[&str]) -> Self {
		self.links = links.iter().map(|&l| l.into()).collect();
		self
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		let (dx, dy) = (x - self.x, y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
	#[error("duplicate node id `{id}`")]
	DuplicateNode { id: String },
	#[error("node `{node}` links to unknown node `{target}`")]
	DanglingLink { node: String, target: String },
}

/// An immutable, validated node set. Iteration order is authoring order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	nodes: Vec<GraphNode>,
	index: HashMap<String, usize>,
}

impl GraphData {
	/// Builds the node set, rejecting duplicate ids and links to unknown nodes.
	pub fn new(nodes: Vec<GraphNode>) -> Result<Self, GraphError> {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}
		for node in &nodes {
			if let Some(target) = node.links.iter().find(|t| !index.contains_key(*t)) {
				return Err(GraphError::DanglingLink {
					node: node.id.clone(),
					target: target.clone(),
				});
			}
		}
		Ok(Self { nodes, index })
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn get(&self, id: &str) -> Option<&GraphNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// Visits every (source, target) pair in link order, skipping targets that
	/// cannot be resolved.
	pub fn visit_edges(&self, mut f: impl FnMut(&GraphNode, &GraphNode)) {
		for node in &self.nodes {
			for target in node.links.iter().filter_map(|id| self.get(id)) {
				f(node, target);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_dangling_link() {
		let nodes = vec![
			GraphNode::new("A", "a", 0, (0.0, 0.0), NodeRole::Root).with_links(&["B", "Z"]),
			GraphNode::new("B", "b", 1, (10.0, 0.0), NodeRole::Leaf),
		];
		assert_eq!(
			GraphData::new(nodes),
			Err(GraphError::DanglingLink {
				node: "A".into(),
				target: "Z".into(),
			})
		);
	}

	#[test]
	fn rejects_duplicate_id() {
		let nodes = vec![
			GraphNode::new("A", "a", 0, (0.0, 0.0), NodeRole::Root),
			GraphNode::new("A", "again", 1, (10.0, 0.0), NodeRole::Leaf),
		];
		let err = GraphData::new(nodes).unwrap_err();
		assert_eq!(err.to_string(), "duplicate node id `A`");
	}

	#[test]
	fn visit_edges_follows_link_order() {
		let nodes = vec![
			GraphNode::new("A", "a", 0, (0.0, 0.0), NodeRole::Root).with_links(&["C", "B"]),
			GraphNode::new("B", "b", 1, (10.0, 0.0), NodeRole::Leaf),
			GraphNode::new("C", "c", 1, (20.0, 0.0), NodeRole::Leaf),
		];
		let data = GraphData::new(nodes).unwrap();
		let mut edges = Vec::new();
		data.visit_edges(|s, t| edges.push((s.id.clone(), t.id.clone())));
		assert_eq!(
			edges,
			vec![
				("A".to_string(), "C".to_string()),
				("A".to_string(), "B".to_string())
			]
		);
	}

	#[test]
	fn visit_edges_skips_unresolved_target() {
		let nodes = vec![
			GraphNode::new("A", "a", 0, (0.0, 0.0), NodeRole::Root).with_links(&["Z", "B"]),
			GraphNode::new("B", "b", 1, (10.0, 0.0), NodeRole::Leaf),
		];
		let index = [("A".to_string(), 0), ("B".to_string(), 1)].into_iter().collect();
		let data = GraphData { nodes, index };
		let mut count = 0;
		data.visit_edges(|_, t| {
			assert_eq!(t.id, "B");
			count += 1;
		});
		assert_eq!(count, 1);
	}

	#[test]
	fn role_colors_darken_on_hover() {
		assert_eq!(NodeRole::Root.fill(false), "#60a5fa");
		assert_eq!(NodeRole::Root.fill(true), "#3b82f6");
		assert_eq!(NodeRole::Leaf.to_string(), "leaf");
	}
}
