use super::state::GraphState;
use super::surface::Surface;

/// Full redraw: clear, edges underneath, nodes on top.
pub fn render(state: &GraphState, surface: &impl Surface) {
	surface.clear(state.config.width, state.config.height);
	draw_edges(state, surface);
	draw_nodes(state, surface);
}

fn draw_edges(state: &GraphState, surface: &impl Surface) {
	let config = &state.config;
	state.data.visit_edges(|from, to| {
		surface.line(
			(from.x, from.y),
			(to.x, to.y),
			&config.edge_color,
			config.edge_width,
		);
	});
}

fn draw_nodes(state: &GraphState, surface: &impl Surface) {
	let config = &state.config;
	for (idx, node) in state.data.nodes().iter().enumerate() {
		let hovered = state.is_hovered(idx);
		let border = if hovered {
			&config.hover_border_color
		} else {
			&config.border_color
		};
		surface.circle(
			(node.x, node.y),
			config.radius(hovered),
			node.role.fill(hovered),
			border,
			config.border_width,
		);
		surface.centered_text(
			&node.id,
			(node.x, node.y),
			&config.label_color,
			&config.label_font,
		);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::inheritance_graph::data::inheritance_network;
	use crate::components::inheritance_graph::state::GraphConfig;

	#[derive(Debug, Clone, PartialEq)]
	enum Op {
		Clear,
		Line((f64, f64), (f64, f64)),
		Circle {
			center: (f64, f64),
			radius: f64,
			fill: String,
			border: String,
		},
		Text(String),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Surface for Recorder {
		fn clear(&self, _: f64, _: f64) {
			self.0.borrow_mut().push(Op::Clear);
		}

		fn line(&self, from: (f64, f64), to: (f64, f64), _: &str, _: f64) {
			self.0.borrow_mut().push(Op::Line(from, to));
		}

		fn circle(&self, center: (f64, f64), radius: f64, fill: &str, border: &str, _: f64) {
			self.0.borrow_mut().push(Op::Circle {
				center,
				radius,
				fill: fill.into(),
				border: border.into(),
			});
		}

		fn centered_text(&self, text: &str, _: (f64, f64), _: &str, _: &str) {
			self.0.borrow_mut().push(Op::Text(text.into()));
		}
	}

	impl Recorder {
		fn take(&self) -> Vec<Op> {
			std::mem::take(&mut *self.0.borrow_mut())
		}
	}

	fn network_state() -> GraphState {
		GraphState::new(inheritance_network().unwrap(), GraphConfig::default())
	}

	#[test]
	fn clears_then_edges_then_nodes() {
		let state = network_state();
		let surface = Recorder::default();
		render(&state, &surface);
		let ops = surface.take();

		assert_eq!(ops[0], Op::Clear);
		assert!(ops[1..9].iter().all(|op| matches!(op, Op::Line(..))));
		assert_eq!(ops[1], Op::Line((400.0, 50.0), (250.0, 150.0)));
		// Nine circles each followed by the id label.
		let nodes = &ops[9..];
		assert_eq!(nodes.len(), 18);
		assert_eq!(nodes[1], Op::Text("A".into()));
		assert_eq!(nodes[17], Op::Text("I".into()));
	}

	#[test]
	fn hovered_node_is_larger_and_darker() {
		let mut state = network_state();
		state.pointer_moved(550.0, 250.0);
		let surface = Recorder::default();
		render(&state, &surface);

		let circles: Vec<_> = surface
			.take()
			.into_iter()
			.filter(|op| matches!(op, Op::Circle { .. }))
			.collect();
		assert_eq!(
			circles[5],
			Op::Circle {
				center: (550.0, 250.0),
				radius: 32.0,
				fill: "#8b5cf6".into(),
				border: "#1e293b".into(),
			}
		);
		assert_eq!(
			circles[0],
			Op::Circle {
				center: (400.0, 50.0),
				radius: 28.0,
				fill: "#60a5fa".into(),
				border: "#ffffff".into(),
			}
		);
	}

	#[test]
	fn one_full_redraw_per_hover_change() {
		let mut state = network_state();
		let surface = Recorder::default();
		let moves = [
			(400.0, 50.0),
			(402.0, 55.0),
			(250.0, 150.0),
			(251.0, 150.0),
			(700.0, 20.0),
			(701.0, 20.0),
		];
		for (x, y) in moves {
			if state.pointer_moved(x, y) {
				render(&state, &surface);
			}
		}
		let ops = surface.take();
		let clears = ops.iter().filter(|op| **op == Op::Clear).count();
		assert_eq!(clears, 3);
		// 1 clear + 8 edges + 9 circles + 9 labels per frame.
		assert_eq!(ops.len(), 3 * 27);
	}
}
