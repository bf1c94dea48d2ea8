use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{GraphConfig, GraphState};
use super::stats::GraphStats;
use super::types::{GraphData, GraphNode, NodeRole};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

#[component]
pub fn InheritanceGraph(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: GraphConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height, offset) = (config.width, config.height, config.tooltip_offset);
	let state = Rc::new(RefCell::new(GraphState::new(data.get_untracked(), config)));
	let hovered = RwSignal::new(None::<GraphNode>);
	let pointer = RwSignal::new((0.0_f64, 0.0_f64));

	// Redraws once on mount and again whenever the hovered node changes.
	let state_draw = state.clone();
	Effect::new(move |_| {
		let current = hovered.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("2d context unavailable, skipping graph draw");
			return;
		};
		debug!(
			"redrawing graph, hovered = {:?}",
			current.as_ref().map(|n| n.id.as_str())
		);
		render::render(&state_draw.borrow(), &ctx);
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		pointer.set((ev.client_x() as f64, ev.client_y() as f64));

		let mut s = state_mm.borrow_mut();
		if s.pointer_moved(x, y) {
			let node = s.hovered_node().cloned();
			drop(s);
			hovered.set(node);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if state_ml.borrow_mut().pointer_left() {
			hovered.set(None);
		}
	};

	let stats = move || GraphStats::of(&data.get());

	view! {
		<div class="graph-wrap">
			<canvas
				node_ref=canvas_ref
				class="inheritance-graph"
				width={width.to_string()}
				height={height.to_string()}
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
			/>

			{move || {
				hovered
					.get()
					.map(|node| {
						let (px, py) = pointer.get();
						view! {
							<div
								class="graph-tooltip"
								style:left={format!("{}px", px + offset)}
								style:top={format!("{}px", py + offset)}
							>
								<div class="graph-tooltip-title">
									<span class={node.role.swatch_class()} />
									<span>{node.label.clone()}</span>
								</div>
								<div class="graph-tooltip-body">
									<div>"Level: " {node.level}</div>
									<div>"Type: " {node.role.as_str()}</div>
									<div>"Connections: " {node.links.len()}</div>
								</div>
							</div>
						}
					})
			}}

			<div class="graph-legend">
				<LegendEntry role=NodeRole::Root text="Root (Originator)" />
				<LegendEntry role=NodeRole::Intermediate text="Intermediate (Re-inherited)" />
				<LegendEntry role=NodeRole::Leaf text="Leaf (Final recipient)" />
			</div>

			<div class="graph-stats">
				<StatTile label="Total Nodes" value={Signal::derive(move || stats().total_nodes.to_string())} />
				<StatTile label="Max Depth" value={Signal::derive(move || stats().max_depth.to_string())} />
				<StatTile label="Chains" value={Signal::derive(move || stats().chains.to_string())} />
				<StatTile label="Total Links" value={Signal::derive(move || stats().total_links.to_string())} />
			</div>
		</div>
	}
}

#[component]
fn LegendEntry(role: NodeRole, text: &'static str) -> impl IntoView {
	view! {
		<div class="legend-entry">
			<span class={role.swatch_class()} />
			<span>{text}</span>
		</div>
	}
}

#[component]
fn StatTile(label: &'static str, value: Signal<String>) -> impl IntoView {
	view! {
		<div class="stat-tile">
			<p class="stat-label">{label}</p>
			<p class="stat-value">{move || value.get()}</p>
		</div>
	}
}
