use leptos::prelude::*;

use crate::components::inheritance_graph::{InheritanceGraph, inheritance_network};
use crate::inheritance::{Activity, DASHBOARD_STATS, recent_activity};

#[component]
fn StatCard(
	label: &'static str,
	value: u32,
	footer: &'static str,
	#[prop(optional)] accent: &'static str,
) -> impl IntoView {
	view! {
		<div class={format!("card stat-card {accent}")}>
			<p class="muted">{label}</p>
			<p class="stat-card-value">{value}</p>
			<p class="stat-card-footer">{footer}</p>
		</div>
	}
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
	let direction = activity.direction;
	view! {
		<li class={format!("activity {}", direction.class())}>
			<div class="activity-main">
				<span class="activity-kind">{direction.label()}</span>
				<span class="muted">" · "</span>
				<span>{activity.file_name}</span>
			</div>
			<div class="activity-meta muted">
				<span>{activity.counterparty_line()}</span>
				<span>" · "</span>
				<span>{activity.timestamp}</span>
			</div>
			<span class="badge">{direction.label()}</span>
		</li>
	}
}

/// Dashboard: headline cards, the inheritance network, and recent activity.
#[component]
pub fn Dashboard() -> impl IntoView {
	let stats = DASHBOARD_STATS;
	let graph = inheritance_network().map(|data| {
		let data = Signal::derive(move || data.clone());
		view! { <InheritanceGraph data=data /> }
	});

	view! {
		<div class="dashboard">
			<div class="stat-cards">
				<StatCard label="Total Inheritances" value={stats.total_inheritances} footer="12% from last month" />
				<StatCard label="Sent" value={stats.sent} footer="Inheritances created" accent="accent-blue" />
				<StatCard label="Received" value={stats.received} footer="Available to download" accent="accent-green" />
				<StatCard label="Active Chains" value={stats.active_chains} footer="Inheritance chains" accent="accent-purple" />
			</div>

			<section>
				<div class="section-head">
					<div>
						<h2>"Inheritance Network"</h2>
						<p class="muted">"Visualization of inheritance relationships and chain dependencies"</p>
					</div>
					<span class="badge">{format!("{} chains", stats.active_chains)}</span>
				</div>
				<div class="card graph-card">
					<ErrorBoundary fallback=|errors| {
						view! {
							<p>"The network could not be displayed:"</p>
							<ul>
								{move || {
									errors
										.get()
										.into_iter()
										.map(|(_, e)| view! { <li>{e.to_string()}</li> })
										.collect_view()
								}}
							</ul>
						}
					}>{graph}</ErrorBoundary>
				</div>
			</section>

			<section>
				<h2>"Recent Activity"</h2>
				<ul class="card activity-list">
					{recent_activity()
						.into_iter()
						.map(|activity| view! { <ActivityRow activity=activity /> })
						.collect_view()}
				</ul>
			</section>
		</div>
	}
}
