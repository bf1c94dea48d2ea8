use leptos::prelude::*;
use log::info;

use crate::inheritance::{
	DOWNLOAD_DELAY, InheritanceRecord, RecordStatus, Wallet, file_count_label, filter_records,
	received_inheritances, short_address,
};

/// Lists inheritances addressed to the connected wallet.
#[component]
pub fn Receive() -> impl IntoView {
	let wallet = expect_context::<Wallet>();
	let records = StoredValue::new(received_inheritances());
	let query = RwSignal::new(String::new());
	let downloading = RwSignal::new(None::<String>);

	let filtered = Memo::new(move |_| records.with_value(|all| filter_records(all, &query.get())));

	let download = move |record: InheritanceRecord| {
		downloading.set(Some(record.id.clone()));
		set_timeout(
			move || {
				info!("downloading {}", record.file_name);
				downloading.set(None);
			},
			DOWNLOAD_DELAY,
		);
	};

	let row = move |record: InheritanceRecord| {
		let id = record.id.clone();
		let status = Memo::new(move |_| downloading.with(|d| RecordStatus::of(&id, d.as_deref())));
		let gateway = record.gateway_url();
		let record_dl = record.clone();
		view! {
			<tr>
				<td class="file-cell">{record.file_name.clone()}</td>
				<td title={record.from.clone()}>{short_address(&record.from)}</td>
				<td>{record.received_date.clone()}</td>
				<td>{record.file_size.clone()}</td>
				<td>
					{record
						.tags
						.iter()
						.map(|tag| view! { <span class="tag">{tag.clone()}</span> })
						.collect_view()}
				</td>
				<td>
					<span class="badge badge-status">{move || status.get().label()}</span>
				</td>
				<td class="actions">
					<a
						class="button ghost"
						href={gateway}
						target="_blank"
						rel="noopener noreferrer"
						title={record.tx_hash.clone()}
					>
						"IPFS"
					</a>
					<button
						class="button small"
						disabled=move || status.get() == RecordStatus::Decrypting
						on:click=move |_| download(record_dl.clone())
					>
						{move || match status.get() {
							RecordStatus::Decrypting => "Decrypting",
							RecordStatus::Available => "Download",
						}}
					</button>
				</td>
			</tr>
		}
	};

	view! {
		<div class="receive">
			<div class="page-head">
				<h2>"Received Inheritances"</h2>
				<p class="muted">
					"Files inherited by your wallet: "
					{move || wallet.address().map(|a| short_address(&a)).unwrap_or_default()}
				</p>
			</div>

			<div class="card">
				<div class="toolbar">
					<input
						class="search"
						placeholder="Search by filename, tag, or sender..."
						prop:value=move || query.get()
						on:input=move |ev| query.set(event_target_value(&ev))
					/>
					<span class="badge">{move || file_count_label(filtered.with(Vec::len))}</span>
				</div>

				<table class="records">
					<thead>
						<tr>
							<th>"File"</th>
							<th>"From"</th>
							<th>"Received"</th>
							<th>"Size"</th>
							<th>"Tags"</th>
							<th>"Status"</th>
							<th class="actions">"Actions"</th>
						</tr>
					</thead>
					<tbody>
						<Show
							when=move || filtered.with(|f| !f.is_empty())
							fallback=|| {
								view! {
									<tr>
										<td colspan="7" class="empty">"No inheritances found"</td>
									</tr>
								}
							}
						>
							<For each=move || filtered.get() key=|r| r.id.clone() children=row />
						</Show>
					</tbody>
				</table>
			</div>

			<div class="card info">
				<h3>"About downloads"</h3>
				<ol>
					<li>"Files are verified on-chain to ensure they're intended for your wallet"</li>
					<li>"Decryption happens locally in your browser using your wallet's keys"</li>
					<li>"Original encrypted files remain on IPFS - only you can decrypt them"</li>
				</ol>
			</div>
		</div>
	}
}
