use leptos::prelude::*;
use leptos_router::components::A;
use log::{info, warn};
use web_sys::{Event, HtmlInputElement, KeyboardEvent};

use crate::inheritance::{Draft, PdfFile, Receipt, SUBMIT_DELAY, Wallet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
	Input,
	Processing,
	Complete,
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
	view! {
		<div class="field-box">
			<p class="field-label">{label}</p>
			<p class="field-value">{value}</p>
		</div>
	}
}

#[component]
fn Processing() -> impl IntoView {
	view! {
		<div class="card centered">
			<div class="spinner" />
			<h2>"Processing Inheritance"</h2>
			<p class="muted">"Encrypting data and recording on-chain..."</p>
			<ul class="steps">
				<li class="step-active">"Encrypting PDF with AES-GCM"</li>
				<li class="step-pending">"Uploading to IPFS"</li>
				<li class="step-pending">"Recording inheritance on-chain"</li>
			</ul>
		</div>
	}
}

#[component]
fn HowItWorks() -> impl IntoView {
	view! {
		<div class="card info">
			<h3>"How it works"</h3>
			<ol>
				<li>"Your PDF is encrypted locally with AES-GCM before leaving your browser"</li>
				<li>"The encrypted file is uploaded to IPFS for decentralized storage"</li>
				<li>"Inheritance record is created on-chain with the CID hash and recipient"</li>
				<li>"Only the designated successor can decrypt and download the file"</li>
			</ol>
		</div>
	}
}

/// Create an inheritance: successor, PDF and tags, then a mock submission.
#[component]
pub fn Inherit() -> impl IntoView {
	let wallet = expect_context::<Wallet>();
	let step = RwSignal::new(Step::Input);
	let draft = RwSignal::new(Draft::default());
	let tag_input = RwSignal::new(String::new());
	let receipt = RwSignal::new(None::<Receipt>);

	let file = Memo::new(move |_| draft.with(|d| d.file.clone()));
	let tags = Memo::new(move |_| draft.with(|d| d.tags.clone()));
	let can_submit = Memo::new(move |_| draft.with(Draft::can_submit));

	let on_file = move |ev: Event| {
		let input: HtmlInputElement = event_target(&ev);
		let Some(picked) = input.files().and_then(|files| files.get(0)) else {
			warn!("file input changed without a file");
			return;
		};
		match PdfFile::accept(&picked.name(), &picked.type_(), picked.size()) {
			Some(pdf) => draft.update(|d| d.file = Some(pdf)),
			None => warn!("ignoring non-PDF upload {}", picked.name()),
		}
	};

	let add_tag = move || {
		let input = tag_input.get_untracked();
		let mut added = false;
		draft.update(|d| added = d.tags.add(&input));
		if added {
			tag_input.set(String::new());
		}
	};

	let submit = move || {
		if !can_submit.get_untracked() {
			return;
		}
		info!(
			"creating inheritance from {} for {}",
			wallet.address_untracked().unwrap_or_default(),
			draft.with_untracked(|d| d.successor.clone())
		);
		step.set(Step::Processing);
		set_timeout(
			move || {
				let created = Receipt::generate(js_sys::Math::random, js_sys::Date::now());
				info!("inheritance {} recorded as {}", created.secret_id, created.tx_hash);
				receipt.set(Some(created));
				step.set(Step::Complete);
			},
			SUBMIT_DELAY,
		);
	};

	let reset = move || {
		draft.set(Draft::default());
		tag_input.set(String::new());
		receipt.set(None);
		step.set(Step::Input);
	};

	let file_view = move || match file.get() {
		Some(pdf) => view! {
			<div class="file-chip">
				<div>
					<p>{pdf.name.clone()}</p>
					<p class="muted">{pdf.size_label()}</p>
				</div>
				<button class="button ghost small" on:click=move |_| draft.update(|d| d.file = None)>
					"×"
				</button>
			</div>
		}
		.into_any(),
		None => view! {
			<label class="dropzone">
				<p>"Click to upload PDF"</p>
				<p class="muted">"PDF files only, up to 50MB"</p>
				<input type="file" accept=".pdf,application/pdf" class="hidden" on:change=on_file />
			</label>
		}
		.into_any(),
	};

	let input_view = move || {
		view! {
			<div class="page-head">
				<h2>"Create Inheritance"</h2>
				<p class="muted">"Upload a PDF file and designate a successor wallet"</p>
			</div>

			<div class="card form">
				<p class="notice">
					"Your PDF will be encrypted client-side before being uploaded to IPFS. Only the designated successor will be able to decrypt and download it."
				</p>

				<label class="field">
					<span>"Successor Wallet Address"</span>
					<input
						placeholder="0x..."
						prop:value=move || draft.with(|d| d.successor.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							draft.update(|d| d.successor = value);
						}
					/>
					<small class="muted">"The wallet address that will inherit this data"</small>
				</label>

				<div class="field">
					<span>"Upload PDF File"</span>
					{file_view}
				</div>

				<div class="field">
					<span>"Tags (Optional)"</span>
					<div class="tag-entry">
						<input
							placeholder="Add a tag (e.g., menu, contract, will)"
							prop:value=move || tag_input.get()
							on:input=move |ev| tag_input.set(event_target_value(&ev))
							on:keydown=move |ev: KeyboardEvent| {
								if ev.key() == "Enter" {
									ev.prevent_default();
									add_tag();
								}
							}
						/>
						<button
							class="button outline"
							disabled=move || tag_input.with(|t| t.trim().is_empty())
							on:click=move |_| add_tag()
						>
							"+"
						</button>
					</div>
					<div class="tags">
						<For
							each=move || tags.get().as_slice().to_vec()
							key=|tag| tag.clone()
							children=move |tag: String| {
								let removed = tag.clone();
								view! {
									<span class="tag">
										{tag}
										<button on:click=move |_| draft.update(|d| d.tags.remove(&removed))>
											"×"
										</button>
									</span>
								}
							}
						/>
					</div>
					<small class="muted">"Add tags to categorize and organize your inheritances"</small>
				</div>

				<button class="button wide" disabled=move || !can_submit.get() on:click=move |_| submit()>
					"Create Inheritance"
				</button>
			</div>

			<HowItWorks />
		}
	};

	let complete_view = move || {
		let result = receipt.get_untracked().unwrap_or_default();
		let done = draft.get_untracked();
		let explorer = result.explorer_url();
		let tags = done.tags.as_slice().to_vec();
		view! {
			<div class="card">
				<div class="centered">
					<h2>"Inheritance Created Successfully"</h2>
					<p class="muted">
						"Your data has been encrypted and the inheritance has been recorded on-chain"
					</p>
				</div>

				<Field label="Inheritance ID" value={result.secret_id} />
				<Field label="IPFS CID" value={result.cid} />
				<div class="field-box">
					<p class="field-label">
						"Transaction Hash "
						<a href={explorer} target="_blank" rel="noopener noreferrer">"↗"</a>
					</p>
					<p class="field-value">{result.tx_hash}</p>
				</div>
				<Field label="Recipient" value={done.successor} />
				{(!done.tags.is_empty())
					.then(|| {
						view! {
							<div class="field-box">
								<p class="field-label">"Tags"</p>
								<div class="tags">
									{tags
										.into_iter()
										.map(|tag| view! { <span class="tag">{tag}</span> })
										.collect_view()}
								</div>
							</div>
						}
					})}

				<div class="actions">
					<button class="button outline" on:click=move |_| reset()>
						"Create Another"
					</button>
					<A href="/dashboard">
						<span class="button">"View Dashboard"</span>
					</A>
				</div>
			</div>
		}
	};

	view! {
		<div class="inherit">
			{move || match step.get() {
				Step::Input => input_view().into_any(),
				Step::Processing => view! { <Processing /> }.into_any(),
				Step::Complete => complete_view().into_any(),
			}}
		</div>
	}
}
