use leptos::prelude::*;
use leptos_router::components::A;

use crate::inheritance::{Wallet, short_address};

#[component]
pub fn Header() -> impl IntoView {
	let wallet = expect_context::<Wallet>();

	view! {
		<header class="app-header">
			<div class="brand">
				<div class="brand-mark">"◆"</div>
				<div>
					<h1>"Heritage"</h1>
					<p class="muted">"Secure Data Inheritance"</p>
				</div>
			</div>

			{move || match wallet.address() {
				Some(address) => {
					view! {
						<div class="wallet">
							<span class="wallet-address">{short_address(&address)}</span>
							<button class="button outline" on:click=move |_| wallet.disconnect()>
								"Disconnect"
							</button>
						</div>
					}
						.into_any()
				}
				None => {
					view! {
						<button class="button" on:click=move |_| wallet.connect()>
							"Connect Wallet"
						</button>
					}
						.into_any()
				}
			}}
		</header>
	}
}

/// Shown in place of the tabs until a wallet is connected.
#[component]
pub fn ConnectPrompt() -> impl IntoView {
	let wallet = expect_context::<Wallet>();

	view! {
		<div class="connect-prompt">
			<h2>"Connect Your Wallet"</h2>
			<p class="muted">"Connect your wallet on Arbitrum testnet to get started"</p>
			<button class="button large" on:click=move |_| wallet.connect()>
				"Connect Wallet"
			</button>
		</div>
	}
}

#[component]
pub fn TabBar() -> impl IntoView {
	view! {
		<nav class="tabs">
			<A href="/">"Inheritance"</A>
			<A href="/receive">"Receive"</A>
			<A href="/dashboard">"Dashboard"</A>
		</nav>
	}
}
