//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod inheritance;
mod pages;

use crate::components::header::{ConnectPrompt, Header, TabBar};
use crate::inheritance::Wallet;

// Top-Level pages
use crate::pages::dashboard::Dashboard;
use crate::pages::inherit::Inherit;
use crate::pages::not_found::NotFound;
use crate::pages::receive::Receive;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The app shell: header, wallet gate, and routed tabs.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let wallet = Wallet::new();
	provide_context(wallet);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Heritage" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Header />
			<main class="content">
				<Show when=move || wallet.is_connected() fallback=|| view! { <ConnectPrompt /> }>
					<TabBar />
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Inherit />
						<Route path=path!("/receive") view=Receive />
						<Route path=path!("/dashboard") view=Dashboard />
					</Routes>
				</Show>
			</main>
		</Router>
	}
}
