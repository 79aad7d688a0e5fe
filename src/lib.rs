//! Bilingual family tree: people, typed relationships and a force-directed
//! graph of the family, rendered client-side with Leptos.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod i18n;
pub mod model;
pub mod naming;
pub mod store;
pub mod table;

mod components;
mod pages;

pub use config::{GraphSettings, Theme};
pub use error::{Error, Result};
pub use i18n::Locale;
pub use naming::resolve_display_name;
pub use store::FamilyStore;

use crate::context::AppState;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes `/` and `/:lang` to the family page; anything else is a 404.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let app = AppState::new(GraphSettings::bundled());
	provide_context(app);

	view! {
		<Html
			attr:dir="ltr"
			attr:data-theme=move || match app.theme.get() {
				Theme::Light => "light",
				Theme::Dark => "dark",
			}
		/>
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/:lang") view=Home />
			</Routes>
		</Router>
	}
}
