use leptos::prelude::*;
use leptos_meta::{Html, Title};
use leptos_router::hooks::use_params_map;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::graph_search::GraphSearch;
use crate::components::people_table::PeopleTable;
use crate::components::relationship_table::RelationshipTable;
use crate::components::toolbar::{DisplayToggles, LocaleSwitcher, SignInButton};
use crate::components::tr;
use crate::context::AppState;
use crate::graph::build_graph;
use crate::i18n::Locale;

/// Graph, tables and forms for the locale in the `:lang` segment.
#[component]
pub fn Home() -> impl IntoView {
	let app = expect_context::<AppState>();
	let params = use_params_map();
	let locale = Signal::derive(move || {
		params.with(|p| Locale::from_route(p.get("lang").as_deref()))
	});

	let settings = app.settings.get_value();
	let simulation = settings.simulation.clone();
	let graph = Memo::new(move |_| {
		build_graph(&app.people(), &app.relationships(), locale.get(), app.theme.get(), &settings, app.seed)
	});
	let signed_in = move || app.identity.with(Option::is_some);

	view! {
		<Html attr:lang=move || locale.get().code() />
		<Title text=tr(locale, |d| d.title) />
		<header class="toolbar">
			<h1>{tr(locale, |d| d.title)}</h1>
			<LocaleSwitcher locale=locale />
			<DisplayToggles locale=locale />
			<SignInButton locale=locale />
		</header>

		<Show
			when=signed_in
			fallback=move || view! { <p class="signed-out">{tr(locale, |d| d.not_signed_in)}</p> }
		>
			<div class="graph-panel">
				<GraphSearch graph=graph locale=locale />
				<ForceGraphCanvas
					graph=graph
					theme=app.theme
					hover_disabled=app.disable_hover
					selected=app.selected
					simulation=simulation.clone()
				/>
			</div>
			<PeopleTable locale=locale />
			<RelationshipTable locale=locale />
		</Show>
	}
}
