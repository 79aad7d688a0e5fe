use leptos::prelude::*;

use super::tr;
use crate::context::AppState;
use crate::graph::{Graph, search_nodes};
use crate::i18n::Locale;

/// Search box over node labels; picking a hit selects and centers the node.
#[component]
pub fn GraphSearch(#[prop(into)] graph: Signal<Graph>, #[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	let app = expect_context::<AppState>();
	let query = RwSignal::new(String::new());
	let limit = app.settings.with_value(|s| s.search_limit);

	let results = Memo::new(move |_| graph.with(|g| search_nodes(g, &query.get(), limit)));

	view! {
		<div class="graph-search">
			<input
				type="search"
				placeholder=tr(locale, |d| d.search_graph)
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<button
				type="button"
				style:display=move || if app.selected.get().is_some() { "inline" } else { "none" }
				on:click=move |_| {
					app.selected.set(None);
					query.set(String::new());
				}
			>
				"×"
			</button>
			<ul class="search-results">
				{move || {
					results
						.get()
						.hits
						.into_iter()
						.map(|hit| {
							let id = hit.id.clone();
							view! {
								<li>
									<button type="button" on:click=move |_| app.selected.set(Some(id.clone()))>
										{hit.label}
									</button>
								</li>
							}
						})
						.collect_view()
				}}
				{move || {
					let remaining = results.get().remaining;
					(remaining > 0)
						.then(|| {
							view! {
								<li class="search-more">
									{tr(locale, |d| d.and_others)} " " {remaining}
								</li>
							}
						})
				}}
			</ul>
		</div>
	}
}
