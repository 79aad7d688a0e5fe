use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::tr;
use crate::i18n::Locale;

#[component]
pub fn NotFound() -> impl IntoView {
	let locale = Signal::derive(Locale::default);

	view! {
		<h1>{tr(locale, |d| d.not_found)}</h1>
		<A href="/">{tr(locale, |d| d.title)}</A>
	}
}
