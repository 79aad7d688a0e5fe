use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use super::tr;
use crate::config::Theme;
use crate::context::AppState;
use crate::i18n::Locale;
use crate::model::Identity;

#[component]
pub fn LocaleSwitcher(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	Locale::ALL
		.into_iter()
		.map(|target| {
			view! {
				<A href=format!("/{}", target.code())>
					<span class:active=move || locale.get() == target>{target.code().to_uppercase()}</span>
				</A>
			}
		})
		.collect_view()
}

/// Stand-in for the external identity provider: signs in under a chosen name.
#[component]
pub fn SignInButton(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	let app = expect_context::<AppState>();
	let name = RwSignal::new(String::new());

	let sign_in = move |_| {
		let subject = name.get_untracked().trim().to_owned();
		if subject.is_empty() {
			return;
		}
		info!("Signed in as {}", subject);
		app.identity.set(Some(Identity::new(subject)));
	};
	let sign_out = move |_| {
		info!("Signed out");
		app.identity.set(None);
		app.selected.set(None);
	};

	view! {
		<div class="sign-in">
			<Show
				when=move || app.identity.with(Option::is_some)
				fallback=move || {
					view! {
						<input
							type="text"
							prop:value=move || name.get()
							on:input=move |ev| name.set(event_target_value(&ev))
						/>
						<button type="button" on:click=sign_in>{tr(locale, |d| d.sign_in)}</button>
					}
				}
			>
				<span>{move || app.identity.get().map(|i| i.subject).unwrap_or_default()}</span>
				<button type="button" on:click=sign_out>{tr(locale, |d| d.sign_out)}</button>
			</Show>
		</div>
	}
}

/// Theme and hover-effect toggles.
#[component]
pub fn DisplayToggles(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	let app = expect_context::<AppState>();

	view! {
		<div class="display-toggles">
			<label>
				<input
					type="checkbox"
					prop:checked=move || app.theme.get() == Theme::Dark
					on:change=move |ev| {
						let dark = event_target_checked(&ev);
						app.theme.set(if dark { Theme::Dark } else { Theme::Light });
					}
				/>
				{tr(locale, |d| d.dark_theme)}
			</label>
			<label>
				<input
					type="checkbox"
					prop:checked=move || app.disable_hover.get()
					on:change=move |ev| app.disable_hover.set(event_target_checked(&ev))
				/>
				{tr(locale, |d| d.disable_hover)}
			</label>
		</div>
	}
}
