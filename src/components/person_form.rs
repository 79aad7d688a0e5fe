use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use log::error;
use web_sys::HtmlInputElement;

use super::tr;
use crate::context::AppState;
use crate::i18n::{Dictionary, Locale, error_message};
use crate::model::{Bilingual, PersonFields, PersonId};
use crate::store::Portrait;

/// Thai and English inputs of one name component.
#[derive(Clone, Copy)]
struct NameInputs {
	th: RwSignal<String>,
	en: RwSignal<String>,
}

impl NameInputs {
	fn new(value: &Bilingual) -> Self {
		Self {
			th: RwSignal::new(value.th.clone().unwrap_or_default()),
			en: RwSignal::new(value.en.clone().unwrap_or_default()),
		}
	}

	fn value(&self) -> Bilingual {
		Bilingual {
			th: Some(self.th.get_untracked()),
			en: Some(self.en.get_untracked()),
		}
	}

	fn reset(&self) {
		self.th.set(String::new());
		self.en.set(String::new());
	}
}

#[component]
fn NameField(label: Signal<&'static str>, value: RwSignal<String>) -> impl IntoView {
	view! {
		<label class="form-field">
			<span>{move || label.get()}</span>
			<input
				type="text"
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
			/>
		</label>
	}
}

fn field(
	locale: Signal<Locale>,
	entry: fn(&Dictionary) -> &'static str,
	value: RwSignal<String>,
) -> impl IntoView {
	view! { <NameField label=Signal::derive(tr(locale, entry)) value=value /> }
}

fn portrait_from(ev: &Event) -> Option<Portrait> {
	let input: HtmlInputElement = event_target(ev);
	let file = input.files()?.get(0)?;
	let url = web_sys::Url::create_object_url_with_blob(&file).ok()?;
	Some(Portrait {
		content_type: file.type_(),
		size: file.size() as u64,
		url,
	})
}

/// Create form, or edit form when `person` is given.
#[component]
pub fn PersonForm(#[prop(into)] locale: Signal<Locale>, #[prop(optional)] person: Option<PersonId>) -> impl IntoView {
	let app = expect_context::<AppState>();
	let editing = person.is_some();
	let initial = person
		.as_ref()
		.and_then(|id| {
			let who = app.identity.get_untracked();
			app.store.with_untracked(|s| s.get_person(who.as_ref(), id))
		})
		.map(|v| PersonFields {
			nickname: v.person.nickname,
			prename: v.person.prename,
			given_name: v.person.given_name,
			family_name: v.person.family_name,
			portrait: v.person.portrait,
		})
		.unwrap_or_default();

	let nickname = NameInputs::new(&initial.nickname);
	let prename = NameInputs::new(&initial.prename);
	let given_name = NameInputs::new(&initial.given_name);
	let family_name = NameInputs::new(&initial.family_name);
	let portrait = RwSignal::new(None::<Portrait>);
	let message = RwSignal::new(None::<&'static str>);
	let submitting = RwSignal::new(false);
	let open = RwSignal::new(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		submitting.set(true);
		let fields = PersonFields {
			nickname: nickname.value(),
			prename: prename.value(),
			given_name: given_name.value(),
			family_name: family_name.value(),
			portrait: None,
		};
		let result = app.write(|s, who| {
			s.submit_person_form(who, person.as_ref(), fields, portrait.get_untracked())
		});
		submitting.set(false);

		match result {
			Ok(_) => {
				message.set(None);
				portrait.set(None);
				if !editing {
					for inputs in [nickname, prename, given_name, family_name] {
						inputs.reset();
					}
				}
				open.set(false);
			}
			Err(e) => {
				error!("Failed to save person: {}", e);
				message.set(Some(error_message(locale.get_untracked(), &e)));
			}
		}
	};

	view! {
		<div class="person-form">
			<button type="button" on:click=move |_| open.update(|o| *o = !*o)>
				{move || {
					let dict = locale.get().dictionary();
					if editing { dict.edit_person } else { dict.add_person }
				}}
			</button>
			<form
				style:display=move || if open.get() { "block" } else { "none" }
				on:submit=on_submit
			>
				<h3>{tr(locale, |d| d.thai)}</h3>
				{field(locale, |d| d.nickname, nickname.th)}
				{field(locale, |d| d.prename, prename.th)}
				{field(locale, |d| d.given_name, given_name.th)}
				{field(locale, |d| d.family_name, family_name.th)}
				<h3>{tr(locale, |d| d.english)}</h3>
				{field(locale, |d| d.nickname, nickname.en)}
				{field(locale, |d| d.prename, prename.en)}
				{field(locale, |d| d.given_name, given_name.en)}
				{field(locale, |d| d.family_name, family_name.en)}
				<label class="form-field">
					<span>{tr(locale, |d| d.portrait_image)}</span>
					<input type="file" accept="image/*" on:change=move |ev| portrait.set(portrait_from(&ev)) />
				</label>
				{move || message.get().map(|m| view! { <p class="form-error">{m}</p> })}
				<button type="submit" disabled=move || submitting.get()>
					{tr(locale, |d| d.save)}
				</button>
			</form>
		</div>
	}
}
