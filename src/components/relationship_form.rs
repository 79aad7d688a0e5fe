use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::error;

use super::tr;
use crate::context::AppState;
use crate::i18n::{Locale, error_message, relationship_type_label};
use crate::model::{PersonId, RelationshipId, RelationshipType};
use crate::naming::resolve_display_name;

/// Options for one person picker, leaving out whoever is picked on the other side.
fn person_options(app: AppState, locale: Signal<Locale>, other: RwSignal<String>) -> impl IntoView {
	move || {
		let locale = locale.get();
		let other = other.get();
		app.people()
			.into_iter()
			.filter(|v| v.person.id.0 != other)
			.map(|v| {
				let name = resolve_display_name(locale, &v.person);
				view! { <option value=v.person.id.0>{name}</option> }
			})
			.collect_view()
	}
}

/// Add form, or edit form when `relationship` is given.
#[component]
pub fn RelationshipForm(
	#[prop(into)] locale: Signal<Locale>,
	#[prop(optional)] relationship: Option<RelationshipId>,
) -> impl IntoView {
	let app = expect_context::<AppState>();
	let editing = relationship.is_some();
	let existing = relationship.as_ref().and_then(|id| {
		app.relationships_untracked()
			.into_iter()
			.find(|r| &r.id == id)
	});

	let person1 = RwSignal::new(existing.as_ref().map(|r| r.person1_id.0.clone()).unwrap_or_default());
	let person2 = RwSignal::new(existing.as_ref().map(|r| r.person2_id.0.clone()).unwrap_or_default());
	let kind = RwSignal::new(
		existing
			.as_ref()
			.map(|r| r.relationship_type.key().to_owned())
			.unwrap_or_default(),
	);
	let message = RwSignal::new(None::<&'static str>);
	let open = RwSignal::new(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let locale = locale.get_untracked();
		let dict = locale.dictionary();
		let (p1, p2) = (PersonId(person1.get_untracked()), PersonId(person2.get_untracked()));
		if p1.0.is_empty() || p2.0.is_empty() {
			message.set(Some(dict.select_person));
			return;
		}
		if p1 == p2 {
			message.set(Some(dict.same_person));
			return;
		}
		let Some(ty) = RelationshipType::from_key(&kind.get_untracked()) else {
			message.set(Some(dict.select_relationship_type));
			return;
		};

		let result = app.write(|s, who| match &relationship {
			Some(id) => s.update_relationship(who, id, &p1, &p2, ty),
			None => s.add_relationship(who, &p1, &p2, ty),
		});
		match result {
			Ok(_) => {
				message.set(None);
				if !editing {
					person1.set(String::new());
					person2.set(String::new());
					kind.set(String::new());
				}
				open.set(false);
			}
			Err(e) => {
				error!("Failed to save relationship: {}", e);
				message.set(Some(error_message(locale, &e)));
			}
		}
	};

	view! {
		<div class="relationship-form">
			<button type="button" on:click=move |_| open.update(|o| *o = !*o)>
				{move || {
					let dict = locale.get().dictionary();
					if editing { dict.edit_relationship } else { dict.add_relationship }
				}}
			</button>
			<form
				style:display=move || if open.get() { "block" } else { "none" }
				on:submit=on_submit
			>
				<label class="form-field">
					<span>{tr(locale, |d| d.person1)}</span>
					<select prop:value=move || person1.get() on:change=move |ev| person1.set(event_target_value(&ev))>
						<option value="">{tr(locale, |d| d.select_person)}</option>
						{person_options(app, locale, person2)}
					</select>
				</label>
				<label class="form-field">
					<span>{tr(locale, |d| d.relationship_type)}</span>
					<select prop:value=move || kind.get() on:change=move |ev| kind.set(event_target_value(&ev))>
						<option value="">{tr(locale, |d| d.select_relationship_type)}</option>
						{move || {
							let locale = locale.get();
							RelationshipType::ALL
								.into_iter()
								.map(|ty| {
									view! { <option value=ty.key()>{relationship_type_label(locale, ty)}</option> }
								})
								.collect_view()
						}}
					</select>
				</label>
				<label class="form-field">
					<span>{tr(locale, |d| d.person2)}</span>
					<select prop:value=move || person2.get() on:change=move |ev| person2.set(event_target_value(&ev))>
						<option value="">{tr(locale, |d| d.select_person)}</option>
						{person_options(app, locale, person1)}
					</select>
				</label>
				{move || message.get().map(|m| view! { <p class="form-error">{m}</p> })}
				<button type="submit">{tr(locale, |d| d.save)}</button>
			</form>
		</div>
	}
}
