use leptos::prelude::*;
use log::error;

use super::person_form::PersonForm;
use super::tr;
use crate::context::AppState;
use crate::i18n::{Dictionary, Locale, error_message};
use crate::model::PersonView;
use crate::table::{PersonColumn, SortDirection, filter_people, sort_people};

type SortKey = (PersonColumn, Locale, SortDirection);

const COLUMNS: [(PersonColumn, fn(&Dictionary) -> &'static str); 4] = [
	(PersonColumn::Nickname, |d| d.nickname),
	(PersonColumn::Prename, |d| d.prename),
	(PersonColumn::GivenName, |d| d.given_name),
	(PersonColumn::FamilyName, |d| d.family_name),
];

fn part(person: &PersonView, column: PersonColumn, language: Locale) -> String {
	let value = column.value(&person.person);
	match language {
		Locale::Th => value.th.clone(),
		Locale::En => value.en.clone(),
	}
	.unwrap_or_default()
}

#[component]
pub fn PeopleTable(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	let app = expect_context::<AppState>();
	let query = RwSignal::new(String::new());
	let sort = RwSignal::new(None::<SortKey>);
	let message = RwSignal::new(None::<&'static str>);

	let rows = move || {
		let people = app.people();
		let locale = locale.get();
		let mut rows = filter_people(&people, locale, &query.get());
		if let Some((column, language, direction)) = sort.get() {
			sort_people(&mut rows, language, column, direction);
		}
		rows.into_iter().cloned().collect::<Vec<_>>()
	};

	let toggle_sort = move |column: PersonColumn, language: Locale| {
		sort.update(|s| {
			*s = match *s {
				Some((c, l, dir)) if c == column && l == language => Some((c, l, dir.flipped())),
				_ => Some((column, language, SortDirection::Ascending)),
			}
		});
	};

	let headers = move |language: Locale| {
		COLUMNS
			.into_iter()
			.map(|(column, entry)| {
				view! {
					<th>
						<button type="button" on:click=move |_| toggle_sort(column, language)>
							{tr(locale, entry)}
						</button>
					</th>
				}
			})
			.collect_view()
	};

	view! {
		<section class="people-table">
			<div class="table-toolbar">
				<input
					type="search"
					placeholder=tr(locale, |d| d.filter_person)
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
				/>
				<PersonForm locale=locale />
			</div>
			{move || message.get().map(|m| view! { <p class="form-error">{m}</p> })}
			<table>
				<thead>
					<tr>
						<th rowspan="2">{tr(locale, |d| d.portrait_image)}</th>
						<th colspan="4">{tr(locale, |d| d.thai)}</th>
						<th colspan="4">{tr(locale, |d| d.english)}</th>
						<th rowspan="2"></th>
					</tr>
					<tr>{headers(Locale::Th)} {headers(Locale::En)}</tr>
				</thead>
				<tbody>
					<For
						each=rows
						key=|v| (v.person.id.clone(), v.person.audit.updated_at, v.portrait_url.clone())
						children=move |v: PersonView| {
							let id = v.person.id.clone();
							let cells = [Locale::Th, Locale::En]
								.into_iter()
								.flat_map(|language| COLUMNS.map(|(column, _)| (column, language)))
								.map(|(column, language)| view! { <td>{part(&v, column, language)}</td> })
								.collect_view();
							let on_delete = {
								let id = id.clone();
								move |_| {
									if let Err(e) = app.write(|s, who| s.delete_person(who, &id)) {
										error!("Failed to delete person: {}", e);
										message.set(Some(error_message(locale.get_untracked(), &e)));
									}
								}
							};
							view! {
								<tr>
									<td>
										{v.portrait_url.clone().map(|src| view! { <img class="portrait" src=src /> })}
									</td>
									{cells}
									<td class="row-actions">
										<PersonForm locale=locale person=id />
										<button type="button" on:click=on_delete>{tr(locale, |d| d.delete)}</button>
									</td>
								</tr>
							}
						}
					/>
				</tbody>
			</table>
		</section>
	}
}
