use leptos::prelude::*;
use log::error;

use super::relationship_form::RelationshipForm;
use super::tr;
use crate::context::AppState;
use crate::i18n::{Locale, error_message};
use crate::table::{RelationshipRow, filter_relationships, relationship_rows};

#[component]
pub fn RelationshipTable(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
	let app = expect_context::<AppState>();
	let query = RwSignal::new(String::new());
	let message = RwSignal::new(None::<&'static str>);

	let rows = move || {
		let rows = relationship_rows(&app.people(), &app.relationships(), locale.get());
		filter_relationships(&rows, &query.get())
			.into_iter()
			.cloned()
			.collect::<Vec<_>>()
	};

	view! {
		<section class="relationship-table">
			<div class="table-toolbar">
				<input
					type="search"
					placeholder=tr(locale, |d| d.filter_relationship)
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
				/>
				<RelationshipForm locale=locale />
			</div>
			{move || message.get().map(|m| view! { <p class="form-error">{m}</p> })}
			<table>
				<thead>
					<tr>
						<th>{tr(locale, |d| d.person1)}</th>
						<th></th>
						<th>{tr(locale, |d| d.relationship_type)}</th>
						<th>{tr(locale, |d| d.person2)}</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					<For
						each=rows
						key=|row| row.clone()
						children=move |row: RelationshipRow| {
							let id = row.id.clone();
							let on_delete = {
								let id = id.clone();
								move |_| {
									if let Err(e) = app.write(|s, who| s.delete_relationship(who, &id)) {
										error!("Failed to delete relationship: {}", e);
										message.set(Some(error_message(locale.get_untracked(), &e)));
									}
								}
							};
							view! {
								<tr>
									<td>{row.person1_name}</td>
									<td>{tr(locale, |d| d.is)}</td>
									<td>{row.type_label}</td>
									<td>{row.person2_name}</td>
									<td class="row-actions">
										<RelationshipForm locale=locale relationship=id />
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
