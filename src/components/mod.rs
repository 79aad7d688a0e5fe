//! Leptos components.

pub mod force_graph;
pub mod graph_search;
pub mod people_table;
pub mod person_form;
pub mod relationship_form;
pub mod relationship_table;
pub mod toolbar;

use leptos::prelude::*;

use crate::i18n::{Dictionary, Locale};

/// Reactive lookup of one dictionary entry.
pub(crate) fn tr(
	locale: Signal<Locale>,
	entry: fn(&Dictionary) -> &'static str,
) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
	move || entry(locale.get().dictionary())
}
