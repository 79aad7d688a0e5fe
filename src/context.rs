//! Reactive state shared by every component.

use leptos::prelude::*;

use crate::config::{GraphSettings, Theme};
use crate::error::Result;
use crate::model::{Identity, PersonId, PersonView, Relationship};
use crate::store::FamilyStore;

#[derive(Clone, Copy)]
pub struct AppState {
	pub store: RwSignal<FamilyStore>,
	pub identity: RwSignal<Option<Identity>>,
	pub theme: RwSignal<Theme>,
	pub disable_hover: RwSignal<bool>,
	/// Node picked in the graph search.
	pub selected: RwSignal<Option<PersonId>>,
	pub settings: StoredValue<GraphSettings>,
	/// Seeds node colors and positions for the whole session.
	pub seed: u64,
}

impl AppState {
	pub fn new(settings: GraphSettings) -> Self {
		Self {
			store: RwSignal::new(FamilyStore::new(settings.portrait_max_bytes)),
			identity: RwSignal::new(None),
			theme: RwSignal::new(Theme::default()),
			disable_hover: RwSignal::new(false),
			selected: RwSignal::new(None),
			settings: StoredValue::new(settings),
			seed: session_seed(),
		}
	}

	/// People visible to the signed-in user; re-runs on every store change.
	pub fn people(&self) -> Vec<PersonView> {
		let who = self.identity.get();
		self.store.with(|s| s.list_people(who.as_ref()))
	}

	pub fn relationships(&self) -> Vec<Relationship> {
		let who = self.identity.get();
		self.store.with(|s| s.list_relationships(who.as_ref()))
	}

	pub fn relationships_untracked(&self) -> Vec<Relationship> {
		let who = self.identity.get_untracked();
		self.store.with_untracked(|s| s.list_relationships(who.as_ref()))
	}

	/// Runs a store write as the current user and notifies listeners.
	pub fn write<T>(&self, f: impl FnOnce(&mut FamilyStore, Option<&Identity>) -> Result<T>) -> Result<T> {
		let who = self.identity.get_untracked();
		let mut store = self.store.write();
		f(&mut store, who.as_ref())
	}
}

#[cfg(target_arch = "wasm32")]
fn session_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn session_seed() -> u64 {
	0x5eed
}
