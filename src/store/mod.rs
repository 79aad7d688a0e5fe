//! In-process backend: people, relationships and portraits.
//!
//! Every write needs an [`Identity`]; reads return nothing without one.
//! Components hold the store in a signal so listings re-run after writes.

mod portrait;

use log::{info, warn};

pub use portrait::{Portrait, PortraitStorage, UploadResponse};

use crate::error::{Error, Result};
use crate::model::{
	Audit, Identity, Person, PersonFields, PersonId, PersonView, Relationship, RelationshipId,
	RelationshipType, StorageId, Timestamp,
};

/// Source of audit timestamps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Clock {
	#[default]
	System,
	Fixed(Timestamp),
}

impl Clock {
	pub fn now(&self) -> Timestamp {
		match self {
			Clock::System => system_now(),
			Clock::Fixed(t) => *t,
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn system_now() -> Timestamp {
	js_sys::Date::now() as Timestamp
}

#[cfg(not(target_arch = "wasm32"))]
fn system_now() -> Timestamp {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.map(|d| d.as_millis() as Timestamp)
		.unwrap_or_default()
}

#[derive(Clone, Debug, Default)]
pub struct FamilyStore {
	people: Vec<Person>,
	relationships: Vec<Relationship>,
	storage: PortraitStorage,
	clock: Clock,
	next_id: u64,
}

fn require<'a>(who: Option<&'a Identity>, action: &str) -> Result<&'a Identity> {
	who.ok_or_else(|| {
		warn!("Rejected {} without a signed-in user", action);
		Error::Unauthenticated
	})
}

impl FamilyStore {
	pub fn new(portrait_max_bytes: u64) -> Self {
		Self {
			storage: PortraitStorage::new(portrait_max_bytes),
			..Self::default()
		}
	}

	pub fn with_clock(mut self, clock: Clock) -> Self {
		self.clock = clock;
		self
	}

	pub fn set_clock(&mut self, clock: Clock) {
		self.clock = clock;
	}

	fn next_id(&mut self, prefix: &str) -> String {
		self.next_id += 1;
		format!("{}{}", prefix, self.next_id)
	}

	fn person_mut(&mut self, id: &PersonId) -> Result<&mut Person> {
		self.people
			.iter_mut()
			.find(|p| &p.id == id)
			.ok_or_else(|| Error::PersonNotFound(id.clone()))
	}

	fn ensure_person(&self, id: &PersonId) -> Result<()> {
		if self.people.iter().any(|p| &p.id == id) {
			Ok(())
		} else {
			warn!("Person {} does not exist", id);
			Err(Error::PersonNotFound(id.clone()))
		}
	}

	fn view(&self, person: &Person) -> PersonView {
		PersonView {
			person: person.clone(),
			portrait_url: person.portrait.as_ref().and_then(|id| self.storage.url(id)),
		}
	}

	/// All people in creation order, with portrait URLs resolved.
	pub fn list_people(&self, who: Option<&Identity>) -> Vec<PersonView> {
		if who.is_none() {
			return Vec::new();
		}
		self.people.iter().map(|p| self.view(p)).collect()
	}

	pub fn get_person(&self, who: Option<&Identity>, id: &PersonId) -> Option<PersonView> {
		who?;
		self.people.iter().find(|p| &p.id == id).map(|p| self.view(p))
	}

	pub fn list_relationships(&self, who: Option<&Identity>) -> Vec<Relationship> {
		if who.is_none() {
			return Vec::new();
		}
		self.relationships.clone()
	}

	pub fn create_person(&mut self, who: Option<&Identity>, fields: PersonFields) -> Result<PersonId> {
		let who = require(who, "create person")?.clone();
		let fields = fields.normalized();
		if let Some(portrait) = &fields.portrait {
			if !self.storage.contains(portrait) {
				return Err(Error::PortraitNotFound(portrait.clone()));
			}
		}
		let id = PersonId(self.next_id("p"));
		self.people.push(Person {
			id: id.clone(),
			nickname: fields.nickname,
			prename: fields.prename,
			given_name: fields.given_name,
			family_name: fields.family_name,
			portrait: fields.portrait,
			audit: Audit::new(self.clock.now(), &who),
		});
		info!("Created person {}", id);
		Ok(id)
	}

	/// Replaces the name fields of a person. A `None` portrait keeps the
	/// current one; a new portrait replaces and deletes the old file.
	pub fn update_person(
		&mut self,
		who: Option<&Identity>,
		id: &PersonId,
		fields: PersonFields,
	) -> Result<PersonId> {
		let who = require(who, "update person")?.clone();
		let fields = fields.normalized();
		if let Some(portrait) = &fields.portrait {
			if !self.storage.contains(portrait) {
				return Err(Error::PortraitNotFound(portrait.clone()));
			}
		}
		let now = self.clock.now();
		let person = self.person_mut(id)?;
		person.nickname = fields.nickname;
		person.prename = fields.prename;
		person.given_name = fields.given_name;
		person.family_name = fields.family_name;
		let replaced = match fields.portrait {
			Some(new) if person.portrait.as_ref() != Some(&new) => person.portrait.replace(new),
			_ => None,
		};
		person.audit.touch(now, &who);

		if let Some(old) = replaced {
			if let Err(e) = self.storage.delete(&old) {
				warn!("Could not delete replaced portrait of {}: {}", id, e);
			}
		}
		info!("Updated person {}", id);
		Ok(id.clone())
	}

	/// Removes a person, every relationship touching them and their portrait.
	pub fn delete_person(&mut self, who: Option<&Identity>, id: &PersonId) -> Result<PersonId> {
		require(who, "delete person")?;
		let index = self
			.people
			.iter()
			.position(|p| &p.id == id)
			.ok_or_else(|| Error::PersonNotFound(id.clone()))?;
		let person = self.people.remove(index);

		let before = self.relationships.len();
		self.relationships.retain(|r| !r.involves(id));
		if let Some(portrait) = &person.portrait {
			if let Err(e) = self.storage.delete(portrait) {
				warn!("Could not delete portrait of {}: {}", id, e);
			}
		}
		info!(
			"Deleted person {} and {} relationships",
			id,
			before - self.relationships.len()
		);
		Ok(id.clone())
	}

	fn validate_endpoints(&self, person1: &PersonId, person2: &PersonId) -> Result<()> {
		if person1 == person2 {
			warn!("Rejected relationship of {} with itself", person1);
			return Err(Error::SelfRelationship);
		}
		self.ensure_person(person1)?;
		self.ensure_person(person2)
	}

	pub fn add_relationship(
		&mut self,
		who: Option<&Identity>,
		person1: &PersonId,
		person2: &PersonId,
		relationship_type: RelationshipType,
	) -> Result<RelationshipId> {
		let who = require(who, "add relationship")?.clone();
		self.validate_endpoints(person1, person2)?;
		let id = RelationshipId(self.next_id("r"));
		self.relationships.push(Relationship {
			id: id.clone(),
			person1_id: person1.clone(),
			person2_id: person2.clone(),
			relationship_type,
			audit: Audit::new(self.clock.now(), &who),
		});
		info!(
			"Added relationship {}: {} {} {}",
			id,
			person1,
			relationship_type.key(),
			person2
		);
		Ok(id)
	}

	pub fn update_relationship(
		&mut self,
		who: Option<&Identity>,
		id: &RelationshipId,
		person1: &PersonId,
		person2: &PersonId,
		relationship_type: RelationshipType,
	) -> Result<RelationshipId> {
		let who = require(who, "update relationship")?.clone();
		self.validate_endpoints(person1, person2)?;
		let now = self.clock.now();
		let rel = self
			.relationships
			.iter_mut()
			.find(|r| &r.id == id)
			.ok_or_else(|| Error::RelationshipNotFound(id.clone()))?;
		rel.person1_id = person1.clone();
		rel.person2_id = person2.clone();
		rel.relationship_type = relationship_type;
		rel.audit.touch(now, &who);
		info!("Updated relationship {}", id);
		Ok(id.clone())
	}

	pub fn delete_relationship(
		&mut self,
		who: Option<&Identity>,
		id: &RelationshipId,
	) -> Result<RelationshipId> {
		require(who, "delete relationship")?;
		let index = self
			.relationships
			.iter()
			.position(|r| &r.id == id)
			.ok_or_else(|| Error::RelationshipNotFound(id.clone()))?;
		self.relationships.remove(index);
		info!("Deleted relationship {}", id);
		Ok(id.clone())
	}

	pub fn generate_upload_url(&mut self, who: Option<&Identity>) -> Result<String> {
		require(who, "upload")?;
		Ok(self.storage.generate_upload_url())
	}

	pub fn upload(&mut self, url: &str, portrait: Portrait) -> UploadResponse {
		self.storage.upload(url, portrait)
	}

	pub fn portrait_url(&self, id: &StorageId) -> Option<String> {
		self.storage.url(id)
	}

	/// Deletes a stored file and detaches it from whoever used it.
	pub fn delete_portrait(&mut self, who: Option<&Identity>, id: &StorageId) -> Result<()> {
		require(who, "delete portrait")?;
		self.storage.delete(id)?;
		for person in &mut self.people {
			if person.portrait.as_ref() == Some(id) {
				person.portrait = None;
			}
		}
		Ok(())
	}

	/// Uploads the portrait (if any) then creates or updates the person.
	///
	/// The target is checked before uploading, and a failed upload aborts
	/// before anything is written, so no file is left without an owner.
	pub fn submit_person_form(
		&mut self,
		who: Option<&Identity>,
		target: Option<&PersonId>,
		mut fields: PersonFields,
		portrait: Option<Portrait>,
	) -> Result<PersonId> {
		require(who, "save person")?;
		if let Some(id) = target {
			self.ensure_person(id)?;
		}
		if let Some(portrait) = portrait {
			let url = self.generate_upload_url(who)?;
			let response = self.upload(&url, portrait);
			if !response.is_success() {
				warn!("Portrait upload failed with status {}", response.status);
				return Err(Error::UploadFailed {
					status: response.status,
				});
			}
			fields.portrait = response.storage_id;
		}
		match target {
			Some(id) => self.update_person(who, id, fields),
			None => self.create_person(who, fields),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::Bilingual;

	fn me() -> Identity {
		Identity::new("user|1")
	}

	fn store() -> FamilyStore {
		FamilyStore::new(5_000_000).with_clock(Clock::Fixed(100))
	}

	fn named(nickname: &str) -> PersonFields {
		PersonFields {
			nickname: Bilingual::en(nickname),
			..PersonFields::default()
		}
	}

	fn portrait(size: u64) -> Portrait {
		Portrait {
			content_type: "image/jpeg".into(),
			size,
			url: "blob:face".into(),
		}
	}

	#[test]
	fn writes_require_identity() {
		let mut s = store();
		assert_eq!(s.create_person(None, named("A")), Err(Error::Unauthenticated));
		assert_eq!(s.generate_upload_url(None), Err(Error::Unauthenticated));
		let a = s.create_person(Some(&me()), named("A")).unwrap();
		assert_eq!(s.delete_person(None, &a), Err(Error::Unauthenticated));
		assert!(s.list_people(None).is_empty());
		assert_eq!(s.list_people(Some(&me())).len(), 1);
	}

	#[test]
	fn create_person_trims_fields_and_stamps_audit() {
		let mut s = store();
		let fields = PersonFields {
			nickname: Bilingual::new(Some(" เอ "), Some("")),
			..PersonFields::default()
		};
		let id = s.create_person(Some(&me()), fields).unwrap();
		let view = s.get_person(Some(&me()), &id).unwrap();
		assert_eq!(view.person.nickname, Bilingual::th("เอ"));
		assert_eq!(view.person.audit.created_at, 100);
		assert_eq!(view.person.audit.created_by, "user|1");
	}

	#[test]
	fn self_relationship_is_rejected() {
		let mut s = store();
		let a = s.create_person(Some(&me()), named("A")).unwrap();
		let result = s.add_relationship(Some(&me()), &a, &a, RelationshipType::Father);
		assert_eq!(result, Err(Error::SelfRelationship));
		assert!(s.list_relationships(Some(&me())).is_empty());
	}

	#[test]
	fn relationship_to_missing_person_is_rejected() {
		let mut s = store();
		let a = s.create_person(Some(&me()), named("A")).unwrap();
		let ghost = PersonId::from("ghost");
		let result = s.add_relationship(Some(&me()), &a, &ghost, RelationshipType::Mother);
		assert_eq!(result, Err(Error::PersonNotFound(ghost)));
	}

	#[test]
	fn deleting_a_person_cascades() {
		let mut s = store();
		let me = me();
		let who = Some(&me);
		let a = s.create_person(who, named("A")).unwrap();
		let b = s.create_person(who, named("B")).unwrap();
		let c = s.create_person(who, named("C")).unwrap();
		s.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();
		s.add_relationship(who, &c, &a, RelationshipType::OlderSibling).unwrap();
		let keep = s.add_relationship(who, &b, &c, RelationshipType::Mother).unwrap();

		s.delete_person(who, &a).unwrap();

		let remaining = s.list_relationships(who);
		assert_eq!(remaining.len(), 1);
		assert_eq!(remaining[0].id, keep);
		assert!(remaining.iter().all(|r| !r.involves(&a)));
	}

	#[test]
	fn update_relationship_touches_audit() {
		let mut s = store();
		let me = me();
		let who = Some(&me);
		let a = s.create_person(who, named("A")).unwrap();
		let b = s.create_person(who, named("B")).unwrap();
		let r = s.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();

		s.set_clock(Clock::Fixed(200));
		let editor = Identity::new("user|2");
		s.update_relationship(Some(&editor), &r, &a, &b, RelationshipType::Mother)
			.unwrap();

		let rel = &s.list_relationships(who)[0];
		assert_eq!(rel.relationship_type, RelationshipType::Mother);
		assert_eq!(rel.audit.created_at, 100);
		assert_eq!(rel.audit.updated_at, 200);
		assert_eq!(rel.audit.updated_by, "user|2");
		assert_eq!(rel.audit.created_by, "user|1");
	}

	#[test]
	fn delete_missing_relationship_fails() {
		let mut s = store();
		let id = RelationshipId::from("r404");
		assert_eq!(
			s.delete_relationship(Some(&me()), &id),
			Err(Error::RelationshipNotFound(id))
		);
	}

	#[test]
	fn submit_with_portrait_resolves_url() {
		let mut s = store();
		let id = s
			.submit_person_form(Some(&me()), None, named("A"), Some(portrait(1024)))
			.unwrap();
		let view = s.get_person(Some(&me()), &id).unwrap();
		assert_eq!(view.portrait_url.as_deref(), Some("blob:face"));
	}

	#[test]
	fn failed_upload_leaves_store_untouched() {
		let mut s = store();
		let result = s.submit_person_form(Some(&me()), None, named("A"), Some(portrait(6_000_000)));
		assert_eq!(result, Err(Error::UploadFailed { status: 413 }));
		assert!(s.list_people(Some(&me())).is_empty());
	}

	#[test]
	fn new_portrait_replaces_old_file() {
		let mut s = store();
		let me = me();
		let who = Some(&me);
		let id = s
			.submit_person_form(who, None, named("A"), Some(portrait(10)))
			.unwrap();
		let old = s.get_person(who, &id).unwrap().person.portrait.unwrap();

		s.submit_person_form(who, Some(&id), named("A"), Some(portrait(20)))
			.unwrap();
		let new = s.get_person(who, &id).unwrap().person.portrait.unwrap();
		assert_ne!(old, new);
		assert_eq!(s.portrait_url(&old), None);

		s.update_person(who, &id, named("A2")).unwrap();
		assert_eq!(s.get_person(who, &id).unwrap().person.portrait, Some(new));
	}

	#[test]
	fn deleting_portrait_detaches_it() {
		let mut s = store();
		let me = me();
		let who = Some(&me);
		let id = s
			.submit_person_form(who, None, named("A"), Some(portrait(10)))
			.unwrap();
		let file = s.get_person(who, &id).unwrap().person.portrait.unwrap();
		s.delete_portrait(who, &file).unwrap();
		let view = s.get_person(who, &id).unwrap();
		assert_eq!(view.person.portrait, None);
		assert_eq!(view.portrait_url, None);
	}

	#[test]
	fn updating_missing_person_uploads_nothing() {
		let mut s = store();
		let me = me();
		let ghost = PersonId::from("ghost");
		let result = s.submit_person_form(Some(&me), Some(&ghost), named("A"), Some(portrait(10)));
		assert_eq!(result, Err(Error::PersonNotFound(ghost)));
		assert!(s.storage.is_empty());
	}

	#[test]
	fn update_relationship_validates_endpoints() {
		let mut s = store();
		let me = me();
		let who = Some(&me);
		let a = s.create_person(who, named("A")).unwrap();
		let b = s.create_person(who, named("B")).unwrap();
		let r = s.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();

		assert_eq!(
			s.update_relationship(who, &r, &a, &a, RelationshipType::Mother),
			Err(Error::SelfRelationship)
		);
		let ghost = PersonId::from("ghost");
		assert_eq!(
			s.update_relationship(who, &r, &a, &ghost, RelationshipType::Mother),
			Err(Error::PersonNotFound(ghost))
		);

		let kept = &s.list_relationships(who)[0];
		assert_eq!((&kept.person1_id, &kept.person2_id), (&a, &b));
		assert_eq!(kept.relationship_type, RelationshipType::Father);
	}
}
