//! Persisted records: people, relationships and the identity writing them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

macro_rules! id_type {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub String);

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self(value.to_owned())
			}
		}
	};
}

id_type!(
	/// Opaque person identifier.
	PersonId
);
id_type!(
	/// Opaque relationship identifier.
	RelationshipId
);
id_type!(
	/// Opaque identifier of a stored portrait file.
	StorageId
);

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// The authenticated caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Stable subject string of the signed-in user.
	pub subject: String,
}

impl Identity {
	pub fn new(subject: impl Into<String>) -> Self {
		Self {
			subject: subject.into(),
		}
	}
}

/// A name component held in Thai and English.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
	pub th: Option<String>,
	pub en: Option<String>,
}

impl Bilingual {
	pub fn new(th: Option<&str>, en: Option<&str>) -> Self {
		Self {
			th: th.map(str::to_owned),
			en: en.map(str::to_owned),
		}
	}

	pub fn th(value: &str) -> Self {
		Self::new(Some(value), None)
	}

	pub fn en(value: &str) -> Self {
		Self::new(None, Some(value))
	}

	/// Value in `locale`, falling back to the other language when absent or empty.
	pub fn resolve(&self, locale: Locale) -> Option<&str> {
		let (preferred, other) = match locale {
			Locale::Th => (&self.th, &self.en),
			Locale::En => (&self.en, &self.th),
		};
		non_empty(preferred).or_else(|| non_empty(other))
	}

	/// Trims both variants, dropping ones that end up empty.
	pub fn normalized(&self) -> Self {
		let clean = |v: &Option<String>| {
			v.as_deref()
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(str::to_owned)
		};
		Self {
			th: clean(&self.th),
			en: clean(&self.en),
		}
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}

/// Editable fields of a person, as submitted by the person form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFields {
	pub nickname: Bilingual,
	pub prename: Bilingual,
	pub given_name: Bilingual,
	pub family_name: Bilingual,
	pub portrait: Option<StorageId>,
}

impl PersonFields {
	pub fn normalized(&self) -> Self {
		Self {
			nickname: self.nickname.normalized(),
			prename: self.prename.normalized(),
			given_name: self.given_name.normalized(),
			family_name: self.family_name.normalized(),
			portrait: self.portrait.clone(),
		}
	}
}

/// Audit trail stamped on every write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
	pub created_by: String,
	pub updated_by: String,
}

impl Audit {
	pub fn new(now: Timestamp, who: &Identity) -> Self {
		Self {
			created_at: now,
			updated_at: now,
			created_by: who.subject.clone(),
			updated_by: who.subject.clone(),
		}
	}

	pub fn touch(&mut self, now: Timestamp, who: &Identity) {
		self.updated_at = now;
		self.updated_by = who.subject.clone();
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
	pub id: PersonId,
	pub nickname: Bilingual,
	pub prename: Bilingual,
	pub given_name: Bilingual,
	pub family_name: Bilingual,
	pub portrait: Option<StorageId>,
	pub audit: Audit,
}

/// A person as listed to the UI, with its portrait resolved to a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
	#[serde(flatten)]
	pub person: Person,
	pub portrait_url: Option<String>,
}

/// Kinds of relationship a user can record. Direction is person 1 → person 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipType {
	Father,
	Mother,
	OlderSibling,
}

impl RelationshipType {
	pub const ALL: [RelationshipType; 3] = [Self::Father, Self::Mother, Self::OlderSibling];

	/// Stable key used in form values.
	pub fn key(self) -> &'static str {
		match self {
			Self::Father => "father",
			Self::Mother => "mother",
			Self::OlderSibling => "olderSibling",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|t| t.key() == key)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
	pub id: RelationshipId,
	pub person1_id: PersonId,
	pub person2_id: PersonId,
	pub relationship_type: RelationshipType,
	pub audit: Audit,
}

impl Relationship {
	pub fn involves(&self, person: &PersonId) -> bool {
		&self.person1_id == person || &self.person2_id == person
	}
}
