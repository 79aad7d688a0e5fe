//! Row shaping for the people and relationship tables.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::i18n::{Locale, relationship_type_label};
use crate::model::{Bilingual, Person, PersonId, PersonView, Relationship, RelationshipId, RelationshipType};
use crate::naming::resolve_display_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonColumn {
	Nickname,
	Prename,
	GivenName,
	FamilyName,
}

impl PersonColumn {
	pub fn value(self, person: &Person) -> &Bilingual {
		match self {
			PersonColumn::Nickname => &person.nickname,
			PersonColumn::Prename => &person.prename,
			PersonColumn::GivenName => &person.given_name,
			PersonColumn::FamilyName => &person.family_name,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	pub fn flipped(self) -> Self {
		match self {
			SortDirection::Ascending => SortDirection::Descending,
			SortDirection::Descending => SortDirection::Ascending,
		}
	}
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

/// People whose display name contains `query`, ignoring case.
pub fn filter_people<'a>(rows: &'a [PersonView], locale: Locale, query: &str) -> Vec<&'a PersonView> {
	let needle = query.trim().to_lowercase();
	rows.iter()
		.filter(|row| {
			needle.is_empty() || contains_ignore_case(&resolve_display_name(locale, &row.person), &needle)
		})
		.collect()
}

/// Stable sort by one name column; rows missing the value go last.
pub fn sort_people(rows: &mut [&PersonView], locale: Locale, column: PersonColumn, direction: SortDirection) {
	rows.sort_by(|a, b| {
		let (a, b) = (
			column.value(&a.person).resolve(locale),
			column.value(&b.person).resolve(locale),
		);
		match (a, b) {
			(Some(a), Some(b)) => match direction {
				SortDirection::Ascending => a.cmp(b),
				SortDirection::Descending => b.cmp(a),
			},
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		}
	});
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelationshipRow {
	pub id: RelationshipId,
	pub person1_id: PersonId,
	pub person2_id: PersonId,
	pub person1_name: String,
	pub person2_name: String,
	pub relationship_type: RelationshipType,
	pub type_label: &'static str,
}

/// Joins relationships with the names of both people.
pub fn relationship_rows(
	people: &[PersonView],
	relationships: &[Relationship],
	locale: Locale,
) -> Vec<RelationshipRow> {
	let names: HashMap<&PersonId, String> = people
		.iter()
		.map(|v| (&v.person.id, resolve_display_name(locale, &v.person)))
		.collect();
	let name_of = |id: &PersonId| {
		names
			.get(id)
			.cloned()
			.unwrap_or_else(|| locale.dictionary().unknown.to_owned())
	};

	relationships
		.iter()
		.map(|r| RelationshipRow {
			id: r.id.clone(),
			person1_id: r.person1_id.clone(),
			person2_id: r.person2_id.clone(),
			person1_name: name_of(&r.person1_id),
			person2_name: name_of(&r.person2_id),
			relationship_type: r.relationship_type,
			type_label: relationship_type_label(locale, r.relationship_type),
		})
		.collect()
}

pub fn filter_relationships<'a>(rows: &'a [RelationshipRow], query: &str) -> Vec<&'a RelationshipRow> {
	let needle = query.trim().to_lowercase();
	rows.iter()
		.filter(|row| {
			needle.is_empty()
				|| contains_ignore_case(&row.person1_name, &needle)
				|| contains_ignore_case(&row.person2_name, &needle)
				|| contains_ignore_case(row.type_label, &needle)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{Audit, Identity};

	fn view(id: &str, nickname: Bilingual, given: Bilingual) -> PersonView {
		PersonView {
			person: Person {
				id: PersonId::from(id),
				nickname,
				prename: Bilingual::default(),
				given_name: given,
				family_name: Bilingual::default(),
				portrait: None,
				audit: Audit::new(0, &Identity::new("tester")),
			},
			portrait_url: None,
		}
	}

	fn people() -> Vec<PersonView> {
		vec![
			view("a", Bilingual::en("Bee"), Bilingual::default()),
			view("b", Bilingual::en("Ann"), Bilingual::en("Zed")),
			view("c", Bilingual::th("ซี"), Bilingual::en("Mark")),
		]
	}

	#[test]
	fn filters_on_display_name() {
		let rows = people();
		let hits: Vec<_> = filter_people(&rows, Locale::En, "MAR").iter().map(|v| v.person.id.0.as_str()).collect();
		assert_eq!(hits, vec!["c"]);
		assert_eq!(filter_people(&rows, Locale::En, "").len(), 3);
	}

	#[test]
	fn sorts_with_missing_values_last() {
		let rows = people();
		let mut refs: Vec<&PersonView> = rows.iter().collect();
		sort_people(&mut refs, Locale::En, PersonColumn::GivenName, SortDirection::Descending);
		let order: Vec<_> = refs.iter().map(|v| v.person.id.0.as_str()).collect();
		assert_eq!(order, vec!["b", "c", "a"]);

		sort_people(&mut refs, Locale::En, PersonColumn::Nickname, SortDirection::Ascending);
		let order: Vec<_> = refs.iter().map(|v| v.person.id.0.as_str()).collect();
		assert_eq!(order, vec!["b", "a", "c"]);
	}

	#[test]
	fn rows_join_names_and_flag_unknown_people() {
		let rel = Relationship {
			id: RelationshipId::from("r1"),
			person1_id: PersonId::from("a"),
			person2_id: PersonId::from("gone"),
			relationship_type: RelationshipType::Mother,
			audit: Audit::new(0, &Identity::new("tester")),
		};
		let rows = relationship_rows(&people(), &[rel], Locale::En);
		assert_eq!(rows[0].person1_name, "Bee");
		assert_eq!(rows[0].person2_name, "Unknown");
		assert_eq!(rows[0].type_label, "mother");

		assert_eq!(filter_relationships(&rows, "moth").len(), 1);
		assert_eq!(filter_relationships(&rows, "bee").len(), 1);
		assert!(filter_relationships(&rows, "father").is_empty());
	}
}
