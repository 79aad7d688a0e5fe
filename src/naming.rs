//! Display names built from bilingual name parts.

use crate::i18n::Locale;
use crate::model::Person;

/// Joins nickname, prename, given name and family name in `locale`,
/// falling back to the other language per component.
///
/// The nickname slot is never skipped: a person without any nickname gets
/// the localized "unnamed" label in its place.
pub fn resolve_display_name(locale: Locale, person: &Person) -> String {
	let mut name = person
		.nickname
		.resolve(locale)
		.unwrap_or(locale.dictionary().unnamed)
		.to_owned();
	let rest = [&person.prename, &person.given_name, &person.family_name];
	for part in rest.into_iter().filter_map(|p| p.resolve(locale)) {
		name.push(' ');
		name.push_str(part);
	}
	name
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::model::{Audit, Bilingual, Identity, PersonId};

	fn person(nickname: Bilingual, given: Bilingual, family: Bilingual) -> Person {
		Person {
			id: PersonId::from("p1"),
			nickname,
			prename: Bilingual::default(),
			given_name: given,
			family_name: family,
			portrait: None,
			audit: Audit::new(0, &Identity::new("tester")),
		}
	}

	#[test]
	fn prefers_locale_then_falls_back() {
		let p = person(
			Bilingual::new(Some("เอ"), Some("A")),
			Bilingual::en("Anan"),
			Bilingual::th("ใจดี"),
		);
		assert_eq!(resolve_display_name(Locale::Th, &p), "เอ Anan ใจดี");
		assert_eq!(resolve_display_name(Locale::En, &p), "A Anan ใจดี");
	}

	#[test]
	fn absent_components_are_skipped() {
		let p = person(Bilingual::en("Bee"), Bilingual::default(), Bilingual::default());
		assert_eq!(resolve_display_name(Locale::Th, &p), "Bee");
	}

	#[test]
	fn missing_nickname_uses_unnamed_label() {
		let p = person(Bilingual::default(), Bilingual::en("Somchai"), Bilingual::default());
		assert_eq!(resolve_display_name(Locale::En, &p), "Unnamed Somchai");
		assert_eq!(resolve_display_name(Locale::Th, &p), "ไม่มีชื่อ Somchai");
	}

	#[test]
	fn empty_strings_count_as_absent() {
		let p = person(
			Bilingual::new(Some(""), Some("Cee")),
			Bilingual::new(Some(""), Some("")),
			Bilingual::default(),
		);
		assert_eq!(resolve_display_name(Locale::Th, &p), "Cee");
	}

	fn part() -> impl Strategy<Value = Option<String>> {
		proptest::option::of(prop_oneof![Just(String::new()), Just(" ".to_owned()), "\\PC{0,8}"])
	}

	fn bilingual() -> impl Strategy<Value = Bilingual> {
		(part(), part()).prop_map(|(th, en)| Bilingual { th, en })
	}

	proptest! {
		#[test]
		fn always_starts_with_nickname_or_unnamed(
			nickname in bilingual(),
			given in bilingual(),
			family in bilingual(),
			english in any::<bool>(),
		) {
			let locale = if english { Locale::En } else { Locale::Th };
			let p = person(nickname.clone(), given, family);
			let name = resolve_display_name(locale, &p);
			let head = nickname.resolve(locale).unwrap_or(locale.dictionary().unnamed);
			prop_assert!(name.starts_with(head));
			prop_assert!(!name.is_empty());
		}
	}
}
