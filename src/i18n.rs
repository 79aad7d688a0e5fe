//! Locales and the UI dictionaries for Thai and English.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::RelationshipType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	#[default]
	Th,
	En,
}

impl Locale {
	pub const ALL: [Locale; 2] = [Locale::Th, Locale::En];

	pub fn code(self) -> &'static str {
		match self {
			Locale::Th => "th",
			Locale::En => "en",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|l| l.code() == code)
	}

	/// Locale named by the `:lang` route segment; Thai when absent or unknown.
	pub fn from_route(segment: Option<&str>) -> Self {
		segment.and_then(Self::from_code).unwrap_or_default()
	}

	pub fn dictionary(self) -> &'static Dictionary {
		match self {
			Locale::Th => &TH,
			Locale::En => &EN,
		}
	}
}

/// Every user-facing string of the app for one locale.
#[derive(Debug)]
pub struct Dictionary {
	pub title: &'static str,
	pub sign_in: &'static str,
	pub sign_out: &'static str,
	pub thai: &'static str,
	pub english: &'static str,
	pub nickname: &'static str,
	pub prename: &'static str,
	pub given_name: &'static str,
	pub family_name: &'static str,
	pub portrait_image: &'static str,
	pub add_person: &'static str,
	pub edit_person: &'static str,
	pub delete: &'static str,
	pub save: &'static str,
	pub filter_person: &'static str,
	pub person1: &'static str,
	pub person2: &'static str,
	pub relationship_type: &'static str,
	pub is: &'static str,
	pub add_relationship: &'static str,
	pub edit_relationship: &'static str,
	pub filter_relationship: &'static str,
	pub select_person: &'static str,
	pub select_relationship_type: &'static str,
	pub search_graph: &'static str,
	pub and_others: &'static str,
	pub dark_theme: &'static str,
	pub disable_hover: &'static str,
	pub unnamed: &'static str,
	pub unknown: &'static str,
	pub same_person: &'static str,
	pub not_signed_in: &'static str,
	pub not_found: &'static str,
	pub failed_to_save: &'static str,
	pub upload_error: &'static str,
	pub portrait_too_large: &'static str,
}

static TH: Dictionary = Dictionary {
	title: "แผนผังเครือญาติ",
	sign_in: "เข้าสู่ระบบ",
	sign_out: "ออกจากระบบ",
	thai: "ภาษาไทย",
	english: "ภาษาอังกฤษ",
	nickname: "ชื่อเล่น",
	prename: "คำนำหน้า",
	given_name: "ชื่อ",
	family_name: "นามสกุล",
	portrait_image: "รูปภาพ",
	add_person: "เพิ่มบุคคล",
	edit_person: "แก้ไขบุคคล",
	delete: "ลบ",
	save: "บันทึก",
	filter_person: "ค้นหาบุคคล...",
	person1: "บุคคลที่ 1",
	person2: "บุคคลที่ 2",
	relationship_type: "ความสัมพันธ์",
	is: "เป็น",
	add_relationship: "เพิ่มความสัมพันธ์",
	edit_relationship: "แก้ไขความสัมพันธ์",
	filter_relationship: "ค้นหาความสัมพันธ์...",
	select_person: "เลือกบุคคล",
	select_relationship_type: "เลือกความสัมพันธ์",
	search_graph: "ค้นหาในแผนผัง...",
	and_others: "และอีก",
	dark_theme: "โหมดมืด",
	disable_hover: "ปิดการเน้นเมื่อชี้",
	unnamed: "ไม่มีชื่อ",
	unknown: "ไม่ทราบ",
	same_person: "ไม่สามารถสร้างความสัมพันธ์กับตัวเองได้",
	not_signed_in: "กรุณาเข้าสู่ระบบก่อน",
	not_found: "ไม่พบข้อมูลที่อ้างถึง",
	failed_to_save: "บันทึกไม่สำเร็จ",
	upload_error: "อัปโหลดรูปภาพไม่สำเร็จ",
	portrait_too_large: "รูปภาพต้องมีขนาดไม่เกิน 5MB",
};

static EN: Dictionary = Dictionary {
	title: "Family Graph",
	sign_in: "Sign in",
	sign_out: "Sign out",
	thai: "Thai",
	english: "English",
	nickname: "Nickname",
	prename: "Prename",
	given_name: "Given name",
	family_name: "Family name",
	portrait_image: "Portrait",
	add_person: "Add person",
	edit_person: "Edit person",
	delete: "Delete",
	save: "Save",
	filter_person: "Filter people...",
	person1: "Person 1",
	person2: "Person 2",
	relationship_type: "Relationship",
	is: "is",
	add_relationship: "Add relationship",
	edit_relationship: "Edit relationship",
	filter_relationship: "Filter relationships...",
	select_person: "Select person",
	select_relationship_type: "Select relationship",
	search_graph: "Search the graph...",
	and_others: "And others:",
	dark_theme: "Dark mode",
	disable_hover: "Disable hover highlight",
	unnamed: "Unnamed",
	unknown: "Unknown",
	same_person: "Cannot create a relationship with oneself",
	not_signed_in: "Please sign in first",
	not_found: "The referenced record no longer exists",
	failed_to_save: "Failed to save",
	upload_error: "Image upload error",
	portrait_too_large: "Your portrait image must be less than 5MB",
};

/// Localized name of a relationship type.
pub fn relationship_type_label(locale: Locale, ty: RelationshipType) -> &'static str {
	match (locale, ty) {
		(Locale::Th, RelationshipType::Father) => "พ่อ",
		(Locale::Th, RelationshipType::Mother) => "แม่",
		(Locale::Th, RelationshipType::OlderSibling) => "พี่",
		(Locale::En, RelationshipType::Father) => "father",
		(Locale::En, RelationshipType::Mother) => "mother",
		(Locale::En, RelationshipType::OlderSibling) => "older sibling",
	}
}

/// Inline message shown for a rejected write.
pub fn error_message(locale: Locale, error: &Error) -> &'static str {
	let dict = locale.dictionary();
	match error {
		Error::Unauthenticated => dict.not_signed_in,
		Error::PersonNotFound(_) | Error::RelationshipNotFound(_) => dict.not_found,
		Error::PortraitNotFound(_) => dict.failed_to_save,
		Error::SelfRelationship => dict.same_person,
		Error::UploadFailed { status: 413 } => dict.portrait_too_large,
		Error::UploadFailed { .. } => dict.upload_error,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::StorageId;

	#[test]
	fn locale_codes() {
		assert_eq!(Locale::from_code("en"), Some(Locale::En));
		assert_eq!(Locale::from_code("th"), Some(Locale::Th));
		assert_eq!(Locale::from_code("fr"), None);
	}

	#[test]
	fn route_segment_picks_document_language() {
		let en = Locale::from_route(Some("en"));
		assert_eq!((en.code(), en.dictionary().title), ("en", "Family Graph"));
		assert_eq!(Locale::from_route(None), Locale::Th);
		assert_eq!(Locale::from_route(Some("fr")).code(), "th");
	}

	#[test]
	fn every_type_has_a_label_in_every_locale() {
		for locale in Locale::ALL {
			for ty in RelationshipType::ALL {
				assert!(!relationship_type_label(locale, ty).is_empty());
			}
		}
	}

	#[test]
	fn errors_map_to_localized_messages() {
		assert_eq!(
			error_message(Locale::En, &Error::SelfRelationship),
			"Cannot create a relationship with oneself"
		);
		assert_eq!(
			error_message(Locale::Th, &Error::UploadFailed { status: 500 }),
			TH.upload_error
		);
		assert_eq!(
			error_message(Locale::En, &Error::UploadFailed { status: 413 }),
			EN.portrait_too_large
		);
		assert_eq!(
			error_message(Locale::En, &Error::PortraitNotFound(StorageId::from("s9"))),
			EN.failed_to_save
		);
	}
}
