use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::StorageId;

/// A portrait file handed to the storage endpoint.
///
/// `url` is where the browser can load the image from (an object URL for
/// files picked from disk).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portrait {
	pub content_type: String,
	pub size: u64,
	pub url: String,
}

/// What the storage endpoint answers to an upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResponse {
	pub status: u16,
	pub storage_id: Option<StorageId>,
}

impl UploadResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	fn rejected(status: u16) -> Self {
		Self {
			status,
			storage_id: None,
		}
	}
}

/// Blob storage for portraits behind single-use upload URLs.
#[derive(Clone, Debug, Default)]
pub struct PortraitStorage {
	pending: HashSet<String>,
	files: HashMap<StorageId, Portrait>,
	max_bytes: u64,
	next: u64,
}

impl PortraitStorage {
	pub fn new(max_bytes: u64) -> Self {
		Self {
			max_bytes,
			..Self::default()
		}
	}

	pub fn generate_upload_url(&mut self) -> String {
		self.next += 1;
		let url = format!("upload://portraits/{}", self.next);
		self.pending.insert(url.clone());
		url
	}

	/// Stores `portrait` if `url` is a live upload URL. The URL is spent either way.
	pub fn upload(&mut self, url: &str, portrait: Portrait) -> UploadResponse {
		if !self.pending.remove(url) {
			return UploadResponse::rejected(404);
		}
		if !portrait.content_type.starts_with("image/") {
			return UploadResponse::rejected(415);
		}
		if portrait.size >= self.max_bytes {
			return UploadResponse::rejected(413);
		}
		self.next += 1;
		let id = StorageId(format!("s{}", self.next));
		self.files.insert(id.clone(), portrait);
		UploadResponse {
			status: 200,
			storage_id: Some(id),
		}
	}

	pub fn url(&self, id: &StorageId) -> Option<String> {
		self.files.get(id).map(|p| p.url.clone())
	}

	pub fn contains(&self, id: &StorageId) -> bool {
		self.files.contains_key(id)
	}

	/// Number of stored files.
	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	pub fn delete(&mut self, id: &StorageId) -> Result<()> {
		let portrait = self
			.files
			.remove(id)
			.ok_or_else(|| Error::PortraitNotFound(id.clone()))?;
		release(&portrait.url);
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
fn release(url: &str) {
	if url.starts_with("blob:") {
		let _ = web_sys::Url::revoke_object_url(url);
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn release(_url: &str) {}

#[cfg(test)]
mod tests {
	use super::*;

	fn png(size: u64) -> Portrait {
		Portrait {
			content_type: "image/png".into(),
			size,
			url: "blob:portrait".into(),
		}
	}

	#[test]
	fn upload_url_is_single_use() {
		let mut storage = PortraitStorage::new(100);
		let url = storage.generate_upload_url();
		let first = storage.upload(&url, png(10));
		assert!(first.is_success());
		let id = first.storage_id.unwrap();
		assert_eq!(storage.url(&id).as_deref(), Some("blob:portrait"));

		let second = storage.upload(&url, png(10));
		assert_eq!(second.status, 404);
	}

	#[test]
	fn rejects_large_and_non_image_files() {
		let mut storage = PortraitStorage::new(100);
		let url = storage.generate_upload_url();
		assert_eq!(storage.upload(&url, png(100)).status, 413);

		let url = storage.generate_upload_url();
		let text = Portrait {
			content_type: "text/plain".into(),
			..png(1)
		};
		assert_eq!(storage.upload(&url, text).status, 415);
	}

	#[test]
	fn delete_unknown_portrait_fails() {
		let mut storage = PortraitStorage::new(100);
		let id = StorageId::from("nope");
		assert_eq!(storage.delete(&id), Err(Error::PortraitNotFound(id)));
	}
}
