//! Errors raised by store writes and portrait uploads.

use thiserror::Error;

use crate::model::{PersonId, RelationshipId, StorageId};

/// Rejections surfaced to forms as an inline message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// No identity was attached to a write.
	#[error("user must be logged in")]
	Unauthenticated,

	/// A referenced person does not exist.
	#[error("person not found: {0}")]
	PersonNotFound(PersonId),

	/// A referenced relationship does not exist.
	#[error("relationship not found: {0}")]
	RelationshipNotFound(RelationshipId),

	/// Both ends of a relationship point at the same person.
	#[error("cannot create a relationship with oneself")]
	SelfRelationship,

	/// The storage endpoint answered with a non-2xx status.
	#[error("upload failed with status {status}")]
	UploadFailed {
		/// HTTP-style status code returned by the storage endpoint.
		status: u16,
	},

	/// A portrait id does not resolve to a stored file.
	#[error("portrait not found: {0}")]
	PortraitNotFound(StorageId),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;
