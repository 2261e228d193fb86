use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that stop a report before or while it is written.
///
/// Per-record retrieval failures are not errors; see [`crate::report::FetchError`].
#[derive(Debug, Error)]
pub enum ReportError {
	/// Writing to an output or diagnostics sink failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot document is not valid JSON for the record model.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Snapshot document parsed but is structurally unusable.
	#[error("invalid snapshot: {reason}")]
	InvalidSnapshot {
		/// What made the snapshot unusable.
		reason: String,
	},
}
