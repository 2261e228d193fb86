mod bounds;
mod bytes;
mod data;
mod driver;
mod error;
mod format;
mod names;
mod options;
mod refs;
mod reporters;
mod snapshot;
mod source;

/// Per-component vertex and index bounds.
pub use bounds::{AttributeBounds, BoundsCalculator, ComponentRange, MeshBounds};
/// Record model shared by sources and reporters.
pub use data::*;
/// Traversal entry point and outcome.
pub use driver::{ReportOutcome, print_info};
/// Error and result aliases.
pub use error::{ReportError, Result};
/// Number and flag rendering helpers.
pub use format::{Style, format_flags, format_float, format_vector};
/// Custom field name lookup.
pub use names::{NameResolver, record_name};
/// Category selection and report configuration.
pub use options::{ColorMode, ReportOptions, Selection};
/// Cross-record reference tallies and out-of-range findings.
pub use refs::{OutOfRange, ReferenceAnalyzer};
/// In-memory record source loadable from JSON.
pub use snapshot::{AssetSnapshot, CategoryEntry, LevelEntry};
/// Record source abstraction.
pub use source::{FetchError, FetchResult, RecordSource, SourceFeatures};
