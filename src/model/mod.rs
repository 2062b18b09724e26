//! Data model for document analysis.
//!
//! Input types ([`ParsedDocument`], [`RawPage`] and friends) mirror the
//! decoding collaborator's output contract; output types
//! ([`DocumentRecord`], [`PageRecord`], [`MetadataRecord`]) are the
//! analyzer's results. Everything is serde-serializable so documents
//! can round-trip through JSON dumps.

mod document;
mod page;
mod table;

pub use document::{DocumentRecord, MetadataBuilder, MetadataRecord, ParsedDocument, SourceInfo};
pub use page::{ImageRegion, PageChar, PageRecord, RawPage, RawTable, Word};
pub use table::Table;
