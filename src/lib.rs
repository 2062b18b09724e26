//! # pdfsift
//!
//! Heuristic content and metadata extraction from parsed PDF documents.
//!
//! pdfsift consumes documents that an external decoder has already
//! broken into pages, characters, words, tables, and images, and
//! produces a structurally-annotated full text, a metadata record of
//! candidate dates, amounts, entities, and keywords, and a short
//! human-readable summary.
//!
//! ## Quick Start
//!
//! ```
//! use pdfsift::{analyze, ParsedDocument, RawPage, SourceInfo};
//!
//! let doc = ParsedDocument::new(
//!     SourceInfo {
//!         filename: "invoice.pdf".to_string(),
//!         file_size: 4096,
//!         created: None,
//!         modified: None,
//!     },
//!     vec![RawPage::with_text(
//!         612.0,
//!         792.0,
//!         "Invoice dated 03/15/2024 for $1,250.00 from Acme Corp",
//!     )],
//! );
//!
//! let record = analyze(&doc);
//! assert!(record.metadata.dates.contains(&"03/15/2024".to_string()));
//! println!("{}", record.summary);
//! ```
//!
//! ## Pipeline
//!
//! Per page: zone classification (header/body/footer from glyph
//! coordinates), table normalization, and pattern mining over the raw
//! text; then page composition into the marked full-text stream. After
//! the last page: keyword ranking over the full text, metadata
//! finalization, and summary composition.
//!
//! The heuristics are intentionally simple — position bands and
//! regular expressions, not statistics. Binary PDF decoding, filename
//! generation, and presentation are external collaborators behind the
//! [`DocumentSource`] and [`NameSuggester`] seams.

pub mod analyze;
pub mod batch;
pub mod error;
pub mod model;
pub mod scan;
pub mod source;
pub mod suggest;

// Re-export commonly used types
pub use analyze::{AnalyzeOptions, Analyzer, KeywordRanker, PageZones, PatternMiner};
pub use batch::{analyze_all, BatchItem};
pub use error::{Error, Result};
pub use model::{
    DocumentRecord, ImageRegion, MetadataRecord, PageChar, PageRecord, ParsedDocument, RawPage,
    RawTable, SourceInfo, Table, Word,
};
pub use scan::{list_files_with_extension, list_pdf_files};
pub use source::{DocumentSource, JsonSource};
pub use suggest::{suggest_filename, NameSuggester};

use std::path::Path;

/// Analyze a parsed document with default options.
///
/// Pure transformation: cannot fail. See [`Analyzer`] for tuning.
pub fn analyze(document: &ParsedDocument) -> DocumentRecord {
    Analyzer::new().analyze(document)
}

/// Analyze a parsed document with custom options.
pub fn analyze_with_options(document: &ParsedDocument, options: AnalyzeOptions) -> DocumentRecord {
    Analyzer::with_options(options).analyze(document)
}

/// Load a document from any source and analyze it.
///
/// The only error path is the source's own load failure.
pub fn analyze_source<S: DocumentSource>(source: &S) -> Result<DocumentRecord> {
    let document = source.load()?;
    Ok(Analyzer::new().analyze(&document))
}

/// Load a parsed-document JSON dump and analyze it.
pub fn analyze_json_file<P: AsRef<Path>>(path: P) -> Result<DocumentRecord> {
    analyze_source(&JsonSource::new(path.as_ref()))
}
