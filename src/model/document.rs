//! Document-level types: decoder input, metadata, and the final record.

use super::{PageRecord, RawPage, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filesystem-level facts about the source document, populated by the
/// caller (or the decoding collaborator) and passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    /// File name of the source document
    pub filename: String,

    /// File size in bytes
    pub file_size: u64,

    /// Creation timestamp, in whatever format the source reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Modification timestamp, in whatever format the source reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// A fully decoded document: the input contract from the decoding
/// collaborator. The analyzer consumes this read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Source file facts
    pub source: SourceInfo,

    /// Decoded pages in document order
    pub pages: Vec<RawPage>,
}

impl ParsedDocument {
    /// Create a document with the given source info and pages.
    pub fn new(source: SourceInfo, pages: Vec<RawPage>) -> Self {
        Self { source, pages }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

/// Document-wide heuristic findings and statistics.
///
/// Candidate collections are deduplicated and sorted; they hold
/// plausible matches, not verified facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Source file name
    pub filename: String,

    /// Source file size in bytes
    pub file_size: u64,

    /// Creation timestamp as reported by the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Modification timestamp as reported by the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Number of pages analyzed
    pub page_count: u32,

    /// Whether at least one table was found anywhere in the document
    pub has_tables: bool,

    /// Whether at least one image was found anywhere in the document
    pub has_images: bool,

    /// Candidate date strings
    pub dates: Vec<String>,

    /// Candidate numeric-amount strings
    pub amounts: Vec<String>,

    /// Candidate named-entity strings
    pub entities: Vec<String>,

    /// Top-ranked repeated keywords (at most 10)
    pub keywords: Vec<String>,
}

/// Accumulator for metadata while pages are processed.
///
/// Candidate sets grow by union across pages and collapse exact-string
/// duplicates; `finish` converts them into the fixed, sorted
/// collections of [`MetadataRecord`].
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    filename: String,
    file_size: u64,
    created: Option<String>,
    modified: Option<String>,
    page_count: u32,
    has_tables: bool,
    has_images: bool,
    dates: HashSet<String>,
    amounts: HashSet<String>,
    entities: HashSet<String>,
}

impl MetadataBuilder {
    /// Start a builder from the document's source facts.
    pub fn from_source(source: &SourceInfo, page_count: u32) -> Self {
        Self {
            filename: source.filename.clone(),
            file_size: source.file_size,
            created: source.created.clone(),
            modified: source.modified.clone(),
            page_count,
            ..Self::default()
        }
    }

    /// Record that a table was normalized somewhere in the document.
    pub fn mark_tables(&mut self) {
        self.has_tables = true;
    }

    /// Record that an image was seen somewhere in the document.
    pub fn mark_images(&mut self) {
        self.has_images = true;
    }

    /// Add a candidate date string.
    pub fn add_date(&mut self, value: impl Into<String>) {
        self.dates.insert(value.into());
    }

    /// Add a candidate amount string.
    pub fn add_amount(&mut self, value: impl Into<String>) {
        self.amounts.insert(value.into());
    }

    /// Add a candidate entity string.
    pub fn add_entity(&mut self, value: impl Into<String>) {
        self.entities.insert(value.into());
    }

    /// Number of distinct date candidates so far.
    pub fn date_count(&self) -> usize {
        self.dates.len()
    }

    /// Finalize into a fixed record, attaching the ranked keywords.
    ///
    /// Sets become sorted vectors so repeated runs over the same input
    /// produce identical records.
    pub fn finish(self, keywords: Vec<String>) -> MetadataRecord {
        fn sorted(set: HashSet<String>) -> Vec<String> {
            let mut v: Vec<String> = set.into_iter().collect();
            v.sort();
            v
        }

        MetadataRecord {
            filename: self.filename,
            file_size: self.file_size,
            created: self.created,
            modified: self.modified,
            page_count: self.page_count,
            has_tables: self.has_tables,
            has_images: self.has_images,
            dates: sorted(self.dates),
            amounts: sorted(self.amounts),
            entities: sorted(self.entities),
            keywords,
        }
    }
}

/// The final aggregate produced by one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Concatenated structurally-marked full text of all pages
    pub full_text: String,

    /// Per-page records, in page order
    pub pages: Vec<PageRecord>,

    /// All tables across all pages, flattened in page order
    pub tables: Vec<Table>,

    /// Finalized document-wide metadata
    pub metadata: MetadataRecord,

    /// Human-readable summary of the findings
    pub summary: String,
}

impl DocumentRecord {
    /// Get the number of analyzed pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page record by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageRecord> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }
}
