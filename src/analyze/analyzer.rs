//! Document aggregation: drives the per-page pipeline and finalizes
//! metadata and the summary.

use log::{debug, info};

use super::compose::{append_page_text, compose_page};
use super::keywords::{KeywordRanker, DEFAULT_MAX_KEYWORDS};
use super::patterns::PatternMiner;
use super::tables::normalize_page_tables;
use super::zones::{split_zones, DEFAULT_LINE_TOLERANCE, DEFAULT_ZONE_BAND};
use crate::model::{DocumentRecord, MetadataBuilder, MetadataRecord, ParsedDocument};

/// How many candidates of each kind the summary previews.
pub const SUMMARY_PREVIEW_LIMIT: usize = 5;

/// Tuning knobs for document analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Fraction of page height forming the header and footer bands
    pub zone_band: f32,

    /// Vertical tolerance for grouping characters into lines
    pub line_tolerance: f32,

    /// Maximum number of ranked keywords
    pub max_keywords: usize,

    /// Maximum candidates previewed per summary line
    pub preview_limit: usize,
}

impl AnalyzeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header/footer band fraction.
    pub fn with_zone_band(mut self, band: f32) -> Self {
        self.zone_band = band;
        self
    }

    /// Set the line-grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the maximum keyword count.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Set the summary preview limit.
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            zone_band: DEFAULT_ZONE_BAND,
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            preview_limit: SUMMARY_PREVIEW_LIMIT,
        }
    }
}

/// Single-document analyzer. One [`DocumentRecord`] per call; no state
/// crosses document boundaries.
pub struct Analyzer {
    options: AnalyzeOptions,
    miner: PatternMiner,
}

impl Analyzer {
    /// Create an analyzer with default options.
    pub fn new() -> Self {
        Self::with_options(AnalyzeOptions::default())
    }

    /// Create an analyzer with the given options.
    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self {
            options,
            miner: PatternMiner::new(),
        }
    }

    /// Analyze one parsed document.
    ///
    /// Pages are processed to completion in input order; page numbers
    /// are assigned contiguously from 1. Pure transformation over
    /// already-parsed structures: cannot fail. Missing geometry,
    /// tables, or images degrade per component rules rather than
    /// erroring.
    pub fn analyze(&self, document: &ParsedDocument) -> DocumentRecord {
        let mut metadata = MetadataBuilder::from_source(&document.source, document.page_count());
        let mut full_text = String::new();
        let mut pages = Vec::with_capacity(document.pages.len());
        let mut all_tables = Vec::new();

        for (i, raw_page) in document.pages.iter().enumerate() {
            let number = (i + 1) as u32;
            debug!("analyzing page {number}");

            let zones = split_zones(raw_page, self.options.zone_band, self.options.line_tolerance);
            let tables = normalize_page_tables(&raw_page.tables, number);
            if !tables.is_empty() {
                metadata.mark_tables();
            }
            if !raw_page.images.is_empty() {
                metadata.mark_images();
            }

            self.miner.mine_page(&raw_page.text, &mut metadata);

            let record = compose_page(number, zones, raw_page, tables);
            append_page_text(&mut full_text, &record);
            all_tables.extend(record.tables.iter().cloned());
            pages.push(record);
        }

        let keywords = KeywordRanker::new(self.options.max_keywords).rank(&full_text);
        let metadata = metadata.finish(keywords);
        let summary = self.build_summary(&metadata);

        info!(
            "analyzed {} ({} pages, {} tables)",
            metadata.filename,
            pages.len(),
            all_tables.len()
        );

        DocumentRecord {
            full_text,
            pages,
            tables: all_tables,
            metadata,
            summary,
        }
    }

    /// Compose the display summary from finalized metadata.
    ///
    /// Each line appears only when its collection is non-empty; date,
    /// number, and entity previews are capped, keywords are shown in
    /// full.
    fn build_summary(&self, metadata: &MetadataRecord) -> String {
        let mut lines = Vec::new();
        let limit = self.options.preview_limit;

        if !metadata.dates.is_empty() {
            lines.push(format!("Dates found: {}", preview(&metadata.dates, limit)));
        }
        if !metadata.amounts.is_empty() {
            lines.push(format!("Numbers found: {}", preview(&metadata.amounts, limit)));
        }
        if !metadata.entities.is_empty() {
            lines.push(format!("Entities found: {}", preview(&metadata.entities, limit)));
        }
        if !metadata.keywords.is_empty() {
            lines.push(format!("Keywords found: {}", metadata.keywords.join(", ")));
        }

        lines.join("\n")
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(items: &[String], limit: usize) -> String {
    items[..items.len().min(limit)].join(", ")
}
