//! Document analysis pipeline.
//!
//! The [`Analyzer`] drives the per-page stages — zone classification,
//! table normalization, pattern mining, page composition — then ranks
//! keywords over the assembled text and finalizes the metadata record.

mod analyzer;
mod compose;
mod keywords;
mod patterns;
mod tables;
mod zones;

pub use analyzer::{AnalyzeOptions, Analyzer, SUMMARY_PREVIEW_LIMIT};
pub use compose::{append_page_text, compose_page, CELL_SEPARATOR};
pub use keywords::{KeywordRanker, DEFAULT_MAX_KEYWORDS};
pub use patterns::PatternMiner;
pub use tables::{normalize_page_tables, normalize_table};
pub use zones::{clean_lines, split_zones, PageZones, DEFAULT_LINE_TOLERANCE, DEFAULT_ZONE_BAND};
