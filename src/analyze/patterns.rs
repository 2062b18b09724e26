//! Pattern mining: date, amount, and entity candidates from raw text.
//!
//! Three independent regex families run over each page's raw text and
//! accumulate into the document's candidate sets. Matches are plausible
//! candidates only; set semantics collapse exact-string duplicates.

use crate::model::MetadataBuilder;
use regex::Regex;

/// Entity matches this short (after trimming) are discarded.
const MIN_ENTITY_LEN: usize = 2;

/// Compiled pattern families, built once and reused across pages.
pub struct PatternMiner {
    date_patterns: Vec<Regex>,
    amount_patterns: Vec<Regex>,
    entity_patterns: Vec<Regex>,
}

impl PatternMiner {
    /// Compile all pattern families.
    pub fn new() -> Self {
        Self {
            date_patterns: vec![
                // Slash/hyphen numeric triplets. Month/day and
                // day/month orderings share one shape.
                Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-](?:19|20)\d{2}\b").expect("valid date pattern"),
                Regex::new(r"\b(?:19|20)\d{2}[/-]\d{1,2}[/-]\d{1,2}\b").expect("valid date pattern"),
                // Spelled-out month with optional ordinal suffix.
                Regex::new(
                    r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?,?\s+(?:19|20)\d{2}\b",
                )
                .expect("valid date pattern"),
            ],
            amount_patterns: vec![
                // Comma-grouped numbers, optionally with two decimals.
                Regex::new(r"\b\d{1,3}(?:,\d{3})+(?:\.\d{2})?\b").expect("valid amount pattern"),
                // Bare integer tokens; currency is not distinguished here.
                Regex::new(r"\b\d+\b").expect("valid amount pattern"),
            ],
            entity_patterns: vec![
                // Capitalized word sequences (proper-noun-like).
                Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("valid entity pattern"),
                // All-uppercase acronyms.
                Regex::new(r"\b[A-Z]{2,}\b").expect("valid entity pattern"),
                // Labeled identifiers; the value is in the capture group.
                Regex::new(r"\b(?:ID|Number|Reference):\s*([A-Za-z0-9#-]+)")
                    .expect("valid entity pattern"),
            ],
        }
    }

    /// Mine one page's raw text into the shared candidate sets.
    ///
    /// Never fails; text without matches simply adds nothing.
    pub fn mine_page(&self, text: &str, metadata: &mut MetadataBuilder) {
        for pattern in &self.date_patterns {
            for m in pattern.find_iter(text) {
                metadata.add_date(m.as_str());
            }
        }

        for pattern in &self.amount_patterns {
            for m in pattern.find_iter(text) {
                metadata.add_amount(m.as_str());
            }
        }

        for pattern in &self.entity_patterns {
            for caps in pattern.captures_iter(text) {
                let value = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().trim())
                    .unwrap_or_default();
                if value.chars().count() >= MIN_ENTITY_LEN {
                    metadata.add_entity(value);
                }
            }
        }
    }
}

impl Default for PatternMiner {
    fn default() -> Self {
        Self::new()
    }
}
