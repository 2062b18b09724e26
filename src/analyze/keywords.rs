//! Keyword ranking: frequency-based selection of repeated terms.

use regex::Regex;
use std::collections::HashMap;

/// Maximum number of keywords returned by default.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Common function words and pronouns excluded from keyword ranking.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "and", "any", "are", "because",
    "been", "before", "being", "below", "between", "both", "but", "can", "cannot", "could",
    "did", "does", "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "into", "its", "itself", "just", "like", "may", "might", "more",
    "most", "much", "must", "myself", "nor", "not", "now", "off", "once", "only",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she",
    "should", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "too", "under", "until",
    "upon", "very", "was", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    "also", "among", "another", "around", "onto", "per", "via", "within", "without", "yet",
];

/// Frequency-based keyword ranker over the assembled full text.
pub struct KeywordRanker {
    token_pattern: Regex,
    max_keywords: usize,
}

impl KeywordRanker {
    /// Create a ranker returning at most `max_keywords` entries.
    pub fn new(max_keywords: usize) -> Self {
        Self {
            token_pattern: Regex::new(r"[A-Za-z]{3,}").expect("valid token pattern"),
            max_keywords,
        }
    }

    /// Rank repeated terms in `text`.
    ///
    /// Tokens are runs of 3+ alphabetic characters, lowercased, with
    /// stopwords removed; only tokens occurring more than once
    /// qualify. Frequency ties break toward the lexically later word;
    /// this ordering is arbitrary but kept stable for compatible
    /// output across runs.
    pub fn rank(&self, text: &str) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for m in self.token_pattern.find_iter(text) {
            let token = m.as_str().to_lowercase();
            if STOPWORDS.contains(&token.as_str()) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .collect();
        ranked.sort_by(|a, b| (b.1, &b.0).cmp(&(a.1, &a.0)));

        ranked
            .into_iter()
            .take(self.max_keywords)
            .map(|(word, _)| word)
            .collect()
    }
}

impl Default for KeywordRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEYWORDS)
    }
}
