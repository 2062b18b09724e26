//! Batch analysis over independent documents.
//!
//! Documents are analyzed in parallel with rayon; within each
//! document, processing stays sequential page-at-a-time. Every
//! document yields its own result — a failure to load one never aborts
//! the others.

use rayon::prelude::*;

use crate::analyze::{AnalyzeOptions, Analyzer};
use crate::error::Result;
use crate::model::DocumentRecord;
use crate::source::DocumentSource;

/// Outcome of analyzing one source in a batch.
pub struct BatchItem {
    /// Source description (e.g. its path)
    pub source: String,

    /// The analysis result, or the load error for this document
    pub result: Result<DocumentRecord>,
}

/// Analyze every source, isolating failures per document.
pub fn analyze_all<S>(sources: &[S], options: &AnalyzeOptions) -> Vec<BatchItem>
where
    S: DocumentSource + Sync,
{
    sources
        .par_iter()
        .map(|source| {
            // Fresh analyzer per document: no shared mutable state
            // crosses document boundaries.
            let analyzer = Analyzer::with_options(options.clone());
            let result = source.load().map(|doc| analyzer.analyze(&doc));
            BatchItem {
                source: source.describe(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParsedDocument, RawPage, SourceInfo};
    use crate::Error;

    enum FakeSource {
        Good(String),
        Broken,
    }

    impl DocumentSource for FakeSource {
        fn describe(&self) -> String {
            match self {
                FakeSource::Good(name) => name.clone(),
                FakeSource::Broken => "broken".to_string(),
            }
        }

        fn load(&self) -> Result<ParsedDocument> {
            match self {
                FakeSource::Good(name) => Ok(ParsedDocument::new(
                    SourceInfo {
                        filename: name.clone(),
                        ..SourceInfo::default()
                    },
                    vec![RawPage::with_text(612.0, 792.0, "content content")],
                )),
                FakeSource::Broken => Err(Error::Source("unreadable".to_string())),
            }
        }
    }

    #[test]
    fn test_failures_do_not_abort_batch() {
        let sources = vec![
            FakeSource::Good("a.pdf".to_string()),
            FakeSource::Broken,
            FakeSource::Good("b.pdf".to_string()),
        ];
        let items = analyze_all(&sources, &AnalyzeOptions::default());

        assert_eq!(items.len(), 3);
        let ok = items.iter().filter(|i| i.result.is_ok()).count();
        assert_eq!(ok, 2);
        let failed = items.iter().find(|i| i.result.is_err()).unwrap();
        assert_eq!(failed.source, "broken");
    }

    #[test]
    fn test_results_carry_descriptions() {
        let sources = vec![FakeSource::Good("report.pdf".to_string())];
        let items = analyze_all(&sources, &AnalyzeOptions::default());
        assert_eq!(items[0].source, "report.pdf");
        let record = items[0].result.as_ref().unwrap();
        assert_eq!(record.metadata.filename, "report.pdf");
    }
}
