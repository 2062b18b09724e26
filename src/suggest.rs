//! Filename suggestion: the seam to the language-model collaborator.
//!
//! The exchange contract is deliberately thin: send the document's
//! full extracted text, receive a suggested name string. No prompt or
//! transport logic belongs in this crate.

use crate::error::Result;
use crate::model::DocumentRecord;

/// A collaborator that proposes a filename for extracted text.
pub trait NameSuggester {
    /// Suggest a name for a document given its full extracted text.
    fn suggest(&self, full_text: &str) -> Result<String>;
}

/// Ask `suggester` for a filename for an analyzed document, forwarding
/// its structurally-marked full text and returning the raw response.
pub fn suggest_filename<S: NameSuggester>(
    record: &DocumentRecord,
    suggester: &S,
) -> Result<String> {
    suggester.suggest(&record.full_text)
}
