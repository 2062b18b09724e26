//! Document sources: the seam to the decoding collaborator.
//!
//! Binary PDF decoding lives outside this crate; a [`DocumentSource`]
//! hands over an already-decoded [`ParsedDocument`]. Loading is the
//! only fatal error path in the system — everything downstream of a
//! successful load is error-free by construction.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::ParsedDocument;

/// A provider of decoded documents.
///
/// Implementations own whatever handle the underlying decoder needs
/// and must release it on every exit path of `load`, whether or not
/// decoding succeeds.
pub trait DocumentSource {
    /// Human-readable identification of the source (e.g. its path).
    fn describe(&self) -> String;

    /// Decode and hand over the document.
    fn load(&self) -> Result<ParsedDocument>;
}

/// A source backed by a serde_json dump of a [`ParsedDocument`], as
/// produced by an external decoder.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source over a JSON dump file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the dump file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for JsonSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ParsedDocument> {
        let file = File::open(&self.path)?;
        let document = serde_json::from_reader(BufReader::new(file))?;
        Ok(document)
    }
}
