//! Page-level types: raw decoder input and the analyzed page record.

use super::Table;
use serde::{Deserialize, Serialize};

/// A single character with its vertical position on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageChar {
    /// Distance from the top edge of the page
    pub top: f32,

    /// Glyph text (usually one character)
    pub text: String,
}

impl PageChar {
    /// Create a new positioned character.
    pub fn new(top: f32, text: impl Into<String>) -> Self {
        Self {
            top,
            text: text.into(),
        }
    }
}

/// A word with its bounding box and optional font information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Left edge
    pub x0: f32,

    /// Right edge
    pub x1: f32,

    /// Top edge
    pub top: f32,

    /// Bottom edge
    pub bottom: f32,

    /// Word text
    pub text: String,

    /// Font name (e.g., "Helvetica-Bold"), if reported by the decoder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    /// Font size in points, if reported by the decoder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

/// An image bounding box on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRegion {
    /// Left edge
    pub x0: f32,

    /// Right edge
    pub x1: f32,

    /// Top edge
    pub top: f32,

    /// Bottom edge
    pub bottom: f32,
}

impl ImageRegion {
    /// Create a new image region.
    pub fn new(x0: f32, x1: f32, top: f32, bottom: f32) -> Self {
        Self { x0, x1, top, bottom }
    }

    /// Width of the region.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the region.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A raw table grid as delivered by the decoder: rows of nullable cells.
pub type RawTable = Vec<Vec<Option<String>>>;

/// One page of decoder output, consumed read-only by the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Raw extractable text for the whole page
    #[serde(default)]
    pub text: String,

    /// Positioned characters, in reading order
    #[serde(default)]
    pub chars: Vec<PageChar>,

    /// Words with bounding boxes and font info, in reading order
    #[serde(default)]
    pub words: Vec<Word>,

    /// Raw table grids detected on the page
    #[serde(default)]
    pub tables: Vec<RawTable>,

    /// Image bounding boxes on the page
    #[serde(default)]
    pub images: Vec<ImageRegion>,
}

impl RawPage {
    /// Create an empty page with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            text: String::new(),
            chars: Vec::new(),
            words: Vec::new(),
            tables: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Create a page carrying plain text only (no geometry).
    pub fn with_text(width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(width, height)
        }
    }

    /// Whether the decoder supplied character-level geometry.
    pub fn has_char_geometry(&self) -> bool {
        !self.chars.is_empty()
    }
}

/// The analyzed result for one page. Immutable after composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed, contiguous)
    pub number: u32,

    /// Text classified into the top zone
    pub header: String,

    /// Text classified into the middle zone
    pub body: String,

    /// Text classified into the bottom zone
    pub footer: String,

    /// Raw page text as delivered by the decoder
    pub raw_text: String,

    /// Normalized tables found on this page
    pub tables: Vec<Table>,

    /// Image regions on this page
    pub images: Vec<ImageRegion>,

    /// Words with font information
    pub words: Vec<Word>,
}

impl PageRecord {
    /// Whether the page has any zoned or raw text at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.body.is_empty()
            && self.footer.is_empty()
            && self.raw_text.trim().is_empty()
    }

    /// Whether any table was found on the page.
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}
