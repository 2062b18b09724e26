//! Zone classification: header / body / footer from glyph geometry.
//!
//! Characters are grouped into lines by vertical proximity, then each
//! line is assigned to a zone band by its mean vertical coordinate.
//! Pages without character-level geometry degrade to body-only output.

use crate::model::{PageChar, RawPage};

/// Vertical tolerance (in page units) for grouping characters into the
/// same text line.
pub const DEFAULT_LINE_TOLERANCE: f32 = 3.0;

/// Fraction of the page height reserved for the header band at the top
/// and the footer band at the bottom.
pub const DEFAULT_ZONE_BAND: f32 = 0.15;

/// The three zone texts for one page, already cleaned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageZones {
    /// Text in the top band
    pub header: String,

    /// Text in the middle band
    pub body: String,

    /// Text in the bottom band
    pub footer: String,
}

impl PageZones {
    /// Degraded result for a page without character geometry: the whole
    /// cleaned plain text becomes body, header and footer stay empty.
    pub fn body_only(text: &str) -> Self {
        Self {
            body: clean_lines(text),
            ..Self::default()
        }
    }
}

/// A contiguous run of characters judged to lie on one text line.
/// Transient: exists only during classification.
#[derive(Debug)]
struct Line {
    text: String,
    top_sum: f32,
    char_count: usize,
}

impl Line {
    fn new() -> Self {
        Self {
            text: String::new(),
            top_sum: 0.0,
            char_count: 0,
        }
    }

    fn push(&mut self, ch: &PageChar) {
        self.text.push_str(&ch.text);
        self.top_sum += ch.top;
        self.char_count += 1;
    }

    /// Mean vertical coordinate of the line's characters.
    fn mean_top(&self) -> f32 {
        if self.char_count == 0 {
            0.0
        } else {
            self.top_sum / self.char_count as f32
        }
    }

    fn is_empty(&self) -> bool {
        self.char_count == 0
    }
}

/// Group positioned characters into lines by vertical proximity.
fn group_lines(chars: &[PageChar], tolerance: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::new();

    for ch in chars {
        if !current.is_empty() && (ch.top - current.mean_top()).abs() > tolerance {
            lines.push(current);
            current = Line::new();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Classify a page's text into header/body/footer zones.
///
/// Zone bands partition the page height into three disjoint regions:
/// top `band` fraction (boundary inclusive), bottom `band` fraction
/// (boundary inclusive), and everything between. A line contributes to
/// exactly one zone. Never fails; a page without character geometry
/// yields [`PageZones::body_only`] over its plain text.
pub fn split_zones(page: &RawPage, band: f32, tolerance: f32) -> PageZones {
    if !page.has_char_geometry() {
        return PageZones::body_only(&page.text);
    }

    let header_limit = band * page.height;
    let footer_limit = page.height - header_limit;

    let mut header = Vec::new();
    let mut body = Vec::new();
    let mut footer = Vec::new();

    for line in group_lines(&page.chars, tolerance) {
        let top = line.mean_top();
        if top <= header_limit {
            header.push(line.text);
        } else if top >= footer_limit {
            footer.push(line.text);
        } else {
            body.push(line.text);
        }
    }

    PageZones {
        header: clean_lines(&header.join("\n")),
        body: clean_lines(&body.join("\n")),
        footer: clean_lines(&footer.join("\n")),
    }
}

/// Strip each line and drop blank lines.
pub fn clean_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
