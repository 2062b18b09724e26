//! Page composition: builds page records and the marked full-text stream.

use super::zones::PageZones;
use crate::model::{PageRecord, RawPage, Table};

/// Separator placed between table cells in the full-text stream.
pub const CELL_SEPARATOR: &str = " | ";

/// Assemble the analyzed record for one page.
pub fn compose_page(
    number: u32,
    zones: PageZones,
    page: &RawPage,
    tables: Vec<Table>,
) -> PageRecord {
    PageRecord {
        number,
        header: zones.header,
        body: zones.body,
        footer: zones.footer,
        raw_text: page.text.clone(),
        tables,
        images: page.images.clone(),
        words: page.words.clone(),
    }
}

/// Append one page's contribution to the running full-text stream.
///
/// Block order is fixed: page boundary marker, optional header block,
/// body block (always, even when empty), optional footer block,
/// optional tables block. Optional blocks are omitted entirely when
/// their content is empty; emitted blocks always carry both opening
/// and closing markers.
pub fn append_page_text(out: &mut String, record: &PageRecord) {
    out.push_str(&format!("=== Page {} ===\n", record.number));

    if !record.header.is_empty() {
        push_block(out, "HEADER", &record.header);
    }

    push_block(out, "BODY", &record.body);

    if !record.footer.is_empty() {
        push_block(out, "FOOTER", &record.footer);
    }

    if !record.tables.is_empty() {
        out.push_str("[TABLES]\n");
        for table in &record.tables {
            for row in table.rows_joined(CELL_SEPARATOR) {
                out.push_str(&row);
                out.push('\n');
            }
        }
        out.push_str("[/TABLES]\n");
    }
}

fn push_block(out: &mut String, tag: &str, content: &str) {
    out.push_str(&format!("[{tag}]\n"));
    if !content.is_empty() {
        out.push_str(content);
        out.push('\n');
    }
    out.push_str(&format!("[/{tag}]\n"));
}
