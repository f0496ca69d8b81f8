//! Per-category rendering of entries.

use crate::model::{Category, Entry, Section};
use crate::render::code::format_code;
use crate::render::text::format_indent;
use crate::style::Style;

/// Render every entry of a section.
pub fn render_section(out: &mut String, section: &Section, style: &Style) {
    for entry in &section.entries {
        if entry.is_blank() {
            continue;
        }
        render_entry(out, section.category, entry, style);
    }
}

/// Header line, doc text, declaration, then nested sections (types).
fn render_entry(out: &mut String, category: Category, entry: &Entry, style: &Style) {
    out.push_str(&entry_header(category, entry, style));
    out.push_str("\n\n");

    if !entry.doc.trim().is_empty() {
        out.push_str(&format_indent(&entry.doc, ""));
        out.push('\n');
    }

    if let Some(ref decl) = entry.decl {
        let block = format_code(decl, style.flavor, &style.language);
        if !block.is_empty() {
            out.push_str(&block);
            out.push('\n');
        }
    }

    for nested in &entry.sections {
        render_section(out, nested, style);
    }
}

/// `#### func (w *Widget) Spin`; unnamed entries stop at the keyword.
fn entry_header(category: Category, entry: &Entry, style: &Style) -> String {
    let mut header = format!("{} {}", style.header_for(category), category.keyword());
    if entry.name.is_empty() {
        return header;
    }
    header.push(' ');
    if let Some(recv) = entry.receiver.as_deref().filter(|r| !r.is_empty()) {
        header.push_str(&format!("({}) ", recv));
    }
    header.push_str(&entry.name);
    header
}
