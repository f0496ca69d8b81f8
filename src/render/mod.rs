//! Document assembly: header, synopsis, usage, signature.
//!
//! Every function here is a pure function of the document and the style.
//! `emit` and `emit_signature` are also the two callbacks exposed to
//! user templates.

pub mod code;
pub mod heading;
pub mod section;
pub mod text;

use crate::model::{Document, DocumentKind};
use crate::style::Style;
use section::render_section;
use text::format_indent;

/// Header, synopsis and (for libraries) usage, trimmed.
pub fn emit(doc: &Document, style: &Style) -> String {
    let mut out = String::new();

    render_header(&mut out, doc, style);
    render_synopsis(&mut out, doc, style);

    match doc.kind {
        DocumentKind::Library { .. } => render_usage(&mut out, doc, style),
        DocumentKind::Command => {}
    }

    trim(&out)
}

/// The attribution block, or `""` unless the style asks for it.
pub fn emit_signature(style: &Style) -> String {
    let mut out = String::new();
    render_signature(&mut out, style);
    trim(&out)
}

/// Full document: `emit` followed by the signature when enabled.
pub fn render(doc: &Document, style: &Style) -> String {
    let mut out = emit(doc, style);
    let signature = emit_signature(style);
    if !signature.is_empty() {
        out.push_str("\n\n");
        out.push_str(&signature);
    }
    out
}

/// Drop leading and trailing whitespace; the only global post-processing.
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

fn render_header(out: &mut String, doc: &Document, style: &Style) {
    out.push_str(&format!("# {}\n--\n", doc.name));

    if let DocumentKind::Library {
        dot_import: Some(ref path),
    } = doc.kind
    {
        if style.include_import && !path.is_empty() {
            out.push_str(&format!("    import \"{}\"\n\n", path));
        }
    }
}

fn render_synopsis(out: &mut String, doc: &Document, style: &Style) {
    if doc.doc.trim().is_empty() {
        return;
    }
    let synopsis = format_indent(&doc.doc, "");
    out.push_str(&style.heading.promote(&synopsis, &style.synopsis_header));
    out.push('\n');
}

fn render_usage(out: &mut String, doc: &Document, style: &Style) {
    out.push_str(&style.usage_header);
    out.push('\n');

    for section in &doc.sections {
        render_section(out, section, style);
    }
}

fn render_signature(out: &mut String, style: &Style) {
    if style.include_signature {
        out.push_str(&format!(
            "\n\n--\n**{}** {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Entry, Section};
    use crate::render::heading::HeadingPattern;
    use crate::style::Flavor;

    fn library(name: &str, doc: &str, sections: Vec<Section>) -> Document {
        Document::new(name, DocumentKind::Library { dot_import: None }, doc, sections)
    }

    fn widget() -> Document {
        library(
            "widget",
            "",
            vec![Section::new(
                Category::Functions,
                vec![Entry::new(
                    "New",
                    "New creates a widget.",
                    Some("func New() *Widget".to_string()),
                )],
            )],
        )
    }

    #[test]
    fn widget_flavored() {
        assert_eq!(
            emit(&widget(), &Style::default()),
            "# widget\n--\n## Usage\n\n#### func New\n\nNew creates a widget.\n\n```go\nfunc New() *Widget\n```"
        );
    }

    #[test]
    fn widget_plain() {
        let style = Style {
            flavor: Flavor::Plain,
            ..Style::default()
        };
        assert_eq!(
            emit(&widget(), &style),
            "# widget\n--\n## Usage\n\n#### func New\n\nNew creates a widget.\n\n    func New() *Widget"
        );
    }

    #[test]
    fn import_hint() {
        let doc = Document::new(
            "widget",
            DocumentKind::Library {
                dot_import: Some("example.com/widget".to_string()),
            },
            "",
            vec![],
        );
        assert_eq!(
            emit(&doc, &Style::default()),
            "# widget\n--\n    import \"example.com/widget\"\n\n## Usage"
        );

        let style = Style {
            include_import: false,
            ..Style::default()
        };
        assert_eq!(emit(&doc, &style), "# widget\n--\n## Usage");
    }

    #[test]
    fn synopsis_with_headings() {
        let doc = library(
            "widget",
            "Package widget spins things.\n\nQuick Start\n\nCall New.",
            vec![],
        );
        assert_eq!(
            emit(&doc, &Style::default()),
            "# widget\n--\nPackage widget spins things.\n\n### Quick Start\n\nCall New.\n\n## Usage"
        );

        let style = Style {
            heading: HeadingPattern::None,
            ..Style::default()
        };
        assert!(emit(&doc, &style).contains("\nQuick Start\n"));
    }

    #[test]
    fn command_has_no_usage() {
        let doc = Document::new(
            "spin",
            DocumentKind::Command,
            "Spin spins widgets from the command line.",
            vec![Section::new(
                Category::Functions,
                vec![Entry::new("Main", "", None)],
            )],
        );
        let out = emit(&doc, &Style::default());
        assert_eq!(out, "# spin\n--\nSpin spins widgets from the command line.");
        assert!(!out.contains("## Usage"));
    }

    #[test]
    fn command_ignores_import() {
        let doc = Document::new("spin", DocumentKind::Command, "", vec![]);
        assert_eq!(emit(&doc, &Style::default()), "# spin\n--");
    }

    #[test]
    fn categories_in_fixed_order() {
        let doc = library(
            "pkg",
            "",
            vec![
                Section::new(Category::Types, vec![Entry::new("T", "", None)]),
                Section::new(Category::Functions, vec![Entry::new("F", "", None)]),
                Section::new(Category::Variables, vec![Entry::new("V", "", None)]),
                Section::new(Category::Constants, vec![Entry::new("C", "", None)]),
            ],
        );
        let out = emit(&doc, &Style::default());
        let pos = |needle: &str| out.find(needle).unwrap();
        assert!(pos("const C") < pos("var V"));
        assert!(pos("var V") < pos("func F"));
        assert!(pos("func F") < pos("type T"));
    }

    #[test]
    fn signature_opt_in() {
        assert_eq!(emit_signature(&Style::default()), "");

        let style = Style {
            include_signature: true,
            ..Style::default()
        };
        let signature = emit_signature(&style);
        assert!(signature.starts_with("--\n**docdown**"));

        let full = render(&widget(), &style);
        assert!(full.ends_with(&signature));
        assert!(full.contains("```\n\n--\n**docdown**"));
    }

    #[test]
    fn render_without_signature_is_emit() {
        let style = Style::default();
        assert_eq!(render(&widget(), &style), emit(&widget(), &style));
    }

    #[test]
    fn trim_idempotent() {
        let once = emit(&widget(), &Style::default());
        assert_eq!(trim(&once), once);
        assert_eq!(trim(&trim("\n\n  # x\n\n")), "# x");
    }
}
