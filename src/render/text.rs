//! Prose reflow: paragraph-preserving word wrap with indentation.

use unicode_width::UnicodeWidthStr;

/// Total line budget; deeper indentation narrows the wrapped text.
pub const PAGE_WIDTH: usize = 80;

/// Extra indentation for preformatted lines, enough to make them a
/// markdown code block.
const PRE_INDENT: &str = "    ";

enum Block<'a> {
    Paragraph(Vec<&'a str>),
    Preformatted(Vec<&'a str>),
}

/// Reflow with the standard width for `indent`.
pub fn format_indent(text: &str, indent: &str) -> String {
    let width = PAGE_WIDTH.saturating_sub(2 * indent.len());
    reflow(text, indent, indent, width)
}

/// Wrap `text` to `width` columns.
///
/// Blank lines separate paragraphs and are kept as single blank lines.
/// Indented runs of lines are preformatted: their common indentation is
/// removed and they are emitted unwrapped behind an extra four spaces.
/// The first emitted line gets `first_indent`, every other non-blank line
/// gets `indent`. Words wider than `width` stay whole on their own line.
pub fn reflow(text: &str, first_indent: &str, indent: &str, width: usize) -> String {
    let mut out = String::new();
    let mut first = true;
    let mut emit = |out: &mut String, line: &str| {
        out.push_str(if first { first_indent } else { indent });
        out.push_str(line);
        out.push('\n');
        first = false;
    };

    for (i, block) in blocks(text).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Paragraph(lines) => {
                for line in wrap(lines, width) {
                    emit(&mut out, &line);
                }
            }
            Block::Preformatted(lines) => {
                for line in lines {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        emit(&mut out, &format!("{}{}", PRE_INDENT, line));
                    }
                }
            }
        }
    }

    out
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// Split text into paragraphs and preformatted runs.
fn blocks(text: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if is_blank(lines[i]) {
            i += 1;
            continue;
        }

        let start = i;
        if is_indented(lines[i]) {
            while i < lines.len() && (is_blank(lines[i]) || is_indented(lines[i])) {
                i += 1;
            }
            let mut end = i;
            while end > start && is_blank(lines[end - 1]) {
                end -= 1;
            }
            blocks.push(Block::Preformatted(unindent(&lines[start..end])));
        } else {
            while i < lines.len() && !is_blank(lines[i]) && !is_indented(lines[i]) {
                i += 1;
            }
            blocks.push(Block::Paragraph(lines[start..i].to_vec()));
        }
    }

    blocks
}

/// Strip the space/tab prefix shared by all non-blank lines.
/// Blank lines come back empty.
fn unindent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut prefix: Option<&str> = None;
    for line in lines.iter().filter(|l| !is_blank(l)) {
        let ws = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        prefix = Some(match prefix {
            None => ws,
            Some(p) => common_prefix(p, ws),
        });
    }
    let cut = prefix.map_or(0, str::len);

    lines
        .iter()
        .map(|&line| if is_blank(line) { "" } else { &line[cut..] })
        .collect()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Greedy word wrap of one paragraph.
fn wrap(lines: &[&str], width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in lines.iter().flat_map(|l| l.split_whitespace()) {
        let word_width = word.width();
        if !current.is_empty() && current_width + 1 + word_width > width {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        wrapped.push(current);
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(format_indent("", ""), "");
        assert_eq!(format_indent("\n  \n\n", ""), "");
    }

    #[test]
    fn single_sentence() {
        assert_eq!(
            format_indent("New creates a widget.", ""),
            "New creates a widget.\n"
        );
    }

    #[test]
    fn joins_lines_of_a_paragraph() {
        assert_eq!(
            format_indent("Package widget\nspins things.", ""),
            "Package widget spins things.\n"
        );
    }

    #[test]
    fn preserves_paragraph_breaks() {
        assert_eq!(
            format_indent("First para.\n\n\n\nSecond para.", ""),
            "First para.\n\nSecond para.\n"
        );
    }

    #[test]
    fn wraps_to_width() {
        assert_eq!(
            reflow("aaa bbb ccc ddd", "", "", 7),
            "aaa bbb\nccc ddd\n"
        );
    }

    #[test]
    fn width_invariant() {
        let text = "The quick brown fox jumps over the lazy dog while the \
                    cat watches from a comfortable distance, unimpressed by \
                    the whole performance and waiting for dinner to arrive.";
        for width in [10, 20, 33, 80] {
            let out = reflow(text, "", "", width);
            for line in out.lines() {
                assert!(line.width() <= width, "{:?} wider than {}", line, width);
            }
        }
    }

    #[test]
    fn long_word_not_split() {
        let out = reflow("a supercalifragilistic b", "", "", 5);
        assert_eq!(out, "a\nsupercalifragilistic\nb\n");
    }

    #[test]
    fn first_and_continuation_prefixes() {
        let out = reflow("one two three\n\nfour", "- ", "  ", 8);
        assert_eq!(out, "- one two\n  three\n\n  four\n");
    }

    #[test]
    fn indent_narrows_width() {
        let text = "word ".repeat(30);
        let out = format_indent(&text, "    ");
        for line in out.lines() {
            assert!(line.len() <= 4 + PAGE_WIDTH - 8);
            assert!(line.starts_with("    "));
        }
    }

    #[test]
    fn preformatted_block_kept_verbatim() {
        let text = "Example:\n\n\tw := widget.New()\n\n\tw.Spin(3)\n\nDone.";
        assert_eq!(
            format_indent(text, ""),
            "Example:\n\n    w := widget.New()\n\n    w.Spin(3)\n\nDone.\n"
        );
    }

    #[test]
    fn preformatted_common_indent_removed() {
        let text = "    if x {\n        y()\n    }\n";
        assert_eq!(format_indent(text, ""), "    if x {\n        y()\n    }\n");
    }

    #[test]
    fn preformatted_with_unicode_spaces() {
        let text = "Example:\n\n \u{2002}a()\n \u{2003}b()\n";
        assert_eq!(
            format_indent(text, ""),
            "Example:\n\n    \u{2002}a()\n    \u{2003}b()\n"
        );
    }

    #[test]
    fn preformatted_directly_after_paragraph() {
        let text = "Run it:\n  make all\n";
        assert_eq!(format_indent(text, ""), "Run it:\n\n    make all\n");
    }
}
