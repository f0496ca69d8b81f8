//! Declaration source blocks: fenced or indented.

use crate::style::Flavor;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder the indexer leaves where struct fields were elided.
static RE_ELIDED_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*// contains filtered or unexported fields\s*(?:\n|\z)").unwrap()
});

/// Non-empty line starts.
static RE_LINE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^([^\n])").unwrap());

const CODE_INDENT: &str = "    ";

/// Format declaration source as a markdown code block.
///
/// The result always ends in a single newline; blank input gives `""`.
pub fn format_code(source: &str, flavor: Flavor, language: &str) -> String {
    let stripped = strip_elided(source);
    let mut lines: Vec<&str> = stripped.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }
    let body = lines.join("\n");

    match flavor {
        Flavor::Flavored => format!("```{}\n{}\n```\n", language, body),
        Flavor::Plain => indent(&format!("{}\n", body), CODE_INDENT),
    }
}

fn strip_elided(source: &str) -> String {
    RE_ELIDED_FIELDS.replace_all(source, "").into_owned()
}

/// Prefix every non-empty line with `prefix`.
fn indent(text: &str, prefix: &str) -> String {
    RE_LINE_START
        .replace_all(text, |caps: &regex::Captures| format!("{}{}", prefix, &caps[1]))
        .into_owned()
}
