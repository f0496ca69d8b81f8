//! User document templates.
//!
//! A template is literal markdown with `{{ Emit }}` and `{{ EmitSignature }}`
//! actions. The actions are resolved through callbacks, so templates never
//! see the document or the style directly.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template looked up in the package directory.
pub const TEMPLATE_FILE: &str = ".docdown.markdown";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {0}")]
    Unclosed(usize),
    #[error("unknown action {0:?}. Use Emit or EmitSignature")]
    UnknownAction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Emit,
    EmitSignature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Action(Action),
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source. Whitespace inside the braces and a leading
    /// `.` on the action name are accepted: `{{.Emit}}`, `{{ Emit }}`.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(TemplateError::Unclosed(offset + open))?;

            let name = after_open[..close].trim();
            let name = name.strip_prefix('.').unwrap_or(name);
            let action = match name {
                "Emit" => Action::Emit,
                "EmitSignature" => Action::EmitSignature,
                other => return Err(TemplateError::UnknownAction(other.to_string())),
            };
            segments.push(Segment::Action(action));

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Template { segments })
    }

    /// Render with the two document callbacks.
    pub fn execute(
        &self,
        emit: impl Fn() -> String,
        emit_signature: impl Fn() -> String,
    ) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Action(Action::Emit) => out.push_str(&emit()),
                Segment::Action(Action::EmitSignature) => out.push_str(&emit_signature()),
            }
        }
        out
    }
}

/// Template file to use: the explicit one, else `TEMPLATE_FILE` in `dir`
/// when it exists.
pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = dir.join(TEMPLATE_FILE);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}

/// Read and parse a template file.
pub fn load(path: &Path) -> anyhow::Result<Template> {
    use anyhow::Context;

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    Template::parse(&source)
        .with_context(|| format!("error parsing template \"{}\"", path.display()))
}
