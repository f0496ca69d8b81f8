//! Package loading — indexer JSON from a file, a directory or stdin.

pub mod package;

use crate::model::{Document, DocumentKind};
use package::{IndexOutput, PackageInfo, PackageRole};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Indexer output inside a package directory.
pub const PACKAGE_FILE: &str = "package.json";

/// Optional file whose first line is the import path shown in the header.
pub const IMPORT_FILE: &str = ".import";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse \"{}\": {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no package/documentation found in {} ({})", .path.display(), .absolute.display())]
    NoPackage { path: PathBuf, absolute: PathBuf },
}

/// Load the document for `path`.
///
/// `-` reads JSON from stdin, with `.` as the package directory. A
/// directory is read through its `package.json`; any other path is the JSON
/// file itself. The `.import` file is looked up next to the JSON.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    if path == Path::new("-") {
        return from_reader(io::stdin(), path, Path::new("."));
    }

    let (json_path, dir) = if path.is_dir() {
        (path.join(PACKAGE_FILE), path.to_path_buf())
    } else {
        (path.to_path_buf(), containing_dir(path))
    };

    let json = fs::read_to_string(&json_path).map_err(|source| LoadError::Io {
        path: json_path.clone(),
        source,
    })?;
    let dot_import = read_dot_import(&dir);

    from_json(&json, &json_path, Some(&dir), dot_import)
}

/// Read indexer JSON from `reader`; `dir` names `documentation` packages.
pub fn from_reader(
    mut reader: impl Read,
    source: &Path,
    dir: &Path,
) -> Result<Document, LoadError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|err| LoadError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;
    from_json(&input, source, Some(dir), None)
}

/// Directory holding `path`, `.` for bare file names.
pub fn containing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Parse indexer JSON and pick the package to document.
pub fn from_json(
    json: &str,
    source: &Path,
    dir: Option<&Path>,
    dot_import: Option<String>,
) -> Result<Document, LoadError> {
    let packages = serde_json::from_str::<IndexOutput>(json)
        .map_err(|source_err| LoadError::Json {
            path: source.to_path_buf(),
            source: source_err,
        })?
        .into_packages();

    select(packages, dir, dot_import).ok_or_else(|| LoadError::NoPackage {
        path: source.to_path_buf(),
        absolute: std::path::absolute(source).unwrap_or_else(|_| source.to_path_buf()),
    })
}

/// First package that is not `main`.
fn select(
    packages: Vec<PackageInfo>,
    dir: Option<&Path>,
    dot_import: Option<String>,
) -> Option<Document> {
    for pkg in packages {
        match pkg.role() {
            PackageRole::Skip => {
                debug!(package = %pkg.name, "skipping package");
            }
            PackageRole::Command => {
                let name = if pkg.name == "documentation" {
                    dir.and_then(dir_name)
                } else {
                    None
                };
                debug!(package = %pkg.name, "documenting command");
                return Some(pkg.into_document(DocumentKind::Command, name));
            }
            PackageRole::Library => {
                debug!(package = %pkg.name, "documenting library");
                return Some(pkg.into_document(DocumentKind::Library { dot_import }, None));
            }
        }
    }
    None
}

fn dir_name(dir: &Path) -> Option<String> {
    let absolute = fs::canonicalize(dir).ok()?;
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}

fn read_dot_import(dir: &Path) -> Option<String> {
    let path = dir.join(IMPORT_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            debug!(path = %path.display(), "no import file");
            return None;
        }
    };
    content
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}
