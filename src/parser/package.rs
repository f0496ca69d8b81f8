//! Indexer JSON schema and conversion into a [`Document`].

use crate::model::{Category, Document, DocumentKind, Entry, Section};
use serde::Deserialize;

/// One package as produced by the source indexer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PackageInfo {
    pub name: String,
    pub command: bool,
    pub doc: String,
    pub consts: Vec<ValueInfo>,
    pub vars: Vec<ValueInfo>,
    pub funcs: Vec<FuncInfo>,
    pub types: Vec<TypeInfo>,
}

/// A constant or variable group.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValueInfo {
    pub name: String,
    pub doc: String,
    pub decl: Option<String>,
}

/// A function or method.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FuncInfo {
    pub name: String,
    pub recv: Option<String>,
    pub doc: String,
    pub decl: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TypeInfo {
    pub name: String,
    pub doc: String,
    pub decl: Option<String>,
    pub consts: Vec<ValueInfo>,
    pub vars: Vec<ValueInfo>,
    /// Constructors returning this type
    pub funcs: Vec<FuncInfo>,
    pub methods: Vec<FuncInfo>,
}

/// Indexer output: a single package or every package found in a directory.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IndexOutput {
    Many(Vec<PackageInfo>),
    One(PackageInfo),
}

impl IndexOutput {
    pub fn into_packages(self) -> Vec<PackageInfo> {
        match self {
            IndexOutput::One(pkg) => vec![pkg],
            IndexOutput::Many(pkgs) => pkgs,
        }
    }
}

/// How a package is documented.
#[derive(Debug, PartialEq, Eq)]
pub enum PackageRole {
    /// `main` packages carry no docs by convention
    Skip,
    /// Documentation for a command; `documentation` packages are named
    /// after their directory
    Command,
    Library,
}

impl PackageInfo {
    pub fn role(&self) -> PackageRole {
        match self.name.as_str() {
            "main" => PackageRole::Skip,
            "documentation" => PackageRole::Command,
            _ if self.command => PackageRole::Command,
            _ => PackageRole::Library,
        }
    }

    /// Build the document. `name` overrides the package name (commands
    /// documented by a `documentation` package).
    pub fn into_document(self, kind: DocumentKind, name: Option<String>) -> Document {
        let name = name.unwrap_or(self.name);
        let sections = vec![
            Section::new(Category::Constants, values(self.consts)),
            Section::new(Category::Variables, values(self.vars)),
            Section::new(Category::Functions, funcs(self.funcs)),
            Section::new(
                Category::Types,
                self.types.into_iter().map(TypeInfo::into_entry).collect(),
            ),
        ];
        Document::new(name, kind, self.doc, sections)
    }
}

impl ValueInfo {
    fn into_entry(self) -> Entry {
        Entry::new(self.name, self.doc, self.decl)
    }
}

impl FuncInfo {
    fn into_entry(self) -> Entry {
        let entry = Entry::new(self.name, self.doc, self.decl);
        match self.recv {
            Some(recv) if !recv.is_empty() => entry.with_receiver(recv),
            _ => entry,
        }
    }
}

impl TypeInfo {
    fn into_entry(self) -> Entry {
        Entry::new(self.name, self.doc, self.decl).with_sections(vec![
            Section::new(Category::Constants, values(self.consts)),
            Section::new(Category::Variables, values(self.vars)),
            Section::new(Category::TypeFunctions, funcs(self.funcs)),
            Section::new(Category::Methods, funcs(self.methods)),
        ])
    }
}

fn values(list: Vec<ValueInfo>) -> Vec<Entry> {
    list.into_iter().map(ValueInfo::into_entry).collect()
}

fn funcs(list: Vec<FuncInfo>) -> Vec<Entry> {
    list.into_iter().map(FuncInfo::into_entry).collect()
}
