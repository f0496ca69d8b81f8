//! Data model for package documentation — independent of the indexer format.

/// Complete documentation for a single package or command.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    /// Package-level doc comment, source of the synopsis
    pub doc: String,
    /// Category sections, always in `Category::rank` order
    pub sections: Vec<Section>,
}

/// Library packages get a usage section; commands only get a synopsis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Command,
    Library {
        /// Import path shown in the header hint (from `.import`)
        dot_import: Option<String>,
    },
}

/// Documentation category of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Constants,
    Variables,
    Functions,
    Types,
    /// Constructors listed under a type
    TypeFunctions,
    /// Methods listed under a type
    Methods,
}

impl Category {
    /// Position in the rendered output. Top-level documents only hold
    /// constants, variables, functions and types; types only hold constants,
    /// variables, type functions and methods.
    pub fn rank(self) -> u8 {
        match self {
            Category::Constants => 0,
            Category::Variables => 1,
            Category::Functions | Category::TypeFunctions => 2,
            Category::Types | Category::Methods => 3,
        }
    }

    /// Declaration keyword used in entry header lines.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Constants => "const",
            Category::Variables => "var",
            Category::Functions | Category::TypeFunctions | Category::Methods => "func",
            Category::Types => "type",
        }
    }
}

/// A run of entries sharing one category.
#[derive(Debug, Clone)]
pub struct Section {
    pub category: Category,
    pub entries: Vec<Entry>,
}

/// One documented declaration.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub name: String,
    /// Method receiver, e.g. `w *Widget`
    pub receiver: Option<String>,
    pub doc: String,
    /// Verbatim declaration source
    pub decl: Option<String>,
    /// Nested sections (types only)
    pub sections: Vec<Section>,
}

impl Document {
    /// Build a document, putting sections into category order.
    ///
    /// The sort is stable: entries and same-category sections keep the order
    /// they were supplied in.
    pub fn new(
        name: impl Into<String>,
        kind: DocumentKind,
        doc: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        Document {
            name: name.into(),
            kind,
            doc: doc.into(),
            sections: ordered(sections),
        }
    }

    /// True when no category has any entries.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }
}

impl Section {
    pub fn new(category: Category, entries: Vec<Entry>) -> Self {
        Section { category, entries }
    }
}

impl Entry {
    pub fn new(name: impl Into<String>, doc: impl Into<String>, decl: Option<String>) -> Self {
        Entry {
            name: name.into(),
            doc: doc.into(),
            decl,
            ..Default::default()
        }
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Attach nested sections, putting them into category order.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = ordered(sections);
        self
    }

    /// An entry with nothing to show.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.doc.trim().is_empty()
            && self.decl.as_deref().map_or(true, |d| d.trim().is_empty())
    }
}

fn ordered(mut sections: Vec<Section>) -> Vec<Section> {
    sections.retain(|s| !s.entries.is_empty());
    sections.sort_by_key(|s| s.category.rank());
    sections
}
