//! Rendering style: every choice the renderers consult, bundled as one value.

use crate::model::Category;
use crate::render::heading::HeadingPattern;

/// Output dialect for code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// GitHub-flavored: fenced code blocks with a language tag.
    #[default]
    Flavored,
    /// Standard markdown: code indented by four spaces.
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Show the `import "..."` hint under the title
    pub include_import: bool,

    /// Marker for headings promoted inside the synopsis
    pub synopsis_header: String,
    pub heading: HeadingPattern,

    pub usage_header: String,

    pub constant_header: String,
    pub variable_header: String,
    pub function_header: String,
    pub type_header: String,
    /// Constructors and methods listed under a type
    pub type_function_header: String,

    pub flavor: Flavor,
    /// Fence language tag
    pub language: String,

    pub include_signature: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            include_import: true,
            synopsis_header: "###".to_string(),
            heading: HeadingPattern::TitleCase1Word,
            usage_header: "## Usage\n".to_string(),
            constant_header: "####".to_string(),
            variable_header: "####".to_string(),
            function_header: "####".to_string(),
            type_header: "####".to_string(),
            type_function_header: "####".to_string(),
            flavor: Flavor::Flavored,
            language: "go".to_string(),
            include_signature: false,
        }
    }
}

impl Style {
    /// Header prefix for entries of `category`.
    pub fn header_for(&self, category: Category) -> &str {
        match category {
            Category::Constants => &self.constant_header,
            Category::Variables => &self.variable_header,
            Category::Functions => &self.function_header,
            Category::Types => &self.type_header,
            Category::TypeFunctions | Category::Methods => &self.type_function_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = Style::default();
        assert!(style.include_import);
        assert!(!style.include_signature);
        assert_eq!(style.heading, HeadingPattern::TitleCase1Word);
        assert_eq!(style.flavor, Flavor::Flavored);
        assert_eq!(style.usage_header, "## Usage\n");
    }

    #[test]
    fn method_headers_use_type_function_header() {
        let style = Style {
            function_header: "####".to_string(),
            type_function_header: "#####".to_string(),
            ..Style::default()
        };
        assert_eq!(style.header_for(Category::Functions), "####");
        assert_eq!(style.header_for(Category::TypeFunctions), "#####");
        assert_eq!(style.header_for(Category::Methods), "#####");
    }
}
