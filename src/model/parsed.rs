//! Intermediate representation produced by the text parser.

use serde::{Deserialize, Serialize};

/// Structured view of free-form generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Document title (empty when the text had no title line)
    pub title: String,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has neither title nor sections.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.sections.is_empty()
    }

    /// Check if a title was detected.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Iterate over section headings that are present.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| s.heading.as_deref())
    }

    /// Total number of content items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.content.len()).sum()
    }
}

/// A heading and the content items that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, `None` for content before the first heading
    pub heading: Option<String>,

    /// Content items in source order
    pub content: Vec<ContentItem>,
}

impl Section {
    /// Create a section with a heading.
    pub fn with_heading(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            content: Vec::new(),
        }
    }

    /// Create a section without a heading.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Append a content item.
    pub fn push(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// A section with neither heading nor content is never emitted.
    pub fn is_empty(&self) -> bool {
        self.heading.as_deref().map_or(true, str::is_empty) && self.content.is_empty()
    }
}

/// A classified line of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum ContentItem {
    /// Plain paragraph line
    Paragraph(String),

    /// Question line, marker stripped
    Question(String),

    /// Answer line, marker stripped
    Answer(String),

    /// List item, marker stripped
    ListItem(String),

    /// Horizontal rule
    Divider,
}

impl ContentItem {
    /// Text carried by the item (empty for dividers).
    pub fn text(&self) -> &str {
        match self {
            ContentItem::Paragraph(t)
            | ContentItem::Question(t)
            | ContentItem::Answer(t)
            | ContentItem::ListItem(t) => t,
            ContentItem::Divider => "",
        }
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, ContentItem::ListItem(_))
    }
}
