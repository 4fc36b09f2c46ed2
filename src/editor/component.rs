//! Editor components, paragraphs and text nodes.
//!
//! Field names and nesting follow the editor's wire schema; every node is
//! tagged with its `@ctype`.

use serde::Serialize;

use super::NodeStyle;

/// Layout tag shared by most components.
pub const DEFAULT_LAYOUT: &str = "default";

/// Smallest styled unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype", rename = "textNode")]
pub struct TextNode {
    pub id: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
}

/// An ordered run of text nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype", rename = "paragraph")]
pub struct Paragraph {
    pub id: String,
    pub nodes: Vec<TextNode>,
}

impl Paragraph {
    /// Concatenated node values.
    pub fn plain_text(&self) -> String {
        self.nodes.iter().map(|n| n.value.as_str()).collect()
    }
}

/// A top-level node of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype")]
pub enum Component {
    #[serde(rename = "documentTitle")]
    Title(TitleComponent),
    #[serde(rename = "sectionTitle")]
    SectionTitle(SectionTitleComponent),
    #[serde(rename = "text")]
    Text(TextComponent),
    #[serde(rename = "quotation")]
    Quotation(QuotationComponent),
    #[serde(rename = "horizontalLine")]
    HorizontalLine(HorizontalLineComponent),
    #[serde(rename = "image")]
    Image(ImageComponent),
    #[serde(rename = "sticker")]
    Sticker(StickerComponent),
}

impl Component {
    /// Wire type name (`@ctype`).
    pub fn ctype(&self) -> &'static str {
        match self {
            Component::Title(_) => "documentTitle",
            Component::SectionTitle(_) => "sectionTitle",
            Component::Text(_) => "text",
            Component::Quotation(_) => "quotation",
            Component::HorizontalLine(_) => "horizontalLine",
            Component::Image(_) => "image",
            Component::Sticker(_) => "sticker",
        }
    }

    /// Component identifier.
    pub fn id(&self) -> &str {
        match self {
            Component::Title(c) => &c.id,
            Component::SectionTitle(c) => &c.id,
            Component::Text(c) => &c.id,
            Component::Quotation(c) => &c.id,
            Component::HorizontalLine(c) => &c.id,
            Component::Image(c) => &c.id,
            Component::Sticker(c) => &c.id,
        }
    }

    /// Layout tag.
    pub fn layout(&self) -> &str {
        match self {
            Component::Title(c) => &c.layout,
            Component::SectionTitle(c) => &c.layout,
            Component::Text(c) => &c.layout,
            Component::Quotation(c) => &c.layout,
            Component::HorizontalLine(c) => &c.layout,
            Component::Image(c) => &c.layout,
            Component::Sticker(c) => &c.layout,
        }
    }

    /// Paragraphs owned by the component (empty for media and rules).
    pub fn paragraphs(&self) -> &[Paragraph] {
        match self {
            Component::Title(c) => &c.title,
            Component::SectionTitle(c) => &c.title,
            Component::Text(c) => &c.value,
            Component::Quotation(c) => &c.value,
            Component::HorizontalLine(_) | Component::Image(_) | Component::Sticker(_) => &[],
        }
    }

    /// Paragraph texts joined with newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleComponent {
    pub id: String,
    pub layout: String,
    pub title: Vec<Paragraph>,
    pub sub_title: Option<String>,
    pub align: String,
}

/// Section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTitleComponent {
    pub id: String,
    pub layout: String,
    pub title: Vec<Paragraph>,
}

/// Body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextComponent {
    pub id: String,
    pub layout: String,
    pub value: Vec<Paragraph>,
}

/// Quoted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotationComponent {
    pub id: String,
    pub layout: String,
    pub value: Vec<Paragraph>,
    pub source: Option<String>,
}

/// Horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizontalLineComponent {
    pub id: String,
    pub layout: String,
}

/// Uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
    pub id: String,
    pub layout: String,
    pub src: String,
    pub internal_resource: bool,
    /// Representative (thumbnail) image of the post
    pub represent: bool,
    pub path: String,
    pub domain: String,
    pub file_size: u64,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    pub file_name: String,
    pub caption: Option<String>,
    pub format: String,
    pub display_format: String,
    pub image_loaded: bool,
    pub content_mode: String,
    pub origin: ImageOrigin,
    pub ai: bool,
}

/// Where an image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype", rename = "imageOrigin", rename_all = "camelCase")]
pub struct ImageOrigin {
    pub src_from: String,
}

impl Default for ImageOrigin {
    fn default() -> Self {
        Self {
            src_from: "local".to_string(),
        }
    }
}

/// Sticker from a sticker pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerComponent {
    pub id: String,
    pub layout: String,
    pub pack_code: String,
    pub seq: u32,
    pub thumbnail: Thumbnail,
    pub format: String,
}

/// Sticker thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype", rename = "thumbnail")]
pub struct Thumbnail {
    pub src: String,
    pub width: u32,
    pub height: u32,
}
