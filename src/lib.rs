//! # sedoc
//!
//! Structured blog document generation for the SmartEditor write API.
//!
//! This library turns free-form generated text into a structured
//! intermediate representation, renders it as plain text, Markdown or HTML,
//! and builds editor component documents ready to be posted.
//!
//! ## Quick Start
//!
//! ```
//! use sedoc::{parse_text, render, DocumentBuilder, BuildStyle, JsonFormat};
//!
//! fn main() -> sedoc::Result<()> {
//!     let doc = parse_text("제목: 제주 여행\n[첫째 날]\n공항에 도착했어요.");
//!
//!     let markdown = render::to_markdown(&doc, &render::StyleConfig::default());
//!     assert!(markdown.starts_with("# 제주 여행"));
//!
//!     let editor_doc = DocumentBuilder::from_parsed(&doc, &BuildStyle::default());
//!     let payload = editor_doc.to_json(JsonFormat::Compact)?;
//!     assert!(payload.contains("sectionTitle"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line grammar**: headings, Q&A pairs, list items and dividers
//! - **Renderers**: plain text, Markdown, standalone or editor-embeddable HTML
//! - **Editor documents**: component trees with sparse node styles
//! - **Upstream blocks**: structured generation output with image placeholders

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use editor::{
    BuildStyle, Component, Document, DocumentBuilder, FontSizeCode, IdSource, JsonFormat,
    NodeStyle, RandomIds, SequentialIds,
};
pub use error::{Error, Result};
pub use model::{
    Block, ContentItem, GeneratedContent, ImageMeta, ListStyle, ParsedDocument, Section,
    StickerMeta,
};
pub use parser::{parse_text, ParseOptions, TextParser};
pub use render::{StyleConfig, TextFormat};

use std::fs;
use std::path::Path;

/// Parse a UTF-8 text file.
///
/// # Example
///
/// ```no_run
/// use sedoc::parse_file;
///
/// let doc = parse_file("post.txt").unwrap();
/// println!("Sections: {}", doc.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let text = fs::read_to_string(path)?;
    Ok(parse_text(&text))
}

/// Parse text and serialize the resulting editor payload.
///
/// # Example
///
/// ```
/// use sedoc::{text_to_payload_json, BuildStyle, JsonFormat};
///
/// let json = text_to_payload_json("본문", &BuildStyle::default(), JsonFormat::Compact).unwrap();
/// assert!(json.starts_with(r#"{"documentId":"""#));
/// ```
pub fn text_to_payload_json(text: &str, style: &BuildStyle, format: JsonFormat) -> Result<String> {
    let parsed = parse_text(text);
    DocumentBuilder::from_parsed(&parsed, style).to_json(format)
}

/// Decode upstream generation output and serialize the editor payload.
///
/// `blocks_json` may be a block array, a `{title, blocks}` object or a
/// JSON string of plain text. `images_json`, when given, is an array of
/// uploaded image metadata consumed by image placeholders in order.
pub fn blocks_to_payload_json(
    blocks_json: &str,
    images_json: Option<&str>,
    style: &BuildStyle,
    format: JsonFormat,
) -> Result<String> {
    let content = GeneratedContent::from_json(blocks_json)?;
    let images: Vec<ImageMeta> = match images_json {
        Some(json) => serde_json::from_str(json)?,
        None => Vec::new(),
    };
    DocumentBuilder::from_generated(&content, &images, style).to_json(format)
}

/// Load upstream generation output from a JSON file.
pub fn load_blocks<P: AsRef<Path>>(path: P) -> Result<GeneratedContent> {
    let json = fs::read_to_string(path)?;
    GeneratedContent::from_json(&json)
}

/// Load uploaded image metadata from a JSON array file.
pub fn load_images<P: AsRef<Path>>(path: P) -> Result<Vec<ImageMeta>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Builder for parsing text and producing every output from it.
///
/// # Example
///
/// ```
/// use sedoc::{Sedoc, TextFormat};
///
/// let output = Sedoc::new()
///     .without_title_detection()
///     .with_style(sedoc::StyleConfig::default().with_qa_style(sedoc::render::QaStyle::Prefix))
///     .parse("Q. 언제?\nA. 내일");
/// assert_eq!(output.render(TextFormat::Markdown), "Q. 언제?\n\nA. 내일");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sedoc {
    parse_options: ParseOptions,
    style: StyleConfig,
    build_style: BuildStyle,
}

impl Sedoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first line as content even if it looks like a title.
    pub fn without_title_detection(mut self) -> Self {
        self.parse_options = self.parse_options.with_title_detection(false);
        self
    }

    /// Skip NFC normalization of the input.
    pub fn without_normalization(mut self) -> Self {
        self.parse_options = self.parse_options.with_normalize_unicode(false);
        self
    }

    /// Set the renderer style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the editor document style.
    pub fn with_build_style(mut self, style: BuildStyle) -> Self {
        self.build_style = style;
        self
    }

    /// Parse text.
    pub fn parse(self, text: &str) -> SedocOutput {
        let document = TextParser::with_options(self.parse_options).parse(text);
        SedocOutput {
            document,
            style: self.style,
            build_style: self.build_style,
        }
    }

    /// Parse a UTF-8 text file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<SedocOutput> {
        let text = fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }
}

/// A parsed document with the styles to render and build it with.
#[derive(Debug, Clone)]
pub struct SedocOutput {
    /// The parsed document
    pub document: ParsedDocument,
    style: StyleConfig,
    build_style: BuildStyle,
}

impl SedocOutput {
    /// Render as text, Markdown or HTML.
    pub fn render(&self, format: TextFormat) -> String {
        render::render(&self.document, &self.style, format)
    }

    /// Build the editor document.
    pub fn build(&self) -> Document {
        DocumentBuilder::from_parsed(&self.document, &self.build_style)
    }

    /// Build the editor document and serialize its payload.
    pub fn to_payload_json(&self, format: JsonFormat) -> Result<String> {
        self.build().to_json(format)
    }

    /// Get the parsed document.
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sedoc_builder_defaults() {
        let builder = Sedoc::default();
        assert!(builder.parse_options.detect_title);
        assert!(builder.parse_options.normalize_unicode);
        assert_eq!(builder.style, StyleConfig::default());
    }

    #[test]
    fn test_sedoc_builder_title_detection() {
        let output = Sedoc::new().parse("제목: 여행\n본문");
        assert_eq!(output.document().title, "여행");

        let output = Sedoc::new().without_title_detection().parse("제목: 여행\n본문");
        assert!(output.document().title.is_empty());
        assert_eq!(output.document().item_count(), 2);
    }

    #[test]
    fn test_sedoc_output_build() {
        let output = Sedoc::new().parse("[섹션]\n본문");
        let doc = output.build();
        assert_eq!(doc.len(), 2);
        assert!(output.to_payload_json(JsonFormat::Compact).is_ok());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "제목: 파일\n- 하나\n- 둘").unwrap();

        let doc = parse_file(file.path()).unwrap();
        assert_eq!(doc.title, "파일");
        assert_eq!(doc.item_count(), 2);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/post.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_blocks_to_payload_json_with_images() {
        let blocks =
            r#"{"title": "T", "blocks": [{"type": "image_placeholder", "description": "x"}]}"#;
        let images = r#"[{"src": "https://img/1.png", "width": 10, "height": 20}]"#;
        let json = blocks_to_payload_json(
            blocks,
            Some(images),
            &BuildStyle::default(),
            JsonFormat::Compact,
        )
        .unwrap();

        let payload: serde_json::Value = serde_json::from_str(&json).unwrap();
        let components = payload["document"]["components"].as_array().unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[1]["@ctype"], "image");
        assert_eq!(components[1]["represent"], true);
    }

    #[test]
    fn test_blocks_to_payload_json_invalid() {
        let style = BuildStyle::default();
        let result = blocks_to_payload_json("42", None, &style, JsonFormat::Compact);
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let result = blocks_to_payload_json("{not json", None, &style, JsonFormat::Compact);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_images() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"src": "a.png", "width": 1, "height": 2}}]"#).unwrap();

        let images = load_images(file.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "a.png");
    }
}
