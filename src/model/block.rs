//! Upstream block input and media metadata.
//!
//! These types mirror what the text-generation service and the image
//! supplier send. They are accepted as-is: missing fields (and explicit
//! `null`s) fall back to defaults, scalar values of the wrong type are
//! coerced where the intent is clear, and unknown block types deserialize to
//! [`Block::Unknown`] so the builder can skip them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A pre-structured unit of content from the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Body paragraph
    Paragraph {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
    },

    /// Section heading
    Heading {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
        /// Heading level, 2 when absent
        #[serde(default, deserialize_with = "lenient_level")]
        level: Option<u8>,
    },

    /// Quoted text
    Quotation {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
    },

    /// List of items rendered as a single text block
    List {
        #[serde(default, deserialize_with = "lenient_items")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "lenient_list_style")]
        style: ListStyle,
    },

    /// Horizontal rule
    Divider,

    /// Slot for the next available image
    ImagePlaceholder {
        #[serde(default, deserialize_with = "lenient_string")]
        description: String,
    },

    /// Any block type this version does not know about
    #[serde(other)]
    Unknown,
}

impl Block {
    /// Default heading level for blocks that omit it.
    pub const DEFAULT_HEADING_LEVEL: u8 = 2;

    /// Level given to headings whose level is not a whole number.
    pub const UNKNOWN_HEADING_LEVEL: u8 = 0;

    /// Decode one block, turning anything undecodable into [`Block::Unknown`].
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::debug!("Skipping undecodable block: {}", e);
            Block::Unknown
        })
    }

    /// Decode a block list element by element.
    pub fn from_values(values: Vec<Value>) -> Vec<Self> {
        values.into_iter().map(Block::from_value).collect()
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level: Some(level),
        }
    }

    /// Create a list block.
    pub fn list<I, S>(items: I, style: ListStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            items: items.into_iter().map(Into::into).collect(),
            style,
        }
    }

    /// Block type name as it appears on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::Quotation { .. } => "quotation",
            Block::List { .. } => "list",
            Block::Divider => "divider",
            Block::ImagePlaceholder { .. } => "image_placeholder",
            Block::Unknown => "unknown",
        }
    }
}

/// Marker style for list blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `- item`
    #[default]
    Bullet,
    /// `1. item`
    Number,
    /// Items emitted without a marker
    #[serde(other)]
    Plain,
}

/// Metadata for an uploaded image, consumed in order by image placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub original_width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub original_height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_size: u64,
}

impl ImageMeta {
    /// Create image metadata with a source URL and display size.
    pub fn new(src: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            original_width: width,
            original_height: height,
            ..Default::default()
        }
    }
}

/// Sticker reference for the sticker component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerMeta {
    /// Sticker pack code (e.g. "ogq_58...")
    #[serde(deserialize_with = "null_as_default")]
    pub pack_code: String,
    /// Sticker number within the pack
    #[serde(deserialize_with = "null_as_default")]
    pub seq: u32,
    /// Thumbnail image URL
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
}

/// A generation service response in either of its two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    /// `{ "title": ..., "blocks": [...] }`
    Structured {
        #[serde(default, deserialize_with = "lenient_string")]
        title: String,
        #[serde(default, deserialize_with = "lenient_blocks")]
        blocks: Vec<Block>,
    },

    /// Free-form text to be run through the parser
    Plain(String),
}

impl GeneratedContent {
    /// Decode a response body, accepting both a bare block array and the
    /// structured/plain shapes.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        match value {
            serde_json::Value::Array(values) => Ok(GeneratedContent::Structured {
                title: String::new(),
                blocks: Block::from_values(values),
            }),
            serde_json::Value::String(text) => Ok(GeneratedContent::Plain(text)),
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(crate::Error::InvalidInput(format!(
                "expected text, a block array, or an object with blocks, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text of a scalar; compact JSON for anything nested.
fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(value_to_string)
        .unwrap_or_default())
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values.into_iter().filter_map(value_to_string).collect(),
        Some(other) => value_to_string(other).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(items)
}

fn lenient_list_style<'de, D>(deserializer: D) -> Result<ListStyle, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|v| heading_level(&v)))
}

fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = null_as_default(deserializer)?;
    Ok(Block::from_values(values))
}

/// Whole-number heading level from a number or numeric string.
fn heading_level(value: &Value) -> u8 {
    let whole = |f: f64| (f.fract() == 0.0 && f >= 0.0).then_some(f as u64);
    let level = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    };
    match level.and_then(|l| u8::try_from(l).ok()) {
        Some(level) => level,
        None => {
            log::debug!("Unrecognized heading level {}", value);
            Block::UNKNOWN_HEADING_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_defaults() {
        let blocks: Vec<Block> = serde_json::from_str(
            r#"[
                {"type": "heading", "text": "A"},
                {"type": "paragraph"},
                {"type": "list", "items": ["x"], "style": null},
                {"type": "quotation", "text": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            blocks[0],
            Block::Heading {
                text: "A".into(),
                level: None
            }
        );
        assert_eq!(blocks[1], Block::paragraph(""));
        assert_eq!(blocks[2], Block::list(["x"], ListStyle::Bullet));
        assert_eq!(blocks[3], Block::Quotation { text: String::new() });
    }

    #[test]
    fn test_unknown_block_type() {
        let blocks: Vec<Block> =
            serde_json::from_str(r#"[{"type": "table", "rows": []}, {"type": "divider"}]"#)
                .unwrap();
        assert_eq!(blocks, vec![Block::Unknown, Block::Divider]);
    }

    #[test]
    fn test_unknown_list_style_is_plain() {
        let block: Block =
            serde_json::from_str(r#"{"type": "list", "items": [], "style": "roman"}"#).unwrap();
        assert_eq!(block, Block::list(Vec::<String>::new(), ListStyle::Plain));
    }

    #[test]
    fn test_image_meta_partial() {
        let meta: ImageMeta =
            serde_json::from_str(r#"{"src": "https://img/a.png", "width": 640}"#).unwrap();
        assert_eq!(meta.width, 640);
        assert_eq!(meta.height, 0);
        assert!(meta.file_name.is_empty());
    }

    #[test]
    fn test_generated_content_shapes() {
        let structured =
            GeneratedContent::from_json(r#"{"title": "T", "blocks": [{"type": "divider"}]}"#)
                .unwrap();
        assert_eq!(
            structured,
            GeneratedContent::Structured {
                title: "T".into(),
                blocks: vec![Block::Divider]
            }
        );

        let plain = GeneratedContent::from_json(r#""just text""#).unwrap();
        assert_eq!(plain, GeneratedContent::Plain("just text".into()));

        let bare = GeneratedContent::from_json(r#"[{"type": "paragraph", "text": "p"}]"#).unwrap();
        assert!(matches!(bare, GeneratedContent::Structured { ref title, .. } if title.is_empty()));

        assert!(GeneratedContent::from_json("42").is_err());
    }

    #[test]
    fn test_heading_level_coercion() {
        let blocks: Vec<Block> = serde_json::from_str(
            r#"[
                {"type": "heading", "text": "a", "level": "2"},
                {"type": "heading", "text": "b", "level": 2.0},
                {"type": "heading", "text": "c", "level": " 3 "},
                {"type": "heading", "text": "d", "level": "big"},
                {"type": "heading", "text": "e", "level": 2.5},
                {"type": "heading", "text": "f", "level": 900},
                {"type": "heading", "text": "g", "level": null}
            ]"#,
        )
        .unwrap();
        let levels: Vec<Option<u8>> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                other => panic!("unexpected {:?}", other),
            })
            .collect();

        let unknown = Some(Block::UNKNOWN_HEADING_LEVEL);
        assert_eq!(levels, vec![Some(2), Some(2), Some(3), unknown, unknown, unknown, None]);
    }

    #[test]
    fn test_list_items_are_stringified() {
        let block: Block = serde_json::from_str(
            r#"{"type": "list", "items": ["x", 2, true, null, {"k": 1}], "style": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(
            block,
            Block::list(["x", "2", "true", r#"{"k":1}"#], ListStyle::Bullet)
        );

        let single: Block =
            serde_json::from_str(r#"{"type": "list", "items": "only"}"#).unwrap();
        assert_eq!(single, Block::list(["only"], ListStyle::Bullet));
    }

    #[test]
    fn test_scalar_text_is_stringified() {
        let block: Block = serde_json::from_str(r#"{"type": "paragraph", "text": 42}"#).unwrap();
        assert_eq!(block, Block::paragraph("42"));
    }

    #[test]
    fn test_malformed_block_does_not_drop_siblings() {
        let content = GeneratedContent::from_json(
            r#"{"title": 2024, "blocks": [
                {"type": "paragraph", "text": "kept"},
                "not a block",
                {"text": "no type"},
                {"type": "divider"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            content,
            GeneratedContent::Structured {
                title: "2024".into(),
                blocks: vec![
                    Block::paragraph("kept"),
                    Block::Unknown,
                    Block::Unknown,
                    Block::Divider
                ]
            }
        );

        let bare = GeneratedContent::from_json(r#"[{"type": "divider"}, 5]"#).unwrap();
        assert_eq!(
            bare,
            GeneratedContent::Structured {
                title: String::new(),
                blocks: vec![Block::Divider, Block::Unknown]
            }
        );
    }

    #[test]
    fn test_missing_blocks_key() {
        let content = GeneratedContent::from_json(r#"{"title": "T"}"#).unwrap();
        assert_eq!(
            content,
            GeneratedContent::Structured {
                title: "T".into(),
                blocks: Vec::new()
            }
        );

        let null_blocks = GeneratedContent::from_json(r#"{"title": "T", "blocks": null}"#).unwrap();
        let GeneratedContent::Structured { blocks, .. } = null_blocks else {
            panic!("expected structured content");
        };
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_media_meta_explicit_nulls() {
        let meta: ImageMeta = serde_json::from_str(
            r#"{"src": "https://img/a.png", "width": 640, "file_size": null, "file_name": null}"#,
        )
        .unwrap();
        assert_eq!(meta.width, 640);
        assert_eq!(meta.file_size, 0);
        assert!(meta.file_name.is_empty());

        let sticker: StickerMeta =
            serde_json::from_str(r#"{"pack_code": "ogq_1", "seq": null, "src": null}"#).unwrap();
        assert_eq!(sticker.pack_code, "ogq_1");
        assert_eq!(sticker.seq, 0);
        assert!(sticker.src.is_empty());
    }
}
