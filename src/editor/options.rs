//! Document builder configuration.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::StyleOption;

use super::{FontSizeCode, NodeStyle};

/// Style applied while building editor documents.
///
/// All keys are optional in JSON; unrecognized values fall back to the
/// defaults documented on each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildStyle {
    /// Size of level-2 section titles. Default: `fs24`.
    #[serde(deserialize_with = "heading_size")]
    pub heading_font_size: FontSizeCode,

    /// Quotation layout. Default: `quotation_line`.
    pub quotation_layout: QuotationLayout,

    /// Horizontal line layout. Default: `line1`.
    pub divider_layout: LineLayout,

    /// Font family for body text, e.g. `nanumgothic`
    pub font_family: Option<String>,

    /// Font size for body text. Unknown codes are ignored.
    #[serde(deserialize_with = "optional_size")]
    pub body_font_size: Option<FontSizeCode>,

    /// Hex color for body text
    pub font_color: Option<String>,
}

impl BuildStyle {
    /// Default size of level-2 section titles.
    pub const DEFAULT_HEADING_SIZE: FontSizeCode = FontSizeCode::Fs24;

    /// Size used for section titles of any other level.
    pub const SUBHEADING_SIZE: FontSizeCode = FontSizeCode::Fs18;

    /// Create a style with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a style from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the section title size.
    pub fn with_heading_size(mut self, size: FontSizeCode) -> Self {
        self.heading_font_size = size;
        self
    }

    /// Set the quotation layout.
    pub fn with_quotation_layout(mut self, layout: QuotationLayout) -> Self {
        self.quotation_layout = layout;
        self
    }

    /// Set the horizontal line layout.
    pub fn with_divider_layout(mut self, layout: LineLayout) -> Self {
        self.divider_layout = layout;
        self
    }

    /// Set the body font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the body font size.
    pub fn with_body_size(mut self, size: FontSizeCode) -> Self {
        self.body_font_size = Some(size);
        self
    }

    /// Set the body font color.
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Node style applied to body text.
    pub fn body_style(&self) -> NodeStyle {
        NodeStyle {
            font_family: self.font_family.clone(),
            font_size_code: self.body_font_size,
            font_color: self.font_color.clone(),
            ..Default::default()
        }
    }

    /// Section title size for a heading level.
    pub fn heading_size_for(&self, level: u8) -> FontSizeCode {
        if level == 2 {
            self.heading_font_size
        } else {
            Self::SUBHEADING_SIZE
        }
    }
}

impl Default for BuildStyle {
    fn default() -> Self {
        Self {
            heading_font_size: Self::DEFAULT_HEADING_SIZE,
            quotation_layout: QuotationLayout::default(),
            divider_layout: LineLayout::default(),
            font_family: None,
            body_font_size: None,
            font_color: None,
        }
    }
}

/// Quotation component layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum QuotationLayout {
    #[serde(rename = "default")]
    Plain,
    #[default]
    QuotationLine,
    QuotationBubble,
    QuotationUnderline,
    QuotationPostit,
    QuotationCorner,
}

impl StyleOption for QuotationLayout {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("default", QuotationLayout::Plain),
        ("quotation_line", QuotationLayout::QuotationLine),
        ("quotation_bubble", QuotationLayout::QuotationBubble),
        ("quotation_underline", QuotationLayout::QuotationUnderline),
        ("quotation_postit", QuotationLayout::QuotationPostit),
        ("quotation_corner", QuotationLayout::QuotationCorner),
    ];
}

impl From<String> for QuotationLayout {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// Horizontal line layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum LineLayout {
    #[serde(rename = "default")]
    Plain,
    #[default]
    Line1,
    Line2,
    Line3,
    Line4,
    Line5,
    Line6,
    Line7,
}

impl StyleOption for LineLayout {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("default", LineLayout::Plain),
        ("line1", LineLayout::Line1),
        ("line2", LineLayout::Line2),
        ("line3", LineLayout::Line3),
        ("line4", LineLayout::Line4),
        ("line5", LineLayout::Line5),
        ("line6", LineLayout::Line6),
        ("line7", LineLayout::Line7),
    ];
}

impl From<String> for LineLayout {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

fn heading_size<'de, D>(deserializer: D) -> Result<FontSizeCode, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_size(deserializer)?.unwrap_or(BuildStyle::DEFAULT_HEADING_SIZE))
}

fn optional_size<'de, D>(deserializer: D) -> Result<Option<FontSizeCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(code.and_then(|v| match v {
        serde_json::Value::String(s) => FontSizeCode::from_code(&s),
        serde_json::Value::Number(n) => FontSizeCode::from_code(&n.to_string()),
        _ => None,
    }))
}
