//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

use crate::config::StyleOption;

/// Style configuration shared by the text, Markdown and HTML renderers.
///
/// Every key is optional when loaded from JSON, and unrecognized values fall
/// back to the default listed on each option type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Marker placed before headings in plain text
    pub heading_marker: HeadingMarker,

    /// Heading level used by Markdown and HTML
    pub heading_level: HeadingLevel,

    /// Horizontal rule style in plain text
    pub divider: DividerStyle,

    /// Space between blocks
    pub paragraph_spacing: ParagraphSpacing,

    /// How questions and answers are decorated
    pub qa_style: QaStyle,

    /// Marker for list items
    pub list_marker: ListMarker,
}

impl StyleConfig {
    /// Create a style configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a style configuration from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set one option by name. Returns `false` if the key is unknown.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        match key.trim() {
            "heading_marker" | "heading" => {
                self.heading_marker = HeadingMarker::parse_or_default(value)
            }
            "heading_level" => self.heading_level = HeadingLevel::parse_or_default(value),
            "divider" => self.divider = DividerStyle::parse_or_default(value),
            "paragraph_spacing" | "spacing" => {
                self.paragraph_spacing = ParagraphSpacing::parse_or_default(value)
            }
            "qa_style" | "qa" => self.qa_style = QaStyle::parse_or_default(value),
            "list_marker" | "list" => self.list_marker = ListMarker::parse_or_default(value),
            _ => return false,
        }
        true
    }

    /// Set the heading marker.
    pub fn with_heading_marker(mut self, marker: HeadingMarker) -> Self {
        self.heading_marker = marker;
        self
    }

    /// Set the heading level.
    pub fn with_heading_level(mut self, level: HeadingLevel) -> Self {
        self.heading_level = level;
        self
    }

    /// Set the divider style.
    pub fn with_divider(mut self, divider: DividerStyle) -> Self {
        self.divider = divider;
        self
    }

    /// Set the paragraph spacing.
    pub fn with_spacing(mut self, spacing: ParagraphSpacing) -> Self {
        self.paragraph_spacing = spacing;
        self
    }

    /// Set the Q&A style.
    pub fn with_qa_style(mut self, style: QaStyle) -> Self {
        self.qa_style = style;
        self
    }

    /// Set the list marker.
    pub fn with_list_marker(mut self, marker: ListMarker) -> Self {
        self.list_marker = marker;
        self
    }
}

/// Heading marker for plain text output. Default: `square`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HeadingMarker {
    /// `■ Heading`
    #[default]
    Square,
    /// `【Heading】`
    Bracket,
    /// `▶ Heading`
    Arrow,
    /// `● Heading`
    Circle,
}

impl HeadingMarker {
    /// Decorate a heading.
    pub fn apply(self, heading: &str) -> String {
        match self {
            HeadingMarker::Square => format!("■ {}", heading),
            HeadingMarker::Bracket => format!("【{}】", heading),
            HeadingMarker::Arrow => format!("▶ {}", heading),
            HeadingMarker::Circle => format!("● {}", heading),
        }
    }
}

impl StyleOption for HeadingMarker {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("square", HeadingMarker::Square),
        ("bracket", HeadingMarker::Bracket),
        ("arrow", HeadingMarker::Arrow),
        ("circle", HeadingMarker::Circle),
    ];
}

impl From<String> for HeadingMarker {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// Heading level for Markdown and HTML. Default: `h2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HeadingLevel {
    #[default]
    H2,
    H3,
}

impl HeadingLevel {
    /// Markdown prefix (`##` or `###`).
    pub fn markdown_prefix(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "##",
            HeadingLevel::H3 => "###",
        }
    }

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl StyleOption for HeadingLevel {
    const VALUES: &'static [(&'static str, Self)] =
        &[("h2", HeadingLevel::H2), ("h3", HeadingLevel::H3)];
}

impl From<String> for HeadingLevel {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// Horizontal rule in plain text. Default: `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DividerStyle {
    /// `──────────`
    #[default]
    Line,
    /// `══════════`
    Double,
    /// `··········`
    Dots,
    /// `----------`
    Dashes,
}

impl DividerStyle {
    const WIDTH: usize = 10;

    /// The rule line.
    pub fn rule(self) -> String {
        let c = match self {
            DividerStyle::Line => '─',
            DividerStyle::Double => '═',
            DividerStyle::Dots => '·',
            DividerStyle::Dashes => '-',
        };
        std::iter::repeat(c).take(Self::WIDTH).collect()
    }
}

impl StyleOption for DividerStyle {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("line", DividerStyle::Line),
        ("double", DividerStyle::Double),
        ("dots", DividerStyle::Dots),
        ("dashes", DividerStyle::Dashes),
    ];
}

impl From<String> for DividerStyle {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// Space between rendered blocks. Default: `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ParagraphSpacing {
    /// No blank line between blocks (text); tight margins (HTML)
    Compact,
    /// One blank line
    #[default]
    Normal,
    /// Two blank lines
    Wide,
}

impl ParagraphSpacing {
    /// Separator between plain text blocks.
    pub fn text_separator(self) -> &'static str {
        match self {
            ParagraphSpacing::Compact => "\n",
            ParagraphSpacing::Normal => "\n\n",
            ParagraphSpacing::Wide => "\n\n\n",
        }
    }

    /// Separator between Markdown blocks. Markdown needs a blank line to
    /// separate paragraphs, so compact behaves like normal.
    pub fn markdown_separator(self) -> &'static str {
        match self {
            ParagraphSpacing::Compact | ParagraphSpacing::Normal => "\n\n",
            ParagraphSpacing::Wide => "\n\n&nbsp;\n\n",
        }
    }

    /// Vertical margin for HTML blocks.
    pub fn css_margin(self) -> &'static str {
        match self {
            ParagraphSpacing::Compact => "6px",
            ParagraphSpacing::Normal => "16px",
            ParagraphSpacing::Wide => "28px",
        }
    }
}

impl StyleOption for ParagraphSpacing {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("compact", ParagraphSpacing::Compact),
        ("normal", ParagraphSpacing::Normal),
        ("wide", ParagraphSpacing::Wide),
    ];
}

impl From<String> for ParagraphSpacing {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// Question/answer decoration. Default: `bold`.
///
/// Plain text always uses `Q. `/`A. ` prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum QaStyle {
    /// `Q. question`
    Prefix,
    /// `**Q.** question`
    #[default]
    Bold,
    /// Blockquote around the pair
    Quote,
}

impl StyleOption for QaStyle {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("prefix", QaStyle::Prefix),
        ("bold", QaStyle::Bold),
        ("quote", QaStyle::Quote),
    ];
}

impl From<String> for QaStyle {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

/// List item marker. Default: `dash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ListMarker {
    /// `- item`
    #[default]
    Dash,
    /// `• item` (Markdown uses `-`)
    Bullet,
    /// `1. item`, restarting for every list
    Number,
}

impl ListMarker {
    /// Marker for the item at `index` (0-based) in plain text.
    pub fn text_marker(self, index: usize) -> String {
        match self {
            ListMarker::Dash => "-".to_string(),
            ListMarker::Bullet => "•".to_string(),
            ListMarker::Number => format!("{}.", index + 1),
        }
    }

    /// Marker for the item at `index` (0-based) in Markdown.
    pub fn markdown_marker(self, index: usize) -> String {
        match self {
            ListMarker::Dash | ListMarker::Bullet => "-".to_string(),
            ListMarker::Number => format!("{}.", index + 1),
        }
    }

    /// Check if the list is ordered.
    pub fn is_ordered(self) -> bool {
        self == ListMarker::Number
    }
}

impl StyleOption for ListMarker {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("dash", ListMarker::Dash),
        ("bullet", ListMarker::Bullet),
        ("number", ListMarker::Number),
    ];
}

impl From<String> for ListMarker {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}
