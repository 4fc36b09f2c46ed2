//! Text node styling.

use serde::{Deserialize, Serialize};

use crate::config::StyleOption;

/// Font size codes the editor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSizeCode {
    #[serde(rename = "fs9")]
    Fs9,
    #[serde(rename = "fs10")]
    Fs10,
    #[serde(rename = "fs11")]
    Fs11,
    #[serde(rename = "fs13")]
    Fs13,
    /// Editor body default
    #[default]
    #[serde(rename = "fs15")]
    Fs15,
    #[serde(rename = "fs18")]
    Fs18,
    #[serde(rename = "fs24")]
    Fs24,
    #[serde(rename = "fs32")]
    Fs32,
}

impl FontSizeCode {
    /// Look up a code by name (`"fs24"`) or bare point size (`"24"`).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let name = if code.starts_with("fs") {
            code
        } else {
            format!("fs{}", code)
        };
        Self::VALUES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, size)| size)
    }

    /// Wire name of the code.
    pub fn as_str(self) -> &'static str {
        self.name()
    }
}

impl StyleOption for FontSizeCode {
    const VALUES: &'static [(&'static str, Self)] = &[
        ("fs9", FontSizeCode::Fs9),
        ("fs10", FontSizeCode::Fs10),
        ("fs11", FontSizeCode::Fs11),
        ("fs13", FontSizeCode::Fs13),
        ("fs15", FontSizeCode::Fs15),
        ("fs18", FontSizeCode::Fs18),
        ("fs24", FontSizeCode::Fs24),
        ("fs32", FontSizeCode::Fs32),
    ];
}

/// Sparse style of a text node.
///
/// Unset flags and absent values are omitted from the wire form; a style
/// with nothing set is dropped from its node altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "@ctype", rename = "nodeStyle", rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub strike_through: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_code: Option<FontSizeCode>,

    /// Hex color, e.g. `#333333`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl NodeStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set strike-through.
    pub fn with_strike_through(mut self, strike: bool) -> Self {
        self.strike_through = strike;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the font size code.
    pub fn with_font_size(mut self, size: FontSizeCode) -> Self {
        self.font_size_code = Some(size);
        self
    }

    /// Set the font color.
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Fill values unset here from `base`. Flags are OR-ed.
    pub fn merged_over(mut self, base: &NodeStyle) -> Self {
        self.bold |= base.bold;
        self.italic |= base.italic;
        self.underline |= base.underline;
        self.strike_through |= base.strike_through;
        if self.font_family.is_none() {
            self.font_family = base.font_family.clone();
        }
        if self.font_size_code.is_none() {
            self.font_size_code = base.font_size_code;
        }
        if self.font_color.is_none() {
            self.font_color = base.font_color.clone();
        }
        if self.background_color.is_none() {
            self.background_color = base.background_color.clone();
        }
        self
    }

    /// Check if nothing is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `None` for an empty style.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_serialization() {
        let style = NodeStyle::bold().with_font_size(FontSizeCode::Fs24);
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({"@ctype": "nodeStyle", "bold": true, "fontSizeCode": "fs24"})
        );

        let style = NodeStyle::new()
            .with_strike_through(true)
            .with_font_color("#ff0000")
            .with_background_color("#ffff00");
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({
                "@ctype": "nodeStyle",
                "strikeThrough": true,
                "fontColor": "#ff0000",
                "backgroundColor": "#ffff00"
            })
        );
    }

    #[test]
    fn test_empty_style_is_none() {
        assert!(NodeStyle::new().is_empty());
        assert_eq!(NodeStyle::new().with_bold(false).into_option(), None);
        assert!(NodeStyle::bold().into_option().is_some());
    }

    #[test]
    fn test_merge() {
        let base = NodeStyle::new()
            .with_font_family("nanumgothic")
            .with_font_size(FontSizeCode::Fs15);
        let merged = NodeStyle::bold()
            .with_font_size(FontSizeCode::Fs24)
            .merged_over(&base);

        assert!(merged.bold);
        assert_eq!(merged.font_size_code, Some(FontSizeCode::Fs24));
        assert_eq!(merged.font_family.as_deref(), Some("nanumgothic"));
    }

    #[test]
    fn test_font_size_code_lookup() {
        assert_eq!(FontSizeCode::from_code("fs32"), Some(FontSizeCode::Fs32));
        assert_eq!(FontSizeCode::from_code("13"), Some(FontSizeCode::Fs13));
        assert_eq!(FontSizeCode::from_code(" FS18 "), Some(FontSizeCode::Fs18));
        assert_eq!(FontSizeCode::from_code("fs14"), None);
        assert_eq!(FontSizeCode::Fs9.as_str(), "fs9");
    }
}
