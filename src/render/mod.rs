//! Rendering module for converting parsed documents to text formats.

mod html;
mod markdown;
mod options;
mod text;

pub use html::{escape_html, to_html, HtmlRenderer};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{
    DividerStyle, HeadingLevel, HeadingMarker, ListMarker, ParagraphSpacing, QaStyle, StyleConfig,
};
pub use text::to_text;

/// Text output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Plain text
    #[default]
    Text,
    /// Markdown
    Markdown,
    /// Standalone HTML page
    Html,
    /// Editor-embeddable HTML fragment
    NaverHtml,
}

impl std::str::FromStr for TextFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(TextFormat::Text),
            "markdown" | "md" => Ok(TextFormat::Markdown),
            "html" => Ok(TextFormat::Html),
            "naver" | "naver-html" | "naver_html" => Ok(TextFormat::NaverHtml),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown text format: {}",
                other
            ))),
        }
    }
}

/// Render a parsed document in the given format.
pub fn render(
    doc: &crate::model::ParsedDocument,
    style: &StyleConfig,
    format: TextFormat,
) -> String {
    match format {
        TextFormat::Text => to_text(doc, style),
        TextFormat::Markdown => to_markdown(doc, style),
        TextFormat::Html => to_html(doc, style, false),
        TextFormat::NaverHtml => to_html(doc, style, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    #[test]
    fn test_format_names() {
        assert_eq!("md".parse::<TextFormat>().unwrap(), TextFormat::Markdown);
        assert_eq!(" HTML ".parse::<TextFormat>().unwrap(), TextFormat::Html);
        assert_eq!("naver".parse::<TextFormat>().unwrap(), TextFormat::NaverHtml);
        assert!("pdf".parse::<TextFormat>().is_err());
    }

    #[test]
    fn test_render_dispatch() {
        let doc = parse_text("[A]\nbody");
        let style = StyleConfig::default();
        assert_eq!(render(&doc, &style, TextFormat::Text), to_text(&doc, &style));
        assert!(render(&doc, &style, TextFormat::NaverHtml)
            .starts_with("<div class=\"se-main-container\""));
        assert!(render(&doc, &style, TextFormat::Html).starts_with("<!DOCTYPE html>"));
    }
}
