//! Groups classified lines into sections.

use unicode_normalization::UnicodeNormalization;

use crate::model::{ContentItem, ParsedDocument, Section};

use super::{LineKind, LinePatterns, ParseOptions};

/// Parser for loosely structured generated text.
///
/// The parser never fails: a line that matches no rule becomes a paragraph,
/// so the worst case is a single untitled section of paragraphs.
#[derive(Debug)]
pub struct TextParser {
    patterns: LinePatterns,
    options: ParseOptions,
}

impl TextParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            patterns: LinePatterns::new(),
            options,
        }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the line grammar.
    pub fn patterns(&self) -> &LinePatterns {
        &self.patterns
    }

    /// Parse text into sections and content items.
    pub fn parse(&self, text: &str) -> ParsedDocument {
        let normalized: String;
        let text = if self.options.normalize_unicode {
            normalized = text.nfc().collect();
            normalized.as_str()
        } else {
            text
        };

        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
        let mut doc = ParsedDocument::new();

        if self.options.detect_title {
            if let Some(title) = lines.peek().and_then(|l| self.patterns.match_title(l)) {
                doc.title = title;
                lines.next();
            }
        }

        let mut current = Section::untitled();
        for line in lines {
            let item = match self.patterns.classify(line) {
                LineKind::Heading(heading) => {
                    let finished = std::mem::replace(&mut current, Section::with_heading(heading));
                    flush(&mut doc, finished);
                    continue;
                }
                LineKind::Question(text) => ContentItem::Question(text),
                LineKind::Answer(text) => ContentItem::Answer(text),
                LineKind::ListItem(text) => ContentItem::ListItem(text),
                LineKind::Divider => ContentItem::Divider,
                LineKind::Paragraph(text) => ContentItem::Paragraph(text),
            };
            current.push(item);
        }
        flush(&mut doc, current);

        log::debug!(
            "Parsed {} sections, {} items (title: {})",
            doc.sections.len(),
            doc.item_count(),
            if doc.has_title() { "yes" } else { "no" }
        );
        doc
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

fn flush(doc: &mut ParsedDocument, section: Section) {
    if !section.is_empty() {
        doc.sections.push(section);
    }
}

/// Parse text with default options.
pub fn parse_text(text: &str) -> ParsedDocument {
    TextParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_sections() {
        let doc = parse_text(
            "제목: 제주 여행\n\n인사말입니다.\n\n\
             [첫째 날]\n공항 도착\n- 렌터카\n- 숙소\n\n\
             ▶ 둘째 날\n---\nQ. 날씨는?\nA. 맑음",
        );

        assert_eq!(doc.title, "제주 여행");
        assert_eq!(doc.sections.len(), 3);

        assert_eq!(doc.sections[0].heading, None);
        assert_eq!(
            doc.sections[0].content,
            vec![ContentItem::Paragraph("인사말입니다.".into())]
        );

        assert_eq!(doc.sections[1].heading.as_deref(), Some("첫째 날"));
        assert_eq!(
            doc.sections[1].content,
            vec![
                ContentItem::Paragraph("공항 도착".into()),
                ContentItem::ListItem("렌터카".into()),
                ContentItem::ListItem("숙소".into()),
            ]
        );

        assert_eq!(doc.sections[2].heading.as_deref(), Some("둘째 날"));
        assert_eq!(
            doc.sections[2].content,
            vec![
                ContentItem::Divider,
                ContentItem::Question("날씨는?".into()),
                ContentItem::Answer("맑음".into()),
            ]
        );
    }

    #[test]
    fn test_title_only_on_first_line() {
        let doc = parse_text("intro\n# Not a title");
        assert!(doc.title.is_empty());
        assert_eq!(doc.item_count(), 2);
    }

    #[test]
    fn test_markdown_title() {
        let doc = parse_text("\n\n# Markdown Title\n## Part\nbody");
        assert_eq!(doc.title, "Markdown Title");
        assert_eq!(doc.sections[0].heading.as_deref(), Some("Part"));
    }

    #[test]
    fn test_title_detection_disabled() {
        let parser = TextParser::with_options(ParseOptions::new().with_title_detection(false));
        let doc = parser.parse("제목: 그대로\nbody");
        assert!(doc.title.is_empty());
        assert_eq!(
            doc.sections[0].content[0],
            ContentItem::Paragraph("제목: 그대로".into())
        );
    }

    #[test]
    fn test_empty_heading_sections_are_kept() {
        let doc = parse_text("## A\n## B\ntext");
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections[0].content.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_unstructured_input_is_single_section() {
        let doc = parse_text("just some words\nand more words");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].heading, None);
        assert_eq!(doc.item_count(), 2);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let doc = parse_text("   [ 준비물 ]   \n    -   물   ");
        assert_eq!(doc.sections[0].heading.as_deref(), Some("준비물"));
        assert_eq!(doc.sections[0].content, vec![ContentItem::ListItem("물".into())]);
    }

    #[test]
    fn test_nfc_normalization() {
        // Decomposed hangul jamo for "한"
        let decomposed = "\u{1112}\u{1161}\u{11AB}";
        let doc = parse_text(decomposed);
        assert_eq!(doc.sections[0].content[0].text(), "한");
    }
}
