//! Plain text rendering for parsed documents.

use crate::model::{ContentItem, ParsedDocument};

use super::StyleConfig;

/// Convert a parsed document to plain text.
///
/// Output re-parses to the same sections: headings, list markers, dividers
/// and the title line all use forms the line grammar recognizes.
pub fn to_text(doc: &ParsedDocument, style: &StyleConfig) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if doc.has_title() {
        blocks.push(format!("제목: {}", doc.title));
    }

    for section in &doc.sections {
        if let Some(heading) = section.heading.as_deref().filter(|h| !h.is_empty()) {
            blocks.push(style.heading_marker.apply(heading));
        }

        let mut list: Vec<&str> = Vec::new();
        for item in &section.content {
            let block = match item {
                ContentItem::ListItem(text) => {
                    list.push(text);
                    continue;
                }
                ContentItem::Paragraph(text) => text.clone(),
                ContentItem::Question(text) => format!("Q. {}", text),
                ContentItem::Answer(text) => format!("A. {}", text),
                ContentItem::Divider => style.divider.rule(),
            };
            flush_list(&mut blocks, &mut list, style);
            blocks.push(block);
        }
        flush_list(&mut blocks, &mut list, style);
    }

    blocks.join(style.paragraph_spacing.text_separator())
}

fn flush_list(blocks: &mut Vec<String>, list: &mut Vec<&str>, style: &StyleConfig) {
    if list.is_empty() {
        return;
    }
    let lines: Vec<String> = list
        .drain(..)
        .enumerate()
        .map(|(i, text)| format!("{} {}", style.list_marker.text_marker(i), text))
        .collect();
    blocks.push(lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::render::{DividerStyle, HeadingMarker, ListMarker, ParagraphSpacing};

    fn sample() -> ParsedDocument {
        let mut section = Section::with_heading("준비물");
        section.push(ContentItem::Paragraph("챙길 것들:".into()));
        section.push(ContentItem::ListItem("물".into()));
        section.push(ContentItem::ListItem("모자".into()));
        section.push(ContentItem::Divider);
        section.push(ContentItem::Question("우산은?".into()));
        section.push(ContentItem::Answer("필요 없어요.".into()));
        ParsedDocument {
            title: "소풍".into(),
            sections: vec![section],
        }
    }

    #[test]
    fn test_to_text_default() {
        let text = to_text(&sample(), &StyleConfig::default());
        assert_eq!(
            text,
            "제목: 소풍\n\n■ 준비물\n\n챙길 것들:\n\n- 물\n- 모자\n\n──────────\n\nQ. 우산은?\n\nA. 필요 없어요."
        );
    }

    #[test]
    fn test_to_text_styled() {
        let style = StyleConfig::new()
            .with_heading_marker(HeadingMarker::Bracket)
            .with_list_marker(ListMarker::Number)
            .with_divider(DividerStyle::Double)
            .with_spacing(ParagraphSpacing::Compact);
        let text = to_text(&sample(), &style);

        assert!(text.contains("【준비물】\n챙길 것들:\n1. 물\n2. 모자\n══════════"));
    }

    #[test]
    fn test_numbering_restarts_per_list() {
        let mut section = Section::untitled();
        section.push(ContentItem::ListItem("a".into()));
        section.push(ContentItem::Paragraph("break".into()));
        section.push(ContentItem::ListItem("b".into()));
        let doc = ParsedDocument {
            title: String::new(),
            sections: vec![section],
        };
        let style = StyleConfig::new().with_list_marker(ListMarker::Number);

        assert_eq!(to_text(&doc, &style), "1. a\n\nbreak\n\n1. b");
    }
}
