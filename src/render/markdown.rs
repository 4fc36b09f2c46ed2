//! Markdown rendering for parsed documents.

use crate::model::{ContentItem, ParsedDocument, Section};

use super::{QaStyle, StyleConfig};

/// Convert a parsed document to Markdown.
pub fn to_markdown(doc: &ParsedDocument, style: &StyleConfig) -> String {
    let renderer = MarkdownRenderer::new(style.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    style: StyleConfig,
    blocks: Vec<String>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            blocks: Vec::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &ParsedDocument) -> String {
        if doc.has_title() {
            self.blocks.push(format!("# {}", doc.title));
        }
        for section in &doc.sections {
            self.render_section(section);
        }
        self.blocks
            .join(self.style.paragraph_spacing.markdown_separator())
    }

    fn render_section(&mut self, section: &Section) {
        if let Some(heading) = section.heading.as_deref().filter(|h| !h.is_empty()) {
            self.blocks.push(format!(
                "{} {}",
                self.style.heading_level.markdown_prefix(),
                heading
            ));
        }

        let mut list: Vec<&str> = Vec::new();
        for item in &section.content {
            let block = match item {
                ContentItem::ListItem(text) => {
                    list.push(text);
                    continue;
                }
                ContentItem::Paragraph(text) => text.clone(),
                ContentItem::Question(text) => self.render_qa("Q.", text),
                ContentItem::Answer(text) => self.render_qa("A.", text),
                ContentItem::Divider => "---".to_string(),
            };
            self.flush_list(&mut list);
            self.blocks.push(block);
        }
        self.flush_list(&mut list);
    }

    fn render_qa(&self, marker: &str, text: &str) -> String {
        match self.style.qa_style {
            QaStyle::Prefix => format!("{} {}", marker, text),
            QaStyle::Bold => format!("**{}** {}", marker, text),
            QaStyle::Quote => format!("> **{}** {}", marker, text),
        }
    }

    fn flush_list(&mut self, list: &mut Vec<&str>) {
        if list.is_empty() {
            return;
        }
        let marker = self.style.list_marker;
        let lines: Vec<String> = list
            .drain(..)
            .enumerate()
            .map(|(i, text)| format!("{} {}", marker.markdown_marker(i), text))
            .collect();
        self.blocks.push(lines.join("\n"));
    }
}
