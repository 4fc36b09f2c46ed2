//! HTML rendering for parsed documents.
//!
//! Two flavors are produced: a standalone styled HTML page, and a fragment
//! for pasting into the blog editor, which keeps only `se-*` class names and
//! inline styles because the editor strips `<style>` blocks.

use crate::model::{ContentItem, ParsedDocument, Section};

use super::{QaStyle, StyleConfig};

const ACCENT_COLOR: &str = "#03c75a";

/// Convert a parsed document to HTML.
///
/// With `naver_mode` the output is an editor fragment without the document
/// title, which the editor keeps in its own field.
pub fn to_html(doc: &ParsedDocument, style: &StyleConfig, naver_mode: bool) -> String {
    let renderer = HtmlRenderer::new(style.clone(), naver_mode);
    renderer.render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    style: StyleConfig,
    naver_mode: bool,
    output: String,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(style: StyleConfig, naver_mode: bool) -> Self {
        Self {
            style,
            naver_mode,
            output: String::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &ParsedDocument) -> String {
        if self.naver_mode {
            self.output.push_str("<div class=\"se-main-container\">\n");
            for section in &doc.sections {
                self.render_section(section);
            }
            self.output.push_str("</div>");
            return self.output;
        }

        let title = escape_html(&doc.title);
        self.output.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
        self.output.push_str("<meta charset=\"utf-8\">\n");
        self.output
            .push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        self.output.push_str(&format!("<title>{}</title>\n", title));
        self.output.push_str(&page_css(&self.style));
        self.output.push_str("</head>\n<body>\n<article class=\"post\">\n");
        if doc.has_title() {
            self.output.push_str(&format!("<h1>{}</h1>\n", title));
        }
        for section in &doc.sections {
            self.output.push_str("<section>\n");
            self.render_section(section);
            self.output.push_str("</section>\n");
        }
        self.output.push_str("</article>\n</body>\n</html>\n");
        self.output
    }

    fn render_section(&mut self, section: &Section) {
        if let Some(heading) = section.heading.as_deref().filter(|h| !h.is_empty()) {
            self.render_heading(heading);
        }

        let mut list: Vec<&str> = Vec::new();
        for item in &section.content {
            if let ContentItem::ListItem(text) = item {
                list.push(text);
                continue;
            }
            self.flush_list(&mut list);
            match item {
                ContentItem::Paragraph(text) => self.render_paragraph(text),
                ContentItem::Question(text) => self.render_qa("Q.", "question", text),
                ContentItem::Answer(text) => self.render_qa("A.", "answer", text),
                ContentItem::Divider => self.render_divider(),
                ContentItem::ListItem(_) => {}
            }
        }
        self.flush_list(&mut list);
    }

    fn render_heading(&mut self, heading: &str) {
        let tag = self.style.heading_level.tag();
        let text = escape_html(heading);
        let html = if self.naver_mode {
            format!(
                "<div class=\"se-component se-sectionTitle\">\
                 <{tag} class=\"se-text-paragraph\" \
                 style=\"font-size:24px;font-weight:bold;margin:32px 0 16px;\">\
                 {text}</{tag}></div>\n"
            )
        } else {
            format!("<{tag}>{text}</{tag}>\n")
        };
        self.output.push_str(&html);
    }

    fn render_paragraph(&mut self, text: &str) {
        let text = escape_html(text);
        let html = if self.naver_mode {
            format!(
                "<div class=\"se-component se-text\">\
                 <p class=\"se-text-paragraph\" style=\"{}\">{}</p></div>\n",
                self.body_css(),
                text
            )
        } else {
            format!("<p>{}</p>\n", text)
        };
        self.output.push_str(&html);
    }

    fn render_qa(&mut self, marker: &str, class: &str, text: &str) {
        let text = escape_html(text);
        let inner = match self.style.qa_style {
            QaStyle::Prefix => format!("{} {}", marker, text),
            QaStyle::Bold | QaStyle::Quote => format!("<strong>{}</strong> {}", marker, text),
        };

        let html = match (self.naver_mode, self.style.qa_style) {
            (true, QaStyle::Quote) => format!(
                "<div class=\"se-component se-quotation\">\
                 <blockquote class=\"se-quotation-container\" \
                 style=\"border-left:4px solid {ACCENT_COLOR};padding:8px 16px;margin:0 0 {};\">\
                 <p class=\"se-text-paragraph se-{class}\" \
                 style=\"font-size:16px;line-height:1.8;margin:0;\">{inner}</p>\
                 </blockquote></div>\n",
                self.style.paragraph_spacing.css_margin()
            ),
            (true, _) => {
                let emphasis = if class == "question" {
                    format!("font-weight:bold;color:{ACCENT_COLOR};")
                } else {
                    String::new()
                };
                format!(
                    "<div class=\"se-component se-text\">\
                     <p class=\"se-text-paragraph se-{class}\" style=\"{}{emphasis}\">\
                     {inner}</p></div>\n",
                    self.body_css()
                )
            }
            (false, QaStyle::Quote) => {
                format!("<blockquote class=\"qa\"><p class=\"{class}\">{inner}</p></blockquote>\n")
            }
            (false, _) => format!("<p class=\"{class}\">{inner}</p>\n"),
        };
        self.output.push_str(&html);
    }

    fn render_divider(&mut self) {
        if self.naver_mode {
            self.output.push_str(
                "<div class=\"se-component se-horizontalLine\">\
                 <hr class=\"se-hr\" \
                 style=\"border:0;border-top:1px solid #dddddd;margin:24px 0;\">\
                 </div>\n",
            );
        } else {
            self.output.push_str("<hr>\n");
        }
    }

    fn flush_list(&mut self, list: &mut Vec<&str>) {
        if list.is_empty() {
            return;
        }
        let tag = if self.style.list_marker.is_ordered() {
            "ol"
        } else {
            "ul"
        };

        if self.naver_mode {
            self.output.push_str(&format!(
                "<div class=\"se-component se-text\">\
                 <{tag} class=\"se-list\" style=\"padding-left:24px;margin:0 0 {};\">",
                self.style.paragraph_spacing.css_margin()
            ));
            for text in list.drain(..) {
                self.output.push_str(&format!(
                    "<li class=\"se-list-item\" style=\"font-size:16px;line-height:1.8;\">{}</li>",
                    escape_html(text)
                ));
            }
            self.output.push_str(&format!("</{tag}></div>\n"));
        } else {
            self.output.push_str(&format!("<{tag}>\n"));
            for text in list.drain(..) {
                self.output
                    .push_str(&format!("<li>{}</li>\n", escape_html(text)));
            }
            self.output.push_str(&format!("</{tag}>\n"));
        }
    }

    fn body_css(&self) -> String {
        format!(
            "font-size:16px;line-height:1.8;margin:0 0 {};",
            self.style.paragraph_spacing.css_margin()
        )
    }
}

fn page_css(style: &StyleConfig) -> String {
    let margin = style.paragraph_spacing.css_margin();
    format!(
        "<style>\n\
         body {{ font-family: 'Nanum Gothic', 'Malgun Gothic', sans-serif; \
         line-height: 1.8; color: #222; }}\n\
         .post {{ max-width: 720px; margin: 40px auto; padding: 0 16px; }}\n\
         h1 {{ font-size: 32px; margin-bottom: 24px; }}\n\
         h2, h3 {{ margin: 32px 0 16px; }}\n\
         p, ul, ol {{ margin: 0 0 {margin}; }}\n\
         .question {{ font-weight: bold; color: {ACCENT_COLOR}; }}\n\
         blockquote.qa {{ border-left: 4px solid {ACCENT_COLOR}; \
         margin: 0 0 {margin}; padding: 8px 16px; }}\n\
         hr {{ border: 0; border-top: 1px solid #ddd; margin: 24px 0; }}\n\
         </style>\n"
    )
}

/// Escape HTML special characters in text.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
