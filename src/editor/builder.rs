//! Incremental construction of editor documents.
//!
//! The builder owns a growing list of components and hands out fresh
//! identifiers for every node it creates. Conversion from parsed text and
//! from upstream blocks is layered on top of the `add_*` operations.

use crate::config::StyleOption;
use crate::model::{
    Block, ContentItem, GeneratedContent, ImageMeta, ListStyle, ParsedDocument, StickerMeta,
};
use crate::parser::TextParser;

use super::{
    BuildStyle, Component, Document, FontSizeCode, HorizontalLineComponent, IdSource,
    ImageComponent, ImageOrigin, NodeStyle, Paragraph, QuotationComponent, RandomIds,
    SectionTitleComponent, StickerComponent, TextComponent, TextNode, Thumbnail, TitleComponent,
    DEFAULT_LAYOUT,
};

/// Builder for editor documents.
///
/// ```
/// use sedoc::editor::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new();
/// builder
///     .add_title("주말 나들이")
///     .add_text("날씨가 좋았어요.")
///     .add_horizontal_line();
/// let doc = builder.build();
/// assert_eq!(doc.len(), 3);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder<G: IdSource = RandomIds> {
    ids: G,
    style: BuildStyle,
    document_id: String,
    components: Vec<Component>,
    has_represent: bool,
}

impl DocumentBuilder<RandomIds> {
    /// Create a builder with random identifiers.
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }

    /// Build a document from parsed text.
    pub fn from_parsed(parsed: &ParsedDocument, style: &BuildStyle) -> Document {
        Self::from_parsed_with(RandomIds, parsed, style)
    }

    /// Build a document from upstream blocks, filling image placeholders
    /// from `images` in order.
    pub fn from_blocks(blocks: &[Block], images: &[ImageMeta], style: &BuildStyle) -> Document {
        Self::from_blocks_with(RandomIds, blocks, images, style)
    }

    /// Build a document from either shape of generation service output.
    pub fn from_generated(
        content: &GeneratedContent,
        images: &[ImageMeta],
        style: &BuildStyle,
    ) -> Document {
        Self::from_generated_with(RandomIds, content, images, style)
    }
}

impl Default for DocumentBuilder<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdSource> DocumentBuilder<G> {
    /// Create a builder drawing identifiers from `ids`.
    pub fn with_ids(mut ids: G) -> Self {
        let document_id = ids.document_id();
        Self {
            ids,
            style: BuildStyle::default(),
            document_id,
            components: Vec::new(),
            has_represent: false,
        }
    }

    /// Set the build style.
    pub fn with_style(mut self, style: BuildStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the build style.
    pub fn style(&self) -> &BuildStyle {
        &self.style
    }

    /// Number of components added so far.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if no component has been added.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Finish building.
    pub fn build(self) -> Document {
        Document {
            id: self.document_id,
            components: self.components,
        }
    }

    /// See [`DocumentBuilder::from_parsed`].
    pub fn from_parsed_with(ids: G, parsed: &ParsedDocument, style: &BuildStyle) -> Document {
        let mut builder = Self::with_ids(ids).with_style(style.clone());
        builder.append_parsed(parsed);
        builder.build()
    }

    /// See [`DocumentBuilder::from_blocks`].
    pub fn from_blocks_with(
        ids: G,
        blocks: &[Block],
        images: &[ImageMeta],
        style: &BuildStyle,
    ) -> Document {
        let mut builder = Self::with_ids(ids).with_style(style.clone());
        builder.append_blocks(blocks, images);
        builder.build()
    }

    /// See [`DocumentBuilder::from_generated`].
    pub fn from_generated_with(
        ids: G,
        content: &GeneratedContent,
        images: &[ImageMeta],
        style: &BuildStyle,
    ) -> Document {
        let mut builder = Self::with_ids(ids).with_style(style.clone());
        match content {
            GeneratedContent::Structured { title, blocks } => {
                if !title.trim().is_empty() {
                    builder.add_title(title.trim());
                }
                builder.append_blocks(blocks, images);
            }
            GeneratedContent::Plain(text) => {
                let parsed = TextParser::new().parse(text);
                if parsed.has_title() {
                    builder.add_title(&parsed.title);
                }
                builder.append_parsed(&parsed);
            }
        }
        builder.build()
    }

    fn text_node(&mut self, value: &str, style: Option<NodeStyle>) -> TextNode {
        TextNode {
            id: self.ids.node_id(),
            value: value.to_string(),
            style: style.and_then(NodeStyle::into_option),
        }
    }

    fn paragraph(&mut self, value: &str, style: Option<NodeStyle>) -> Paragraph {
        let id = self.ids.node_id();
        let node = self.text_node(value, style);
        Paragraph {
            id,
            nodes: vec![node],
        }
    }

    fn push(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Add the document title.
    pub fn add_title(&mut self, title: &str) -> &mut Self {
        let id = self.ids.node_id();
        let paragraph = self.paragraph(title, None);
        self.push(Component::Title(TitleComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            title: vec![paragraph],
            sub_title: None,
            align: "left".to_string(),
        }))
    }

    /// Add a bold section title at the given size.
    pub fn add_section_title(&mut self, text: &str, size: FontSizeCode) -> &mut Self {
        let id = self.ids.node_id();
        let style = NodeStyle::bold()
            .with_font_size(size)
            .merged_over(&self.style.body_style());
        let paragraph = self.paragraph(text, Some(style));
        self.push(Component::SectionTitle(SectionTitleComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            title: vec![paragraph],
        }))
    }

    /// Add a text component holding `text` as a single paragraph.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.add_styled_text(text, NodeStyle::new())
    }

    /// Add a text component with extra styling on top of the body style.
    pub fn add_styled_text(&mut self, text: &str, style: NodeStyle) -> &mut Self {
        let style = style.merged_over(&self.style.body_style());
        let id = self.ids.node_id();
        let paragraph = self.paragraph(text, Some(style));
        self.push(Component::Text(TextComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            value: vec![paragraph],
        }))
    }

    /// Add a text component with one paragraph per line.
    pub fn add_text_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = self.ids.node_id();
        let body = self.style.body_style();
        let value = lines
            .into_iter()
            .map(|line| self.paragraph(line.as_ref(), Some(body.clone())))
            .collect();
        self.push(Component::Text(TextComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            value,
        }))
    }

    /// Add a quotation using the configured layout.
    pub fn add_quotation(&mut self, text: &str) -> &mut Self {
        let id = self.ids.node_id();
        let body = self.style.body_style();
        let paragraph = self.paragraph(text, Some(body));
        self.push(Component::Quotation(QuotationComponent {
            id,
            layout: self.style.quotation_layout.name().to_string(),
            value: vec![paragraph],
            source: None,
        }))
    }

    /// Add a horizontal line using the configured layout.
    pub fn add_horizontal_line(&mut self) -> &mut Self {
        let id = self.ids.node_id();
        self.push(Component::HorizontalLine(HorizontalLineComponent {
            id,
            layout: self.style.divider_layout.name().to_string(),
        }))
    }

    /// Add an image. The first image added becomes the representative one.
    pub fn add_image(&mut self, image: &ImageMeta) -> &mut Self {
        let represent = !self.has_represent;
        self.has_represent = true;
        let id = self.ids.node_id();
        self.push(Component::Image(ImageComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            src: image.src.clone(),
            internal_resource: true,
            represent,
            path: image.path.clone(),
            domain: image.domain.clone(),
            file_size: image.file_size,
            width: image.width,
            height: image.height,
            original_width: image.original_width,
            original_height: image.original_height,
            file_name: image.file_name.clone(),
            caption: None,
            format: "normal".to_string(),
            display_format: "normal".to_string(),
            image_loaded: true,
            content_mode: "normal".to_string(),
            origin: ImageOrigin::default(),
            ai: false,
        }))
    }

    /// Add a sticker.
    pub fn add_sticker(&mut self, sticker: &StickerMeta) -> &mut Self {
        let id = self.ids.node_id();
        self.push(Component::Sticker(StickerComponent {
            id,
            layout: DEFAULT_LAYOUT.to_string(),
            pack_code: sticker.pack_code.clone(),
            seq: sticker.seq,
            thumbnail: Thumbnail {
                src: sticker.src.clone(),
                width: sticker.width,
                height: sticker.height,
            },
            format: "normal".to_string(),
        }))
    }

    /// Append the sections of a parsed document.
    ///
    /// Consecutive paragraphs and list items (prefixed `- `) collect into one
    /// text component. Questions and dividers close that run first; answers
    /// are added as they come without closing it.
    pub fn append_parsed(&mut self, parsed: &ParsedDocument) -> &mut Self {
        let heading_size = self.style.heading_font_size;
        for section in &parsed.sections {
            if let Some(heading) = section.heading.as_deref().filter(|h| !h.is_empty()) {
                self.add_section_title(heading, heading_size);
            }

            let mut pending: Vec<String> = Vec::new();
            for item in &section.content {
                match item {
                    ContentItem::Paragraph(text) => pending.push(text.clone()),
                    ContentItem::ListItem(text) => pending.push(format!("- {}", text)),
                    ContentItem::Question(text) => {
                        self.flush_pending(&mut pending);
                        self.add_styled_text(&format!("Q. {}", text), NodeStyle::bold());
                    }
                    ContentItem::Answer(text) => {
                        self.add_text(&format!("A. {}", text));
                    }
                    ContentItem::Divider => {
                        self.flush_pending(&mut pending);
                        self.add_horizontal_line();
                    }
                }
            }
            self.flush_pending(&mut pending);
        }
        self
    }

    fn flush_pending(&mut self, pending: &mut Vec<String>) {
        if !pending.is_empty() {
            self.add_text_lines(pending.drain(..));
        }
    }

    /// Append upstream blocks, filling image placeholders from `images`.
    ///
    /// Unknown block types and placeholders with no image left are skipped.
    pub fn append_blocks(&mut self, blocks: &[Block], images: &[ImageMeta]) -> &mut Self {
        let mut images = images.iter();
        for block in blocks {
            match block {
                Block::Paragraph { text } => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    self.add_text(text);
                }
                Block::Heading { text, level } => {
                    let level = level.unwrap_or(Block::DEFAULT_HEADING_LEVEL);
                    let size = self.style.heading_size_for(level);
                    self.add_section_title(text, size);
                }
                Block::Quotation { text } => {
                    self.add_quotation(text);
                }
                Block::List { items, style } => {
                    if items.is_empty() {
                        log::debug!("Skipping empty list block");
                        continue;
                    }
                    self.add_text(&format_list(items, *style));
                }
                Block::Divider => {
                    self.add_horizontal_line();
                }
                Block::ImagePlaceholder { description } => match images.next() {
                    Some(image) => {
                        self.add_image(image);
                    }
                    None => log::debug!("No image left for placeholder {:?}", description),
                },
                Block::Unknown => log::debug!("Skipping block of unknown type"),
            }
        }
        self
    }
}

fn format_list(items: &[String], style: ListStyle) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match style {
            ListStyle::Number => format!("{}. {}", i + 1, item),
            ListStyle::Bullet => format!("- {}", item),
            ListStyle::Plain => item.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{QuotationLayout, SequentialIds};
    use crate::parser::parse_text;

    fn ctypes(doc: &Document) -> Vec<&'static str> {
        doc.components.iter().map(Component::ctype).collect()
    }

    fn parsed_doc(text: &str) -> Document {
        let style = BuildStyle::default();
        DocumentBuilder::from_parsed_with(SequentialIds::new(), &parse_text(text), &style)
    }

    fn blocks_doc(blocks: &[Block], images: &[ImageMeta]) -> Document {
        let style = BuildStyle::default();
        DocumentBuilder::from_blocks_with(SequentialIds::new(), blocks, images, &style)
    }

    fn generated_doc(content: &GeneratedContent) -> Document {
        let style = BuildStyle::default();
        DocumentBuilder::from_generated_with(SequentialIds::new(), content, &[], &style)
    }

    fn text_of(component: &Component) -> Vec<String> {
        component
            .paragraphs()
            .iter()
            .map(Paragraph::plain_text)
            .collect()
    }

    #[test]
    fn test_chained_adds() {
        let mut builder = DocumentBuilder::with_ids(SequentialIds::new());
        builder
            .add_title("제목")
            .add_section_title("섹션", FontSizeCode::Fs24)
            .add_text("본문")
            .add_quotation("인용")
            .add_horizontal_line()
            .add_image(&ImageMeta::new("https://img/1.png", 600, 400))
            .add_sticker(&StickerMeta::default());
        assert_eq!(builder.len(), 7);

        let doc = builder.build();
        assert_eq!(doc.id, "00000000000000000000000001");
        assert_eq!(
            ctypes(&doc),
            vec![
                "documentTitle",
                "sectionTitle",
                "text",
                "quotation",
                "horizontalLine",
                "image",
                "sticker"
            ]
        );
    }

    #[test]
    fn test_section_title_style() {
        let mut builder = DocumentBuilder::with_ids(SequentialIds::new());
        builder.add_section_title("A", FontSizeCode::Fs24);
        let doc = builder.build();

        let node = &doc.components[0].paragraphs()[0].nodes[0];
        let style = node.style.as_ref().unwrap();
        assert!(style.bold);
        assert_eq!(style.font_size_code, Some(FontSizeCode::Fs24));
    }

    #[test]
    fn test_plain_text_has_no_style() {
        let mut builder = DocumentBuilder::with_ids(SequentialIds::new());
        builder.add_text("plain");
        let doc = builder.build();
        assert_eq!(doc.components[0].paragraphs()[0].nodes[0].style, None);
    }

    #[test]
    fn test_body_style_applies_to_text() {
        let style = BuildStyle::new()
            .with_font_family("nanumbareunhipi")
            .with_body_size(FontSizeCode::Fs15);
        let mut builder = DocumentBuilder::with_ids(SequentialIds::new()).with_style(style);
        builder.add_text("body").add_horizontal_line();
        let doc = builder.build();

        let node_style = doc.components[0].paragraphs()[0].nodes[0]
            .style
            .clone()
            .unwrap();
        assert_eq!(node_style.font_family.as_deref(), Some("nanumbareunhipi"));
        assert_eq!(node_style.font_size_code, Some(FontSizeCode::Fs15));
        assert_eq!(doc.components[1].layout(), "line1");
    }

    #[test]
    fn test_from_parsed_buffering() {
        let doc = parsed_doc("[준비]\n첫 줄\n- 물\n- 모자\nQ. 비?\nA. 없음\n둘째 줄\n---\n끝");

        assert_eq!(
            ctypes(&doc),
            vec!["sectionTitle", "text", "text", "text", "text", "horizontalLine", "text"]
        );
        assert_eq!(text_of(&doc.components[1]), vec!["첫 줄", "- 물", "- 모자"]);
        assert_eq!(text_of(&doc.components[2]), vec!["Q. 비?"]);
        assert_eq!(text_of(&doc.components[3]), vec!["A. 없음"]);
        assert_eq!(text_of(&doc.components[4]), vec!["둘째 줄"]);
        assert_eq!(text_of(&doc.components[6]), vec!["끝"]);

        let question = &doc.components[2].paragraphs()[0].nodes[0];
        assert!(question.style.as_ref().unwrap().bold);
        let answer = &doc.components[3].paragraphs()[0].nodes[0];
        assert!(answer.style.is_none());
    }

    #[test]
    fn test_answer_does_not_flush_pending_text() {
        let doc = parsed_doc("앞 문단\nA. 답");

        assert_eq!(doc.len(), 2);
        assert_eq!(text_of(&doc.components[0]), vec!["A. 답"]);
        assert_eq!(text_of(&doc.components[1]), vec!["앞 문단"]);
    }

    #[test]
    fn test_from_parsed_skips_title() {
        let doc = parsed_doc("제목: T\n본문");
        assert_eq!(ctypes(&doc), vec!["text"]);
    }

    #[test]
    fn test_from_blocks_dispatch() {
        let blocks = vec![
            Block::heading("A", 2),
            Block::paragraph("B"),
            Block::Divider,
            Block::ImagePlaceholder {
                description: "sunset".into(),
            },
        ];
        let doc = blocks_doc(&blocks, &[]);
        assert_eq!(ctypes(&doc), vec!["sectionTitle", "text", "horizontalLine"]);
    }

    #[test]
    fn test_heading_levels() {
        let blocks = vec![
            Block::heading("two", 2),
            Block::heading("three", 3),
            Block::Heading {
                text: "default".into(),
                level: None,
            },
            Block::heading("unreadable", Block::UNKNOWN_HEADING_LEVEL),
        ];
        let style = BuildStyle::new().with_heading_size(FontSizeCode::Fs32);
        let doc = DocumentBuilder::from_blocks_with(SequentialIds::new(), &blocks, &[], &style);

        let sizes: Vec<_> = doc
            .components
            .iter()
            .map(|c| c.paragraphs()[0].nodes[0].style.as_ref().unwrap().font_size_code)
            .collect();
        assert_eq!(
            sizes,
            vec![
                Some(FontSizeCode::Fs32),
                Some(FontSizeCode::Fs18),
                Some(FontSizeCode::Fs32),
                Some(FontSizeCode::Fs18)
            ]
        );
    }

    #[test]
    fn test_list_formatting() {
        let blocks = vec![
            Block::list(["x", "y"], ListStyle::Number),
            Block::list(["a", "b"], ListStyle::Bullet),
            Block::list(["p"], ListStyle::Plain),
            Block::list(Vec::<String>::new(), ListStyle::Bullet),
        ];
        let doc = blocks_doc(&blocks, &[]);

        assert_eq!(doc.len(), 3);
        assert_eq!(text_of(&doc.components[0]), vec!["1. x\n2. y"]);
        assert_eq!(text_of(&doc.components[1]), vec!["- a\n- b"]);
        assert_eq!(text_of(&doc.components[2]), vec!["p"]);
    }

    #[test]
    fn test_images_consumed_in_order() {
        let images = vec![
            ImageMeta::new("https://img/1.png", 100, 100),
            ImageMeta::new("https://img/2.png", 200, 200),
        ];
        let placeholder = || Block::ImagePlaceholder {
            description: String::new(),
        };
        let blocks = vec![placeholder(), Block::paragraph("between"), placeholder(), placeholder()];
        let doc = blocks_doc(&blocks, &images);

        assert_eq!(ctypes(&doc), vec!["image", "text", "image"]);
        match (&doc.components[0], &doc.components[2]) {
            (Component::Image(first), Component::Image(second)) => {
                assert_eq!(first.src, "https://img/1.png");
                assert!(first.represent);
                assert_eq!(second.src, "https://img/2.png");
                assert!(!second.represent);
            }
            other => panic!("expected images, got {:?}", other),
        }
        assert_eq!(doc.representative_image().unwrap().src, "https://img/1.png");
    }

    #[test]
    fn test_empty_paragraph_and_unknown_blocks_skipped() {
        let blocks = vec![Block::paragraph("   "), Block::Unknown, Block::paragraph("kept")];
        let doc = blocks_doc(&blocks, &[]);
        assert_eq!(ctypes(&doc), vec!["text"]);
    }

    #[test]
    fn test_quotation_layout() {
        let style = BuildStyle::new().with_quotation_layout(QuotationLayout::QuotationPostit);
        let blocks = vec![Block::Quotation {
            text: "인용문".into(),
        }];
        let doc = DocumentBuilder::from_blocks_with(SequentialIds::new(), &blocks, &[], &style);
        assert_eq!(doc.components[0].layout(), "quotation_postit");
    }

    #[test]
    fn test_from_generated_structured() {
        let content = GeneratedContent::Structured {
            title: "여행기".into(),
            blocks: vec![Block::paragraph("본문")],
        };
        let doc = generated_doc(&content);
        assert_eq!(ctypes(&doc), vec!["documentTitle", "text"]);
        assert_eq!(doc.components[0].plain_text(), "여행기");
    }

    #[test]
    fn test_from_generated_plain() {
        let content = GeneratedContent::Plain("제목: 여행기\n## 첫날\n본문".into());
        let doc = generated_doc(&content);
        assert_eq!(ctypes(&doc), vec!["documentTitle", "sectionTitle", "text"]);
    }
}
