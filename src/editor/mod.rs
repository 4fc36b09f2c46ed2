//! Editor document construction.
//!
//! Builds component trees in the blog editor's schema from parsed text or
//! upstream blocks and projects them into the write API's JSON payload.

mod builder;
mod component;
mod document;
mod ids;
mod options;
mod style;

pub use builder::DocumentBuilder;
pub use component::{
    Component, HorizontalLineComponent, ImageComponent, ImageOrigin, Paragraph,
    QuotationComponent, SectionTitleComponent, StickerComponent, TextComponent, TextNode,
    Thumbnail, TitleComponent, DEFAULT_LAYOUT,
};
pub use document::{Document, JsonFormat, LANGUAGE, SCHEMA_VERSION, THEME};
pub use ids::{
    is_document_id, is_node_id, IdSource, RandomIds, SequentialIds, DOCUMENT_ID_LEN,
    NODE_ID_PREFIX,
};
pub use options::{BuildStyle, LineLayout, QuotationLayout};
pub use style::{FontSizeCode, NodeStyle};
