//! Document model types.
//!
//! Two input-side representations live here: the intermediate
//! representation the text parser produces, and the block list an upstream
//! generation service sends directly. Both feed the document builder.

mod block;
mod parsed;

pub use block::{Block, GeneratedContent, ImageMeta, ListStyle, StickerMeta};
pub use parsed::{ContentItem, ParsedDocument, Section};
