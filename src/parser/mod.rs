//! Text parsing module.
//!
//! Turns free-form generated text into a [`ParsedDocument`](crate::model::ParsedDocument)
//! using an ordered line grammar.

mod options;
mod patterns;
mod text_parser;

pub use options::ParseOptions;
pub use patterns::{LineKind, LinePatterns};
pub use text_parser::{parse_text, TextParser};
