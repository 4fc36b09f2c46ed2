//! Identifier generation for editor nodes.
//!
//! Every component, paragraph and text node carries an `SE-` prefixed UUID,
//! and the document itself a 26-character `[A-Z0-9]` identifier. Production
//! code uses [`RandomIds`]; [`SequentialIds`] gives reproducible output.

use rand::Rng;
use uuid::Uuid;

/// Prefix the editor expects on node identifiers.
pub const NODE_ID_PREFIX: &str = "SE-";

/// Length of the document identifier.
pub const DOCUMENT_ID_LEN: usize = 26;

const DOCUMENT_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of identifiers for a document under construction.
pub trait IdSource {
    /// A fresh `SE-<uuid>` node identifier.
    fn node_id(&mut self) -> String;

    /// A fresh 26-character document identifier.
    fn document_id(&mut self) -> String;
}

/// Random identifiers: UUID v4 for nodes, random uppercase alphanumerics for
/// the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn node_id(&mut self) -> String {
        format!("{}{}", NODE_ID_PREFIX, Uuid::new_v4())
    }

    fn document_id(&mut self) -> String {
        let mut rng = rand::rng();
        (0..DOCUMENT_ID_LEN)
            .map(|_| DOCUMENT_ID_CHARSET[rng.random_range(0..DOCUMENT_ID_CHARSET.len())] as char)
            .collect()
    }
}

/// Deterministic identifiers counting up from 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    nodes: u64,
    documents: u64,
}

impl SequentialIds {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn node_id(&mut self) -> String {
        self.nodes += 1;
        format!("{}00000000-0000-4000-8000-{:012x}", NODE_ID_PREFIX, self.nodes)
    }

    fn document_id(&mut self) -> String {
        self.documents += 1;
        format!("{:0width$}", self.documents, width = DOCUMENT_ID_LEN)
    }
}

/// Check that an identifier has the document identifier shape.
pub fn is_document_id(id: &str) -> bool {
    id.len() == DOCUMENT_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Check that an identifier has the node identifier shape.
pub fn is_node_id(id: &str) -> bool {
    id.strip_prefix(NODE_ID_PREFIX)
        .and_then(|rest| Uuid::parse_str(rest).ok())
        .is_some()
}
