//! Parsing options and configuration.

use serde::{Deserialize, Serialize};

/// Options for parsing generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Normalize input to Unicode NFC before classification
    pub normalize_unicode: bool,

    /// Treat a leading `제목:`/`title:`/`# ` line as the document title
    pub detect_title: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable title detection.
    pub fn with_title_detection(mut self, detect: bool) -> Self {
        self.detect_title = detect;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            detect_title: true,
        }
    }
}
