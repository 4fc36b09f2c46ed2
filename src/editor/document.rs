//! The built editor document and its payload projection.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

use super::Component;

/// Editor schema version the payload declares.
pub const SCHEMA_VERSION: &str = "2.9.0";

/// Editor theme.
pub const THEME: &str = "default";

/// Document language.
pub const LANGUAGE: &str = "ko-KR";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A document ready to be posted through the editor's write API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 26-character document identifier
    pub id: String,

    /// Components in render order
    pub components: Vec<Component>,
}

impl Document {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the document has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Every component, paragraph and text node identifier in document order.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for component in &self.components {
            ids.push(component.id());
            for paragraph in component.paragraphs() {
                ids.push(paragraph.id.as_str());
                ids.extend(paragraph.nodes.iter().map(|n| n.id.as_str()));
            }
        }
        ids
    }

    /// The image marked as the post's representative image, if any.
    pub fn representative_image(&self) -> Option<&super::ImageComponent> {
        self.components.iter().find_map(|c| match c {
            Component::Image(image) if image.represent => Some(image),
            _ => None,
        })
    }

    /// Plain text of all text-bearing components, one per line.
    pub fn plain_text(&self) -> String {
        self.components
            .iter()
            .map(Component::plain_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn payload(&self) -> Payload<'_> {
        Payload {
            document_id: "",
            document: PayloadDocument {
                version: SCHEMA_VERSION,
                theme: THEME,
                language: LANGUAGE,
                id: &self.id,
                components: &self.components,
                di: DocumentInfo {
                    dif: false,
                    dio: Vec::new(),
                },
            },
        }
    }

    /// Project the document into the write API's payload mapping.
    pub fn to_payload(&self) -> Result<Value> {
        serde_json::to_value(self.payload())
            .map_err(|e| Error::Render(format!("payload serialization error: {}", e)))
    }

    /// Serialize the payload. Non-ASCII text is written as-is.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let payload = self.payload();
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(&payload),
            JsonFormat::Compact => serde_json::to_string(&payload),
        };

        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    document_id: &'a str,
    document: PayloadDocument<'a>,
}

#[derive(Serialize)]
struct PayloadDocument<'a> {
    version: &'a str,
    theme: &'a str,
    language: &'a str,
    id: &'a str,
    components: &'a [Component],
    di: DocumentInfo,
}

#[derive(Serialize)]
struct DocumentInfo {
    dif: bool,
    dio: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{HorizontalLineComponent, DEFAULT_LAYOUT};
    use serde_json::json;

    fn document() -> Document {
        Document {
            id: "01ABCDEFGHJKMNPQRSTVWXYZ00".into(),
            components: vec![Component::HorizontalLine(HorizontalLineComponent {
                id: "SE-h".into(),
                layout: DEFAULT_LAYOUT.into(),
            })],
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = document().to_payload().unwrap();
        assert_eq!(
            payload,
            json!({
                "documentId": "",
                "document": {
                    "version": "2.9.0",
                    "theme": "default",
                    "language": "ko-KR",
                    "id": "01ABCDEFGHJKMNPQRSTVWXYZ00",
                    "components": [
                        {"@ctype": "horizontalLine", "id": "SE-h", "layout": "default"}
                    ],
                    "di": {"dif": false, "dio": []}
                }
            })
        );
    }

    #[test]
    fn test_payload_key_order() {
        let payload = document().to_payload().unwrap();
        let keys: Vec<&str> = payload["document"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec!["version", "theme", "language", "id", "components", "di"]
        );
    }

    #[test]
    fn test_to_json_formats() {
        let doc = document();
        let compact = doc.to_json(JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"documentId":"","document":{"version":"2.9.0""#));

        let pretty = doc.to_json(JsonFormat::Pretty).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_empty_document_payload() {
        let doc = Document {
            id: "A".repeat(26),
            components: vec![],
        };
        assert!(doc.is_empty());
        let payload = doc.to_payload().unwrap();
        assert_eq!(payload["document"]["components"], json!([]));
    }
}
