//! Content items returned by MCP tool calls.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Binary document embedded in a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedResource {
    pub uri: String,
    pub mime_type: String,
    /// Base64-encoded bytes
    pub blob: String,
}

impl EmbeddedResource {
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.blob)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
    Resource { resource: EmbeddedResource },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn resource(data: &[u8], mime_type: &str, uri: impl Into<String>) -> Self {
        Self::Resource {
            resource: EmbeddedResource {
                uri: uri.into(),
                mime_type: mime_type.to_string(),
                blob: BASE64.encode(data),
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Resource { .. } => None,
        }
    }
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_serialization() {
        let item = ContentItem::resource(b"%PDF-1.5", "application/pdf", "blob:test/1");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "resource");
        assert_eq!(json["resource"]["mimeType"], "application/pdf");
        assert_eq!(json["resource"]["uri"], "blob:test/1");

        match item {
            ContentItem::Resource { resource } => {
                assert_eq!(resource.decode().unwrap(), b"%PDF-1.5")
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_error_result() {
        let result = ToolResult::error("Montant invalide");
        assert!(result.is_error);
        assert_eq!(result.content[0].as_text(), Some("Montant invalide"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["text"], "Montant invalide");
    }
}
