//! Document-id cursor strategy.
//!
//! Cursors are base64 over `doc:<24 hex chars>`, keys are 12-byte
//! [`DocumentId`]s. The byte layout follows the common object-id shape
//! (timestamp-prefixed), so lexicographic order is insertion order and
//! the derived `Ord` is the pagination order.
//!
//! Any node type that implements `Borrow<DocumentId>` paginates through
//! [`definition`]; decoded cursors yield bare ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use segue_core::{ConnectionCursor, ConnectionDefinition};

use crate::encoding::{base64, unbase64};

const PREFIX: &str = "doc:";

// =============================================================================
// DocumentId
// =============================================================================

/// 12-byte document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub [u8; 12]);

impl DocumentId {
    /// Parse from a 24-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 12] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(arr))
    }

    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the inner bytes.
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 12]> for DocumentId {
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for DocumentId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// Codec
// =============================================================================

/// Encode a document id as an opaque cursor token.
pub fn document_to_cursor(id: &DocumentId) -> ConnectionCursor {
    base64(&format!("{PREFIX}{}", id.to_hex()))
}

/// Decode a cursor token back to its document id.
///
/// Returns `None` when the token is not base64, carries the wrong
/// namespace, or the payload is not a valid 24-character hex id.
pub fn cursor_to_document(cursor: &str) -> Option<DocumentId> {
    let unbased = unbase64(cursor)?;
    let id = unbased.strip_prefix(PREFIX)?;
    DocumentId::from_hex(id).ok()
}

/// A ready-made connection definition over document-id keys.
pub fn definition() -> ConnectionDefinition<DocumentId> {
    ConnectionDefinition::builder()
        .comparator(|a: &DocumentId, b: &DocumentId| a.cmp(b))
        .comparable_to_cursor(document_to_cursor)
        .cursor_to_comparable(cursor_to_document)
        .build()
        .expect("document strategy is fully specified")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Borrow;

    use segue_core::{ConnectionArguments, ConnectionOptions};

    fn id(n: u8) -> DocumentId {
        let mut bytes = [0u8; 12];
        bytes[11] = n;
        DocumentId(bytes)
    }

    #[test]
    fn test_round_trip() {
        let id = DocumentId(*b"\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c");
        assert_eq!(cursor_to_document(&document_to_cursor(&id)), Some(id));
    }

    #[test]
    fn test_hex_round_trip() {
        let id = DocumentId::from_hex("0123456789abcdef01234567").unwrap();
        assert_eq!(id.to_hex(), "0123456789abcdef01234567");
        assert_eq!(id.to_string(), "0123456789abcdef01234567");
    }

    #[test]
    fn test_from_hex_rejects_invalid_input() {
        // mauvaise longueur
        assert!(DocumentId::from_hex("0123").is_err());
        assert!(DocumentId::from_hex(&"ab".repeat(13)).is_err());
        // caractères non hexadécimaux
        assert!(DocumentId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_rejects_foreign_tokens() {
        assert_eq!(cursor_to_document("!!!"), None);
        assert_eq!(cursor_to_document(&base64("number:42")), None);
        assert_eq!(cursor_to_document(&base64("doc:")), None);
        assert_eq!(cursor_to_document(&base64("doc:0123")), None);
    }

    // Un type nœud complet pagine via Borrow<DocumentId>
    #[test]
    fn test_definition_paginates_whole_documents() {
        #[derive(Debug, Clone, PartialEq)]
        struct Doc {
            id: DocumentId,
            title: &'static str,
        }

        impl Borrow<DocumentId> for Doc {
            fn borrow(&self) -> &DocumentId {
                &self.id
            }
        }

        let docs = vec![
            Doc { id: id(1), title: "first" },
            Doc { id: id(2), title: "second" },
            Doc { id: id(3), title: "third" },
        ];

        let args = ConnectionArguments {
            after: Some(document_to_cursor(&id(1))),
            ..Default::default()
        };
        let options = ConnectionOptions {
            sorted: true,
            ..Default::default()
        };

        let connection = definition()
            .connection_from_array(&docs, &args, &options)
            .unwrap();

        let titles: Vec<&str> = connection.edges.iter().map(|e| e.node.title).collect();
        assert_eq!(titles, vec!["second", "third"]);
        assert_eq!(
            connection.page_info.end_cursor,
            Some(document_to_cursor(&id(3)))
        );
    }
}
