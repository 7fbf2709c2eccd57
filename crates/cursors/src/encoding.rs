//! Base64 helpers for cursor tokens.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode a cursor plaintext as base64.
pub fn base64(input: &str) -> String {
    STANDARD.encode(input)
}

/// Decode a base64 cursor token back to its plaintext.
///
/// Returns `None` for invalid base64 or non-UTF-8 payloads - unusable
/// tokens flow back to the engine as "no boundary", not as errors.
pub fn unbase64(input: &str) -> Option<String> {
    let bytes = STANDARD.decode(input).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for input in ["teststring", "number:42", "doc:0123456789abcdef01234567", ""] {
            let encoded = base64(input);
            assert_eq!(unbase64(&encoded).as_deref(), Some(input));
        }
    }

    #[test]
    fn test_encoding_changes_the_text() {
        assert_ne!(base64("teststring"), "teststring");
    }

    #[test]
    fn test_invalid_base64_decodes_to_none() {
        assert_eq!(unbase64("not-valid-base64!!!"), None);
    }

    #[test]
    fn test_non_utf8_payload_decodes_to_none() {
        // 0xFF 0xFE n'est pas de l'UTF-8 valide
        let token = STANDARD.encode([0xFF, 0xFE]);
        assert_eq!(unbase64(&token), None);
    }
}
