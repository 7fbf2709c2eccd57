//! Numeric cursor strategy.
//!
//! Cursors are base64 over `number:<decimal>`, keys are `i64`. Suited
//! to collections ordered by a numeric field (sequence numbers, block
//! heights, timestamps in epoch form).

use segue_core::{ConnectionCursor, ConnectionDefinition};

use crate::encoding::{base64, unbase64};

const PREFIX: &str = "number:";

/// Encode a number as an opaque cursor token.
pub fn number_to_cursor(num: i64) -> ConnectionCursor {
    base64(&format!("{PREFIX}{num}"))
}

/// Decode a cursor token back to its number.
///
/// Returns `None` when the token is not base64, carries the wrong
/// namespace, or the payload is not a decimal integer.
pub fn cursor_to_number(cursor: &str) -> Option<i64> {
    let unbased = unbase64(cursor)?;
    let digits = unbased.strip_prefix(PREFIX)?;
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// A ready-made connection definition over numeric keys.
pub fn definition() -> ConnectionDefinition<i64> {
    ConnectionDefinition::builder()
        .comparator(|a: &i64, b: &i64| a.cmp(b))
        .comparable_to_cursor(|num| number_to_cursor(*num))
        .cursor_to_comparable(cursor_to_number)
        .build()
        .expect("numeric strategy is fully specified")
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::{ConnectionArguments, ConnectionOptions};

    #[test]
    fn test_round_trip() {
        for num in [0, 1, -1, 42, i64::MAX, i64::MIN] {
            assert_eq!(cursor_to_number(&number_to_cursor(num)), Some(num));
        }
    }

    #[test]
    fn test_rejects_foreign_tokens() {
        // pas du base64
        assert_eq!(cursor_to_number("!!!"), None);
        // mauvais espace de noms
        assert_eq!(cursor_to_number(&base64("doc:42")), None);
        // charge utile vide ou non numérique
        assert_eq!(cursor_to_number(&base64("number:")), None);
        assert_eq!(cursor_to_number(&base64("number:abc")), None);
    }

    #[test]
    fn test_definition_paginates_numbers() {
        let definition = definition();
        let args = ConnectionArguments {
            first: Some(2),
            after: Some(number_to_cursor(1)),
            ..Default::default()
        };
        let options = ConnectionOptions {
            sorted: true,
            ..Default::default()
        };

        let connection = definition
            .connection_from_array(&[1i64, 2, 3, 4, 5], &args, &options)
            .unwrap();

        let returned: Vec<i64> = connection.edges.iter().map(|e| e.node).collect();
        assert_eq!(returned, vec![2, 3]);
        assert!(connection.page_info.has_previous_page);
        assert!(connection.page_info.has_next_page);
    }
}
