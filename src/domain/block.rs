//! Ordered-list block reconciliation
//!
//! Rewrites a contiguous block of list-item lines, introduced by a literal
//! marker and terminated by the first blank line, so that it matches a
//! canonical ordered sequence. Everything outside the block is preserved
//! byte-for-byte.
//!
//! The boundary scan stops at the first pair of consecutive newlines, so
//! list items must not themselves contain blank lines. That holds for the
//! single-token identifiers this tool reconciles.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BlockError {
    #[error("list marker {marker:?} not found; manual merge needed")]
    MissingMarker { marker: &'static str },

    #[error("no blank line terminates the list after {marker:?}; manual merge needed")]
    UnterminatedBlock { marker: &'static str },
}

/// Brings the item block after `marker` into `canonical` order.
///
/// The block runs from just past the first occurrence of `marker` to the
/// first blank line. Lines of the form `{item_prefix}{identifier}` form the
/// comparable sequence; other lines inside the block are ignored for
/// comparison but replaced by a rewrite. Comparison is by value and order,
/// so identical membership in a different order still triggers a rewrite.
///
/// Returns `None` when the block already matches, the rewritten document
/// when it does not, and an error when the marker or the terminating blank
/// line is missing (the document's shape changed upstream and blind edits
/// must not proceed).
pub fn reconcile_list(
    doc: &str,
    marker: &'static str,
    item_prefix: &str,
    canonical: &[&str],
) -> Result<Option<String>, BlockError> {
    let marker_pos = doc
        .find(marker)
        .ok_or(BlockError::MissingMarker { marker })?;
    let block_start = marker_pos + marker.len();

    let boundary = doc[block_start..]
        .find("\n\n")
        .ok_or(BlockError::UnterminatedBlock { marker })?;
    // Keep the newline ending the last block line inside the block; the
    // blank line itself stays outside and survives the rewrite.
    let block_end = block_start + boundary + 1;
    let block = &doc[block_start..block_end];

    let current: Vec<&str> = block
        .lines()
        .filter_map(|line| line.strip_prefix(item_prefix))
        .map(str::trim_end)
        .collect();

    if current == canonical {
        return Ok(None);
    }

    let mut rebuilt = String::with_capacity(doc.len());
    rebuilt.push_str(&doc[..block_start]);
    for item in canonical {
        rebuilt.push_str(item_prefix);
        rebuilt.push_str(item);
        rebuilt.push('\n');
    }
    rebuilt.push_str(&doc[block_end..]);

    Ok(Some(rebuilt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MARKER: &str = "    needs:\n";
    const PREFIX: &str = "      - ";
    const CANONICAL: &[&str] = &["alpha", "bravo", "charlie"];

    fn doc_with_items(items: &[&str]) -> String {
        let mut doc = String::from("jobs:\n  release:\n    needs:\n");
        for item in items {
            doc.push_str(PREFIX);
            doc.push_str(item);
            doc.push('\n');
        }
        doc.push_str("\n    steps:\n      - run: make\n\n");
        doc
    }

    #[test]
    fn matching_block_is_noop() {
        let doc = doc_with_items(CANONICAL);
        assert_eq!(reconcile_list(&doc, MARKER, PREFIX, CANONICAL).unwrap(), None);
    }

    #[test]
    fn reordered_membership_triggers_rewrite() {
        let doc = doc_with_items(&["alpha", "charlie", "bravo"]);
        let out = reconcile_list(&doc, MARKER, PREFIX, CANONICAL)
            .unwrap()
            .unwrap();
        assert_eq!(out, doc_with_items(CANONICAL));
    }

    #[test]
    fn extra_and_missing_items_trigger_rewrite() {
        let doc = doc_with_items(&["alpha", "stale"]);
        let out = reconcile_list(&doc, MARKER, PREFIX, CANONICAL)
            .unwrap()
            .unwrap();
        assert_eq!(out, doc_with_items(CANONICAL));
    }

    #[test]
    fn content_outside_the_block_is_preserved() {
        let doc = doc_with_items(&["charlie", "alpha", "bravo"]);
        let out = reconcile_list(&doc, MARKER, PREFIX, CANONICAL)
            .unwrap()
            .unwrap();

        let before = "jobs:\n  release:\n    needs:\n";
        let after = "\n    steps:\n      - run: make\n\n";
        assert!(out.starts_with(before));
        assert!(out.ends_with(after));
    }

    #[test]
    fn non_item_lines_are_not_compared() {
        // A stray indented comment inside the block does not force a rewrite
        // when the item sequence already matches.
        let doc = "jobs:\n  release:\n    needs:\n      - alpha\n      # reviewed\n      - bravo\n      - charlie\n\nrest\n";
        assert_eq!(reconcile_list(doc, MARKER, PREFIX, CANONICAL).unwrap(), None);
    }

    #[test]
    fn missing_marker_is_fatal() {
        let err = reconcile_list("jobs:\n", MARKER, PREFIX, CANONICAL).unwrap_err();
        assert_eq!(err, BlockError::MissingMarker { marker: MARKER });
    }

    #[test]
    fn unterminated_block_is_fatal() {
        let doc = "jobs:\n  release:\n    needs:\n      - alpha\n";
        let err = reconcile_list(doc, MARKER, PREFIX, CANONICAL).unwrap_err();
        assert_eq!(err, BlockError::UnterminatedBlock { marker: MARKER });
    }

    proptest! {
        #[test]
        fn rewrite_is_idempotent(
            items in Just(vec!["alpha", "bravo", "charlie", "stale"]).prop_shuffle()
        ) {
            let doc = doc_with_items(&items);
            let reconciled = reconcile_list(&doc, MARKER, PREFIX, CANONICAL)
                .unwrap()
                .unwrap_or(doc);

            prop_assert_eq!(
                reconcile_list(&reconciled, MARKER, PREFIX, CANONICAL).unwrap(),
                None
            );
            prop_assert_eq!(reconciled, doc_with_items(CANONICAL));
        }
    }
}
