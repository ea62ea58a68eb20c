//! Banner presence reconciliation
//!
//! Ensures a fixed banner block is the prefix of a document. The document is
//! classified first (already overlaid, pristine upstream, or unknown) and the
//! transformation acts on the tag, keeping "what state is this" separate from
//! "what to do about it". An unknown header is fatal: prepending the banner
//! to an already-modified-but-different document would corrupt it.

use thiserror::Error;

/// How many characters of an unrecognized document to surface in errors
const DIAGNOSTIC_PREFIX_LEN: usize = 40;

#[derive(Debug, Error, PartialEq)]
pub enum HeaderError {
    #[error("header not recognized; manual merge needed (found: {0:?})")]
    Unrecognized(String),
}

/// Classification of a document's leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Document already starts with the banner
    Overlaid,
    /// Document starts with the pristine upstream marker
    Upstream,
    /// Neither form; unsafe to edit
    Unknown,
}

/// Classifies a document against the banner and the upstream marker
pub fn classify_header(doc: &str, banner: &str, upstream_marker: &str) -> HeaderState {
    if doc.starts_with(banner) {
        HeaderState::Overlaid
    } else if doc.starts_with(upstream_marker) {
        HeaderState::Upstream
    } else {
        HeaderState::Unknown
    }
}

/// Ensures `banner` is the prefix of `doc`.
///
/// Returns `Ok(None)` when the banner is already present, and `Ok(Some(_))`
/// with the banner prepended when the document is in the pristine upstream
/// form (identified by `upstream_marker`). Any other header is an error
/// carrying the first characters of the document for diagnosis.
pub fn ensure_banner(
    doc: &str,
    banner: &str,
    upstream_marker: &str,
) -> Result<Option<String>, HeaderError> {
    match classify_header(doc, banner, upstream_marker) {
        HeaderState::Overlaid => Ok(None),
        HeaderState::Upstream => Ok(Some(format!("{}{}", banner, doc))),
        HeaderState::Unknown => {
            let prefix: String = doc.chars().take(DIAGNOSTIC_PREFIX_LEN).collect();
            Err(HeaderError::Unrecognized(prefix))
        }
    }
}
