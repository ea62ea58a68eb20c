//! Marker-guarded literal replacements
//!
//! Each edit replaces the first occurrence of a literal needle, guarded by a
//! distinct "already applied" marker so re-running is a no-op. Required edits
//! fail when their needle is gone (the upstream text the edit depends on
//! changed); deletions are optional edits whose absence means already done.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{label}: anchor {needle:?} not found; manual merge needed")]
    MissingAnchor {
        label: &'static str,
        needle: &'static str,
    },

    #[error("{label}: replacement left the document unchanged")]
    InertReplacement { label: &'static str },
}

/// One idempotent needle -> replacement edit
#[derive(Debug, Clone, Copy)]
pub struct Edit {
    /// Short name used in error messages
    pub label: &'static str,

    /// Substring whose presence means the edit was already applied.
    /// `None` for deletions, where absence of the needle is the applied state.
    pub applied_marker: Option<&'static str>,

    /// Literal text to replace, first occurrence only
    pub needle: &'static str,

    /// Replacement text; empty for deletions
    pub replacement: &'static str,

    /// Whether a missing needle is fatal (true) or already-done (false)
    pub required: bool,
}

impl Edit {
    /// Applies the edit, returning the rewritten document or `None` when the
    /// document is already in the desired state.
    pub fn apply(&self, doc: &str) -> Result<Option<String>, EditError> {
        if let Some(marker) = self.applied_marker {
            if doc.contains(marker) {
                return Ok(None);
            }
        }

        if !doc.contains(self.needle) {
            if self.required {
                return Err(EditError::MissingAnchor {
                    label: self.label,
                    needle: self.needle,
                });
            }
            return Ok(None);
        }

        let rewritten = doc.replacen(self.needle, self.replacement, 1);
        if rewritten == doc {
            // The needle was present but replacing it changed nothing, so the
            // edit itself is inert. Halt rather than report a phantom change.
            return Err(EditError::InertReplacement { label: self.label });
        }

        Ok(Some(rewritten))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOOK: Edit = Edit {
        label: "hook",
        applied_marker: Some("custom()"),
        needle: "base()",
        replacement: "base()\ncustom()",
        required: true,
    };

    const PRUNE: Edit = Edit {
        label: "prune",
        applied_marker: None,
        needle: "obsolete()\n",
        replacement: "",
        required: false,
    };

    #[test]
    fn marker_present_skips_edit() {
        assert_eq!(HOOK.apply("base()\ncustom()\n").unwrap(), None);
    }

    #[test]
    fn inserts_after_needle() {
        let out = HOOK.apply("before\nbase()\nafter\n").unwrap().unwrap();
        assert_eq!(out, "before\nbase()\ncustom()\nafter\n");
    }

    #[test]
    fn replaces_first_occurrence_only() {
        let out = HOOK.apply("base()\nbase()\n").unwrap().unwrap();
        assert_eq!(out, "base()\ncustom()\nbase()\n");
    }

    #[test]
    fn required_needle_missing_is_fatal() {
        let err = HOOK.apply("nothing here\n").unwrap_err();
        assert_eq!(
            err,
            EditError::MissingAnchor {
                label: "hook",
                needle: "base()",
            }
        );
    }

    #[test]
    fn deletion_removes_block() {
        let out = PRUNE.apply("keep\nobsolete()\nkeep\n").unwrap().unwrap();
        assert_eq!(out, "keep\nkeep\n");
    }

    #[test]
    fn deletion_absent_is_noop() {
        assert_eq!(PRUNE.apply("keep\nkeep\n").unwrap(), None);
    }

    #[test]
    fn inert_replacement_is_fatal() {
        let inert = Edit {
            label: "inert",
            applied_marker: None,
            needle: "same",
            replacement: "same",
            required: true,
        };
        let err = inert.apply("same\n").unwrap_err();
        assert_eq!(err, EditError::InertReplacement { label: "inert" });
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let once = HOOK.apply("base()\n").unwrap().unwrap();
        assert_eq!(HOOK.apply(&once).unwrap(), None);
    }
}
