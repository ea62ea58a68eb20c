//! The embedded-llama overlay profile
//!
//! Concrete anchors, banner text, edits, and canonical sequences for the
//! three files the fork customizes, composed from the reconciliation
//! primitives in [`crate::domain`]. Each `reconcile_*` function takes one
//! target document and returns the rewritten text, or `None` when the
//! overlay is already present.

use anyhow::Result;

use crate::domain::{ensure_banner, reconcile_list, Edit};

/// Change label reported when the README banner was reapplied
pub const README_LABEL: &str = "README.md (banner)";

/// Change label reported when the build hook was reapplied
pub const CMAKE_LABEL: &str = "tools/CMakeLists.txt (embedded-cli hook)";

/// Change label reported when any release default was reapplied
pub const WORKFLOW_LABEL: &str = ".github/workflows/release.yml (release defaults)";

/// Banner kept ahead of the upstream README
const README_BANNER: &str = r#"# embedded-llama overlay

This fork keeps upstream `llama.cpp` intact and adds an embedded, no-HTTP CLI (`llama-embedded-cli`) so chat, completion, embeddings, rerank, tokenize, etc. can run in-process without starting `llama-server`. The original upstream README begins below for reference.

---

"#;

/// First line of the pristine upstream README
const UPSTREAM_README_MARKER: &str = "# llama.cpp";

/// Registers the embedded CLI with the upstream tools build
const CMAKE_HOOK: Edit = Edit {
    label: "embedded-cli hook",
    applied_marker: Some("add_subdirectory(embedded-cli)"),
    needle: "add_subdirectory(server)",
    replacement: "add_subdirectory(server)\n        add_subdirectory(embedded-cli)",
    required: true,
};

/// Turns the embedded CLI on for every release build
const RELEASE_ENV_KNOB: Edit = Edit {
    label: "release env knob",
    applied_marker: Some("LLAMA_EMBEDDED_CLI: ON"),
    needle: "\nenv:\n",
    replacement: "\nenv:\n  LLAMA_EMBEDDED_CLI: ON\n",
    required: true,
};

/// Upstream matrix entry the fork does not ship; gone in newer upstreams
const OPENBLAS_MATRIX_ENTRY: Edit = Edit {
    label: "openblas matrix entry",
    applied_marker: None,
    needle: "          - build: 'openblas-x64'\n            defines: '-DGGML_OPENBLAS=ON'\n",
    replacement: "",
    required: false,
};

/// The release job's `needs:` list inside the workflow
const RELEASE_NEEDS_MARKER: &str = "    needs:\n";

/// Item-line prefix of the `needs:` list
const NEEDS_ITEM_PREFIX: &str = "      - ";

/// Jobs the fork's release step waits on, in this exact order
const RELEASE_NEEDS: &[&str] = &[
    "determine-tag",
    "macOS-arm64",
    "macOS-x64",
    "ubuntu-22-cpu",
    "windows",
    "embedded-cli-smoke",
];

/// Ensures the fork banner heads the README
pub fn reconcile_readme(doc: &str) -> Result<Option<String>> {
    Ok(ensure_banner(doc, README_BANNER, UPSTREAM_README_MARKER)?)
}

/// Ensures the embedded CLI is hooked into the tools build
pub fn reconcile_build_config(doc: &str) -> Result<Option<String>> {
    Ok(CMAKE_HOOK.apply(doc)?)
}

/// Ensures the release workflow carries the fork defaults: the env knob,
/// no obsolete openblas matrix entry, and the canonical `needs:` order.
pub fn reconcile_release_workflow(doc: &str) -> Result<Option<String>> {
    let mut text = doc.to_string();
    let mut changed = false;

    if let Some(next) = RELEASE_ENV_KNOB.apply(&text)? {
        text = next;
        changed = true;
    }
    if let Some(next) = OPENBLAS_MATRIX_ENTRY.apply(&text)? {
        text = next;
        changed = true;
    }
    if let Some(next) =
        reconcile_list(&text, RELEASE_NEEDS_MARKER, NEEDS_ITEM_PREFIX, RELEASE_NEEDS)?
    {
        text = next;
        changed = true;
    }

    Ok(changed.then_some(text))
}
