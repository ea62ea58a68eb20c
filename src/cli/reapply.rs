//! Overlay reconciliation pass
//!
//! Runs each reconciler against its target file in a fixed order, rewrites
//! the files that drifted, and prints a one-line summary of what was
//! reapplied. Any fatal precondition (unrecognized document shape, missing
//! anchor, missing structural marker) aborts the whole run before anything
//! else is written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::overlay;
use crate::storage::Repo;

/// Result of a reapply pass
#[derive(Debug, Serialize)]
pub struct ReapplyResult {
    pub changed: Vec<String>,
    pub message: String,
}

/// Result of a check pass
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub missing: Vec<String>,
    pub message: String,
}

/// One target file's pending rewrite
struct PendingChange {
    path: PathBuf,
    content: String,
    label: &'static str,
}

/// Runs every reconciler in order, collecting rewrites without touching disk
fn reconcile_all(output: &Output, repo: &Repo) -> Result<Vec<PendingChange>> {
    let mut pending = Vec::new();

    let readme_path = repo.readme_path();
    let readme = repo.read(&readme_path)?;
    match overlay::reconcile_readme(&readme)
        .with_context(|| format!("while reconciling {}", readme_path.display()))?
    {
        Some(content) => pending.push(PendingChange {
            path: readme_path,
            content,
            label: overlay::README_LABEL,
        }),
        None => output.verbose_ctx("readme", "banner already present"),
    }

    let cmake_path = repo.cmake_path();
    let cmake = repo.read(&cmake_path)?;
    match overlay::reconcile_build_config(&cmake)
        .with_context(|| format!("while reconciling {}", cmake_path.display()))?
    {
        Some(content) => pending.push(PendingChange {
            path: cmake_path,
            content,
            label: overlay::CMAKE_LABEL,
        }),
        None => output.verbose_ctx("cmake", "embedded-cli hook already present"),
    }

    let workflow_path = repo.workflow_path();
    match repo.read_optional(&workflow_path)? {
        None => output.verbose_ctx("workflow", "release workflow absent; skipping"),
        Some(workflow) => {
            match overlay::reconcile_release_workflow(&workflow)
                .with_context(|| format!("while reconciling {}", workflow_path.display()))?
            {
                Some(content) => pending.push(PendingChange {
                    path: workflow_path,
                    content,
                    label: overlay::WORKFLOW_LABEL,
                }),
                None => output.verbose_ctx("workflow", "release defaults already present"),
            }
        }
    }

    Ok(pending)
}

fn summary(changed: &[String]) -> String {
    if changed.is_empty() {
        "Nothing to reapply; overlays already present.".to_string()
    } else {
        format!("Reapplied overlays: {}", changed.join(", "))
    }
}

/// Reapplies missing overlays and reports what changed
pub fn run(output: &Output, repo: &Repo) -> Result<()> {
    let pending = reconcile_all(output, repo)?;

    let mut changed = Vec::with_capacity(pending.len());
    for change in pending {
        repo.write(&change.path, &change.content)?;
        changed.push(change.label.to_string());
    }

    let message = summary(&changed);
    if output.is_json() {
        output.data(&ReapplyResult { changed, message });
    } else {
        output.success(&message);
    }

    Ok(())
}

/// Reports missing overlays without writing; returns a non-zero exit code
/// when the checkout has drifted from the desired state
pub fn check(output: &Output, repo: &Repo) -> Result<i32> {
    let pending = reconcile_all(output, repo)?;
    let missing: Vec<String> = pending.iter().map(|c| c.label.to_string()).collect();

    let message = if missing.is_empty() {
        "Overlays already present.".to_string()
    } else {
        format!("Missing overlays: {}", missing.join(", "))
    };

    let exit_code = i32::from(!missing.is_empty());

    if output.is_json() {
        output.data(&CheckResult { missing, message });
    } else {
        output.success(&message);
    }

    Ok(exit_code)
}
