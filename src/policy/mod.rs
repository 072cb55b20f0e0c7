use std::cmp::Ordering;

use crate::model::{SecretVersion, VersionState};
use crate::source::SecretSource;
use crate::types::*;

/// Decision for one secret's version group: which version stays enabled and
/// which are stale.
#[derive(Debug, Clone)]
pub struct RetentionPlan {
    /// The version kept enabled — the most recently created. `None` when the
    /// group has fewer than two versions and nothing can be stale.
    pub keep: Option<SecretVersion>,
    /// Every version other than `keep`, newest first. Includes versions that
    /// are already disabled or destroyed; those are skipped, not re-disabled.
    pub candidates: Vec<SecretVersion>,
}

impl RetentionPlan {
    /// Stale versions that are currently enabled and therefore get a disable
    /// request.
    pub fn to_disable(&self) -> impl Iterator<Item = &SecretVersion> {
        self.candidates
            .iter()
            .filter(|v| v.state == VersionState::Enabled)
    }

    pub fn disable_count(&self) -> usize {
        self.to_disable().count()
    }

    /// Stale versions left untouched because they are not enabled.
    pub fn skipped_count(&self) -> usize {
        self.candidates.len() - self.disable_count()
    }
}

/// Decide which versions of one secret to disable.
///
/// Ordering is by creation timestamp descending; equal timestamps fall back
/// to the numeric version id descending, so the decision is deterministic.
/// Running the plan on the state a previous pass produced yields no further
/// disables.
pub fn plan(versions: &[SecretVersion]) -> RetentionPlan {
    if versions.len() < 2 {
        return RetentionPlan {
            keep: None,
            candidates: Vec::new(),
        };
    }

    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| {
        b.create_time
            .cmp(&a.create_time)
            .then_with(|| id_order(a, b))
    });

    let keep = sorted.remove(0);
    RetentionPlan {
        keep: Some(keep),
        candidates: sorted,
    }
}

// Higher version id first; non-numeric ids compare lexicographically.
fn id_order(a: &SecretVersion, b: &SecretVersion) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => y.cmp(&x),
        _ => b.version_id().cmp(a.version_id()),
    }
}

/// Outcome of a retention pass over one secret.
#[derive(Debug, Clone, Serialize)]
pub struct SecretReport {
    pub secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep: Option<String>,
    /// Total versions observed in the group.
    pub versions: usize,
    /// Stale versions, regardless of state.
    pub candidates: usize,
    /// Disable requests actually issued (or that would be issued in dry run).
    pub disabled: usize,
    /// Stale versions left alone because they were not enabled.
    pub skipped: usize,
    /// Disable requests that failed; the versions keep their current state.
    pub failed: usize,
}

/// Run the retention pass for one secret.
///
/// In dry-run mode the keep decision and counts are computed identically but
/// no disable request is issued. A failing disable is logged and counted;
/// sibling candidates are still processed.
pub fn apply(
    source: &mut dyn SecretSource,
    secret_name: &str,
    versions: &[SecretVersion],
    dry_run: bool,
) -> SecretReport {
    let decision = plan(versions);

    let mut report = SecretReport {
        secret: secret_name.to_string(),
        keep: decision.keep.as_ref().map(|v| v.name.clone()),
        versions: versions.len(),
        candidates: decision.candidates.len(),
        disabled: 0,
        skipped: decision.skipped_count(),
        failed: 0,
    };

    for version in decision.to_disable() {
        if dry_run {
            eprintln!("[dry-run] would disable {}", version.name);
            report.disabled += 1;
            continue;
        }
        match source.disable_version(&version.name) {
            Ok(()) => report.disabled += 1,
            Err(e) => {
                eprintln!("Warning: {e}");
                report.failed += 1;
            }
        }
    }

    report
}
