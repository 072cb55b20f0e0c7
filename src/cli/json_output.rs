use serde::Serialize;

use sweeper::api::SweepReport;
use sweeper::policy::SecretReport;

/// JSON response for `sweeper run --json`.
#[derive(Serialize)]
pub struct RunResponse {
    pub dry_run: bool,
    pub secrets: usize,
    pub versions: usize,
    pub disabled: usize,
    pub skipped: usize,
    pub failed: usize,
    pub reports: Vec<SecretReport>,
}

impl RunResponse {
    pub fn from_report(report: SweepReport) -> Self {
        Self {
            dry_run: report.dry_run,
            secrets: report.secrets,
            versions: report.versions,
            disabled: report.disabled(),
            skipped: report.skipped(),
            failed: report.failed(),
            reports: report.reports,
        }
    }
}

/// JSON response for `sweeper list --json`.
#[derive(Serialize)]
pub struct ListResponse {
    pub secrets: Vec<SecretListItem>,
    pub total_secrets: usize,
    pub total_versions: usize,
}

#[derive(Serialize)]
pub struct SecretListItem {
    pub name: String,
    pub versions: usize,
    pub enabled: usize,
}

/// JSON response for `sweeper fetch --json`.
#[derive(Serialize)]
pub struct FetchResponse {
    pub secrets: usize,
    pub versions: usize,
    pub secrets_path: String,
    pub versions_path: String,
}
