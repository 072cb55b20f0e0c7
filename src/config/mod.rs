use std::env;

use crate::error::{Result, SweeperError};
use crate::types::*;

pub const DEFAULT_REGION: &str = "europe-west6";
pub const DEFAULT_CREDENTIALS_PATH: &str = "./var/gcp_access_key.json";
pub const DEFAULT_VAR_DIR: &str = "./var";

/// Process-wide configuration, built once at startup from the environment and
/// passed by reference into each component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project the secrets live under (`GCP_PROJECT_ID`, required).
    pub project_id: String,
    /// Region label (`GCP_REGION`). Informational only.
    pub region: String,
    /// Path to the service-account key file (`GCP_CREDENTIALS_PATH`).
    pub credentials_path: PathBuf,
    /// Directory holding the local snapshot blobs (`SWEEPER_VAR_DIR`).
    pub var_dir: PathBuf,
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// `project` overrides `GCP_PROJECT_ID` when given (the `--project` flag).
    /// A missing project id is a startup error.
    pub fn from_env(project: Option<&str>) -> Result<Self> {
        let project_id = match project {
            Some(p) => p.to_string(),
            None => env::var("GCP_PROJECT_ID").ok().unwrap_or_default(),
        };
        if project_id.is_empty() {
            return Err(SweeperError::Config(
                "No project configured. Set GCP_PROJECT_ID or pass --project.".into(),
            ));
        }

        Ok(Self {
            project_id,
            region: env::var("GCP_REGION").unwrap_or_else(|_| DEFAULT_REGION.into()),
            credentials_path: env::var("GCP_CREDENTIALS_PATH")
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.into())
                .into(),
            var_dir: env::var("SWEEPER_VAR_DIR")
                .unwrap_or_else(|_| DEFAULT_VAR_DIR.into())
                .into(),
        })
    }
}
