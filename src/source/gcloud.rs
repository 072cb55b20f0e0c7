use std::process::Command;

use crate::error::{Result, SweeperError};
use crate::model::{Secret, SecretVersion};
use crate::types::*;

use super::SecretSource;

/// Live source backed by the official `gcloud` CLI.
///
/// Every call shells out with `--format=json` and parses stdout. gcloud
/// exhausts list pagination internally, so each listing returns the complete
/// result set. Credentials are injected per invocation via the SDK's
/// credential-file override variable; nothing is written to gcloud's own
/// configuration.
pub struct GcloudSource {
    project_id: String,
    credentials_path: PathBuf,
}

impl GcloudSource {
    pub fn new(project_id: impl Into<String>, credentials_path: impl Into<PathBuf>) -> Result<Self> {
        check_gcloud_installed()?;
        Ok(Self {
            project_id: project_id.into(),
            credentials_path: credentials_path.into(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("gcloud")
            .args(args)
            .args(["--project", &self.project_id, "--format=json", "--quiet"])
            .env(
                "CLOUDSDK_AUTH_CREDENTIAL_FILE_OVERRIDE",
                &self.credentials_path,
            )
            .output()
            .map_err(|e| SweeperError::RemoteCall(format!("failed to run gcloud: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(args, &stderr));
        }

        Ok(output.stdout)
    }
}

impl SecretSource for GcloudSource {
    fn list_secrets(&mut self) -> Result<Vec<Secret>> {
        let stdout = self.run(&["secrets", "list"])?;
        parse_json(&stdout, "secrets list")
    }

    fn list_versions(&mut self, secret: &Secret) -> Result<Vec<SecretVersion>> {
        let stdout = self.run(&["secrets", "versions", "list", &secret.name])?;
        parse_json(&stdout, "secrets versions list")
    }

    fn disable_version(&mut self, version_name: &str) -> Result<()> {
        // Resource name is projects/P/secrets/S/versions/N; the CLI wants the
        // bare id plus --secret.
        let (secret, id) = split_version_name(version_name)?;
        self.run(&["secrets", "versions", "disable", &id, "--secret", &secret])
            .map_err(|e| SweeperError::DisableFailed {
                version: version_name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("remote project '{}'", self.project_id)
    }
}

fn check_gcloud_installed() -> Result<()> {
    match Command::new("gcloud").arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        _ => Err(SweeperError::RemoteCall(
            "gcloud CLI not found. Install the Google Cloud SDK from https://cloud.google.com/sdk"
                .into(),
        )),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(stdout: &[u8], op: &str) -> Result<T> {
    serde_json::from_slice(stdout)
        .map_err(|e| SweeperError::RemoteCall(format!("unexpected {op} output: {e}")))
}

fn classify_failure(args: &[&str], stderr: &str) -> SweeperError {
    if stderr.contains("PERMISSION_DENIED") || stderr.contains("does not have permission") {
        return SweeperError::RemoteCall(
            "permission denied. Check the service account's Secret Manager roles.".into(),
        );
    }
    if stderr.contains("could not be found") || stderr.contains("NOT_FOUND") {
        return SweeperError::RemoteCall(format!("resource not found: {}", stderr.trim()));
    }
    if stderr.contains("UNAUTHENTICATED") || stderr.contains("invalid_grant") {
        return SweeperError::RemoteCall(
            "authentication failed. The service-account key was rejected.".into(),
        );
    }
    SweeperError::RemoteCall(format!(
        "gcloud {} failed: {}",
        args.join(" "),
        stderr.trim()
    ))
}

fn split_version_name(version_name: &str) -> Result<(String, String)> {
    let mut parts = version_name.rsplit('/');
    let id = parts.next().unwrap_or_default().to_string();
    let keyword = parts.next();
    let secret = parts.next().unwrap_or_default().to_string();
    if id.is_empty() || secret.is_empty() || keyword != Some("versions") {
        return Err(SweeperError::Other(format!(
            "malformed version resource name: {version_name}"
        )));
    }
    Ok((secret, id))
}
