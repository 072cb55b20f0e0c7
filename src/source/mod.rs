pub mod gcloud;
pub mod snapshot;

use crate::error::Result;
use crate::model::{Secret, SecretVersion};

/// Where enumeration results come from and where disable requests go.
///
/// Exactly two implementations: the live service ([`gcloud::GcloudSource`])
/// and the local snapshot ([`snapshot::SnapshotSource`]). Both return fully
/// exhausted result sets; callers never see a partial page.
pub trait SecretSource {
    /// All secrets in the configured project.
    fn list_secrets(&mut self) -> Result<Vec<Secret>>;

    /// All versions of one secret, in service order.
    fn list_versions(&mut self, secret: &Secret) -> Result<Vec<SecretVersion>>;

    /// Request the ENABLED → DISABLED transition for one version, by full
    /// resource name.
    fn disable_version(&mut self, version_name: &str) -> Result<()>;

    /// Human-readable label for status output.
    fn describe(&self) -> String;
}
