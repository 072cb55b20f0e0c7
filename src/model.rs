use crate::types::*;

/// A secret container as reported by the remote service.
///
/// Only the resource name is consumed by the retention logic; everything else
/// the service attaches to a secret is left with the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    /// Full resource name, e.g. `projects/my-proj/secrets/db-password`.
    pub name: String,
    #[serde(rename = "createTime", default)]
    pub create_time: Option<DateTime<Utc>>,
}

impl Secret {
    /// Trailing path segment of the resource name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Lifecycle state of a secret version.
///
/// `Unspecified` absorbs any transitional or future state the service may
/// report; such versions are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionState {
    Enabled,
    Disabled,
    Destroyed,
    #[serde(other)]
    Unspecified,
}

/// An immutable payload revision under a [`Secret`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretVersion {
    /// Full resource name, e.g. `projects/p/secrets/s/versions/3`.
    pub name: String,
    #[serde(rename = "createTime")]
    pub create_time: DateTime<Utc>,
    pub state: VersionState,
}

impl SecretVersion {
    /// Trailing path segment: the version identifier.
    pub fn version_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Numeric version identifier, if the id is an integer.
    ///
    /// The service assigns monotonically increasing integer ids, so this is
    /// the secondary sort key when creation timestamps collide.
    pub fn numeric_id(&self) -> Option<u64> {
        self.version_id().parse().ok()
    }
}
