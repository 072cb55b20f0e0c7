use std::fs;

use crate::error::{Result, SweeperError};
use crate::model::{Secret, SecretVersion};
use crate::types::*;

pub const SECRETS_FILENAME: &str = "data_secrets.bin";
pub const VERSIONS_FILENAME: &str = "data_secret_versions.bin";

/// Versions keyed by the owning secret's full resource name.
pub type VersionMap = BTreeMap<String, Vec<SecretVersion>>;

/// Local snapshot of enumeration results, persisted as two MessagePack blobs
/// under the var directory. A performance and debugging aid only; the format
/// is internal and not shared across implementations.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn secrets_path(&self) -> PathBuf {
        self.dir.join(SECRETS_FILENAME)
    }

    pub fn versions_path(&self) -> PathBuf {
        self.dir.join(VERSIONS_FILENAME)
    }

    /// Load the cached secret list. `None` means no snapshot has been taken,
    /// which is distinct from a snapshot of zero secrets.
    pub fn load_secrets(&self) -> Result<Option<Vec<Secret>>> {
        read_blob(&self.secrets_path())
    }

    /// Load the cached version map, `None` when no snapshot exists.
    pub fn load_versions(&self) -> Result<Option<VersionMap>> {
        read_blob(&self.versions_path())
    }

    pub fn save_secrets(&self, secrets: &[Secret]) -> Result<()> {
        write_blob(&self.secrets_path(), &secrets)
    }

    pub fn save_versions(&self, versions: &VersionMap) -> Result<()> {
        write_blob(&self.versions_path(), versions)
    }
}

fn read_blob<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    let value = rmp_serde::from_slice(&bytes)
        .map_err(|e| SweeperError::Snapshot(format!("corrupt snapshot {}: {e}", path.display())))?;
    Ok(Some(value))
}

/// Atomic full-replace: write to a temp file, then rename over the target.
fn write_blob<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| SweeperError::Snapshot(format!("no parent dir for {}", path.display())))?;
    fs::create_dir_all(dir)?;

    let bytes =
        rmp_serde::to_vec(value).map_err(|e| SweeperError::Serialization(e.to_string()))?;

    let tmp_path = path.with_extension("bin.tmp");
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
