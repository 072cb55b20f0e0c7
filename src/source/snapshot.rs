use crate::error::{Result, SweeperError};
use crate::model::{Secret, SecretVersion, VersionState};
use crate::snapshot::{SnapshotStore, VersionMap};

use super::SecretSource;

/// Offline source serving reads from a previously persisted snapshot.
///
/// A missing snapshot file is an empty inventory, not an error — this mirrors
/// the tool's behavior when pointed at a freshly created var directory.
/// Disables are applied to the cached blob and persisted, so a sweep run
/// against a snapshot behaves like the live pass, just locally.
pub struct SnapshotSource {
    store: SnapshotStore,
    versions: Option<VersionMap>,
}

impl SnapshotSource {
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            versions: None,
        }
    }

    fn versions_mut(&mut self) -> Result<&mut VersionMap> {
        if self.versions.is_none() {
            self.versions = Some(self.store.load_versions()?.unwrap_or_default());
        }
        Ok(self.versions.as_mut().unwrap())
    }
}

impl SecretSource for SnapshotSource {
    fn list_secrets(&mut self) -> Result<Vec<Secret>> {
        Ok(self.store.load_secrets()?.unwrap_or_default())
    }

    fn list_versions(&mut self, secret: &Secret) -> Result<Vec<SecretVersion>> {
        let name = secret.name.clone();
        Ok(self.versions_mut()?.get(&name).cloned().unwrap_or_default())
    }

    fn disable_version(&mut self, version_name: &str) -> Result<()> {
        let store = self.store.clone();
        let versions = self.versions_mut()?;

        let entry = versions
            .values_mut()
            .flat_map(|vs| vs.iter_mut())
            .find(|v| v.name == version_name)
            .ok_or_else(|| SweeperError::DisableFailed {
                version: version_name.to_string(),
                reason: "version not present in snapshot".into(),
            })?;
        entry.state = VersionState::Disabled;

        store.save_versions(versions)
    }

    fn describe(&self) -> String {
        format!("snapshot under '{}'", self.store.dir().display())
    }
}
