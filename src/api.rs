//! High-level facade wiring credentials, source, snapshot store, and the
//! retention policy together.
//!
//! [`Sweeper`] is the single entry point used by the CLI handlers and by
//! programmatic callers: construct it for remote or snapshot mode, then run
//! [`Sweeper::inventory`] or [`Sweeper::sweep`].

use crate::config::Config;
use crate::credentials::ServiceAccountKey;
use crate::error::Result;
use crate::model::Secret;
use crate::policy::{self, SecretReport};
use crate::snapshot::{SnapshotStore, VersionMap};
use crate::source::gcloud::GcloudSource;
use crate::source::snapshot::SnapshotSource;
use crate::source::SecretSource;
use crate::types::*;

/// Fully enumerated secrets and their versions.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub secrets: Vec<Secret>,
    pub versions: VersionMap,
}

impl Inventory {
    pub fn total_versions(&self) -> usize {
        self.versions.values().map(Vec::len).sum()
    }
}

/// Aggregate outcome of a retention pass across the whole project.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub dry_run: bool,
    pub secrets: usize,
    pub versions: usize,
    pub reports: Vec<SecretReport>,
}

impl SweepReport {
    pub fn disabled(&self) -> usize {
        self.reports.iter().map(|r| r.disabled).sum()
    }

    pub fn skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().map(|r| r.failed).sum()
    }
}

/// Orchestrator: load credentials → construct source → enumerate → sweep.
pub struct Sweeper {
    source: Box<dyn SecretSource>,
    store: SnapshotStore,
    persist: bool,
}

impl Sweeper {
    /// Remote mode: validate the service-account key, then talk to the live
    /// service. When `persist` is set, every full enumeration is written to
    /// the local snapshot.
    pub fn remote(config: &Config, persist: bool) -> Result<Self> {
        ServiceAccountKey::load(&config.credentials_path)?;
        let source = GcloudSource::new(&config.project_id, &config.credentials_path)?;
        Ok(Self {
            source: Box::new(source),
            store: SnapshotStore::new(&config.var_dir),
            persist,
        })
    }

    /// Snapshot mode: serve reads from the local snapshot. The credential
    /// file is still validated first; the startup sequence does not depend
    /// on the data source.
    pub fn snapshot(config: &Config) -> Result<Self> {
        ServiceAccountKey::load(&config.credentials_path)?;
        let store = SnapshotStore::new(&config.var_dir);
        Ok(Self {
            source: Box::new(SnapshotSource::new(store.clone())),
            store,
            persist: false,
        })
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Enumerate all secrets, then all versions per secret. Pagination is
    /// exhausted by the source; the result is always complete.
    pub fn inventory(&mut self) -> Result<Inventory> {
        let secrets = self.source.list_secrets()?;

        let mut versions = VersionMap::new();
        for secret in &secrets {
            versions.insert(secret.name.clone(), self.source.list_versions(secret)?);
        }

        if self.persist {
            self.store.save_secrets(&secrets)?;
            self.store.save_versions(&versions)?;
        }

        Ok(Inventory { secrets, versions })
    }

    /// Run the retention pass: per secret, keep the newest version enabled
    /// and disable the stale enabled ones (or only report, in dry-run mode).
    pub fn sweep(&mut self, dry_run: bool) -> Result<SweepReport> {
        let inventory = self.inventory()?;

        let mut reports = Vec::with_capacity(inventory.secrets.len());
        for secret in &inventory.secrets {
            let group = inventory
                .versions
                .get(&secret.name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            reports.push(policy::apply(
                self.source.as_mut(),
                secret.short_name(),
                group,
                dry_run,
            ));
        }

        Ok(SweepReport {
            dry_run,
            secrets: inventory.secrets.len(),
            versions: inventory.total_versions(),
            reports,
        })
    }
}
