use sweeper::api::Sweeper;
use sweeper::config::Config;
use sweeper::error::{Result, SweeperError};
use sweeper::snapshot::SnapshotStore;

use crate::cli::json_output::FetchResponse;

pub fn run(project: Option<&str>, json: bool) -> Result<()> {
    let config = Config::from_env(project)?;

    let mut sweeper = Sweeper::remote(&config, true)?;
    let inventory = sweeper.inventory()?;

    let store = SnapshotStore::new(&config.var_dir);

    if json {
        let response = FetchResponse {
            secrets: inventory.secrets.len(),
            versions: inventory.total_versions(),
            secrets_path: store.secrets_path().display().to_string(),
            versions_path: store.versions_path().display().to_string(),
        };
        println!(
            "{}",
            serde_json::to_string(&response)
                .map_err(|e| SweeperError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    println!("Retrieved secrets: {}", inventory.secrets.len());
    println!("Retrieved secret versions: {}", inventory.total_versions());
    eprintln!("Snapshot written to {}", config.var_dir.display());

    Ok(())
}
