use sweeper::api::Sweeper;
use sweeper::config::Config;
use sweeper::error::{Result, SweeperError};
use sweeper::model::VersionState;

use crate::cli::json_output::{ListResponse, SecretListItem};

pub fn run(project: Option<&str>, snapshot: bool, json: bool) -> Result<()> {
    let config = Config::from_env(project)?;

    let mut sweeper = if snapshot {
        Sweeper::snapshot(&config)?
    } else {
        // Listing never mutates the snapshot.
        Sweeper::remote(&config, false)?
    };

    let inventory = sweeper.inventory()?;

    let items: Vec<SecretListItem> = inventory
        .secrets
        .iter()
        .map(|secret| {
            let group = inventory
                .versions
                .get(&secret.name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            SecretListItem {
                name: secret.short_name().to_string(),
                versions: group.len(),
                enabled: group
                    .iter()
                    .filter(|v| v.state == VersionState::Enabled)
                    .count(),
            }
        })
        .collect();

    if json {
        let response = ListResponse {
            total_secrets: inventory.secrets.len(),
            total_versions: inventory.total_versions(),
            secrets: items,
        };
        println!(
            "{}",
            serde_json::to_string(&response)
                .map_err(|e| SweeperError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    for item in &items {
        println!("{}: {} version(s), {} enabled", item.name, item.versions, item.enabled);
    }
    println!("Retrieved secrets: {}", inventory.secrets.len());
    println!("Retrieved secret versions: {}", inventory.total_versions());

    Ok(())
}
