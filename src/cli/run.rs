use sweeper::api::Sweeper;
use sweeper::config::Config;
use sweeper::error::{Result, SweeperError};

use crate::cli::json_output::RunResponse;

pub fn run(
    project: Option<&str>,
    dry_run: bool,
    snapshot: bool,
    no_persist: bool,
    json: bool,
) -> Result<()> {
    let config = Config::from_env(project)?;

    let mut sweeper = if snapshot {
        Sweeper::snapshot(&config)?
    } else {
        Sweeper::remote(&config, !no_persist)?
    };

    eprintln!(
        "Sweeping {}{}",
        sweeper.describe_source(),
        if dry_run { " (dry run)" } else { "" }
    );

    let report = sweeper.sweep(dry_run)?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&RunResponse::from_report(report))
                .map_err(|e| SweeperError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    for item in &report.reports {
        if item.candidates == 0 {
            continue;
        }
        let keep = item.keep.as_deref().unwrap_or("-");
        println!(
            "{}: keep {}, {} candidate(s), {} disabled, {} skipped, {} failed",
            item.secret, keep, item.candidates, item.disabled, item.skipped, item.failed
        );
    }

    println!("Retrieved secrets: {}", report.secrets);
    println!("Retrieved secret versions: {}", report.versions);
    println!(
        "{} version(s) disabled, {} skipped, {} failed.{}",
        report.disabled(),
        report.skipped(),
        report.failed(),
        if report.dry_run { " (dry run)" } else { "" }
    );

    Ok(())
}
