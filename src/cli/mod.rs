pub mod fetch;
pub mod json_output;
pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sweeper",
    version,
    about = "Maintenance CLI for Google Secret Manager: disable stale secret versions"
)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Project the secrets live under
    #[arg(long, global = true, env = "GCP_PROJECT_ID")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Disable stale enabled versions, keeping the newest per secret
    Run {
        /// Report intended changes without disabling anything
        #[arg(long, env = "SWEEPER_DRY_RUN")]
        dry_run: bool,
        /// Read from the local snapshot instead of the remote service
        #[arg(long, env = "SWEEPER_SNAPSHOT")]
        snapshot: bool,
        /// Do not persist fetched data to the local snapshot
        #[arg(long, env = "SWEEPER_NO_PERSIST")]
        no_persist: bool,
    },

    /// Fetch the full inventory and persist it as a local snapshot
    Fetch,

    /// List secrets and their version counts
    List {
        /// Read from the local snapshot instead of the remote service
        #[arg(long, env = "SWEEPER_SNAPSHOT")]
        snapshot: bool,
    },
}
