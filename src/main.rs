mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use sweeper::error::JsonError;

fn main() {
    let cli = Cli::parse();
    let project = cli.project.as_deref();

    let result = match &cli.command {
        Commands::Run {
            dry_run,
            snapshot,
            no_persist,
        } => cli::run::run(project, *dry_run, *snapshot, *no_persist, cli.json),

        Commands::Fetch => cli::fetch::run(project, cli.json),

        Commands::List { snapshot } => cli::list::run(project, *snapshot, cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            if let Ok(body) = serde_json::to_string(&JsonError::from_error(&e)) {
                println!("{body}");
            }
        }
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
