// aquacheck/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=info aquacheck check ... to see the details
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            project_dir,
            components,
            context,
            strict,
        } => commands::check::execute(project_dir, components, context, strict),
        Commands::Components { project_dir } => commands::components::execute(project_dir),
    }
}
