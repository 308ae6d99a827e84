// aquacheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use aquacheck_core::domain::dataset::Component;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquacheck")]
#[command(about = "Completeness checks for water-resources data sets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Checks components for missing or invalid field values and writes the check report
    Check {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Check only this component (repeatable, ex: "well_stations")
        #[arg(long = "component", short)]
        components: Vec<Component>,

        /// Context key the results are filed under (default: from aquacheck.yaml)
        #[arg(long)]
        context: Option<String>,

        /// Exit with an error when any record is incomplete
        #[arg(long)]
        strict: bool,
    },

    /// Lists the components registered in the project's data set
    Components {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check_defaults() -> Result<()> {
        let args = Cli::parse_from(["aquacheck", "check"]);
        match args.command {
            Commands::Check {
                project_dir,
                components,
                context,
                strict,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert!(components.is_empty());
                assert_eq!(context, None);
                assert!(!strict);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_components() -> Result<()> {
        let args = Cli::parse_from([
            "aquacheck",
            "check",
            "-c",
            "well_stations",
            "--component",
            "reservoirs",
            "--context",
            "nightly",
            "--strict",
        ]);
        match args.command {
            Commands::Check {
                components,
                context,
                strict,
                ..
            } => {
                assert_eq!(
                    components,
                    vec![Component::WellStations, Component::Reservoirs]
                );
                assert_eq!(context.as_deref(), Some("nightly"));
                assert!(strict);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_component() {
        let parsed = Cli::try_parse_from(["aquacheck", "check", "-c", "aquifers"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_parse_components() -> Result<()> {
        let args = Cli::parse_from(["aquacheck", "components", "--project-dir", "/tmp/basin"]);
        match args.command {
            Commands::Components { project_dir } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp/basin");
                Ok(())
            }
            _ => bail!("Expected Components command"),
        }
    }
}
