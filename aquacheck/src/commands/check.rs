// aquacheck/src/commands/check.rs
//
// USE CASE: completeness check of the project's data set.

use std::path::PathBuf;

use anyhow::Context;
use aquacheck_core::application::{RunOptions, run_project};
use aquacheck_core::domain::dataset::Component;
use comfy_table::Table;

/// Incomplete-record ids shown per component before eliding the rest.
const SHOWN_IDS: usize = 5;

pub fn execute(
    project_dir: PathBuf,
    components: Vec<Component>,
    context: Option<String>,
    strict: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    let run = run_project(&project_dir, RunOptions { components, context })
        .with_context(|| format!("Check run failed for project {:?}", project_dir))?;

    println!("Project: {} (context: {})", run.project_name, run.context);

    let mut table = Table::new();
    table.set_header(vec![
        "Component",
        "Records",
        "Incomplete",
        "Completeness",
        "Incomplete records",
    ]);
    for result in &run.summary.results {
        table.add_row(vec![
            result.component().to_string(),
            result.total_records().to_string(),
            result.incomplete_count().to_string(),
            format!("{:.1}%", result.completeness() * 100.0),
            preview_ids(result.incomplete_ids()),
        ]);
    }
    println!("{table}");

    for failure in &run.summary.failures {
        eprintln!("❌ {}: {}", failure.component, failure.error);
    }

    println!("📄 Report saved to {}", run.report_path.display());

    if !run.summary.failures.is_empty() {
        eprintln!(
            "\n💥 {} component check(s) failed.",
            run.summary.failures.len()
        );
        std::process::exit(1);
    }

    let incomplete = run.summary.incomplete_records();
    if incomplete > 0 {
        eprintln!("\n⚠️  {} incomplete record(s) found.", incomplete);
        if strict {
            eprintln!("💥 --strict mode: failing due to incomplete records.");
            std::process::exit(1);
        }
    } else {
        println!("\n✨ All records complete ({:.2?})", start.elapsed());
    }

    Ok(())
}

fn preview_ids(ids: &[String]) -> String {
    if ids.len() <= SHOWN_IDS {
        return ids.join(", ");
    }
    format!(
        "{}, … (+{})",
        ids[..SHOWN_IDS].join(", "),
        ids.len() - SHOWN_IDS
    )
}
