// aquacheck/src/commands/components.rs
//
// USE CASE: list what the project's data set provides.

use std::path::PathBuf;

use aquacheck_core::infrastructure::config::load_project_config;
use aquacheck_core::infrastructure::loader::load_data_set;
use aquacheck_core::ports::dataset::DataSet;
use comfy_table::Table;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let data_set = load_data_set(&project_dir, &config.data_paths)?;

    println!("Project: {} (v{})", config.name, config.version);

    let mut table = Table::new();
    table.set_header(vec!["Component", "Fields", "Records"]);
    for component in data_set.components() {
        let Some(t) = data_set.table(component) else {
            continue;
        };
        table.add_row(vec![
            component.to_string(),
            t.schema().arity().to_string(),
            t.record_count()
                .map_or_else(|| "absent".to_string(), |n| n.to_string()),
        ]);
    }
    println!("{table}");

    Ok(())
}
