//! `folio projects` - list and filter the project catalog.

use anyhow::Result;

use crate::catalog;
use crate::config::Config;
use crate::models::Project;

pub fn run_projects(
    config: &Config,
    query: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let entries = config.catalog();
    let query = query.unwrap_or_default();

    let mut results: Vec<&Project> = catalog::filter(&entries, &query);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if results.is_empty() {
        println!("No projects found matching your search.");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, project) in results.iter().enumerate() {
        println!("{}. {} {}", i + 1, project.badge(), project.title);
        println!("    {}", project.description);
        if project.is_document() {
            println!("    showcase: {}", project.reference);
        } else {
            println!("    link: {}", project.reference);
        }
        println!();
    }

    println!(
        "{} of {} projects shown.",
        results.len(),
        entries.len()
    );

    Ok(())
}
