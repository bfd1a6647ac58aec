//! `folio save` - download a project's showcase document to disk.
//!
//! Showcase references are site-relative paths like
//! `/project-showcase-github/Grafana_Monitoring.pdf`; they resolve against
//! `[showcase] base_url` from the config. A failed download or write is not
//! fatal: the command falls back to presenting the published reference.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use reqwest::Client;
use tracing::warn;

use crate::catalog;
use crate::config::Config;
use crate::export;
use crate::fetch;
use crate::models::Project;

/// What `save` ended up doing for a document reference.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The document was downloaded and written to disk.
    Saved { path: PathBuf, bytes: usize },
    /// The document could not be saved; present the reference instead.
    Fallback { reference: String, reason: String },
}

pub async fn run_save(
    config: &Config,
    client: &Client,
    selector: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let entries = config.catalog();
    let project = find_project(&entries, selector)?;

    if !project.is_document() {
        println!("{} has no showcase document.", project.title);
        println!("Visit the project directly: {}", project.reference);
        return Ok(());
    }

    let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
    let base_url = config.showcase.base_url.as_deref();

    match save_document(client, project, base_url, &out_dir).await {
        SaveOutcome::Saved { path, bytes } => {
            println!("Saved showcase document to {} ({} bytes).", path.display(), bytes);
        }
        SaveOutcome::Fallback { reference, reason } => {
            println!("Download unavailable: {}.", reason);
            println!("The document is published at: {}", reference);
        }
    }

    Ok(())
}

/// Fetch a document project's showcase and write it out. Download and write
/// trouble both degrade to [`SaveOutcome::Fallback`]; the caller decides how
/// to present the failure branch.
pub async fn save_document(
    client: &Client,
    project: &Project,
    base_url: Option<&str>,
    out_dir: &Path,
) -> SaveOutcome {
    let Some(url) = resolve_reference(&project.reference, base_url) else {
        return SaveOutcome::Fallback {
            reference: project.reference.clone(),
            reason: "no [showcase] base_url configured in folio.toml".to_string(),
        };
    };

    let doc = match fetch::fetch_document(client, &url).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(url = %url, error = %err, "download failed, presenting the link instead");
            return SaveOutcome::Fallback {
                reference: url,
                reason: err.to_string(),
            };
        }
    };

    let file_name = fetch::file_name_for(&doc.final_url);
    match export::export_bytes(out_dir, &file_name, &doc.bytes) {
        Ok(path) => SaveOutcome::Saved {
            path,
            bytes: doc.bytes.len(),
        },
        Err(err) => {
            warn!(file = %file_name, error = %err, "write failed, presenting the link instead");
            SaveOutcome::Fallback {
                reference: url,
                reason: err.to_string(),
            }
        }
    }
}

/// Select a project by 1-based catalog position, exact title, or a unique
/// catalog filter match over titles and descriptions.
pub fn find_project<'a>(entries: &'a [Project], selector: &str) -> Result<&'a Project> {
    if let Ok(position) = selector.parse::<usize>() {
        if position == 0 || position > entries.len() {
            bail!(
                "No project at position {}. The catalog has {} entries.",
                position,
                entries.len()
            );
        }
        return Ok(&entries[position - 1]);
    }

    let needle = selector.to_lowercase();
    if let Some(exact) = entries.iter().find(|p| p.title.to_lowercase() == needle) {
        return Ok(exact);
    }

    let matches = catalog::filter(entries, selector);
    match matches.len() {
        0 => bail!(
            "No project matching '{}'. Run `folio projects` to list them.",
            selector
        ),
        1 => Ok(matches[0]),
        _ => {
            let titles: Vec<&str> = matches.iter().map(|p| p.title.as_str()).collect();
            bail!(
                "'{}' matches more than one project: {}",
                selector,
                titles.join(", ")
            )
        }
    }
}

/// Absolute references pass through; site-relative ones need a base URL.
fn resolve_reference(reference: &str, base_url: Option<&str>) -> Option<String> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(reference.to_string());
    }
    let base = url::Url::parse(base_url?).ok()?;
    base.join(reference).ok().map(|u| u.to_string())
}
