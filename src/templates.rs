//! `folio templates` - browse, print, and save infrastructure templates.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use tracing::warn;

use crate::builtin;
use crate::catalog;
use crate::config::Config;
use crate::export;
use crate::models::{Template, TemplateKind};

pub fn run_list(query: Option<String>, kind: Option<String>, json: bool) -> Result<()> {
    let templates = builtin::templates();
    let query = query.unwrap_or_default();

    let mut results = catalog::filter(&templates, &query);
    if let Some(kind) = kind.as_deref() {
        let kind = parse_kind(kind)?;
        results.retain(|t| t.kind == kind);
    }

    if results.is_empty() {
        println!("No templates found matching your search.");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_kind(&results, TemplateKind::Dockerfile, "Dockerfiles:");
    print_kind(&results, TemplateKind::Pipeline, "Pipelines:");

    println!("Print one with `folio templates show <NAME>`, save it with `folio templates save <NAME>`.");
    Ok(())
}

fn parse_kind(kind: &str) -> Result<TemplateKind> {
    match kind.to_lowercase().as_str() {
        "dockerfile" | "dockerfiles" => Ok(TemplateKind::Dockerfile),
        "pipeline" | "pipelines" => Ok(TemplateKind::Pipeline),
        other => bail!("Unknown template kind '{}'. Use dockerfile or pipeline.", other),
    }
}

fn print_kind(results: &[&Template], kind: TemplateKind, heading: &str) {
    let of_kind: Vec<&&Template> = results.iter().filter(|t| t.kind == kind).collect();
    if of_kind.is_empty() {
        return;
    }

    println!("{}", heading);
    for template in of_kind {
        println!("  {:<20} {}", template.name, template.title);
        println!("  {:<20} {}", "", template.technologies.join(", "));
    }
    println!();
}

/// Print a template's content to stdout, byte for byte, so it can be piped
/// straight into a file.
pub fn run_show(name: &str) -> Result<()> {
    let templates = builtin::templates();
    let template = find_template(&templates, name)?;
    print!("{}", template.content);
    Ok(())
}

/// Save one or more templates under their download file names. An unknown
/// name fails before anything is written; a write failure degrades to
/// printing that template and the batch continues.
pub fn run_template_save(
    config: &Config,
    names: &[String],
    all: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let templates = builtin::templates();
    let selected: Vec<&Template> = if all {
        templates.iter().collect()
    } else {
        names
            .iter()
            .map(|name| find_template(&templates, name))
            .collect::<Result<_>>()?
    };

    let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
    for template in selected {
        let file_name = template.download_name();
        match export::export_text(&out_dir, &file_name, &template.content) {
            Ok(path) => println!("Saved {}.", path.display()),
            Err(err) => {
                warn!(file = %file_name, error = %err, "write failed, printing instead");
                println!("Could not write {} ({}); printing it instead:", file_name, err);
                println!();
                print!("{}", template.content);
                if !template.content.ends_with('\n') {
                    println!();
                }
            }
        }
    }
    Ok(())
}

pub fn find_template<'a>(templates: &'a [Template], name: &str) -> Result<&'a Template> {
    let needle = name.to_lowercase();
    templates.iter().find(|t| t.name == needle).ok_or_else(|| {
        let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        anyhow!("Unknown template '{}'. Available: {}", name, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_kind_accepts_both_collections() {
        assert_eq!(parse_kind("dockerfile").unwrap(), TemplateKind::Dockerfile);
        assert_eq!(parse_kind("Pipelines").unwrap(), TemplateKind::Pipeline);
        assert!(parse_kind("helm").is_err());
    }

    #[test]
    fn save_resolves_every_name_before_writing() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();
        let names = vec!["node".to_string(), "ruby".to_string()];

        let err = run_template_save(&config, &names, false, Some(tmp.path().to_path_buf()))
            .unwrap_err();
        assert!(err.to_string().contains("Unknown template 'ruby'"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_all_writes_every_template() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();

        run_template_save(&config, &[], true, Some(tmp.path().to_path_buf())).unwrap();
        let count = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(count, builtin::templates().len());
    }

    #[test]
    fn find_template_by_name() {
        let templates = builtin::templates();
        assert_eq!(find_template(&templates, "node").unwrap().title, "Node.js Application");
        assert_eq!(
            find_template(&templates, "azure-pipelines").unwrap().kind,
            TemplateKind::Pipeline
        );
    }

    #[test]
    fn find_template_is_case_insensitive() {
        let templates = builtin::templates();
        assert_eq!(find_template(&templates, "Node").unwrap().name, "node");
    }

    #[test]
    fn find_template_unknown_lists_names() {
        let templates = builtin::templates();
        let err = find_template(&templates, "ruby").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown template 'ruby'"));
        assert!(message.contains("laravel"));
        assert!(message.contains("github-actions-ssh"));
    }

    #[test]
    fn filter_narrows_templates() {
        let templates = builtin::templates();
        let results = catalog::filter(&templates, "flask");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "flask");
    }

    #[test]
    fn save_names_follow_the_download_rule() {
        let templates = builtin::templates();
        assert_eq!(
            find_template(&templates, "node").unwrap().download_name(),
            "node.js-application-Dockerfile"
        );
        assert_eq!(
            find_template(&templates, "github-actions-ssh").unwrap().download_name(),
            "github-actions-ssh.yml"
        );
    }
}
