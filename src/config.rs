use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::builtin;
use crate::models::{Profile, Project, SocialLink};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub relay: RelayConfig,
    pub output: OutputConfig,
    pub showcase: ShowcaseConfig,
    /// Full catalog override; replaces the builtin project list wholesale.
    pub projects: Option<Vec<Project>>,
    /// Contact card override; replaces the builtin links wholesale.
    pub social: Option<Vec<SocialLink>>,
}

/// Partial override of the builtin hero block.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProfileConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub intro: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RelayConfig {
    /// Mail-relay endpoint receiving contact messages. `contact send`
    /// refuses to run until this is set.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Default directory for saved templates and documents.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Base URL that site-relative project references are resolved against.
    pub base_url: Option<String>,
}

impl Config {
    /// Builtin configuration used when no config file exists.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// The project catalog: the configured override when present, otherwise
    /// the builtin list. Always a freshly constructed value.
    pub fn catalog(&self) -> Vec<Project> {
        match &self.projects {
            Some(list) => list.clone(),
            None => builtin::projects(),
        }
    }

    /// Hero block with any configured fields layered over the builtin one.
    pub fn effective_profile(&self) -> Profile {
        let base = builtin::profile();
        Profile {
            title: self.profile.title.clone().unwrap_or(base.title),
            tagline: self.profile.tagline.clone().unwrap_or(base.tagline),
            intro: self.profile.intro.clone().unwrap_or(base.intro),
            tags: self.profile.tags.clone().unwrap_or(base.tags),
        }
    }

    /// Contact card links, configured or builtin.
    pub fn contact_links(&self) -> Vec<SocialLink> {
        match &self.social {
            Some(list) => list.clone(),
            None => builtin::social_links(),
        }
    }
}

/// Parse and validate a configuration document.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if let Some(ref endpoint) = config.relay.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("relay.endpoint must be an http(s) URL, got '{}'", endpoint);
        }
    }

    if config.relay.timeout_secs == 0 {
        anyhow::bail!("relay.timeout_secs must be > 0");
    }

    if let Some(ref base) = config.showcase.base_url {
        let parsed = url::Url::parse(base)
            .with_context(|| format!("showcase.base_url is not a valid URL: '{}'", base))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("showcase.base_url must be http(s), got '{}'", other),
        }
    }

    if let Some(ref projects) = config.projects {
        if projects.is_empty() {
            anyhow::bail!("[[projects]] override must contain at least one entry");
        }
        for (i, p) in projects.iter().enumerate() {
            if p.title.is_empty() {
                anyhow::bail!("projects[{}].title must not be empty", i);
            }
            if p.reference.is_empty() {
                anyhow::bail!("projects[{}].reference must not be empty", i);
            }
        }
    }

    if let Some(ref social) = config.social {
        for (i, s) in social.iter().enumerate() {
            if s.label.is_empty() || s.href.is_empty() {
                anyhow::bail!("social[{}] must set both label and href", i);
            }
        }
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

/// Load the config file when it exists; a portfolio works out of the box, so
/// a missing file yields the builtin configuration. A present but invalid
/// file is still an error.
pub fn load_or_builtin(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_builtin_content() {
        let config = parse_config("").unwrap();
        assert_eq!(config.catalog().len(), 14);
        assert_eq!(config.effective_profile().title, "DevOps Portfolio");
        assert_eq!(config.contact_links().len(), 4);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.relay.timeout_secs, 10);
        assert!(config.relay.endpoint.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config = parse_config(
            r#"
[profile]
tagline = "Pipelines all the way down"

[relay]
endpoint = "https://relay.example.com/send-contact-email"
timeout_secs = 5

[output]
dir = "/tmp/folio-out"

[showcase]
base_url = "https://portfolio.example.com"

[[projects]]
title = "Alpha"
description = "First"
reference = "https://example.com/alpha"

[[social]]
label = "GitHub"
href = "https://github.com/example"
display = "@example"
"#,
        )
        .unwrap();

        assert_eq!(
            config.relay.endpoint.as_deref(),
            Some("https://relay.example.com/send-contact-email")
        );
        assert_eq!(config.relay.timeout_secs, 5);
        assert_eq!(config.catalog().len(), 1);
        assert_eq!(config.contact_links().len(), 1);
        // Profile merges over the builtin block instead of replacing it
        let profile = config.effective_profile();
        assert_eq!(profile.tagline, "Pipelines all the way down");
        assert_eq!(profile.title, "DevOps Portfolio");
    }

    #[test]
    fn test_catalog_override_replaces_builtin() {
        let config = parse_config(
            r#"
[[projects]]
title = "Only"
description = "One entry"
reference = "https://example.com/only"
"#,
        )
        .unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Only");
    }

    #[test]
    fn test_rejects_non_http_relay_endpoint() {
        let err = parse_config("[relay]\nendpoint = \"ftp://mail.example.com\"\n").unwrap_err();
        assert!(err.to_string().contains("relay.endpoint"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = parse_config("[relay]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_rejects_empty_projects_override() {
        let err = parse_config("projects = []\n").unwrap_err();
        assert!(err.to_string().contains("at least one entry"));
    }

    #[test]
    fn test_rejects_project_without_reference() {
        let err = parse_config(
            r#"
[[projects]]
title = "Broken"
description = "No reference"
reference = ""
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("reference"));
    }

    #[test]
    fn test_rejects_invalid_showcase_base() {
        let err = parse_config("[showcase]\nbase_url = \"not a url\"\n").unwrap_err();
        assert!(err.to_string().contains("showcase.base_url"));
    }
}
