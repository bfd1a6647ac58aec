//! Core data models used throughout devfolio.
//!
//! These types represent the projects, templates, and profile content that
//! flow through the catalog, rendering, and export paths.

use serde::{Deserialize, Serialize};

/// One entry in the project catalog.
///
/// `reference` is either an absolute URL (article, repository) or a
/// site-relative path to a hosted showcase document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub reference: String,
}

impl Project {
    pub fn new(title: &str, description: &str, reference: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            reference: reference.to_string(),
        }
    }

    /// Whether the reference points at a downloadable showcase document
    /// rather than a page to open.
    pub fn is_document(&self) -> bool {
        self.reference.to_lowercase().ends_with(".pdf")
    }

    /// Contextual badge chosen by the first keyword group that matches the
    /// combined title and description.
    pub fn badge(&self) -> &'static str {
        let text = format!("{} {}", self.title, self.description).to_lowercase();
        const GROUPS: [(&[&str], &str); 10] = [
            (&["windows", "rdp", "remote desktop"], "🪟"),
            (&["kubernetes", "k8s", "docker"], "🐳"),
            (&["security", "monitoring"], "🔒"),
            (&["aws", "cloud"], "☁️"),
            (&["gitops", "argo", "git"], "🔄"),
            (&["pokemon"], "⚡"),
            (&["monster"], "👾"),
            (&["meal", "food"], "🍽️"),
            (&["carpool", "ride"], "🚗"),
            (&["react", "frontend"], "⚛️"),
        ];
        for (keywords, badge) in GROUPS {
            if keywords.iter().any(|k| text.contains(k)) {
                return badge;
            }
        }
        "💼"
    }
}

/// The template collections mirrored from the showcase site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Dockerfile,
    Pipeline,
}

impl TemplateKind {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Dockerfile => "dockerfile",
            TemplateKind::Pipeline => "pipeline",
        }
    }
}

/// A reusable literal template (Dockerfile or CI/CD pipeline definition).
///
/// `content` is carried verbatim and is never transformed on display or save.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    /// Short selector used on the command line (`folio templates show node`).
    pub name: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub kind: TemplateKind,
    /// Explicit output file name; pipelines always carry one.
    pub file_name: Option<String>,
    pub content: String,
}

impl Template {
    /// File name used when saving: the explicit name when present, otherwise
    /// the title lowercased with whitespace runs collapsed to `-` and a
    /// `-Dockerfile` suffix.
    pub fn download_name(&self) -> String {
        match &self.file_name {
            Some(name) => name.clone(),
            None => format!("{}-Dockerfile", slugify(&self.title)),
        }
    }
}

/// Lowercase `s` and replace each whitespace run with a single `-`.
pub fn slugify(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// A named group of related skills.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// Kind of career timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Work,
    Education,
    Certification,
}

impl EventKind {
    pub fn badge(&self) -> &'static str {
        match self {
            EventKind::Work => "💼",
            EventKind::Education => "🎓",
            EventKind::Certification => "🏆",
        }
    }
}

/// One event on the career timeline.
#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub kind: EventKind,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// A link on the contact card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub display: String,
}

/// Identity block rendered by `folio about`.
#[derive(Debug, Clone)]
pub struct Profile {
    pub title: String,
    pub tagline: String,
    pub intro: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_priority_order() {
        // "kubernetes" wins over "monitoring" because its group comes first
        let p = Project::new(
            "PostgreSQL Monitoring Platform on Kubernetes",
            "Enterprise-grade PostgreSQL deployment on Kubernetes.",
            "https://example.com/a",
        );
        assert_eq!(p.badge(), "🐳");

        // "security" wins over "aws"
        let p = Project::new(
            "AWS Cloud Security Monitoring System",
            "Security monitoring platform on AWS.",
            "https://example.com/b",
        );
        assert_eq!(p.badge(), "🔒");
    }

    #[test]
    fn test_badge_matches_description_too() {
        let p = Project::new(
            "Meal Search",
            "An application to search for meals and recipes.",
            "https://example.com/c",
        );
        assert_eq!(p.badge(), "🍽️");
    }

    #[test]
    fn test_badge_default() {
        let p = Project::new("Ledger", "Double-entry bookkeeping.", "https://example.com/d");
        assert_eq!(p.badge(), "💼");
    }

    #[test]
    fn test_is_document_case_insensitive() {
        let p = Project::new("A", "B", "/showcase/Report.PDF");
        assert!(p.is_document());
        let p = Project::new("A", "B", "https://github.com/example/repo");
        assert!(!p.is_document());
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Node.js Application"), "node.js-application");
        assert_eq!(slugify("PHP-FPM with Nginx & Laravel"), "php-fpm-with-nginx-&-laravel");
        assert_eq!(slugify("A  B\tC"), "a-b-c");
    }

    #[test]
    fn test_download_name_derived_and_explicit() {
        let t = Template {
            name: "node".to_string(),
            title: "Node.js Application".to_string(),
            description: String::new(),
            technologies: vec![],
            kind: TemplateKind::Dockerfile,
            file_name: None,
            content: String::new(),
        };
        assert_eq!(t.download_name(), "node.js-application-Dockerfile");

        let t = Template {
            file_name: Some("azure-pipelines.yml".to_string()),
            kind: TemplateKind::Pipeline,
            ..t
        };
        assert_eq!(t.download_name(), "azure-pipelines.yml");
    }
}
