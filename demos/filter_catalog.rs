//! Example: reuse the devfolio catalog machinery for a custom collection.
//!
//! Demonstrates:
//! - Implementing [`CatalogItem`] for your own type (a bookmark list)
//! - Filtering with the same case-insensitive, order-preserving substring
//!   search that backs `folio projects`
//! - Writing results with the same atomic export discipline that backs
//!   `folio templates save`
//!
//! # Running
//!
//! ```bash
//! # All bookmarks
//! cargo run --example filter_catalog
//!
//! # Case-insensitive filter
//! cargo run --example filter_catalog -- gitops
//! ```

use std::path::Path;

use anyhow::Result;

use devfolio::catalog::{self, CatalogItem};
use devfolio::export;

/// A minimal custom catalog entry.
struct Bookmark {
    title: &'static str,
    note: &'static str,
    url: &'static str,
}

impl CatalogItem for Bookmark {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.note
    }
}

fn bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark {
            title: "The Twelve-Factor App",
            note: "Methodology for building software-as-a-service apps.",
            url: "https://12factor.net",
        },
        Bookmark {
            title: "Argo CD Docs",
            note: "Declarative GitOps continuous delivery for Kubernetes.",
            url: "https://argo-cd.readthedocs.io",
        },
        Bookmark {
            title: "Dockerfile Best Practices",
            note: "Official guidance on writing efficient Dockerfiles.",
            url: "https://docs.docker.com/develop/develop-images/dockerfile_best-practices/",
        },
        Bookmark {
            title: "Prometheus Querying Basics",
            note: "PromQL fundamentals for monitoring dashboards.",
            url: "https://prometheus.io/docs/prometheus/latest/querying/basics/",
        },
    ]
}

fn main() -> Result<()> {
    let query = std::env::args().nth(1).unwrap_or_default();

    let all = bookmarks();
    let hits = catalog::filter(&all, &query);

    if hits.is_empty() {
        println!("No bookmarks found matching your search.");
        return Ok(());
    }

    let mut report = String::new();
    for (i, bookmark) in hits.iter().enumerate() {
        println!("{}. {}", i + 1, bookmark.title);
        println!("    {}", bookmark.note);
        println!("    {}", bookmark.url);
        report.push_str(&format!("{} - {}\n", bookmark.title, bookmark.url));
    }

    let path = export::export_text(Path::new("."), "bookmarks.txt", &report)?;
    println!();
    println!("Wrote {} bookmark(s) to {}.", hits.len(), path.display());

    Ok(())
}
