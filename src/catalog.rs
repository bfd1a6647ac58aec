//! Case-insensitive substring filtering over ordered catalogs.
//!
//! The same filter serves the project catalog and the template collections.
//! Matching is a plain substring relation over the lowercased title and
//! description; the query is taken literally, including whitespace.

use crate::models::{Project, Template};

/// Anything listable and searchable by title and description.
pub trait CatalogItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

impl CatalogItem for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl CatalogItem for Template {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
    fn description(&self) -> &str {
        (**self).description()
    }
}

/// Filter `entries` down to those whose title or description contains
/// `query`, ignoring case.
///
/// The result preserves the original relative order and borrows from
/// `entries`. An empty query matches every entry. The query is not trimmed:
/// a whitespace-only query only matches entries that contain that exact
/// whitespace.
pub fn filter<'a, T: CatalogItem>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.title().to_lowercase().contains(&needle)
                || e.description().to_lowercase().contains(&needle)
        })
        .collect()
}
