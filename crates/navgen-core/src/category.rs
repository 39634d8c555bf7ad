//! Navigation categories and category discovery.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A top-level content section with its own index document.
///
/// Categories are declared once and never mutated; their order is the order
/// of the generated menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Directory name under the documents root (e.g., "graphql").
    pub id: String,
    /// Menu label (e.g., "GraphQL").
    pub display_name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Site-relative URL of the category page (e.g., "/graphql/").
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}/", self.id)
    }

    /// URL of a section on the category page.
    #[must_use]
    pub fn anchor_href(&self, anchor: &str) -> String {
        format!("/{}/#{anchor}", self.id)
    }
}

/// Discover categories from the subdirectories of `root`.
///
/// Only directories listed in `display_names` become categories. Hidden
/// directories and names in `exclusions` are skipped. The result is ordered
/// by directory name so repeated runs produce the same menu.
///
/// Returns an empty Vec if `root` cannot be read.
pub fn list_categories<S: std::hash::BuildHasher>(
    root: &Path,
    display_names: &HashMap<String, String, S>,
    exclusions: &[String],
) -> Vec<Category> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %root.display(), error = %e, "Failed to read documents root");
            return Vec::new();
        }
    };

    let mut categories: Vec<Category> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || exclusions.contains(&name) {
                return None;
            }
            if let Some(display_name) = display_names.get(&name) {
                Some(Category::new(name, display_name.clone()))
            } else {
                tracing::debug!(directory = %name, "Skipping directory without display name");
                None
            }
        })
        .collect();

    categories.sort_by(|a, b| a.id.cmp(&b.id));
    categories
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn display_names() -> HashMap<String, String> {
        [
            ("ruby", "Ruby"),
            ("graphql", "GraphQL"),
            ("aws", "AWS"),
            ("node_modules", "Modules"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn test_href() {
        let category = Category::new("graphql", "GraphQL");

        assert_eq!(category.href(), "/graphql/");
        assert_eq!(category.anchor_href("schema"), "/graphql/#schema");
    }

    #[test]
    fn test_list_categories_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        for dir in ["ruby", "graphql", "aws", "drafts", ".vuepress", "node_modules"] {
            fs::create_dir(temp_dir.path().join(dir)).unwrap();
        }
        fs::write(temp_dir.path().join("README.md"), "# Home").unwrap();

        let categories = list_categories(
            temp_dir.path(),
            &display_names(),
            &["node_modules".to_owned()],
        );

        assert_eq!(
            categories,
            vec![
                Category::new("aws", "AWS"),
                Category::new("graphql", "GraphQL"),
                Category::new("ruby", "Ruby"),
            ]
        );
    }

    #[test]
    fn test_list_categories_ignores_files_named_like_categories() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("ruby"), "not a directory").unwrap();

        let categories = list_categories(temp_dir.path(), &display_names(), &[]);

        assert!(categories.is_empty());
    }

    #[test]
    fn test_list_categories_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();

        let categories =
            list_categories(&temp_dir.path().join("missing"), &display_names(), &[]);

        assert!(categories.is_empty());
    }
}
