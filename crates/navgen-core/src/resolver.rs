//! Category resolution.
//!
//! Turns one category into a flat link or a drop-down built from the headings
//! of its index document. Every read failure degrades to the flat link.

use crate::category::Category;
use crate::heading::HeadingExtractor;
use crate::source::DocumentSource;
use crate::tree::{NavGroup, NavItem, NavLink};

/// Resolves categories against a document source.
#[derive(Debug)]
pub struct CategoryResolver<S> {
    source: S,
    extractor: HeadingExtractor,
}

impl<S: DocumentSource> CategoryResolver<S> {
    /// Create a resolver that uses every level-2 and level-3 heading.
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: HeadingExtractor::new(),
        }
    }

    /// Use a custom heading extractor.
    #[must_use]
    pub fn with_extractor(mut self, extractor: HeadingExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Resolve a category to its navigation entry.
    ///
    /// Returns a [`NavGroup`] with one link per heading, in document order,
    /// or a flat [`NavLink`] to the category page when the index document is
    /// missing, unreadable, or has no headings.
    pub fn resolve(&self, category: &Category) -> NavItem {
        let content = match self.source.read_index(&category.id) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    category = %category.id,
                    error = %e,
                    "Failed to read category index, using plain link"
                );
                return fallback(category);
            }
        };

        let children: Vec<NavLink> = self
            .extractor
            .extract(&content)
            .iter()
            .map(|heading| NavLink::new(&heading.text, category.anchor_href(&heading.anchor())))
            .collect();

        match NavGroup::new(&category.display_name, children) {
            Some(group) => {
                tracing::info!(
                    category = %category.id,
                    links = group.children().len(),
                    "Resolved category"
                );
                NavItem::Group(group)
            }
            None => {
                tracing::debug!(category = %category.id, "No headings in category index");
                fallback(category)
            }
        }
    }
}

fn fallback(category: &Category) -> NavItem {
    NavItem::Link(NavLink::new(&category.display_name, category.href()))
}
