//! Navigation tree assembly.
//!
//! Builds the site menu: the home link followed by one entry per category,
//! in the order the categories were declared.
//!
//! # Example
//!
//! ```
//! use navgen_core::{Category, FsSource, NavItem, NavLink, Navigation};
//!
//! let categories = vec![
//!     Category::new("ruby", "Ruby"),
//!     Category::new("graphql", "GraphQL"),
//! ];
//!
//! // Without index documents every category becomes a plain link.
//! let tree = Navigation::new(FsSource::new("/nonexistent")).assemble(&categories);
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.items()[2], NavItem::Link(NavLink::new("GraphQL", "/graphql/")));
//! ```

use crate::category::Category;
use crate::heading::HeadingExtractor;
use crate::resolver::CategoryResolver;
use crate::source::DocumentSource;
use crate::tree::{NavLink, NavTree};

/// Default home link text.
pub const DEFAULT_HOME_TEXT: &str = "Home";

/// Default home link target.
pub const DEFAULT_HOME_LINK: &str = "/";

/// Navigation assembler.
#[derive(Debug)]
pub struct Navigation<S> {
    resolver: CategoryResolver<S>,
    home: NavLink,
}

impl<S: DocumentSource> Navigation<S> {
    /// Create an assembler with the default home link.
    pub fn new(source: S) -> Self {
        Self {
            resolver: CategoryResolver::new(source),
            home: NavLink::new(DEFAULT_HOME_TEXT, DEFAULT_HOME_LINK),
        }
    }

    /// Replace the home link.
    #[must_use]
    pub fn with_home(mut self, home: NavLink) -> Self {
        self.home = home;
        self
    }

    /// Use a custom heading extractor for all categories.
    #[must_use]
    pub fn with_extractor(mut self, extractor: HeadingExtractor) -> Self {
        self.resolver = self.resolver.with_extractor(extractor);
        self
    }

    /// Assemble the navigation tree.
    ///
    /// The result always has `1 + categories.len()` items with the home link
    /// first. Categories are resolved sequentially in the given order.
    pub fn assemble(&self, categories: &[Category]) -> NavTree {
        let mut tree = NavTree::new(self.home.clone());
        for category in categories {
            tree.push(self.resolver.resolve(category));
        }
        tracing::debug!(items = tree.len(), "Navigation assembled");
        tree
    }
}

/// Assemble a navigation tree with the default home link and extractor.
pub fn assemble<S: DocumentSource>(categories: &[Category], source: S) -> NavTree {
    Navigation::new(source).assemble(categories)
}
