//! Navigation synthesis for documentation sites.
//!
//! Derives a site's top-level menu from the heading outline of per-category
//! index documents, using the same anchor slugs the site renderer assigns so
//! the generated links resolve.
//!
//! # Architecture
//!
//! Components, leaf-first:
//! - [`encode`]: heading text to anchor fragment
//! - [`HeadingExtractor`]: level-2/3 headings from one document
//! - [`CategoryResolver`]: one [`Category`] to a flat link or a drop-down,
//!   reading through a [`DocumentSource`]
//! - [`Navigation`]: home link plus every resolved category, in order
//! - [`ConfigPatcher`]: splices the resulting [`NavTree`] into a site
//!   configuration file
//!
//! Only the patcher can fail. Missing or unreadable index documents degrade
//! to a plain link to the category page.
//!
//! # Example
//!
//! ```
//! use navgen_core::{Category, FsSource, Navigation, patch};
//!
//! let categories = [Category::new("graphql", "GraphQL")];
//! let tree = Navigation::new(FsSource::new("docs")).assemble(&categories);
//!
//! let config = "export default { nav: [] };\n";
//! let patched = patch(&tree, config).unwrap();
//! assert!(patched.contains("{ text: 'GraphQL', link: '/graphql/' },"));
//! ```

mod category;
mod heading;
mod navigation;
mod patch;
mod resolver;
mod slug;
mod source;
mod tree;

pub use category::{Category, list_categories};
pub use heading::{Heading, HeadingExtractor, extract};
pub use navigation::{DEFAULT_HOME_LINK, DEFAULT_HOME_TEXT, Navigation, assemble};
pub use patch::{
    ConfigPatcher, DEFAULT_NAV_KEY, PatchError, PatchOutcome, is_valid_nav_key, patch,
    render_array,
};
pub use resolver::CategoryResolver;
pub use slug::encode;
#[cfg(any(test, feature = "mock"))]
pub use source::MockSource;
pub use source::{DEFAULT_INDEX_NAME, DocumentSource, FsSource, SourceError, SourceErrorKind};
pub use tree::{NavGroup, NavItem, NavLink, NavTree};
