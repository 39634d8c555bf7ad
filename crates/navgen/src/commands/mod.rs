//! CLI command implementations.

pub(crate) mod categories;
pub(crate) mod generate;
pub(crate) mod info;
pub(crate) mod patch;

pub(crate) use categories::CategoriesArgs;
pub(crate) use generate::GenerateArgs;
pub(crate) use info::InfoArgs;
pub(crate) use patch::PatchArgs;

use navgen_config::Config;
use navgen_core::{
    Category, FsSource, HeadingExtractor, NavLink, NavTree, Navigation, list_categories,
};

/// Categories to resolve, in menu order.
///
/// Declared `[[nav.categories]]` order, or the subdirectories of the docs
/// directory that have a declared name when `nav.discover` is set.
pub(crate) fn resolve_categories(config: &Config) -> Vec<Category> {
    if config.nav.discover {
        return list_categories(
            &config.docs_resolved.source_dir,
            &config.nav.display_names(),
            &config.nav.exclude,
        );
    }
    config
        .nav
        .categories
        .iter()
        .map(|c| Category::new(c.id.as_str(), c.name.as_str()))
        .collect()
}

/// Assemble the navigation tree described by `config`.
pub(crate) fn build_tree(config: &Config, categories: &[Category]) -> NavTree {
    let source = FsSource::new(&config.docs_resolved.source_dir)
        .with_index_name(config.docs_resolved.index_name.as_str());
    let extractor = HeadingExtractor::new().overrides_only(config.nav.explicit_anchors_only);

    Navigation::new(source)
        .with_home(NavLink::new(
            config.nav.home_text.as_str(),
            config.nav.home_link.as_str(),
        ))
        .with_extractor(extractor)
        .assemble(categories)
}
