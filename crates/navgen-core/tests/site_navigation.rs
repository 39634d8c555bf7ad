//! End-to-end navigation generation against a documents directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use navgen_core::{
    Category, ConfigPatcher, FsSource, NavGroup, NavItem, NavLink, Navigation, PatchError,
    PatchOutcome, encode, list_categories,
};
use pretty_assertions::assert_eq;

const SITE_CONFIG: &str = "\
module.exports = {
  title: 'Tech Notes',
  themeConfig: {
    // Generated by navgen
    nav: [],
    sidebar: 'auto',
  },
};
";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("ruby", "Ruby"),
        Category::new("graphql", "GraphQL"),
        Category::new("docker", "Docker"),
    ]
}

#[test]
fn test_assemble_from_documents_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let docs = temp_dir.path();
    write(docs, "ruby/index.md", "# Ruby\n\n## 1. Ruby基礎 {#basics}\n### 2. Ruby応用\n");
    write(docs, "docker/index.md", "# Docker\n\nNothing here yet.\n");

    let tree = Navigation::new(FsSource::new(docs)).assemble(&categories());

    assert_eq!(
        tree.items(),
        &[
            NavItem::Link(NavLink::new("Home", "/")),
            NavItem::Group(
                NavGroup::new(
                    "Ruby",
                    vec![
                        NavLink::new("1. Ruby基礎", "/ruby/#basics"),
                        NavLink::new("2. Ruby応用", format!("/ruby/#{}", encode("2. Ruby応用"))),
                    ],
                )
                .unwrap()
            ),
            NavItem::Link(NavLink::new("GraphQL", "/graphql/")),
            NavItem::Link(NavLink::new("Docker", "/docker/")),
        ]
    );
}

#[test]
fn test_discovered_categories_feed_assembly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let docs = temp_dir.path();
    write(docs, "ruby/index.md", "## Gems\n");
    write(docs, "graphql/index.md", "## Schema\n");
    write(docs, ".vuepress/config.js", SITE_CONFIG);
    fs::create_dir(docs.join("scratch")).unwrap();

    let names: HashMap<String, String> = [("ruby", "Ruby"), ("graphql", "GraphQL")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    let discovered = list_categories(docs, &names, &[]);
    let tree = Navigation::new(FsSource::new(docs)).assemble(&discovered);

    let texts: Vec<_> = tree.iter().map(NavItem::text).collect();
    assert_eq!(texts, vec!["Home", "GraphQL", "Ruby"]);
}

#[test]
fn test_patch_site_config_twice() {
    let temp_dir = tempfile::tempdir().unwrap();
    let docs = temp_dir.path();
    write(docs, "ruby/index.md", "## Gems {#gems}\n");
    write(docs, ".vuepress/config.js", SITE_CONFIG);
    let config_path = docs.join(".vuepress/config.js");

    let tree = Navigation::new(FsSource::new(docs)).assemble(&categories());
    let patcher = ConfigPatcher::new();

    assert_eq!(
        patcher.patch_file(&tree, &config_path).unwrap(),
        PatchOutcome::Updated
    );
    let patched = fs::read_to_string(&config_path).unwrap();
    assert_eq!(
        patched,
        "\
module.exports = {
  title: 'Tech Notes',
  themeConfig: {
    // Generated by navgen
    nav: [
      { text: 'Home', link: '/' },
      {
        text: 'Ruby',
        items: [
          { text: 'Gems', link: '/ruby/#gems' },
        ],
      },
      { text: 'GraphQL', link: '/graphql/' },
      { text: 'Docker', link: '/docker/' },
    ],
    sidebar: 'auto',
  },
};
"
    );

    assert_eq!(
        patcher.patch_file(&tree, &config_path).unwrap(),
        PatchOutcome::Unchanged
    );
    assert_eq!(fs::read_to_string(&config_path).unwrap(), patched);
}

#[test]
fn test_patch_without_nav_block_fails_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.js");
    let original = "module.exports = {\n  title: 'Tech Notes',\n};\n";
    fs::write(&config_path, original).unwrap();

    let tree = Navigation::new(FsSource::new(temp_dir.path())).assemble(&categories());
    let err = ConfigPatcher::new()
        .patch_file(&tree, &config_path)
        .unwrap_err();

    assert!(matches!(err, PatchError::TargetNotFound { path: Some(ref p), .. } if p == &config_path));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), original);
}
