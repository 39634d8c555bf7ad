//! Configuration management for navgen.
//!
//! Parses `navgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.sitemap_host`
//! - `site.edit_link_pattern`
//! - `docs.source_dir`
//! - `patch.target`

mod expand;
mod site;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use navgen_core::{DEFAULT_INDEX_NAME, DEFAULT_NAV_KEY};
use serde::Deserialize;

pub use site::{HeadEntry, SearchConfig, SiteConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the configuration file to patch.
    pub patch_target: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Default site configuration file, relative to the docs source directory.
const DEFAULT_PATCH_TARGET: &str = ".vuepress/config.js";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation settings.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Navigation configuration.
    pub nav: NavConfig,
    /// Patch configuration (paths are relative strings from TOML).
    patch: PatchConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved patch configuration (set after loading).
    #[serde(skip)]
    pub patch_resolved: PatchConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    index_name: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Documents root; each category is a subdirectory.
    pub source_dir: PathBuf,
    /// File name of the index document in each category directory.
    pub index_name: String,
}

/// Navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Text of the home link.
    pub home_text: String,
    /// Target of the home link.
    pub home_link: String,
    /// Only turn headings with an explicit `{#anchor}` into menu entries.
    pub explicit_anchors_only: bool,
    /// Discover categories from subdirectories of the docs directory instead
    /// of using `categories` order. `categories` still supplies display names.
    pub discover: bool,
    /// Directory names never treated as categories during discovery.
    pub exclude: Vec<String>,
    /// Declared categories, in menu order.
    pub categories: Vec<CategoryConfig>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home_text: "Home".to_owned(),
            home_link: "/".to_owned(),
            explicit_anchors_only: false,
            discover: false,
            exclude: vec![".vuepress".to_owned(), "node_modules".to_owned()],
            categories: Vec::new(),
        }
    }
}

impl NavConfig {
    /// Display names keyed by category id.
    #[must_use]
    pub fn display_names(&self) -> HashMap<String, String> {
        self.categories
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect()
    }
}

/// A declared navigation category.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Directory name under the docs directory.
    pub id: String,
    /// Menu label.
    pub name: String,
}

/// Raw patch configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PatchConfigRaw {
    target: Option<String>,
    key: Option<String>,
}

/// Resolved patch configuration.
#[derive(Debug, Default)]
pub struct PatchConfig {
    /// Site configuration file whose navigation array is rewritten.
    pub target: PathBuf,
    /// Navigation key inside that file.
    pub key: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a value to be a single path segment.
fn require_path_segment(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single directory name, got \"{value}\""
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A source directory override also moves the default patch target,
    /// unless `patch.target` was set explicitly.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
            if self.patch.target.is_none() {
                self.patch_resolved.target = source_dir.join(DEFAULT_PATCH_TARGET);
            }
        }
        if let Some(target) = &settings.patch_target {
            self.patch_resolved.target.clone_from(target);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let source_dir = base.join("docs");
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            nav: NavConfig::default(),
            patch: PatchConfigRaw::default(),
            patch_resolved: PatchConfig {
                target: source_dir.join(DEFAULT_PATCH_TARGET),
                key: DEFAULT_NAV_KEY.to_owned(),
            },
            docs_resolved: DocsConfig {
                source_dir,
                index_name: DEFAULT_INDEX_NAME.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.validate_nav()?;
        self.validate_patch()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        if let Some(ref host) = self.site.sitemap_host {
            require_non_empty(host, "site.sitemap_host")?;
            require_http_url(host, "site.sitemap_host")?;
        }
        for (i, entry) in self.site.head.iter().enumerate() {
            require_non_empty(&entry.tag, &format!("site.head[{i}].tag"))?;
        }
        if let Some(ref search) = self.site.search {
            require_non_empty(&search.provider, "site.search.provider")?;
        }
        Ok(())
    }

    /// Validate docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        require_path_segment(&self.docs_resolved.index_name, "docs.index_name")
    }

    /// Validate navigation configuration.
    fn validate_nav(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.nav.home_link, "nav.home_link")?;
        if !self.nav.home_link.starts_with('/') {
            return Err(ConfigError::Validation(
                "nav.home_link must start with /".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.nav.categories {
            require_path_segment(&category.id, "nav.categories.id")?;
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "nav.categories contains duplicate id \"{}\"",
                    category.id
                )));
            }
        }

        Ok(())
    }

    /// Validate patch configuration.
    fn validate_patch(&self) -> Result<(), ConfigError> {
        let key = &self.patch_resolved.key;
        if !navgen_core::is_valid_nav_key(key) {
            return Err(ConfigError::Validation(format!(
                "patch.key must be an identifier, got \"{key}\""
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref host) = self.site.sitemap_host {
            self.site.sitemap_host = Some(expand::expand_env(host, "site.sitemap_host")?);
        }
        if let Some(ref pattern) = self.site.edit_link_pattern {
            self.site.edit_link_pattern =
                Some(expand::expand_env(pattern, "site.edit_link_pattern")?);
        }
        if let Some(ref dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(dir, "docs.source_dir")?);
        }
        if let Some(ref target) = self.patch.target {
            self.patch.target = Some(expand::expand_env(target, "patch.target")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs"));

        self.patch_resolved = PatchConfig {
            target: self.patch.target.as_deref().map_or_else(
                || source_dir.join(DEFAULT_PATCH_TARGET),
                |target| config_dir.join(target),
            ),
            key: self
                .patch
                .key
                .clone()
                .unwrap_or_else(|| DEFAULT_NAV_KEY.to_owned()),
        };

        self.docs_resolved = DocsConfig {
            source_dir,
            index_name: self
                .docs
                .index_name
                .clone()
                .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.docs_resolved.index_name, "index.md");
        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/test/docs/.vuepress/config.js")
        );
        assert_eq!(config.patch_resolved.key, "nav");
        assert_eq!(config.nav.home_text, "Home");
        assert_eq!(config.nav.home_link, "/");
        assert!(!config.nav.discover);
        assert!(!config.nav.explicit_anchors_only);
        assert_eq!(config.nav.exclude, vec![".vuepress", "node_modules"]);
        assert!(config.nav.categories.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.nav.home_text, "Home");
        assert!(config.site.title.is_none());
    }

    #[test]
    fn test_parse_nav_config() {
        let toml = r#"
[nav]
home_text = "トップ"
explicit_anchors_only = true

[[nav.categories]]
id = "ruby"
name = "Ruby"

[[nav.categories]]
id = "graphql"
name = "GraphQL"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.nav.home_text, "トップ");
        assert_eq!(config.nav.home_link, "/");
        assert!(config.nav.explicit_anchors_only);
        assert_eq!(
            config.nav.categories,
            vec![
                CategoryConfig {
                    id: "ruby".to_owned(),
                    name: "Ruby".to_owned()
                },
                CategoryConfig {
                    id: "graphql".to_owned(),
                    name: "GraphQL".to_owned()
                },
            ]
        );
        assert_eq!(config.nav.display_names()["graphql"], "GraphQL");
    }

    #[test]
    fn test_parse_site_section() {
        let toml = r#"
[site]
title = "Tech Notes"
footer = "MIT Licensed"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.site.title.as_deref(), Some("Tech Notes"));
        assert_eq!(config.site.footer.as_deref(), Some("MIT Licensed"));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content"
index_name = "README.md"

[patch]
target = "site/config.js"
key = "navItems"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(config.docs_resolved.index_name, "README.md");
        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/project/site/config.js")
        );
        assert_eq!(config.patch_resolved.key, "navItems");
    }

    #[test]
    fn test_resolve_paths_default_target_follows_source_dir() {
        let toml = r#"
[docs]
source_dir = "content"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/project/content/.vuepress/config.js")
        );
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/custom/docs/.vuepress/config.js")
        );
    }

    #[test]
    fn test_apply_cli_settings_source_dir_keeps_explicit_target() {
        let toml = r#"
[patch]
target = "site/config.js"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/project/site/config.js")
        );
    }

    #[test]
    fn test_apply_cli_settings_patch_target() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            patch_target: Some(PathBuf::from("/elsewhere/config.js")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.patch_resolved.target,
            PathBuf::from("/elsewhere/config.js")
        );
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_expand_env_vars_source_dir_and_host() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NAVGEN_CONFIG_TEST_HOST", "notes.example.com");
        }

        let toml = r#"
[site]
sitemap_host = "https://${NAVGEN_CONFIG_TEST_HOST}"

[docs]
source_dir = "${NAVGEN_CONFIG_TEST_DOCS:-content}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.site.sitemap_host.as_deref(),
            Some("https://notes.example.com")
        );
        assert_eq!(config.docs.source_dir.as_deref(), Some("content"));

        unsafe {
            std::env::remove_var("NAVGEN_CONFIG_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NAVGEN_CONFIG_TEST_MISSING");
        }

        let toml = r#"
[patch]
target = "${NAVGEN_CONFIG_TEST_MISSING}/config.js"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NAVGEN_CONFIG_TEST_MISSING"));
        assert!(err.to_string().contains("patch.target"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    fn category(id: &str) -> CategoryConfig {
        CategoryConfig {
            id: id.to_owned(),
            name: id.to_uppercase(),
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_sitemap_host_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.sitemap_host = Some("notes.example.com".to_owned());
        assert_validation_error(&config, &["site.sitemap_host", "http"]);
    }

    #[test]
    fn test_validate_sitemap_host_valid() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.sitemap_host = Some("https://notes.example.com".to_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_home_link_must_be_absolute() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.nav.home_link = "home".to_owned();
        assert_validation_error(&config, &["nav.home_link"]);
    }

    #[test]
    fn test_validate_category_id_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.nav.categories = vec![category("")];
        assert_validation_error(&config, &["nav.categories.id", "empty"]);
    }

    #[test]
    fn test_validate_category_id_with_slash() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.nav.categories = vec![category("lang/ruby")];
        assert_validation_error(&config, &["lang/ruby"]);
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.nav.categories = vec![category("ruby"), category("go"), category("ruby")];
        assert_validation_error(&config, &["duplicate", "ruby"]);
    }

    #[test]
    fn test_validate_index_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.index_name = "sub/index.md".to_owned();
        assert_validation_error(&config, &["docs.index_name"]);
    }

    #[test]
    fn test_validate_patch_key() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.patch_resolved.key = "theme.nav".to_owned();
        assert_validation_error(&config, &["patch.key", "theme.nav"]);
    }

    #[test]
    fn test_validate_patch_key_matches_patcher() {
        let mut config = Config::default_with_base(Path::new("/test"));
        for key in ["navItems", "_nav", "$nav"] {
            config.patch_resolved.key = key.to_owned();
            assert!(config.validate().is_ok(), "{key}");
        }
        config.patch_resolved.key = "nav-items".to_owned();
        assert_validation_error(&config, &["patch.key", "nav-items"]);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/navgen.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[docs]
source_dir = "notes"

[[nav.categories]]
id = "ruby"
name = "Ruby"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("notes"));
        assert_eq!(
            config.patch_resolved.target,
            temp_dir.path().join("notes/.vuepress/config.js")
        );
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_from_file_rejects_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[nav]\nhome_link = \"home\"\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[nav\n").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
