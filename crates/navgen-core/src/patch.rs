//! Configuration patching.
//!
//! Splices a rendered navigation array into an existing JavaScript site
//! configuration. Only the `[ ... ]` of the navigation assignment is
//! replaced; comments, other keys and formatting are left byte-for-byte
//! intact. The splice is textual on purpose: reparsing and reprinting the
//! configuration would reformat code the patcher does not own.
//!
//! # Example
//!
//! ```
//! use navgen_core::{ConfigPatcher, NavLink, NavTree};
//!
//! let tree = NavTree::new(NavLink::new("Home", "/"));
//! let config = "module.exports = {\n  themeConfig: {\n    nav: [],\n  },\n};\n";
//!
//! let patched = ConfigPatcher::new().patch(&tree, config).unwrap();
//! assert!(patched.contains("{ text: 'Home', link: '/' },"));
//! ```

use std::fmt::Write as _;
use std::ops::Range;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::tree::{NavItem, NavLink, NavTree};

/// Default name of the navigation key in the site configuration.
pub const DEFAULT_NAV_KEY: &str = "nav";

/// Indentation unit of the rendered array.
const INDENT: &str = "  ";

/// Error patching a configuration.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// No `key: [ ... ]` assignment with a statement terminator was found.
    #[error("navigation block `{key}` not found{}", location(.path.as_deref()))]
    TargetNotFound {
        /// Navigation key that was searched for.
        key: String,
        /// Configuration file, when patching a file.
        path: Option<PathBuf>,
    },
    /// Navigation key is not a plain identifier.
    #[error("invalid navigation key `{0}`")]
    InvalidKey(String),
    /// Configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Configuration file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result of patching a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File content changed and was written.
    Updated,
    /// Navigation was already current; the file was not rewritten.
    Unchanged,
}

/// Splices navigation trees into site configuration sources.
#[derive(Clone, Debug)]
pub struct ConfigPatcher {
    key: String,
}

impl Default for ConfigPatcher {
    fn default() -> Self {
        Self {
            key: DEFAULT_NAV_KEY.to_owned(),
        }
    }
}

impl ConfigPatcher {
    /// Create a patcher for the `nav` key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch a different navigation key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Navigation key this patcher replaces.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the navigation array in `source` with `tree`.
    ///
    /// The input is never modified; on error the caller still holds the
    /// original text.
    pub fn patch(&self, tree: &NavTree, source: &str) -> Result<String, PatchError> {
        let span = self.find_target(source)?;
        let indent = line_indent(source, span.start);

        let mut patched = String::with_capacity(source.len());
        patched.push_str(&source[..span.start]);
        patched.push_str(&render_array(tree, indent));
        patched.push_str(&source[span.end..]);
        Ok(patched)
    }

    /// Read the configuration file at `path` and return it patched, without
    /// writing anything.
    pub fn patch_file_contents(
        &self,
        tree: &NavTree,
        path: &Path,
    ) -> Result<String, PatchError> {
        let source = read_source(path)?;
        self.patch_at(tree, &source, path)
    }

    /// Patch the configuration file at `path` in place.
    ///
    /// The file is read once and written at most once. Nothing is written if
    /// the navigation block cannot be located or the content is unchanged.
    pub fn patch_file(&self, tree: &NavTree, path: &Path) -> Result<PatchOutcome, PatchError> {
        let source = read_source(path)?;
        let patched = self.patch_at(tree, &source, path)?;

        if patched == source {
            tracing::info!(path = %path.display(), "Navigation already up to date");
            return Ok(PatchOutcome::Unchanged);
        }

        std::fs::write(path, patched).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Navigation written");
        Ok(PatchOutcome::Updated)
    }

    /// Like [`patch`](Self::patch), naming `path` in a not-found error.
    fn patch_at(&self, tree: &NavTree, source: &str, path: &Path) -> Result<String, PatchError> {
        self.patch(tree, source).map_err(|e| match e {
            PatchError::TargetNotFound { key, .. } => PatchError::TargetNotFound {
                key,
                path: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    /// Locate the byte range of the navigation array, brackets included.
    fn find_target(&self, source: &str) -> Result<Range<usize>, PatchError> {
        if !is_valid_nav_key(&self.key) {
            return Err(PatchError::InvalidKey(self.key.clone()));
        }
        let assignment = Regex::new(&format!(
            r#"(?:\b|["']){}["']?\s*[:=]\s*\["#,
            regex::escape(&self.key)
        ))
        .map_err(|_| PatchError::InvalidKey(self.key.clone()))?;

        let literals = literal_ranges(source);
        let in_literal = |pos: usize| literals.iter().any(|r| r.contains(&pos));

        for found in assignment.find_iter(source) {
            let open = found.end() - 1;
            if in_literal(open) {
                continue;
            }
            let Some(close) = matching_bracket(source, open, &literals) else {
                continue;
            };
            if has_terminator(source, close + 1, &literals) {
                return Ok(open..close + 1);
            }
        }

        Err(PatchError::TargetNotFound {
            key: self.key.clone(),
            path: None,
        })
    }
}

fn read_source(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Patch `source` with the default `nav` key.
pub fn patch(tree: &NavTree, source: &str) -> Result<String, PatchError> {
    ConfigPatcher::new().patch(tree, source)
}

/// Render a tree as a JavaScript array literal.
///
/// Lines after the first are prefixed with `indent`, so the array lines up
/// with the line that holds its key.
#[must_use]
pub fn render_array(tree: &NavTree, indent: &str) -> String {
    let mut out = String::from("[\n");
    let item_indent = format!("{indent}{INDENT}");
    for item in tree {
        match item {
            NavItem::Link(link) => {
                let _ = writeln!(out, "{item_indent}{},", render_link(link));
            }
            NavItem::Group(group) => {
                let field_indent = format!("{item_indent}{INDENT}");
                let child_indent = format!("{field_indent}{INDENT}");
                let _ = writeln!(out, "{item_indent}{{");
                let _ = writeln!(out, "{field_indent}text: {},", js_string(group.text()));
                let _ = writeln!(out, "{field_indent}items: [");
                for child in group.children() {
                    let _ = writeln!(out, "{child_indent}{},", render_link(child));
                }
                let _ = writeln!(out, "{field_indent}],");
                let _ = writeln!(out, "{item_indent}}},");
            }
        }
    }
    out.push_str(indent);
    out.push(']');
    out
}

fn render_link(link: &NavLink) -> String {
    format!(
        "{{ text: {}, link: {} }}",
        js_string(&link.text),
        js_string(&link.href)
    )
}

/// Single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Whether `key` can name the navigation array: a plain JavaScript
/// identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
///
/// ```
/// use navgen_core::is_valid_nav_key;
///
/// assert!(is_valid_nav_key("nav"));
/// assert!(!is_valid_nav_key("theme.nav"));
/// ```
#[must_use]
pub fn is_valid_nav_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Leading whitespace of the line containing `pos`.
fn line_indent(source: &str, pos: usize) -> &str {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..pos];
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Byte ranges holding string literals and comments.
///
/// Handles `'`, `"` and backtick strings with backslash escapes, `//` line
/// comments and `/* */` block comments. Unterminated literals run to the
/// end of the line (quotes) or of the source (block comments, backticks).
fn literal_ranges(source: &str) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    } else if bytes[i] == b'\n' && quote != b'`' {
                        break;
                    }
                    i += 1;
                }
                i = (i + 1).min(bytes.len());
                ranges.push(start..i);
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = source[i..].find('\n').map_or(bytes.len(), |n| i + n);
                ranges.push(start..i);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = source[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |n| i + 2 + n + 2);
                ranges.push(start..i);
            }
            _ => i += 1,
        }
    }

    ranges
}

/// Position of the `]` closing the `[` at `open`, skipping literals.
fn matching_bracket(source: &str, open: usize, literals: &[Range<usize>]) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        if let Some(range) = literals.iter().find(|r| r.start == i) {
            i = range.end;
            continue;
        }
        match bytes[i] {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Whether the text from `pos` reaches `,`, `;` or `}` past whitespace and
/// comments.
fn has_terminator(source: &str, mut pos: usize, literals: &[Range<usize>]) -> bool {
    while let Some(c) = source[pos..].chars().next() {
        if c == '/' {
            match literals.iter().find(|r| r.start == pos) {
                Some(comment) => {
                    pos = comment.end;
                    continue;
                }
                None => return false,
            }
        }
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }
        return matches!(c, ',' | ';' | '}');
    }
    false
}
