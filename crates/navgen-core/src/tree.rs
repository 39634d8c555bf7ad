//! Navigation tree types.
//!
//! Items serialize to the `{ text, link }` / `{ text, items }` object shape the
//! site theme reads from its navigation array.

use serde::Serialize;

/// A leaf navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text.
    pub text: String,
    /// Absolute site-relative path, optionally with a `#fragment`.
    #[serde(rename = "link")]
    pub href: String,
}

impl NavLink {
    /// Create a new link.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A drop-down entry with at least one child link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    text: String,
    #[serde(rename = "items")]
    children: Vec<NavLink>,
}

impl NavGroup {
    /// Create a group, or `None` if `children` is empty.
    pub fn new(text: impl Into<String>, children: Vec<NavLink>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(Self {
            text: text.into(),
            children,
        })
    }

    /// Group label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child links in document order. Never empty.
    #[must_use]
    pub fn children(&self) -> &[NavLink] {
        &self.children
    }
}

/// Top-level navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Flat link.
    Link(NavLink),
    /// Drop-down menu.
    Group(NavGroup),
}

impl NavItem {
    /// Label shown in the menu.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Group(group) => group.text(),
        }
    }
}

impl From<NavLink> for NavItem {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavGroup> for NavItem {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

/// Ordered navigation menu, home link first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    /// Start a tree with its home link.
    #[must_use]
    pub fn new(home: NavLink) -> Self {
        Self {
            items: vec![NavItem::Link(home)],
        }
    }

    pub(crate) fn push(&mut self, item: NavItem) {
        self.items.push(item);
    }

    /// The home link.
    #[must_use]
    pub fn home(&self) -> &NavItem {
        &self.items[0]
    }

    /// All items in menu order.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Iterate over items in menu order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.items.iter()
    }

    /// Number of top-level items, including home.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a tree holds at least the home link.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavTree {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
