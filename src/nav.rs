// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Navigation Model
//!
//! Validated navigation entries. A sidebar node is either a [`NavLeaf`]
//! (a link, no children) or a [`NavGroup`] (children, optionally collapsed),
//! so `collapsed` cannot be attached to a leaf once validation has run.
//!
//! ```
//! use docnav::nav::Link;
//!
//! assert!(Link::parse("/sdk/setup").unwrap().is_internal());
//! assert!(!Link::parse("https://github.com/zerodevapp").unwrap().is_internal());
//! assert!(Link::parse("ftp://bad").is_none());
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::traits::Navigable;

/// A navigation target: a site-relative path or an absolute web URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Link {
    /// A path on this site, always starting with `/`.
    Internal(String),
    /// An `http://` or `https://` URL.
    External(String),
}

impl Link {
    /// Classifies `raw`, returning `None` if it is neither a `/` path nor an
    /// `http(s)://` URL.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.starts_with('/') {
            Some(Link::Internal(raw.to_string()))
        } else if is_web_url(raw) {
            Some(Link::External(raw.to_string()))
        } else {
            None
        }
    }

    /// The link as written.
    pub fn as_str(&self) -> &str {
        match self {
            Link::Internal(path) | Link::External(path) => path,
        }
    }

    /// Returns `true` for site-relative paths.
    pub fn is_internal(&self) -> bool {
        matches!(self, Link::Internal(_))
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returns `true` if `raw` is an absolute `http://` or `https://` URL with
/// something after the scheme.
pub(crate) fn is_web_url(raw: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        raw.strip_prefix(scheme)
            .map_or(false, |rest| !rest.is_empty())
    })
}

/// A sidebar entry that links to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    /// Display label.
    pub text: String,
    /// Target page.
    pub link: Link,
    /// Path prefix that also highlights this entry.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
}

/// A sidebar section holding child entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Section heading.
    pub text: String,
    /// Optional landing page for the section itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Path prefix that also highlights this section.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
    /// Whether the section starts collapsed.
    pub collapsed: bool,
    /// Child entries, never empty.
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// Returns `true` if the section should render open for `current_path`:
    /// it is not collapsed, or it contains the active page.
    pub fn is_expanded(&self, current_path: &str) -> bool {
        !self.collapsed
            || self.is_active(current_path)
            || self
                .items
                .iter()
                .any(|item| item.contains_active(current_path))
    }
}

/// A node in a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// A page link.
    Leaf(NavLeaf),
    /// A section with children.
    Group(NavGroup),
}

impl NavItem {
    /// Child entries; empty for leaves.
    pub fn items(&self) -> &[NavItem] {
        match self {
            NavItem::Leaf(_) => &[],
            NavItem::Group(group) => &group.items,
        }
    }

    /// Returns `true` if this entry or any descendant is active.
    pub fn contains_active(&self, current_path: &str) -> bool {
        self.is_active(current_path)
            || self
                .items()
                .iter()
                .any(|item| item.contains_active(current_path))
    }

    /// Every leaf under this entry, depth first.
    pub fn leaves(&self) -> Vec<&NavLeaf> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(item: &'a NavItem, leaves: &mut Vec<&'a NavLeaf>) {
    match item {
        NavItem::Leaf(leaf) => leaves.push(leaf),
        NavItem::Group(group) => {
            for child in &group.items {
                collect_leaves(child, leaves);
            }
        }
    }
}

/// An entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopNavEntry {
    /// Display label.
    pub text: String,
    /// Target page.
    pub link: Link,
    /// Path prefix that also highlights this entry.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
}

impl Navigable for NavLeaf {
    fn text(&self) -> &str {
        &self.text
    }

    fn link(&self) -> Option<&Link> {
        Some(&self.link)
    }

    fn match_prefix(&self) -> Option<&str> {
        self.match_prefix.as_deref()
    }
}

impl Navigable for NavGroup {
    fn text(&self) -> &str {
        &self.text
    }

    fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    fn match_prefix(&self) -> Option<&str> {
        self.match_prefix.as_deref()
    }
}

impl Navigable for NavItem {
    fn text(&self) -> &str {
        match self {
            NavItem::Leaf(leaf) => leaf.text(),
            NavItem::Group(group) => group.text(),
        }
    }

    fn link(&self) -> Option<&Link> {
        match self {
            NavItem::Leaf(leaf) => leaf.link(),
            NavItem::Group(group) => group.link(),
        }
    }

    fn match_prefix(&self) -> Option<&str> {
        match self {
            NavItem::Leaf(leaf) => leaf.match_prefix(),
            NavItem::Group(group) => group.match_prefix(),
        }
    }
}

impl Navigable for TopNavEntry {
    fn text(&self) -> &str {
        &self.text
    }

    fn link(&self) -> Option<&Link> {
        Some(&self.link)
    }

    fn match_prefix(&self) -> Option<&str> {
        self.match_prefix.as_deref()
    }
}
