// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Raw Configuration
//!
//! The unchecked shape of a site configuration as it is authored. Every field
//! is optional and loosely typed, mirroring the object literal a static site
//! generator is usually configured with. Both `snake_case` and the
//! `camelCase` spellings (`topNav`, `logoUrl`, ...) are accepted.
//!
//! Route-keyed maps ([`RawPrefixMap`]) keep every entry in source order,
//! including repeated keys, so duplicates reach the validator instead of
//! being silently collapsed by the parser.
//!
//! ```
//! use docnav::raw::RawSiteConfig;
//!
//! let raw = RawSiteConfig::from_json_str(r#"{
//!     "topNav": [{ "text": "SDK", "link": "/", "match": "/sdk" }],
//!     "sidebar": { "/wallet": [{ "text": "Introduction", "link": "/wallet" }] }
//! }"#).unwrap();
//! assert_eq!(raw.top_nav.len(), 1);
//! ```

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::core::error::{DocNavError, Result};
use crate::site::{EditLink, MetaTag};

/// A navigation node as authored.
///
/// Deserialized by hand so that a mistyped value names its field and an
/// unknown key (`colapsed`, `lnk`) is rejected instead of dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawNavItem {
    /// Display label.
    pub text: String,
    /// Target page or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Highlight prefix.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
    /// Whether the section starts collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawNavItem>>,
}

/// A top-bar entry as authored. Children are not allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawTopNavEntry {
    /// Display label.
    pub text: String,
    /// Target page or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Highlight prefix.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
}

/// A social link as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    /// Icon identifier, e.g. `github`.
    pub icon: String,
    /// Profile URL.
    pub link: String,
}

/// Logo location: one image for both themes, or one per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLogoUrl {
    /// Same logo for light and dark.
    Single(String),
    /// Separate logos. A missing side is reported by validation.
    Themed {
        /// Logo on light backgrounds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        light: Option<String>,
        /// Logo on dark backgrounds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dark: Option<String>,
    },
}

/// OG image template: one for every page, or one per route prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawOgImageUrl {
    /// Registered under `/`.
    Single(String),
    /// Keyed by route prefix.
    Routed(RawPrefixMap<String>),
}

/// Sidebar: one list for every page, or one list per route prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawSidebar {
    /// Registered under `/`.
    Single(Vec<RawNavItem>),
    /// Keyed by route prefix.
    Routed(RawPrefixMap<Vec<RawNavItem>>),
}

impl Default for RawSidebar {
    fn default() -> Self {
        RawSidebar::Routed(RawPrefixMap::default())
    }
}

impl RawSidebar {
    /// The sidebar as `(key, items)` pairs in source order.
    pub fn entries(&self) -> Vec<(&str, &[RawNavItem])> {
        match self {
            RawSidebar::Single(items) => vec![("/", items.as_slice())],
            RawSidebar::Routed(map) => map
                .entries
                .iter()
                .map(|(key, items)| (key.as_str(), items.as_slice()))
                .collect(),
        }
    }
}

/// Options for the validation pass, read from the `[validate]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Treat every warning as an error.
    pub deny_warnings: bool,
    /// Report leaves that repeat a path within one sidebar.
    pub unique_links: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            deny_warnings: false,
            unique_links: true,
        }
    }
}

/// The unchecked site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Logo locations.
    #[serde(alias = "logoUrl", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<RawLogoUrl>,
    /// OG image URL templates.
    #[serde(alias = "ogImageUrl", skip_serializing_if = "Option::is_none")]
    pub og_image_url: Option<RawOgImageUrl>,
    /// Edit-link pattern and label.
    #[serde(alias = "editLink", skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    /// Page title template.
    #[serde(alias = "titleTemplate", skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
    /// Site description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Injected meta tags.
    pub head: Vec<MetaTag>,
    /// Top navigation bar.
    #[serde(alias = "topNav")]
    pub top_nav: Vec<RawTopNavEntry>,
    /// Social links.
    pub socials: Vec<RawSocialLink>,
    /// Sidebars.
    pub sidebar: RawSidebar,
    /// Validation options.
    pub validate: ValidateOptions,
}

impl RawSiteConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| DocNavError::parse("toml", e.to_string(), None))
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| DocNavError::parse("json", e.to_string(), None))
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yml::from_str(source)
            .map_err(|e| DocNavError::parse("yaml", e.to_string(), None))
    }
}

/// A route-keyed map that keeps repeated keys and source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrefixMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> RawPrefixMap<T> {
    /// Builds a map from pairs, keeping duplicates.
    pub fn from_entries(entries: Vec<(String, T)>) -> Self {
        Self { entries }
    }

    /// Pairs in source order.
    pub fn entries(&self) -> &[(String, T)] {
        &self.entries
    }
}

impl<T> Default for RawPrefixMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Serialize> Serialize for RawPrefixMap<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries.iter().map(|(key, value)| (key, value)),
        )
    }
}

struct RawPrefixMapVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for RawPrefixMapVisitor<T> {
    type Value = RawPrefixMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by route prefix")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            entries.push((key, value));
        }
        Ok(RawPrefixMap { entries })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RawPrefixMap<T> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RawPrefixMapVisitor {
            marker: PhantomData,
        })
    }
}

const NAV_ITEM_FIELDS: &[&str] = &["text", "link", "match", "collapsed", "items"];

struct RawNavItemVisitor;

impl<'de> Visitor<'de> for RawNavItemVisitor {
    type Value = RawNavItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a navigation entry")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut item = RawNavItem::default();
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "items" => item.items = Some(access.next_value()?),
                "collapsed" => {
                    let value = access.next_value()?;
                    item.collapsed =
                        Some(expect_bool::<A::Error>(value, "collapsed")?);
                }
                "text" | "link" | "match" => {
                    let value = access.next_value()?;
                    let value = expect_string::<A::Error>(value, &key)?;
                    match key.as_str() {
                        "text" => item.text = value,
                        "link" => item.link = Some(value),
                        _ => item.match_prefix = Some(value),
                    }
                }
                other => {
                    return Err(de::Error::unknown_field(other, NAV_ITEM_FIELDS))
                }
            }
        }
        Ok(item)
    }
}

impl<'de> Deserialize<'de> for RawNavItem {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RawNavItemVisitor)
    }
}

fn expect_string<E: de::Error>(
    value: serde_json::Value,
    name: &str,
) -> std::result::Result<String, E> {
    match value {
        serde_json::Value::String(value) => Ok(value),
        other => Err(E::custom(format_args!(
            "`{}` must be a string, found `{}`",
            name, other
        ))),
    }
}

fn expect_bool<E: de::Error>(
    value: serde_json::Value,
    name: &str,
) -> std::result::Result<bool, E> {
    match value {
        serde_json::Value::Bool(value) => Ok(value),
        other => Err(E::custom(format_args!(
            "`{}` must be a boolean, found `{}`",
            name, other
        ))),
    }
}

struct RawSidebarVisitor;

impl<'de> Visitor<'de> for RawSidebarVisitor {
    type Value = RawSidebar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of navigation entries or a map keyed by route prefix")
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(RawSidebar::Single(items))
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        RawPrefixMapVisitor {
            marker: PhantomData,
        }
        .visit_map(access)
        .map(RawSidebar::Routed)
    }
}

impl<'de> Deserialize<'de> for RawSidebar {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(RawSidebarVisitor)
    }
}

struct RawOgImageUrlVisitor;

impl<'de> Visitor<'de> for RawOgImageUrlVisitor {
    type Value = RawOgImageUrl;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a URL template or a map keyed by route prefix")
    }

    fn visit_str<E: de::Error>(
        self,
        value: &str,
    ) -> std::result::Result<Self::Value, E> {
        Ok(RawOgImageUrl::Single(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        RawPrefixMapVisitor {
            marker: PhantomData,
        }
        .visit_map(access)
        .map(RawOgImageUrl::Routed)
    }
}

impl<'de> Deserialize<'de> for RawOgImageUrl {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(RawOgImageUrlVisitor)
    }
}
