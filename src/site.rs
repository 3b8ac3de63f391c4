// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site Configuration
//!
//! The validated, immutable aggregate handed to a renderer. A [`SiteConfig`]
//! can only be produced by [`validate`](crate::validate::validate); its
//! fields are read through accessors and never change afterwards.
//!
//! The templates it carries (`%s` in the title template, `:path` in the
//! edit-link pattern, `%title`/`%description` in OG image URLs) are exposed
//! as written. Substitution is the renderer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nav::{Link, NavItem, TopNavEntry};
use crate::prefix::PrefixMap;

/// Logo locations per colour scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoUrl {
    /// Logo shown on light backgrounds.
    pub light: Link,
    /// Logo shown on dark backgrounds.
    pub dark: Link,
}

/// The "edit this page" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// URL pattern containing a `:path` placeholder.
    pub pattern: String,
    /// Link label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A `<meta>` tag injected into every page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    /// The `property` attribute, e.g. `og:title`.
    pub property: String,
    /// The `content` attribute.
    pub content: String,
}

/// Platforms a social link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// Discord.
    Discord,
    /// GitHub.
    Github,
    /// Telegram.
    Telegram,
    /// Warpcast.
    Warpcast,
    /// X, formerly Twitter.
    X,
}

impl SocialIcon {
    /// All known icons.
    pub const ALL: [SocialIcon; 5] = [
        SocialIcon::Discord,
        SocialIcon::Github,
        SocialIcon::Telegram,
        SocialIcon::Warpcast,
        SocialIcon::X,
    ];

    /// Looks up an icon by its identifier, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(raw))
    }

    /// The identifier used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            SocialIcon::Discord => "discord",
            SocialIcon::Github => "github",
            SocialIcon::Telegram => "telegram",
            SocialIcon::Warpcast => "warpcast",
            SocialIcon::X => "x",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link to the project's presence on another platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform icon.
    pub icon: SocialIcon,
    /// Absolute URL.
    pub link: Link,
}

/// Validated site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) logo_url: Option<LogoUrl>,
    pub(crate) og_image_url: PrefixMap<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) edit_link: Option<EditLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) head: Vec<MetaTag>,
    pub(crate) top_nav: Vec<TopNavEntry>,
    pub(crate) socials: Vec<SocialLink>,
    pub(crate) sidebar: PrefixMap<Vec<NavItem>>,
}

impl SiteConfig {
    /// Logo locations, if configured.
    pub fn logo_url(&self) -> Option<&LogoUrl> {
        self.logo_url.as_ref()
    }

    /// OG image URL templates keyed by path prefix.
    pub fn og_image_urls(&self) -> &PrefixMap<String> {
        &self.og_image_url
    }

    /// The OG image template registered under the longest prefix of
    /// `current_path`.
    pub fn og_image_template(&self, current_path: &str) -> Option<&str> {
        self.og_image_url
            .longest_match(current_path)
            .map(|(_, template)| template.as_str())
    }

    /// The edit-link pattern and label.
    pub fn edit_link(&self) -> Option<&EditLink> {
        self.edit_link.as_ref()
    }

    /// Page title template containing `%s`.
    pub fn title_template(&self) -> Option<&str> {
        self.title_template.as_deref()
    }

    /// Site-wide description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Meta tags injected into every page.
    pub fn head(&self) -> &[MetaTag] {
        &self.head
    }

    /// Top navigation bar entries.
    pub fn top_nav(&self) -> &[TopNavEntry] {
        &self.top_nav
    }

    /// Social links.
    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }

    /// All sidebars keyed by path prefix.
    pub fn sidebar(&self) -> &PrefixMap<Vec<NavItem>> {
        &self.sidebar
    }

    /// The sidebar shown on `current_path`. See
    /// [`resolve_sidebar`](crate::resolve::resolve_sidebar).
    pub fn resolve_sidebar(&self, current_path: &str) -> &[NavItem] {
        crate::resolve::resolve_sidebar(self, current_path)
    }
}
