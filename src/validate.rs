// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Navigation Config Validator
//!
//! Walks a [`RawSiteConfig`] once, collecting every defect instead of
//! stopping at the first, and builds the normalized [`SiteConfig`] when no
//! fatal finding was recorded.
//!
//! ```
//! use docnav::raw::RawSiteConfig;
//! use docnav::validate::validate;
//! use docnav::IssueKind;
//!
//! let raw = RawSiteConfig::from_json_str(r#"{
//!     "sidebar": { "/": [{ "text": "", "link": "/x" }] }
//! }"#).unwrap();
//! let report = validate(&raw).unwrap_err();
//! assert!(report.contains(IssueKind::EmptyLabel));
//! ```

use log::debug;
use std::collections::HashMap;

use crate::core::diagnostics::{
    Issue, IssueKind, NodePath, Report, Severity,
};
use crate::core::error::{DocNavError, Result};
use crate::core::traits::Validator;
use crate::nav::{is_web_url, Link, NavGroup, NavItem, NavLeaf, TopNavEntry};
use crate::prefix::{normalize_key, PrefixMap};
use crate::raw::{
    RawLogoUrl, RawNavItem, RawOgImageUrl, RawSiteConfig, RawTopNavEntry,
    ValidateOptions,
};
use crate::site::{EditLink, LogoUrl, MetaTag, SiteConfig, SocialIcon, SocialLink};

/// A successfully validated configuration and the warnings found on the way.
#[derive(Debug, Clone)]
pub struct Validated {
    /// The normalized configuration.
    pub config: SiteConfig,
    /// Non-fatal findings.
    pub warnings: Vec<Issue>,
}

/// Validates raw site configurations.
///
/// The options embedded in the raw value's `[validate]` section are ignored
/// in favour of the ones the validator was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteValidator {
    options: ValidateOptions,
}

impl SiteValidator {
    /// Creates a validator with the given options.
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// Runs the validation pass, returning the full report on failure.
    pub fn check(
        &self,
        raw: &RawSiteConfig,
    ) -> std::result::Result<Validated, Report> {
        let mut walker = Walker::new(self.options);
        let config = walker.site(raw);
        let issues = walker.finish();

        if issues.iter().any(Issue::is_error) {
            debug!(
                "Validation failed with {} finding(s)",
                issues.len()
            );
            return Err(Report::new(issues));
        }

        for issue in &issues {
            debug!("{}", issue);
        }
        debug!(
            "Validated {} sidebar route(s), {} top nav entr(ies)",
            config.sidebar.len(),
            config.top_nav.len()
        );
        Ok(Validated {
            config,
            warnings: issues,
        })
    }
}

impl Validator for SiteValidator {
    type Input = RawSiteConfig;
    type Output = Validated;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output> {
        self.check(input).map_err(DocNavError::Validation)
    }
}

/// Validates `raw` with the options from its own `[validate]` section.
pub fn validate(raw: &RawSiteConfig) -> std::result::Result<Validated, Report> {
    SiteValidator::new(raw.validate).check(raw)
}

struct Walker {
    options: ValidateOptions,
    issues: Vec<Issue>,
}

impl Walker {
    fn new(options: ValidateOptions) -> Self {
        Self {
            options,
            issues: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Issue> {
        self.issues
    }

    fn report<S: Into<String>>(
        &mut self,
        kind: IssueKind,
        path: &NodePath,
        message: S,
    ) {
        let mut issue = Issue::new(kind, path.clone(), message);
        if self.options.deny_warnings {
            issue.severity = Severity::Error;
        }
        self.issues.push(issue);
    }

    fn site(&mut self, raw: &RawSiteConfig) -> SiteConfig {
        let root = NodePath::root();
        SiteConfig {
            logo_url: raw
                .logo_url
                .as_ref()
                .and_then(|logo| self.logo(logo, &root.field("logo_url"))),
            og_image_url: self.og_images(
                raw.og_image_url.as_ref(),
                &root.field("og_image_url"),
            ),
            edit_link: raw
                .edit_link
                .as_ref()
                .map(|edit| self.edit_link(edit, &root.field("edit_link"))),
            title_template: raw.title_template.as_ref().map(|template| {
                self.title_template(template, &root.field("title_template"))
            }),
            description: raw
                .description
                .as_ref()
                .map(|description| description.trim().to_string()),
            head: self.head(&raw.head, &root.field("head")),
            top_nav: self.top_nav(&raw.top_nav, &root.field("top_nav")),
            socials: self.socials(raw, &root.field("socials")),
            sidebar: self.sidebar(raw, &root.field("sidebar")),
        }
    }

    fn label(&mut self, text: &str, path: &NodePath) -> String {
        let text = text.trim();
        if text.is_empty() {
            self.report(IssueKind::EmptyLabel, path, "label is empty");
        }
        text.to_string()
    }

    fn link(&mut self, raw: &str, path: &NodePath) -> Option<Link> {
        let link = Link::parse(raw);
        if link.is_none() {
            self.report(
                IssueKind::InvalidLink,
                path,
                format!(
                    "`{}` is neither a `/` path nor an http(s) URL",
                    raw
                ),
            );
        }
        link
    }

    fn web_url(&mut self, raw: &str, path: &NodePath) -> Option<Link> {
        let raw = raw.trim();
        if is_web_url(raw) {
            Some(Link::External(raw.to_string()))
        } else {
            self.report(
                IssueKind::InvalidLink,
                path,
                format!("`{}` is not an absolute http(s) URL", raw),
            );
            None
        }
    }

    fn match_prefix(
        &mut self,
        raw: Option<&String>,
        path: &NodePath,
    ) -> Option<String> {
        let raw = raw?.trim();
        if !raw.starts_with('/') {
            self.report(
                IssueKind::InvalidMatch,
                path,
                format!("match pattern `{}` must start with `/`", raw),
            );
        }
        Some(raw.to_string())
    }

    fn logo(&mut self, raw: &RawLogoUrl, path: &NodePath) -> Option<LogoUrl> {
        match raw {
            RawLogoUrl::Single(url) => {
                let link = self.link(url, path)?;
                Some(LogoUrl {
                    light: link.clone(),
                    dark: link,
                })
            }
            RawLogoUrl::Themed { light, dark } => {
                let light = self.themed_logo(light.as_deref(), path, "light");
                let dark = self.themed_logo(dark.as_deref(), path, "dark");
                Some(LogoUrl {
                    light: light?,
                    dark: dark?,
                })
            }
        }
    }

    fn themed_logo(
        &mut self,
        raw: Option<&str>,
        path: &NodePath,
        theme: &'static str,
    ) -> Option<Link> {
        let path = path.field(theme);
        match raw {
            Some(url) => self.link(url, &path),
            None => {
                self.report(
                    IssueKind::MissingLink,
                    &path,
                    format!("no logo for the {} theme", theme),
                );
                None
            }
        }
    }

    fn og_images(
        &mut self,
        raw: Option<&RawOgImageUrl>,
        path: &NodePath,
    ) -> PrefixMap<String> {
        let mut map = PrefixMap::new();
        let entries: Vec<(&str, &String)> = match raw {
            None => return map,
            Some(RawOgImageUrl::Single(template)) => vec![("/", template)],
            Some(RawOgImageUrl::Routed(routed)) => routed
                .entries()
                .iter()
                .map(|(key, template)| (key.as_str(), template))
                .collect(),
        };

        for (raw_key, template) in entries {
            let entry_path = path.key(raw_key);
            let key = self.route_key(raw_key, &entry_path);
            let template = self.web_url(template, &entry_path);
            if let (Some(key), Some(template)) = (key, template) {
                if !map.insert(key.clone(), template.as_str().to_string()) {
                    self.report(
                        IssueKind::DuplicateOgImageKey,
                        &entry_path,
                        format!("route `{}` is registered twice", key),
                    );
                }
            }
        }
        map
    }

    fn route_key(&mut self, raw: &str, path: &NodePath) -> Option<String> {
        let key = normalize_key(raw);
        if key.starts_with('/') {
            Some(key)
        } else {
            self.report(
                IssueKind::InvalidRouteKey,
                path,
                format!("route key `{}` must start with `/`", raw),
            );
            None
        }
    }

    fn edit_link(&mut self, raw: &EditLink, path: &NodePath) -> EditLink {
        let pattern_path = path.field("pattern");
        let pattern = raw.pattern.trim().to_string();
        if self.web_url(&pattern, &pattern_path).is_some()
            && !pattern.contains(":path")
        {
            self.report(
                IssueKind::MissingPlaceholder,
                &pattern_path,
                "edit link pattern has no `:path` placeholder",
            );
        }
        let text = raw
            .text
            .as_ref()
            .map(|text| self.label(text, &path.field("text")));
        EditLink { pattern, text }
    }

    fn title_template(&mut self, raw: &str, path: &NodePath) -> String {
        if !raw.contains("%s") {
            self.report(
                IssueKind::MissingPlaceholder,
                path,
                "title template has no `%s` placeholder",
            );
        }
        raw.to_string()
    }

    fn head(&mut self, raw: &[MetaTag], path: &NodePath) -> Vec<MetaTag> {
        raw.iter()
            .enumerate()
            .map(|(i, tag)| MetaTag {
                property: self.label(&tag.property, &path.index(i)),
                content: tag.content.trim().to_string(),
            })
            .collect()
    }

    fn top_nav(
        &mut self,
        raw: &[RawTopNavEntry],
        path: &NodePath,
    ) -> Vec<TopNavEntry> {
        raw.iter()
            .enumerate()
            .filter_map(|(i, entry)| self.top_nav_entry(entry, &path.index(i)))
            .collect()
    }

    fn top_nav_entry(
        &mut self,
        raw: &RawTopNavEntry,
        path: &NodePath,
    ) -> Option<TopNavEntry> {
        let text = self.label(&raw.text, path);
        let match_prefix = self.match_prefix(raw.match_prefix.as_ref(), path);
        let link = match &raw.link {
            Some(link) => self.link(link, path),
            None => {
                self.report(
                    IssueKind::MissingLink,
                    path,
                    "top nav entry has no link",
                );
                None
            }
        };
        Some(TopNavEntry {
            text,
            link: link?,
            match_prefix,
        })
    }

    fn socials(
        &mut self,
        raw: &RawSiteConfig,
        path: &NodePath,
    ) -> Vec<SocialLink> {
        let mut socials = Vec::with_capacity(raw.socials.len());
        for (i, social) in raw.socials.iter().enumerate() {
            let entry_path = path.index(i);
            let icon = SocialIcon::parse(&social.icon);
            if icon.is_none() {
                self.report(
                    IssueKind::UnknownSocialIcon,
                    &entry_path,
                    format!("unknown social icon `{}`", social.icon),
                );
            }
            let link = self.web_url(&social.link, &entry_path);
            if let (Some(icon), Some(link)) = (icon, link) {
                socials.push(SocialLink { icon, link });
            }
        }
        socials
    }

    fn sidebar(
        &mut self,
        raw: &RawSiteConfig,
        path: &NodePath,
    ) -> PrefixMap<Vec<NavItem>> {
        let mut sidebar = PrefixMap::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for (raw_key, raw_items) in raw.sidebar.entries() {
            let entry_path = path.key(raw_key);
            let key = self.route_key(raw_key, &entry_path);

            if let Some(key) = &key {
                if let Some(first) = seen.get(key) {
                    self.report(
                        IssueKind::DuplicateSidebarKey,
                        &entry_path,
                        format!(
                            "route `{}` duplicates `{}` after trimming trailing slashes",
                            raw_key, first
                        ),
                    );
                } else {
                    _ = seen.insert(key.clone(), raw_key.to_string());
                }
            }

            if raw_items.is_empty() {
                self.report(
                    IssueKind::EmptyChildren,
                    &entry_path,
                    "sidebar route has no entries",
                );
            }

            let items = self.nav_items(raw_items, &entry_path);
            if self.options.unique_links {
                self.unique_links(raw_items, &entry_path);
            }

            if let (Some(key), Some(items)) = (key, items) {
                _ = sidebar.insert(key, items);
            }
        }
        sidebar
    }

    fn nav_items(
        &mut self,
        raw: &[RawNavItem],
        path: &NodePath,
    ) -> Option<Vec<NavItem>> {
        let items: Vec<Option<NavItem>> = raw
            .iter()
            .enumerate()
            .map(|(i, item)| self.nav_item(item, &path.index(i)))
            .collect();
        items.into_iter().collect()
    }

    fn nav_item(&mut self, raw: &RawNavItem, path: &NodePath) -> Option<NavItem> {
        let text = self.label(&raw.text, path);
        let link = raw.link.as_ref().and_then(|link| self.link(link, path));
        let link_ok = raw.link.is_none() || link.is_some();
        let match_prefix = self.match_prefix(raw.match_prefix.as_ref(), path);

        match &raw.items {
            Some(children) => {
                if children.is_empty() {
                    self.report(
                        IssueKind::EmptyChildren,
                        path,
                        "`items` is present but empty",
                    );
                }
                let items = self.nav_items(children, &path.field("items"))?;
                if !link_ok || items.is_empty() {
                    return None;
                }
                Some(NavItem::Group(NavGroup {
                    text,
                    link,
                    match_prefix,
                    collapsed: raw.collapsed.unwrap_or(false),
                    items,
                }))
            }
            None => {
                if raw.collapsed.is_some() {
                    self.report(
                        IssueKind::MisplacedCollapsed,
                        path,
                        "`collapsed` has no effect on an entry without `items`",
                    );
                }
                if raw.link.is_none() {
                    self.report(
                        IssueKind::MissingLink,
                        path,
                        "entry has neither `link` nor `items`",
                    );
                }
                Some(NavItem::Leaf(NavLeaf {
                    text,
                    link: link?,
                    match_prefix,
                }))
            }
        }
    }

    fn unique_links(&mut self, raw: &[RawNavItem], path: &NodePath) {
        let mut leaves = Vec::new();
        collect_raw_leaves(raw, path, &mut leaves);

        let mut seen: HashMap<&str, &NodePath> = HashMap::new();
        let mut duplicates = Vec::new();
        for (link, leaf_path) in &leaves {
            let link = link.as_str();
            match seen.get(link) {
                Some(first) => duplicates.push((
                    leaf_path.clone(),
                    format!("`{}` is already linked at {}", link, first),
                )),
                None => {
                    _ = seen.insert(link, leaf_path);
                }
            }
        }
        for (leaf_path, message) in duplicates {
            self.report(IssueKind::DuplicateLink, &leaf_path, message);
        }
    }
}

/// Site-relative leaf links under `raw`, with trailing slashes trimmed.
fn collect_raw_leaves(
    raw: &[RawNavItem],
    path: &NodePath,
    leaves: &mut Vec<(String, NodePath)>,
) {
    for (i, item) in raw.iter().enumerate() {
        let item_path = path.index(i);
        match (&item.items, &item.link) {
            (Some(children), _) => {
                collect_raw_leaves(children, &item_path.field("items"), leaves)
            }
            (None, Some(link)) if link.trim().starts_with('/') => {
                leaves.push((normalize_key(link), item_path))
            }
            (None, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_json(source: &str) -> RawSiteConfig {
        RawSiteConfig::from_json_str(source).unwrap()
    }

    fn sidebar_with(item: &str) -> RawSiteConfig {
        raw_json(&format!(r#"{{ "sidebar": {{ "/": [{}] }} }}"#, item))
    }

    fn kinds(report: &Report) -> Vec<IssueKind> {
        report.issues().iter().map(|issue| issue.kind).collect()
    }

    #[test]
    fn test_empty_label() {
        let report =
            validate(&sidebar_with(r#"{ "text": "", "link": "/x" }"#))
                .unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::EmptyLabel]);
        assert_eq!(report.issues()[0].path.to_string(), r#"sidebar["/"][0]"#);
    }

    #[test]
    fn test_whitespace_label() {
        let report =
            validate(&sidebar_with(r#"{ "text": "   ", "link": "/x" }"#))
                .unwrap_err();
        assert!(report.contains(IssueKind::EmptyLabel));
    }

    #[test]
    fn test_empty_children() {
        let report =
            validate(&sidebar_with(r#"{ "text": "X", "items": [] }"#))
                .unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::EmptyChildren]);
    }

    #[test]
    fn test_invalid_link() {
        let report =
            validate(&sidebar_with(r#"{ "text": "X", "link": "ftp://bad" }"#))
                .unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::InvalidLink]);
    }

    #[test]
    fn test_missing_link() {
        let report =
            validate(&sidebar_with(r#"{ "text": "X" }"#)).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::MissingLink]);
    }

    #[test]
    fn test_invalid_match() {
        let report = validate(&sidebar_with(
            r#"{ "text": "X", "link": "/x", "match": "x" }"#,
        ))
        .unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::InvalidMatch]);
    }

    #[test]
    fn test_misplaced_collapsed_is_a_warning() {
        let validated = validate(&sidebar_with(
            r#"{ "text": "X", "link": "/x", "collapsed": true }"#,
        ))
        .unwrap();
        assert_eq!(validated.warnings.len(), 1);
        assert_eq!(validated.warnings[0].kind, IssueKind::MisplacedCollapsed);
        assert_eq!(validated.warnings[0].severity, Severity::Warning);

        let items = validated.config.resolve_sidebar("/x");
        assert!(matches!(items[0], NavItem::Leaf(_)));
    }

    #[test]
    fn test_deny_warnings_makes_warnings_fatal() {
        let raw = sidebar_with(
            r#"{ "text": "X", "link": "/x", "collapsed": false }"#,
        );
        let validator = SiteValidator::new(ValidateOptions {
            deny_warnings: true,
            ..ValidateOptions::default()
        });
        let err = validator.validate(&raw).unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(report.errors().count(), 1);
        assert!(report.contains(IssueKind::MisplacedCollapsed));
    }

    #[test]
    fn test_duplicate_sidebar_key_after_trim() {
        let raw = raw_json(
            r#"{ "sidebar": {
                "/meta-infra": [{ "text": "A", "link": "/meta-infra/a" }],
                "/meta-infra/": [{ "text": "B", "link": "/meta-infra/b" }]
            } }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::DuplicateSidebarKey]);
        assert_eq!(
            report.issues()[0].path.to_string(),
            r#"sidebar["/meta-infra/"]"#
        );
    }

    #[test]
    fn test_exact_duplicate_sidebar_key() {
        let raw = raw_json(
            r#"{ "sidebar": {
                "/meta-infra": [{ "text": "A", "link": "/meta-infra/a" }],
                "/meta-infra": [{ "text": "B", "link": "/meta-infra/b" }]
            } }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert!(report.contains(IssueKind::DuplicateSidebarKey));
    }

    #[test]
    fn test_invalid_route_key() {
        let raw = raw_json(
            r#"{ "sidebar": { "sdk": [{ "text": "A", "link": "/sdk" }] } }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::InvalidRouteKey]);
    }

    #[test]
    fn test_empty_sidebar_route() {
        let raw = raw_json(r#"{ "sidebar": { "/wallet": [] } }"#);
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::EmptyChildren]);
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let raw = raw_json(
            r#"{
                "topNav": [{ "text": "", "link": "/" }],
                "sidebar": { "/": [
                    { "text": "Group", "items": [
                        { "text": "A", "link": "ftp://bad" },
                        { "text": "B", "items": [] }
                    ] }
                ] }
            }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert_eq!(
            kinds(&report),
            vec![
                IssueKind::EmptyLabel,
                IssueKind::InvalidLink,
                IssueKind::EmptyChildren,
            ]
        );
        let paths: Vec<String> = report
            .issues()
            .iter()
            .map(|issue| issue.path.to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "top_nav[0]",
                r#"sidebar["/"][0].items[0]"#,
                r#"sidebar["/"][0].items[1]"#,
            ]
        );
    }

    #[test]
    fn test_duplicate_leaf_links_warn() {
        let raw = raw_json(
            r#"{ "sidebar": { "/": [
                { "text": "Intro", "link": "/sdk" },
                { "text": "More", "items": [
                    { "text": "Again", "link": "/sdk" },
                    { "text": "Demo", "link": "https://github.com/zerodevapp/cab-demo" },
                    { "text": "Demo again", "link": "https://github.com/zerodevapp/cab-demo" }
                ] }
            ] } }"#,
        );
        let validated = validate(&raw).unwrap();
        assert_eq!(validated.warnings.len(), 1);
        let warning = &validated.warnings[0];
        assert_eq!(warning.kind, IssueKind::DuplicateLink);
        assert_eq!(warning.path.to_string(), r#"sidebar["/"][1].items[0]"#);
    }

    #[test]
    fn test_duplicate_links_ignore_trailing_slash() {
        let raw = raw_json(
            r#"{ "sidebar": { "/sdk": [
                { "text": "Setup", "link": "/sdk/setup" },
                { "text": "Setup again", "link": "/sdk/setup/" },
                { "text": "Home", "link": "/" }
            ] } }"#,
        );
        let validated = validate(&raw).unwrap();
        assert_eq!(validated.warnings.len(), 1);
        assert_eq!(validated.warnings[0].kind, IssueKind::DuplicateLink);
        assert_eq!(
            validated.warnings[0].path.to_string(),
            r#"sidebar["/sdk"][1]"#
        );
    }

    #[test]
    fn test_same_link_under_different_routes_is_fine() {
        let raw = raw_json(
            r#"{ "sidebar": {
                "/": [{ "text": "Wallet", "link": "/wallet" }],
                "/wallet": [{ "text": "Introduction", "link": "/wallet" }]
            } }"#,
        );
        assert!(validate(&raw).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_unique_links_can_be_disabled() {
        let raw = raw_json(
            r#"{
                "validate": { "unique_links": false },
                "sidebar": { "/": [
                    { "text": "A", "link": "/a" },
                    { "text": "B", "link": "/a" }
                ] }
            }"#,
        );
        assert!(validate(&raw).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_top_nav_requires_link() {
        let raw = raw_json(r#"{ "topNav": [{ "text": "Blog", "match": "/blog" }] }"#);
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::MissingLink]);
    }

    #[test]
    fn test_socials() {
        let raw = raw_json(
            r#"{ "socials": [
                { "icon": "github", "link": "https://github.com/zerodevapp" },
                { "icon": "myspace", "link": "https://myspace.com/x" },
                { "icon": "discord", "link": "/discord" }
            ] }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert_eq!(
            kinds(&report),
            vec![IssueKind::UnknownSocialIcon, IssueKind::InvalidLink]
        );
    }

    #[test]
    fn test_placeholders_warn() {
        let raw = raw_json(
            r#"{
                "titleTemplate": "ZeroDev",
                "editLink": { "pattern": "https://github.com/zerodevapp/docs/edit/main", "text": "Edit" }
            }"#,
        );
        let validated = validate(&raw).unwrap();
        let kinds: Vec<IssueKind> =
            validated.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::MissingPlaceholder, IssueKind::MissingPlaceholder]
        );
    }

    #[test]
    fn test_edit_link_must_be_absolute() {
        let raw = raw_json(r#"{ "editLink": { "pattern": "/edit/:path" } }"#);
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::InvalidLink]);
    }

    #[test]
    fn test_og_images() {
        let raw = raw_json(
            r#"{ "ogImageUrl": {
                "/": "https://og.example/api?title=%title",
                "/sdk/": "https://og.example/sdk?title=%title",
                "/sdk": "https://og.example/dup"
            } }"#,
        );
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::DuplicateOgImageKey]);

        let raw = raw_json(r#"{ "ogImageUrl": "https://og.example/api" }"#);
        let config = validate(&raw).unwrap().config;
        assert_eq!(
            config.og_image_template("/anything"),
            Some("https://og.example/api")
        );
    }

    #[test]
    fn test_logo_normalization() {
        let raw = raw_json(r#"{ "logoUrl": "/logo.svg" }"#);
        let config = validate(&raw).unwrap().config;
        let logo = config.logo_url().unwrap();
        assert_eq!(logo.light, logo.dark);

        let raw = raw_json(r#"{ "logoUrl": { "light": "/l.svg", "dark": "logo.svg" } }"#);
        let report = validate(&raw).unwrap_err();
        assert_eq!(report.issues()[0].path.to_string(), "logo_url.dark");

        let raw = raw_json(r#"{ "logoUrl": { "dark": "/d.svg" } }"#);
        let report = validate(&raw).unwrap_err();
        assert_eq!(kinds(&report), vec![IssueKind::MissingLink]);
        assert_eq!(report.issues()[0].path.to_string(), "logo_url.light");
    }

    #[test]
    fn test_normalizes_tree() {
        let raw = raw_json(
            r#"{ "sidebar": { "/sdk/": [
                { "text": "  Setting up  ", "items": [
                    { "text": "Passkeys", "link": "/sdk/setup/passkeys" }
                ] }
            ] } }"#,
        );
        let config = validate(&raw).unwrap().config;
        let items = config.sidebar().get("/sdk").unwrap();
        match &items[0] {
            NavItem::Group(group) => {
                assert_eq!(group.text, "Setting up");
                assert!(!group.collapsed);
                assert_eq!(group.items.len(), 1);
            }
            NavItem::Leaf(_) => panic!("expected a group"),
        }
    }
}
