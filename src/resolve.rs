// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Request-time Lookups
//!
//! Read-only queries a renderer makes against a validated [`SiteConfig`]
//! for the page it is rendering. None of them can fail.

use crate::core::traits::Navigable;
use crate::nav::NavItem;
use crate::site::SiteConfig;

/// Returns the sidebar registered under the longest key that is a prefix of
/// `current_path`, or an empty slice if no key matches.
///
/// ```
/// use docnav::raw::RawSiteConfig;
/// use docnav::resolve::resolve_sidebar;
/// use docnav::validate::validate;
///
/// let raw = RawSiteConfig::from_json_str(r#"{ "sidebar": {
///     "/": [{ "text": "Home", "link": "/" }],
///     "/react": [{ "text": "useBalance", "link": "/react/use-balance" }]
/// } }"#).unwrap();
/// let config = validate(&raw).unwrap().config;
///
/// let items = resolve_sidebar(&config, "/react/use-balance");
/// assert_eq!(items.len(), 1);
/// ```
pub fn resolve_sidebar<'a>(
    config: &'a SiteConfig,
    current_path: &str,
) -> &'a [NavItem] {
    config
        .sidebar()
        .longest_match(current_path)
        .map(|(_, items)| items.as_slice())
        .unwrap_or(&[])
}

/// Returns `true` if `current_path` is the entry's link, or starts with its
/// `match` prefix.
pub fn is_active<N: Navigable + ?Sized>(item: &N, current_path: &str) -> bool {
    item.is_active(current_path)
}

/// Labels from the sidebar root down to the active entry, if any entry of
/// `items` is active for `current_path`.
pub fn active_trail<'a>(
    items: &'a [NavItem],
    current_path: &str,
) -> Vec<&'a str> {
    for item in items {
        if !item.contains_active(current_path) {
            continue;
        }
        let mut trail = vec![item.text()];
        trail.extend(active_trail(item.items(), current_path));
        return trail;
    }
    Vec::new()
}
