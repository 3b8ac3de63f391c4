// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # DocNav Library
//!
//! DocNav validates the navigation configuration of a documentation site
//! (sidebars, top navigation, social links and page metadata) and answers
//! the questions a renderer asks for each page: which sidebar to show and
//! which entries are active.
//!
//! For more information, visit the [DocNav documentation](https://docs.rs/docnav).

#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/docnav")]

/// Module containing core utilities, such as configuration and error handling.
pub mod core;

/// Provides the command-line interface.
pub mod cli;

/// Validated navigation entries.
pub mod nav;

/// Route-prefix maps with longest-prefix lookup.
pub mod prefix;

/// The unchecked configuration shape.
pub mod raw;

/// Request-time lookups over a validated configuration.
pub mod resolve;

/// The validated site configuration.
pub mod site;

/// The navigation config validator.
pub mod validate;

pub use crate::core::config::ConfigBuilder;
pub use crate::core::diagnostics::{Issue, IssueKind, NodePath, Report, Severity};
pub use crate::core::error::{DocNavError, Result};
pub use crate::core::traits::{Navigable, Validator};
pub use crate::nav::{Link, NavGroup, NavItem, NavLeaf, TopNavEntry};
pub use crate::raw::RawSiteConfig;
pub use crate::resolve::{is_active, resolve_sidebar};
pub use crate::site::SiteConfig;
pub use crate::validate::{validate, SiteValidator, Validated};
