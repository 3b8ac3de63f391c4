// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for DocNav
//!
//! This module provides the command-line interface for checking a site
//! configuration and inspecting what a renderer would see for a given page.
//!
//! # Examples
//!
//! ```
//! use docnav::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "docnav",
//!     "sidebar",
//!     "docs.toml",
//!     "/sdk/setup",
//!     "--json",
//! ]);
//!
//! let sidebar = matches.subcommand_matches("sidebar").unwrap();
//! assert_eq!(sidebar.get_one::<String>("path").unwrap(), "/sdk/setup");
//! assert!(sidebar.get_flag("json"));
//! ```

use crate::core::config::ConfigBuilder;
use crate::core::error::{DocNavError, Result};
use crate::core::traits::Navigable;
use crate::nav::NavItem;
use crate::resolve::active_trail;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// The current version of DocNav, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds and configures the DocNav command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    let config_arg = Arg::new("config")
        .help("Site configuration file (.toml, .json, .yaml)")
        .required(true)
        .value_parser(value_parser!(PathBuf));

    Command::new("docnav")
        .author("DocNav Contributors")
        .about("Validates and inspects documentation site navigation.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a site configuration")
                .arg(config_arg.clone())
                .arg(
                    Arg::new("deny-warnings")
                        .long("deny-warnings")
                        .help("Treat warnings as errors")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("sidebar")
                .about("Show the sidebar resolved for a page path")
                .arg(config_arg.clone())
                .arg(
                    Arg::new("path")
                        .help("Page path, e.g. /sdk/setup")
                        .required(true)
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the resolved entries as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Print the normalized configuration as JSON")
                .arg(config_arg),
        )
}

/// Executes the parsed command line.
///
/// # Returns
/// * `Result<()>` - Indicates success, or an error if execution fails.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            let config = required::<PathBuf>(sub_matches, "config")?;
            let deny = sub_matches.get_flag("deny-warnings");
            println!("{}", check(config, deny)?);
            Ok(())
        }
        Some(("sidebar", sub_matches)) => {
            let config = required::<PathBuf>(sub_matches, "config")?;
            let path = required::<String>(sub_matches, "path")?;
            let json = sub_matches.get_flag("json");
            println!("{}", sidebar(config, path, json)?);
            Ok(())
        }
        Some(("export", sub_matches)) => {
            let config = required::<PathBuf>(sub_matches, "config")?;
            println!("{}", export(config)?);
            Ok(())
        }
        _ => Err(DocNavError::config("Unknown command", None)),
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a T> {
    matches.get_one::<T>(name).ok_or_else(|| {
        DocNavError::config(format!("Missing argument: {}", name), None)
    })
}

/// Validates the file at `config`, returning a summary with any warnings.
fn check(config: &Path, deny_warnings: bool) -> Result<String> {
    info!("Checking {}", config.display());

    let validated = ConfigBuilder::new()
        .with_file(config)
        .deny_warnings(deny_warnings)
        .build_validated()?;

    let mut out = String::new();
    for warning in &validated.warnings {
        _ = writeln!(out, "{}", warning);
    }
    _ = write!(
        out,
        "{}: ok ({} sidebar route(s), {} top nav entr(ies), {} warning(s))",
        config.display(),
        validated.config.sidebar().len(),
        validated.config.top_nav().len(),
        validated.warnings.len()
    );
    Ok(out)
}

/// Resolves the sidebar for `path` and renders it as text or JSON.
fn sidebar(config: &Path, path: &str, json: bool) -> Result<String> {
    let config = ConfigBuilder::new().with_file(config).build()?;
    let route = config
        .sidebar()
        .longest_match(path)
        .map(|(key, _)| key.to_string());
    let items = config.resolve_sidebar(path);

    if json {
        return to_json(&items);
    }

    let mut out = String::new();
    match route {
        Some(route) => {
            _ = writeln!(out, "{} (route {})", path, route);
            let trail = active_trail(items, path);
            if !trail.is_empty() {
                _ = writeln!(out, "active: {}", trail.join(" > "));
            }
            render_tree(items, path, 0, &mut out);
        }
        None => {
            _ = write!(out, "{}: no sidebar registered", path);
        }
    }
    Ok(out.trim_end().to_string())
}

/// Prints the normalized configuration.
fn export(config: &Path) -> Result<String> {
    let config = ConfigBuilder::new().with_file(config).build()?;
    to_json(config.as_ref())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        DocNavError::config(format!("Failed to serialize output: {}", e), None)
    })
}

/// Renders `items` as an indented tree. Active entries are marked `*`,
/// groups `[-]` when open and `[+]` when collapsed for `path`.
pub fn render_tree(
    items: &[NavItem],
    path: &str,
    depth: usize,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);
    for item in items {
        let marker = if item.is_active(path) { "*" } else { " " };
        match item {
            NavItem::Leaf(leaf) => {
                _ = writeln!(
                    out,
                    "{}{} {}  {}",
                    indent, marker, leaf.text, leaf.link
                );
            }
            NavItem::Group(group) => {
                let expanded = group.is_expanded(path);
                let toggle = if expanded { "[-]" } else { "[+]" };
                _ = writeln!(out, "{}{} {} {}", indent, marker, toggle, group.text);
                if expanded {
                    render_tree(&group.items, path, depth + 1, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Link, NavGroup, NavLeaf};
    use std::fs;
    use tempfile::TempDir;

    fn get_matches(args: Vec<&str>) -> ArgMatches {
        build().get_matches_from(args)
    }

    fn leaf(text: &str, link: &str) -> NavItem {
        NavItem::Leaf(NavLeaf {
            text: text.to_string(),
            link: Link::parse(link).unwrap(),
            match_prefix: None,
        })
    }

    #[test]
    fn test_check_command() {
        let matches = get_matches(vec![
            "docnav",
            "-v",
            "check",
            "docs.toml",
            "--deny-warnings",
        ]);
        assert_eq!(matches.get_count("verbose"), 1);
        let check_cmd = matches.subcommand_matches("check").unwrap();
        assert_eq!(
            check_cmd.get_one::<PathBuf>("config").unwrap(),
            &PathBuf::from("docs.toml")
        );
        assert!(check_cmd.get_flag("deny-warnings"));
    }

    #[test]
    fn test_export_command() {
        let matches = get_matches(vec!["docnav", "export", "docs.json"]);
        assert!(matches.subcommand_matches("export").is_some());
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(build().try_get_matches_from(vec!["docnav"]).is_err());
    }

    #[test]
    fn test_render_tree() {
        let items = vec![
            NavItem::Group(NavGroup {
                text: "Getting Started".to_string(),
                link: None,
                match_prefix: None,
                collapsed: false,
                items: vec![leaf("Introduction", "/")],
            }),
            NavItem::Group(NavGroup {
                text: "Knowledge Base".to_string(),
                link: None,
                match_prefix: None,
                collapsed: true,
                items: vec![leaf("Smart accounts", "/kb/smart-account")],
            }),
        ];
        let mut out = String::new();
        render_tree(&items, "/", 0, &mut out);
        assert_eq!(
            out,
            "  [-] Getting Started\n  * Introduction  /\n  [+] Knowledge Base\n"
        );
    }

    #[test]
    fn test_check_and_sidebar_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs.json");
        fs::write(
            &path,
            r#"{ "sidebar": {
                "/": [{ "text": "Home", "link": "/" }],
                "/sdk": [{ "text": "Setup", "link": "/sdk/setup", "collapsed": true }]
            } }"#,
        )
        .unwrap();

        let summary = check(&path, false).unwrap();
        assert!(summary.contains("misplaced-collapsed"));
        assert!(summary.ends_with("2 sidebar route(s), 0 top nav entr(ies), 1 warning(s))"));
        assert!(check(&path, true).is_err());

        let text = sidebar(&path, "/sdk/setup", false).unwrap();
        assert!(text.starts_with("/sdk/setup (route /sdk)"));
        assert!(text.contains("* Setup  /sdk/setup"));

        let json = sidebar(&path, "/sdk/setup", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["link"], "/sdk/setup");

        let none = sidebar(&path, "nowhere", false).unwrap();
        assert_eq!(none, "nowhere: no sidebar registered");
    }
}
