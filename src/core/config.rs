// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Configuration Module
//!
//! Loads a site configuration and hands back the validated, immutable
//! [`SiteConfig`]. This is the single place a configuration is constructed;
//! the result is shared read-only through an [`Arc`].
//!
//! ## Features
//!
//! - TOML, JSON and YAML sources, chosen by file extension
//! - Environment variable and programmatic overrides
//! - Validation before anything is handed out
//!
//! ## Example
//!
//! ```rust,no_run
//! use docnav::core::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("docs.toml")
//!     .with_env_prefix("DOCNAV_")
//!     .deny_warnings(true)
//!     .build()
//!     .unwrap();
//!
//! let sidebar = config.resolve_sidebar("/sdk/setup");
//! println!("{} entries", sidebar.len());
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::error::{DocNavError, Result};
use crate::core::traits::Validator;
use crate::raw::{RawLogoUrl, RawSiteConfig};
use crate::site::{EditLink, SiteConfig};
use crate::validate::{SiteValidator, Validated};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Parses `source` in this format.
    pub fn parse(self, source: &str) -> Result<RawSiteConfig> {
        match self {
            Format::Toml => RawSiteConfig::from_toml_str(source),
            Format::Json => RawSiteConfig::from_json_str(source),
            Format::Yaml => RawSiteConfig::from_yaml_str(source),
        }
    }
}

/// Builds a validated [`SiteConfig`] from a file or an in-memory value,
/// applying overrides first.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    raw: Option<RawSiteConfig>,
    env_prefix: Option<String>,
    deny_warnings: Option<bool>,
    overrides: BTreeMap<String, String>,
}

impl ConfigBuilder {
    /// Initialises a new `ConfigBuilder` with no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from a file.
    ///
    /// # Parameters
    /// - `path`: A `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Starts from an in-memory raw configuration. Ignored if a file is set.
    pub fn with_raw(mut self, raw: RawSiteConfig) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Adds a prefix for environment variables that override configuration
    /// values.
    ///
    /// `DOCNAV_TITLE_TEMPLATE` sets `title_template`; a double underscore
    /// separates sections, so `DOCNAV_EDIT_LINK__PATTERN` sets
    /// `edit_link.pattern`.
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Overrides a single value. Applied after environment overrides.
    ///
    /// # Parameters
    /// - `key`: One of `title_template`, `description`, `edit_link.pattern`,
    ///   `edit_link.text`, `logo_url.light`, `logo_url.dark`,
    ///   `validate.deny_warnings`, `validate.unique_links`.
    /// - `value`: The new value.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        _ = self.overrides.insert(key.into(), value.into());
        self
    }

    /// Treats every validation warning as an error. Takes precedence over the
    /// file's `[validate]` section.
    pub fn deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = Some(deny);
        self
    }

    /// Builds the configuration. Validation warnings are dropped after being
    /// logged with `warn!`.
    pub fn build(self) -> Result<Arc<SiteConfig>> {
        let validated = self.build_validated()?;
        for warning in &validated.warnings {
            warn!("{}", warning);
        }
        Ok(Arc::new(validated.config))
    }

    /// Builds the configuration and returns it with the warnings found.
    /// Nothing is logged per warning; the caller reports them.
    pub fn build_validated(self) -> Result<Validated> {
        let mut raw = match (&self.config_file, self.raw) {
            (Some(path), _) => load_from_file(path)?,
            (None, Some(raw)) => raw,
            (None, None) => RawSiteConfig::default(),
        };

        if let Some(prefix) = &self.env_prefix {
            apply_env_overrides(&mut raw, prefix)?;
        }
        apply_overrides(&mut raw, &self.overrides)?;

        if let Some(deny) = self.deny_warnings {
            raw.validate.deny_warnings = deny;
        }

        let validated = SiteValidator::new(raw.validate).validate(&raw)?;
        info!(
            "Loaded site config with {} sidebar route(s) and {} warning(s)",
            validated.config.sidebar().len(),
            validated.warnings.len()
        );
        Ok(validated)
    }
}

/// Reads and parses a configuration file without validating it.
pub fn load_from_file(path: &Path) -> Result<RawSiteConfig> {
    let format = Format::from_path(path).ok_or_else(|| {
        DocNavError::config(
            format!(
                "Unsupported config file extension: {}",
                path.display()
            ),
            Some(path.to_path_buf()),
        )
    })?;
    debug!("Reading {:?} config from {}", format, path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| DocNavError::io(path.to_path_buf(), e))?;

    format.parse(&content).map_err(|e| match e {
        DocNavError::Parse {
            format, message, ..
        } => DocNavError::parse(format, message, Some(path.to_path_buf())),
        other => other,
    })
}

fn apply_env_overrides(raw: &mut RawSiteConfig, prefix: &str) -> Result<()> {
    let mut vars: Vec<(String, String)> = env::vars()
        .filter_map(|(key, value)| {
            let stripped = key.strip_prefix(prefix)?;
            let config_key = stripped
                .trim_start_matches('_')
                .to_lowercase()
                .replace("__", ".");
            Some((config_key, value))
        })
        .collect();
    vars.sort();

    for (key, value) in vars {
        debug!("Applying environment override for `{}`", key);
        apply_config_value(raw, &key, &value)?;
    }
    Ok(())
}

fn apply_overrides(
    raw: &mut RawSiteConfig,
    overrides: &BTreeMap<String, String>,
) -> Result<()> {
    for (key, value) in overrides {
        apply_config_value(raw, key, value)?;
    }
    Ok(())
}

fn apply_config_value(
    raw: &mut RawSiteConfig,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "title_template" => raw.title_template = Some(value.to_string()),
        "description" => raw.description = Some(value.to_string()),
        _ => {
            let Some((section, field)) = key.split_once('.') else {
                return Err(DocNavError::config(
                    format!("Unknown configuration key: {}", key),
                    None,
                ));
            };
            match section {
                "edit_link" => apply_edit_link_value(raw, field, value)?,
                "logo_url" => apply_logo_value(raw, field, value)?,
                "validate" => apply_validate_value(raw, field, value)?,
                _ => {
                    return Err(DocNavError::config(
                        format!(
                            "Unknown configuration section: {}",
                            section
                        ),
                        None,
                    ));
                }
            }
        }
    }
    Ok(())
}

fn apply_edit_link_value(
    raw: &mut RawSiteConfig,
    key: &str,
    value: &str,
) -> Result<()> {
    let edit_link = raw.edit_link.get_or_insert_with(|| EditLink {
        pattern: String::new(),
        text: None,
    });
    match key {
        "pattern" => edit_link.pattern = value.to_string(),
        "text" => edit_link.text = Some(value.to_string()),
        _ => return Err(unknown_key("edit_link", key)),
    }
    Ok(())
}

fn apply_logo_value(
    raw: &mut RawSiteConfig,
    key: &str,
    value: &str,
) -> Result<()> {
    let (mut light, mut dark) = match raw.logo_url.take() {
        Some(RawLogoUrl::Single(url)) => (Some(url.clone()), Some(url)),
        Some(RawLogoUrl::Themed { light, dark }) => (light, dark),
        None => (None, None),
    };
    match key {
        "light" => light = Some(value.to_string()),
        "dark" => dark = Some(value.to_string()),
        _ => return Err(unknown_key("logo_url", key)),
    }
    raw.logo_url = Some(RawLogoUrl::Themed { light, dark });
    Ok(())
}

fn apply_validate_value(
    raw: &mut RawSiteConfig,
    key: &str,
    value: &str,
) -> Result<()> {
    let target = match key {
        "deny_warnings" => &mut raw.validate.deny_warnings,
        "unique_links" => &mut raw.validate.unique_links,
        _ => return Err(unknown_key("validate", key)),
    };
    *target = value.parse().map_err(|e| {
        DocNavError::config(
            format!("Invalid {} value '{}': {}", key, value, e),
            None,
        )
    })?;
    Ok(())
}

fn unknown_key(section: &str, key: &str) -> DocNavError {
    DocNavError::config(
        format!("Unknown configuration key: {}.{}", section, key),
        None,
    )
}
