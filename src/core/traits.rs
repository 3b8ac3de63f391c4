// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Core Traits Module
//!
//! The two seams of the library:
//!
//! - [`Validator`]: turns a raw, loosely-shaped value into a checked one.
//! - [`Navigable`]: anything that can be highlighted as the current page in a
//!   navigation bar or sidebar.

use crate::core::error::Result;
use crate::nav::Link;

/// Trait for implementing configuration validation.
///
/// Implementations check a raw input and, on success, produce the
/// normalized output. Failures are reported through the crate
/// [`Result`](crate::Result).
pub trait Validator: Send + Sync + std::fmt::Debug {
    /// The raw value being validated.
    type Input;
    /// The normalized value produced on success.
    type Output;

    /// Validates the input.
    ///
    /// # Arguments
    ///
    /// * `input` - The value to validate
    ///
    /// # Returns
    ///
    /// A `Result` holding the normalized value, or the reason it was rejected.
    fn validate(&self, input: &Self::Input) -> Result<Self::Output>;
}

/// A navigation entry that can be matched against the current page path.
pub trait Navigable {
    /// The display label.
    fn text(&self) -> &str;

    /// The link target, if the entry has one.
    fn link(&self) -> Option<&Link>;

    /// The path prefix that also marks this entry active.
    fn match_prefix(&self) -> Option<&str>;

    /// Returns `true` if `current_path` is this entry's page, or falls under
    /// its `match` prefix.
    fn is_active(&self, current_path: &str) -> bool {
        let exact = self
            .link()
            .map_or(false, |link| link.as_str() == current_path);
        exact
            || self
                .match_prefix()
                .map_or(false, |prefix| current_path.starts_with(prefix))
    }
}
