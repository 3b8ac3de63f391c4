// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The `config` module loads and builds site configurations
pub mod config;

/// The `diagnostics` module describes validation findings
pub mod diagnostics;

/// The `error` module provides error handling
pub mod error;

/// The `traits` module provides common traits
pub mod traits;
