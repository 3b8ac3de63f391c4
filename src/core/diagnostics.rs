// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Validation Diagnostics
//!
//! Structured findings produced while validating a site configuration. Every
//! [`Issue`] names its [`IssueKind`], a [`Severity`] and the [`NodePath`] of
//! the offending node, so callers can point at the exact navigation entry
//! that is malformed. A [`Report`] collects every finding of one pass.

use serde::Serialize;
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Non-fatal; validation still succeeds.
    Warning,
    /// Fatal; validation produces no configuration.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// The kind of defect a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A label is empty or whitespace-only.
    EmptyLabel,
    /// A link is neither a `/` path nor an `http(s)://` URL, or a URL was
    /// required and a path was given.
    InvalidLink,
    /// `items` is present but has no elements.
    EmptyChildren,
    /// `collapsed` is set on a node without `items`.
    MisplacedCollapsed,
    /// Two sidebar keys are identical after trimming trailing slashes.
    DuplicateSidebarKey,
    /// Two OG image keys are identical after trimming trailing slashes.
    DuplicateOgImageKey,
    /// A node has neither a link nor children.
    MissingLink,
    /// A `match` pattern does not start with `/`.
    InvalidMatch,
    /// A sidebar or OG image key does not start with `/`.
    InvalidRouteKey,
    /// Two leaves under one sidebar route point at the same path.
    DuplicateLink,
    /// A social link names an icon outside the known set.
    UnknownSocialIcon,
    /// A template lacks the placeholder the renderer substitutes.
    MissingPlaceholder,
}

impl IssueKind {
    /// The severity this kind carries unless warnings are denied.
    pub fn default_severity(self) -> Severity {
        match self {
            IssueKind::MisplacedCollapsed
            | IssueKind::DuplicateLink
            | IssueKind::MissingPlaceholder => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short stable identifier, used in rendered reports.
    pub fn code(self) -> &'static str {
        match self {
            IssueKind::EmptyLabel => "empty-label",
            IssueKind::InvalidLink => "invalid-link",
            IssueKind::EmptyChildren => "empty-children",
            IssueKind::MisplacedCollapsed => "misplaced-collapsed",
            IssueKind::DuplicateSidebarKey => "duplicate-sidebar-key",
            IssueKind::DuplicateOgImageKey => "duplicate-og-image-key",
            IssueKind::MissingLink => "missing-link",
            IssueKind::InvalidMatch => "invalid-match",
            IssueKind::InvalidRouteKey => "invalid-route-key",
            IssueKind::DuplicateLink => "duplicate-link",
            IssueKind::UnknownSocialIcon => "unknown-social-icon",
            IssueKind::MissingPlaceholder => "missing-placeholder",
        }
    }
}

/// One step in a [`NodePath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field, e.g. `items`.
    Field(&'static str),
    /// A map key, e.g. a sidebar route.
    Key(String),
    /// A position in a sequence.
    Index(usize),
}

/// Location of a node inside the raw configuration tree.
///
/// Renders as `sidebar["/sdk"][0].items[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// The empty path, pointing at the configuration root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a copy of this path extended with a field name.
    pub fn field(&self, name: &'static str) -> Self {
        self.push(PathSegment::Field(name))
    }

    /// Returns a copy of this path extended with a map key.
    pub fn key<S: Into<String>>(&self, key: S) -> Self {
        self.push(PathSegment::Key(key.into()))
    }

    /// Returns a copy of this path extended with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// What is wrong.
    pub kind: IssueKind,
    /// Whether the finding prevents a usable configuration.
    pub severity: Severity,
    /// Where in the raw tree the offending node sits.
    pub path: NodePath,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Creates a finding with the kind's default severity.
    pub fn new<S: Into<String>>(
        kind: IssueKind,
        path: NodePath,
        message: S,
    ) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            path,
            message: message.into(),
        }
    }

    /// Returns `true` for fatal findings.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.kind.code(),
            self.path,
            self.message
        )
    }
}

/// Every finding of one validation pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    /// Wraps a list of findings.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// All findings, errors and warnings alike.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Fatal findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    /// Non-fatal findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Returns `true` if any finding is fatal.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    /// Returns `true` if a finding of `kind` was recorded.
    pub fn contains(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }

    /// Consumes the report, returning the findings.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors().count();
        write!(
            f,
            "config validation failed with {} error(s)",
            errors
        )?;
        for issue in &self.issues {
            write!(f, "\n  {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display() {
        let path = NodePath::root()
            .field("sidebar")
            .key("/sdk")
            .index(0)
            .field("items")
            .index(2);
        assert_eq!(path.to_string(), r#"sidebar["/sdk"][0].items[2]"#);
        assert_eq!(NodePath::root().to_string(), "<root>");
    }

    #[test]
    fn test_default_severities() {
        assert_eq!(
            IssueKind::MisplacedCollapsed.default_severity(),
            Severity::Warning
        );
        assert_eq!(
            IssueKind::DuplicateSidebarKey.default_severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_report_partitions_findings() {
        let root = NodePath::root();
        let report = Report::new(vec![
            Issue::new(IssueKind::EmptyLabel, root.index(0), "empty"),
            Issue::new(
                IssueKind::MisplacedCollapsed,
                root.index(1),
                "leaf",
            ),
        ]);
        assert!(report.has_errors());
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.warnings().count(), 1);
        assert!(report.contains(IssueKind::MisplacedCollapsed));
        assert!(!report.contains(IssueKind::InvalidLink));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(
            IssueKind::InvalidLink,
            NodePath::root().field("top_nav").index(3),
            "`ftp://bad` is not a path or http(s) URL",
        );
        assert_eq!(
            issue.to_string(),
            "error[invalid-link] top_nav[3]: `ftp://bad` is not a path or http(s) URL"
        );
    }

    #[test]
    fn test_issue_serializes_path_as_string() {
        let issue = Issue::new(
            IssueKind::EmptyChildren,
            NodePath::root().field("sidebar").key("/"),
            "no items",
        );
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["path"], r#"sidebar["/"]"#);
        assert_eq!(json["kind"], "empty-children");
        assert_eq!(json["severity"], "error");
    }
}
