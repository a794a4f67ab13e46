//! # Diagnostic Node: Immutable Validation Breadcrumb
//!
//! A `DiagnosticNode` records where in an instance a verdict was reached,
//! whether the instance was accepted there, and why. Schemas thread nodes
//! down through recursive tracing and return a judged node back up.
//!
//! ## Invariants
//!
//! - Nodes are plain immutable values. `child`, `validate` and `invalidate`
//!   return a new node and leave the receiver untouched.
//! - An absent path is the root. Segments are joined with `.`.
//! - A fresh node is valid with no reason ("not yet judged").

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Location, verdict and reason produced while tracing an instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticNode {
    path: Option<String>,
    is_valid: bool,
    reason: Option<String>,
}

impl DiagnosticNode {
    /// The root node: no path, valid, not yet judged.
    pub fn root() -> Self {
        Self {
            path: None,
            is_valid: true,
            reason: None,
        }
    }

    /// A fresh node at the given dotted path. An empty path is the root.
    pub fn at(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { None } else { Some(path) },
            ..Self::root()
        }
    }

    /// Descend one level. Validity and reason are carried over until the
    /// child is judged.
    ///
    /// An empty segment below the root yields the empty path, which is the
    /// root itself.
    pub fn child(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref();
        let path = match &self.path {
            Some(parent) => Some(format!("{parent}{PATH_SEPARATOR}{segment}")),
            None if segment.is_empty() => None,
            None => Some(segment.to_string()),
        };
        Self {
            path,
            is_valid: self.is_valid,
            reason: self.reason.clone(),
        }
    }

    /// Accept at this node's path.
    pub fn validate(&self, reason: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            is_valid: true,
            reason: Some(reason.into()),
        }
    }

    /// Reject at this node's path.
    pub fn invalidate(&self, reason: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            is_valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Dotted location, `None` at the root.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Path segments from the root down.
    ///
    /// The path is stored joined, so this re-splits on [`PATH_SEPARATOR`].
    /// A segment that itself contains `.` (a map key such as `"a.b"`) comes
    /// back as several segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path
            .as_deref()
            .into_iter()
            .flat_map(|p| p.split(PATH_SEPARATOR))
    }

    /// Number of segments below the root, counted as [`segments`](Self::segments) does.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Whether this node sits at the root.
    pub fn is_root(&self) -> bool {
        self.path.is_none()
    }

    /// Whether the instance was accepted at this node.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Explanation of the verdict, `None` when not yet judged.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Convert a rejected node into a [`ValidationError`].
    ///
    /// Accepted nodes are returned unchanged.
    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(ValidationError::Rejected {
                path: self.path,
                reason: self.reason.unwrap_or_default(),
            })
        }
    }
}

impl Default for DiagnosticNode {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for DiagnosticNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_valid { '✓' } else { '✗' };
        let path = self.path.as_deref().unwrap_or("(root)");
        match &self.reason {
            Some(reason) => write!(f, "{marker} {path}: {reason}"),
            None => write!(f, "{marker} {path}: (unjudged)"),
        }
    }
}
