// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the tree crate.
//!
//! The traversal engine raises no errors of its own: errors returned from
//! hooks travel back to the caller of [`walk`](crate::walk) unchanged as a
//! [`HookError`](crate::HookError). [`TreeError`] covers the one programming
//! error the crate detects, a hook requested by a malformed name.

use thiserror::Error;

/// Result alias for fallible tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;

/// Errors raised by the tree crate itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A hook name does not follow the `enter_<Kind>` / `leave_<Kind>`
    /// convention (or names a kind that does not exist).
    #[error("invalid hook name '{name}': {reason}")]
    InvalidHookName { name: String, reason: String },
}

impl TreeError {
    /// Create an `InvalidHookName` error.
    pub fn invalid_hook_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TreeError::InvalidHookName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hook_name_display() {
        let err = TreeError::invalid_hook_name("visit_Name", "missing prefix");
        assert_eq!(
            err.to_string(),
            "invalid hook name 'visit_Name': missing prefix"
        );
    }
}
