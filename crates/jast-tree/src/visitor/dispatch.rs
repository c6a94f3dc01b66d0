// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Per-kind hook dispatch.
//!
//! The walker only ever talks to a [`NodeVisitor`], which receives untyped
//! [`Node`]s. Every typed [`Visitor`] is a `NodeVisitor` through a generated
//! `match` on the node's kind, so resolving the hook for a node is a single
//! jump at traversal time.

use super::traits::{HookResult, VisitResult, Visitor};
use crate::nodes::Node;

/// Hook interface the walker drives.
pub trait NodeVisitor {
    /// Enter hook for the node's kind.
    fn enter(&mut self, node: &Node) -> HookResult<VisitResult>;

    /// Leave hook for the node's kind.
    fn leave(&mut self, node: &Node) -> HookResult;

    /// Catch-clause hook. Only called with [`Node::Catch`].
    fn catch_clause(&mut self, node: &Node) -> HookResult;
}

macro_rules! dispatch_methods {
    ($($kind:ident),* $(,)?) => {
        paste::paste! {
            impl<V: Visitor + ?Sized> NodeVisitor for V {
                fn enter(&mut self, node: &Node) -> HookResult<VisitResult> {
                    match node {
                        $(Node::$kind(inner) => self.[<enter_ $kind:snake>](inner),)*
                    }
                }

                fn leave(&mut self, node: &Node) -> HookResult {
                    match node {
                        $(Node::$kind(inner) => self.[<leave_ $kind:snake>](inner),)*
                    }
                }

                fn catch_clause(&mut self, node: &Node) -> HookResult {
                    match node {
                        Node::Catch(clause) => self.visit_catch(clause),
                        _ => Ok(()),
                    }
                }
            }
        }
    };
}

for_each_node_kind!(dispatch_methods);
