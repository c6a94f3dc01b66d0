// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Typed visitor trait definitions.

use std::fmt;

use super::hook::Hook;
use crate::nodes::*;

/// Result of an enter hook - controls whether the walker descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Traverse into children, then call the leave hook.
    #[default]
    Continue,

    /// Skip this node's children. The leave hook is still called.
    SkipChildren,
}

impl VisitResult {
    pub fn is_continue(self) -> bool {
        matches!(self, VisitResult::Continue)
    }
}

impl From<bool> for VisitResult {
    fn from(descend: bool) -> Self {
        if descend {
            VisitResult::Continue
        } else {
            VisitResult::SkipChildren
        }
    }
}

/// Error raised by a hook. Propagated to the caller of the walk unchanged.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type HookResult<T = ()> = Result<T, HookError>;

/// Emit the "unimplemented hook" diagnostic when `verbose` is set.
pub(crate) fn report_unhandled(verbose: bool, hook: Hook, node: &dyn fmt::Display) {
    if verbose {
        tracing::info!(hook = %hook, node = %node, "unimplemented hook, ignoring");
    }
}

/// Generates the trait with an `enter_*`/`leave_*` pair for every kind.
macro_rules! visitor_methods {
    ($($kind:ident),* $(,)?) => {
        paste::paste! {
            /// Typed visitor over a syntax tree.
            ///
            /// Every hook has a default that does nothing except report itself
            /// through [`Visitor::unhandled`], so implement only the hooks you
            /// need. Enter hooks run pre-order and decide whether the walker
            /// descends; leave hooks run post-order, even after
            /// [`VisitResult::SkipChildren`].
            ///
            /// Any error returned by a hook stops the walk and is handed back to
            /// the caller of [`walk`](super::walk) as is.
            pub trait Visitor {
                /// When true, hooks left at their default are reported at INFO.
                fn verbose(&self) -> bool {
                    false
                }

                /// Called by every default hook.
                fn unhandled(&mut self, hook: Hook, node: &dyn fmt::Display) {
                    report_unhandled(self.verbose(), hook, node);
                }

                /// Called once per catch clause of a `try` statement, before
                /// (or, in the legacy traversal, instead of) walking the clause.
                fn visit_catch(&mut self, node: &Catch) -> HookResult {
                    self.unhandled(Hook::catch(), node);
                    Ok(())
                }

                $(
                    #[doc = concat!("Enter a [`", stringify!($kind), "`] node.")]
                    fn [<enter_ $kind:snake>](&mut self, node: &$kind) -> HookResult<VisitResult> {
                        self.unhandled(Hook::enter(NodeKind::$kind), node);
                        Ok(VisitResult::Continue)
                    }

                    #[doc = concat!("Leave a [`", stringify!($kind), "`] node.")]
                    fn [<leave_ $kind:snake>](&mut self, node: &$kind) -> HookResult {
                        self.unhandled(Hook::leave(NodeKind::$kind), node);
                        Ok(())
                    }
                )*
            }
        }
    };
}

for_each_node_kind!(visitor_methods);

/// A visitor with no hooks of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultVisitor {
    pub verbose: bool,
}

impl Visitor for DefaultVisitor {
    fn verbose(&self) -> bool {
        self.verbose
    }
}
