// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Closure-based hooks registered at runtime.

use std::collections::HashMap;
use std::fmt;

use super::dispatch::NodeVisitor;
use super::hook::{Hook, Phase};
use super::traits::{report_unhandled, HookResult, VisitResult};
use crate::error::TreeResult;
use crate::nodes::{Node, NodeKind};

type EnterHook<'h> = Box<dyn FnMut(&Node) -> HookResult<VisitResult> + 'h>;
type LeaveHook<'h> = Box<dyn FnMut(&Node) -> HookResult + 'h>;

/// A visitor assembled from closures keyed by `(phase, kind)`.
///
/// Kinds without a registered hook fall back to the same default as
/// [`Visitor`](super::Visitor): continue, and report the hook at INFO when
/// the table is verbose.
///
/// ```ignore
/// let mut names = Vec::new();
/// let mut table = HookTable::new();
/// table.on_enter(NodeKind::Name, |node| {
///     names.push(node.to_string());
///     Ok(VisitResult::Continue)
/// });
/// walk(&mut table, &tree)?;
/// ```
#[derive(Default)]
pub struct HookTable<'h> {
    enter: HashMap<NodeKind, EnterHook<'h>>,
    leave: HashMap<NodeKind, LeaveHook<'h>>,
    catch: Option<LeaveHook<'h>>,
    verbose: bool,
}

impl<'h> HookTable<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report hooks that fall back to the default.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn on_enter<F>(&mut self, kind: NodeKind, hook: F) -> &mut Self
    where
        F: FnMut(&Node) -> HookResult<VisitResult> + 'h,
    {
        self.enter.insert(kind, Box::new(hook));
        self
    }

    pub fn on_leave<F>(&mut self, kind: NodeKind, hook: F) -> &mut Self
    where
        F: FnMut(&Node) -> HookResult + 'h,
    {
        self.leave.insert(kind, Box::new(hook));
        self
    }

    pub fn on_catch<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&Node) -> HookResult + 'h,
    {
        self.catch = Some(Box::new(hook));
        self
    }

    /// Register a hook by its conventional name (`"enter_IfThenElse"`).
    ///
    /// The closure's [`VisitResult`] only matters for enter hooks. Fails with
    /// [`TreeError::InvalidHookName`](crate::TreeError::InvalidHookName)
    /// before anything is registered if the name is malformed.
    pub fn on_named<F>(&mut self, name: &str, mut hook: F) -> TreeResult<&mut Self>
    where
        F: FnMut(&Node) -> HookResult<VisitResult> + 'h,
    {
        let parsed: Hook = name.parse()?;
        Ok(match parsed.phase {
            Phase::Enter => self.on_enter(parsed.kind, hook),
            Phase::Leave => self.on_leave(parsed.kind, move |node| hook(node).map(|_| ())),
            Phase::Catch => self.on_catch(move |node| hook(node).map(|_| ())),
        })
    }

    /// Whether a closure is registered for `hook`.
    pub fn supplies(&self, hook: Hook) -> bool {
        match hook.phase {
            Phase::Enter => self.enter.contains_key(&hook.kind),
            Phase::Leave => self.leave.contains_key(&hook.kind),
            Phase::Catch => self.catch.is_some(),
        }
    }
}

impl NodeVisitor for HookTable<'_> {
    fn enter(&mut self, node: &Node) -> HookResult<VisitResult> {
        match self.enter.get_mut(&node.kind()) {
            Some(hook) => hook(node),
            None => {
                report_unhandled(self.verbose, Hook::enter(node.kind()), node);
                Ok(VisitResult::Continue)
            }
        }
    }

    fn leave(&mut self, node: &Node) -> HookResult {
        match self.leave.get_mut(&node.kind()) {
            Some(hook) => hook(node),
            None => {
                report_unhandled(self.verbose, Hook::leave(node.kind()), node);
                Ok(())
            }
        }
    }

    fn catch_clause(&mut self, node: &Node) -> HookResult {
        match self.catch.as_mut() {
            Some(hook) => hook(node),
            None => {
                report_unhandled(self.verbose, Hook::catch(), node);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for HookTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hooks: Vec<Hook> = self
            .enter
            .keys()
            .map(|&kind| Hook::enter(kind))
            .chain(self.leave.keys().map(|&kind| Hook::leave(kind)))
            .chain(self.catch.as_ref().map(|_| Hook::catch()))
            .collect();
        hooks.sort();
        f.debug_struct("HookTable")
            .field("hooks", &hooks.iter().map(Hook::to_string).collect::<Vec<_>>())
            .field("verbose", &self.verbose)
            .finish()
    }
}
