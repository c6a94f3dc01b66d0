// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Depth-first traversal driven by the node schemas.
//!
//! For every node the walker calls the enter hook, then (unless the hook
//! returned [`VisitResult::SkipChildren`]) walks the node's children in
//! declared field order, then calls the leave hook. Scalar fields and absent
//! optional children are skipped.
//!
//! `try` statements are the exception. Under [`TryTraversal::Legacy`]:
//!
//! 1. `enter_try`
//! 2. if it returned `Continue`, each statement of the main block (the block
//!    itself is neither entered nor left)
//! 3. the catch hook once per catch clause, whatever step 1 returned; the
//!    clauses themselves are not walked
//! 4. the `finally` block, if present
//!
//! `leave_try` never fires and resources are never visited.
//! [`TryTraversal::Complete`] walks `try` like any other node and calls the
//! catch hook right before walking each clause.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dispatch::NodeVisitor;
use super::traits::HookResult;
use crate::nodes::{Node, Try};

/// How the walker keeps track of pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Native recursion; depth is bounded by the thread's stack.
    #[default]
    Recursive,
    /// An explicit heap stack, for arbitrarily deep trees. Fires exactly the
    /// same hooks in the same order as `Recursive`.
    Iterative,
}

/// Traversal rule for `try` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TryTraversal {
    #[default]
    Legacy,
    Complete,
}

/// Walker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    pub strategy: Strategy,
    pub try_traversal: TryTraversal,
}

/// One unit of pending work.
#[derive(Debug, Clone, Copy)]
enum Step<'n> {
    Visit(&'n Node),
    Leave(&'n Node),
    Catch(&'n Node),
}

/// Drives a [`NodeVisitor`] over a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    options: WalkOptions,
}

impl Walker {
    pub fn new(options: WalkOptions) -> Self {
        Walker { options }
    }

    pub fn options(&self) -> WalkOptions {
        self.options
    }

    /// Walk `root` and everything below it.
    ///
    /// The first hook error stops the walk and is returned as is.
    pub fn walk<V: NodeVisitor + ?Sized>(&self, visitor: &mut V, root: &Node) -> HookResult {
        debug!(
            root = %root.kind(),
            strategy = ?self.options.strategy,
            try_traversal = ?self.options.try_traversal,
            "walk started"
        );
        let result = match self.options.strategy {
            Strategy::Recursive => self.walk_recursive(visitor, root),
            Strategy::Iterative => self.walk_iterative(visitor, root),
        };
        match &result {
            Ok(()) => debug!("walk finished"),
            Err(err) => debug!(error = %err, "walk stopped by hook error"),
        }
        result
    }

    fn walk_recursive<V: NodeVisitor + ?Sized>(&self, visitor: &mut V, node: &Node) -> HookResult {
        let descend = visitor.enter(node)?.is_continue();
        let mut steps = Vec::new();
        self.schedule(node, descend, &mut steps);
        for step in steps {
            match step {
                Step::Visit(child) => self.walk_recursive(visitor, child)?,
                Step::Leave(node) => visitor.leave(node)?,
                Step::Catch(clause) => visitor.catch_clause(clause)?,
            }
        }
        Ok(())
    }

    fn walk_iterative<V: NodeVisitor + ?Sized>(&self, visitor: &mut V, root: &Node) -> HookResult {
        let mut stack = vec![Step::Visit(root)];
        let mut pending = Vec::new();
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(node) => {
                    let descend = visitor.enter(node)?.is_continue();
                    self.schedule(node, descend, &mut pending);
                    stack.extend(pending.drain(..).rev());
                }
                Step::Leave(node) => visitor.leave(node)?,
                Step::Catch(clause) => visitor.catch_clause(clause)?,
            }
        }
        Ok(())
    }

    /// Append, in execution order, the work that follows a node's enter hook.
    fn schedule<'n>(&self, node: &'n Node, descend: bool, steps: &mut Vec<Step<'n>>) {
        match (node, self.options.try_traversal) {
            (Node::Try(stmt), TryTraversal::Legacy) => {
                if descend {
                    steps.extend(main_block(stmt).iter().map(Step::Visit));
                }
                for clause in &stmt.catches {
                    steps.push(catch_step(clause));
                }
                steps.extend(stmt.finally.as_deref().map(Step::Visit));
            }
            (Node::Try(stmt), TryTraversal::Complete) => {
                if descend {
                    steps.push(Step::Visit(&stmt.block));
                    for clause in &stmt.catches {
                        if matches!(clause, Node::Catch(_)) {
                            steps.push(Step::Catch(clause));
                        }
                        steps.push(Step::Visit(clause));
                    }
                    steps.extend(stmt.finally.as_deref().map(Step::Visit));
                    steps.extend(stmt.resources.iter().map(Step::Visit));
                }
                steps.push(Step::Leave(node));
            }
            _ => {
                if descend {
                    steps.extend(node.children().map(Step::Visit));
                }
                steps.push(Step::Leave(node));
            }
        }
    }
}

/// Statements of a `try` block; a non-block body counts as one statement.
fn main_block(stmt: &Try) -> &[Node] {
    match &*stmt.block {
        Node::Block(block) => block.statements.as_slice(),
        other => std::slice::from_ref(other),
    }
}

/// Legacy catch handling: the hook for real clauses, a plain walk otherwise.
fn catch_step(clause: &Node) -> Step<'_> {
    match clause {
        Node::Catch(_) => Step::Catch(clause),
        _ => Step::Visit(clause),
    }
}

/// Walk `root` recursively with the legacy `try` rule.
pub fn walk<V: NodeVisitor + ?Sized>(visitor: &mut V, root: &Node) -> HookResult {
    Walker::default().walk(visitor, root)
}
