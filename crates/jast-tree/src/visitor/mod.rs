// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for syntax-tree traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `enter_*` hooks
//! - **Post-order** for `leave_*` hooks
//! - Children in declared field order (see [`Schema::FIELDS`](crate::Schema::FIELDS))
//!
//! `try` statements follow their own rule; see [`walk`](self::walk()) and
//! [`TryTraversal`].
//!
//! # Visitor Pattern
//!
//! Implement the typed [`Visitor`] trait and override the hooks you care
//! about:
//!
//! ```ignore
//! use jast_tree::{walk, HookResult, MethodInvocation, VisitResult, Visitor};
//!
//! struct CallCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for CallCounter {
//!     fn enter_method_invocation(&mut self, _node: &MethodInvocation) -> HookResult<VisitResult> {
//!         self.count += 1;
//!         Ok(VisitResult::Continue)
//!     }
//! }
//! ```
//!
//! Or register closures by kind or by name in a [`HookTable`]:
//!
//! ```ignore
//! let mut table = HookTable::new();
//! table.on_named("enter_MethodInvocation", |_| Ok(VisitResult::Continue))?;
//! ```

mod dispatch;
mod hook;
mod table;
mod traits;
mod walk;

pub use dispatch::NodeVisitor;
pub use hook::{Hook, Phase};
pub use table::HookTable;
pub use traits::{DefaultVisitor, HookError, HookResult, VisitResult, Visitor};
pub use walk::{walk, Strategy, TryTraversal, WalkOptions, Walker};
