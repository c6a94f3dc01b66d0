// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Java syntax-tree model and schema-driven visitor traversal.
//!
//! `jast_tree` holds the node model that an external Java parser populates,
//! plus the machinery for walking it:
//!
//! - [`nodes`]: one struct per construct (`ClassDeclaration`, `IfThenElse`,
//!   `MethodInvocation`, ...), gathered in the closed [`Node`] enum. Each kind
//!   declares an ordered schema of fields ([`Schema::FIELDS`]) that drives
//!   traversal, equality and the textual representation.
//! - [`visitor`]: the [`Visitor`] trait with one `enter_*`/`leave_*` hook pair
//!   per kind, the closure-based [`HookTable`], and the [`Walker`] that drives
//!   them depth-first.
//!
//! ```ignore
//! use jast_tree::{walk, HookResult, Name, Node, VisitResult, Visitor};
//!
//! struct NameCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for NameCounter {
//!     fn enter_name(&mut self, _node: &Name) -> HookResult<VisitResult> {
//!         self.count += 1;
//!         Ok(VisitResult::Continue)
//!     }
//! }
//!
//! let mut counter = NameCounter { count: 0 };
//! walk(&mut counter, &tree)?;
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod nodes;
pub mod visitor;

pub use error::{TreeError, TreeResult};
pub use nodes::*;
pub use visitor::{
    walk, DefaultVisitor, Hook, HookError, HookResult, HookTable, NodeVisitor, Phase, Strategy,
    TryTraversal, VisitResult, Visitor, WalkOptions, Walker,
};
