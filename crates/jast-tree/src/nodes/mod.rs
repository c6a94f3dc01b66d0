// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node model for Java syntax trees.
//!
//! Every construct is a struct with `pub` fields and a `line` attribute, and
//! every struct is one variant of the closed [`Node`] enum. Children are owned
//! (`Box<Node>`, `Option<Box<Node>>`, `Vec<Node>`), so a tree has a single
//! owner per node and cannot contain cycles.
//!
//! # Construction
//!
//! `new` takes the required fields; optional fields start empty/absent and
//! are supplied with struct-update syntax:
//!
//! ```ignore
//! let class = ClassDeclaration {
//!     modifiers: vec![Modifier::new("public").into()],
//!     ..ClassDeclaration::new("Greeter", vec![])
//! };
//! ```
//!
//! # Schema
//!
//! [`Schema::FIELDS`] lists each kind's fields in declared order. The walker
//! descends into them in that order, [`Display`](std::fmt::Display) prints
//! them in that order, and `PartialEq` compares exactly those fields (the
//! `line` attribute is not part of the schema).

mod declaration;
mod expression;
pub(crate) mod repr;
mod schema;
mod statement;
mod types;

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use declaration::*;
pub use expression::*;
pub(crate) use schema::FieldType;
pub use schema::{Category, Field, FieldSpec, FieldValue, Multiplicity, Scalar, Schema};
pub use statement::*;
pub use types::*;

/// Line assigned to nodes whose producer did not supply one.
pub const DEFAULT_LINE: u32 = 1;

pub(crate) fn default_line() -> u32 {
    DEFAULT_LINE
}

/// Default `MethodDeclaration::return_type`: the `void` type.
pub(crate) fn void_return_type() -> Box<Node> {
    boxed(Type::new(Name::new("void")))
}

pub(crate) fn boxed(node: impl Into<Node>) -> Box<Node> {
    Box::new(node.into())
}

pub(crate) fn boxed_opt(node: Option<impl Into<Node>>) -> Option<Box<Node>> {
    node.map(boxed)
}

// ============================================================================
// Node and NodeKind
// ============================================================================

macro_rules! define_node_enum {
    ($($kind:ident),* $(,)?) => {
        /// A node of any kind.
        ///
        /// Serialized externally tagged: `{"Name": {"value": "x", "line": 3}}`.
        #[allow(clippy::large_enum_variant)]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum Node {
            $($kind($kind),)*
        }

        /// The concrete kind of a [`Node`].
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum NodeKind {
            $($kind,)*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind),)*
                }
            }

            /// Look a kind up by its name (`"IfThenElse"`).
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($kind) => Some(NodeKind::$kind),)*
                    _ => None,
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $(NodeKind::$kind => <$kind as Schema>::CATEGORY,)*
                }
            }

            /// Declared schema of the kind.
            pub fn fields(self) -> &'static [FieldSpec] {
                match self {
                    $(NodeKind::$kind => <$kind as Schema>::FIELDS,)*
                }
            }
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$kind(_) => NodeKind::$kind,)*
                }
            }

            pub fn line(&self) -> u32 {
                match self {
                    $(Node::$kind(inner) => inner.line,)*
                }
            }

            pub fn set_line(&mut self, line: u32) {
                match self {
                    $(Node::$kind(inner) => inner.line = line,)*
                }
            }

            /// Current values of the declared fields, in declared order.
            pub fn fields(&self) -> Vec<Field<'_>> {
                match self {
                    $(Node::$kind(inner) => inner.fields(),)*
                }
            }

            /// Structural equality against a value of any type.
            ///
            /// A `Node` or a concrete kind struct compares structurally;
            /// anything else is never equal.
            pub fn structurally_eq(&self, other: &dyn Any) -> bool {
                if let Some(node) = other.downcast_ref::<Node>() {
                    return self == node;
                }
                match self {
                    $(Node::$kind(inner) => other
                        .downcast_ref::<$kind>()
                        .is_some_and(|other| inner == other),)*
                }
            }
        }

        impl fmt::Display for Node {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Node::$kind(inner) => fmt::Display::fmt(inner, f),)*
                }
            }
        }

        impl Node {
            fn detach_children(&mut self, pending: &mut Vec<Node>) {
                match self {
                    $(Node::$kind(inner) => inner.detach_children(pending),)*
                }
            }
        }
    };
}

for_each_node_kind!(define_node_enum);

impl Node {
    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// Traversal-eligible children across all declared fields, in order.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.fields()
            .into_iter()
            .flat_map(|field| field.value.children())
    }
}

/// Trees are dropped with an explicit stack, so depth is not limited by the
/// thread's stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_names_round_trip() {
        for &kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(NodeKind::from_name("Visitor"), None);
    }

    #[test]
    fn test_field_names_unique_per_kind() {
        for &kind in NodeKind::ALL {
            let names: HashSet<_> = kind.fields().iter().map(|spec| spec.name).collect();
            assert_eq!(names.len(), kind.fields().len(), "duplicate field in {kind}");
            assert!(!names.contains("line"), "{kind} declares line as a field");
        }
    }

    #[test]
    fn test_instance_fields_follow_schema() {
        let node = Node::from(MethodInvocation {
            arguments: vec![Literal::new("1").into()],
            ..MethodInvocation::new("println")
        });
        let names: Vec<_> = node.fields().iter().map(|field| field.name).collect();
        let declared: Vec<_> = node.kind().fields().iter().map(|spec| spec.name).collect();
        assert_eq!(names, declared);
        assert_eq!(names, ["name", "arguments", "type_arguments", "target"]);
    }

    #[test]
    fn test_children_in_declared_order() {
        let node = Node::from(Additive::new("+", Name::new("a"), Name::new("b")));
        let children: Vec<_> = node.children().map(|child| child.to_string()).collect();
        assert_eq!(children, [r#"Name(value="a")"#, r#"Name(value="b")"#]);
    }

    #[test]
    fn test_default_line() {
        let mut node = Node::from(Empty::new());
        assert_eq!(node.line(), DEFAULT_LINE);
        node.set_line(42);
        assert_eq!(node.line(), 42);
    }

    #[test]
    fn test_categories() {
        assert_eq!(NodeKind::ClassDeclaration.category(), Category::Declaration);
        assert_eq!(NodeKind::Wildcard.category(), Category::Type);
        assert_eq!(NodeKind::Multiplicative.category(), Category::Expression);
        assert_eq!(NodeKind::Try.category(), Category::Statement);
    }

    #[test]
    fn test_deep_trees_drop_without_recursion() {
        let mut expr = Node::from(Name::new("x"));
        for _ in 0..200_000 {
            expr = Unary::new("-", expr).into();
        }
        drop(expr);

        let mut block = Node::from(Block::new(vec![]));
        for _ in 0..200_000 {
            block = IfThenElse {
                if_true: Some(boxed(Block::new(vec![block, Empty::new().into()]))),
                ..IfThenElse::new(Name::new("ok"))
            }
            .into();
        }
        drop(block);
    }

    #[test]
    fn test_clone_survives_original_drop() {
        let original = Node::from(Return {
            result: Some(boxed(Additive::new("+", Name::new("a"), Literal::new("1")))),
            ..Return::new()
        });
        let copy = original.clone();
        let repr = original.to_string();
        drop(original);
        assert_eq!(copy.to_string(), repr);
    }

    #[test]
    fn test_void_return_type() {
        let method = MethodDeclaration::new("run");
        assert_eq!(
            method.return_type.to_string(),
            r#"Type(name=Name(value="void"), type_arguments=[], enclosed_in=None, dimensions=0)"#
        );
    }
}
