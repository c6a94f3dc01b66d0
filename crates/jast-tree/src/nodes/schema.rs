// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Static field schemas.
//!
//! Every kind declares an ordered list of [`FieldSpec`]s at definition time.
//! That list is the only source of truth for traversal order and for the
//! order fields appear in the representation; there is no runtime
//! introspection. [`Schema::fields`] pairs each spec with a borrowed
//! [`FieldValue`].

use std::mem;

use serde::Serialize;

use super::{Empty, Node, NodeKind};

// ============================================================================
// Multiplicity
// ============================================================================

/// How many nodes a field holds, and whether the walker descends into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    /// A string, label, count or flag. Never traversed.
    Scalar,
    /// Exactly one owned child.
    Child,
    /// Zero or one owned child.
    OptionalChild,
    /// An ordered, possibly empty, sequence of owned children.
    Children,
}

impl Multiplicity {
    pub fn name(self) -> &'static str {
        match self {
            Multiplicity::Scalar => "scalar",
            Multiplicity::Child => "child",
            Multiplicity::OptionalChild => "optional child",
            Multiplicity::Children => "children",
        }
    }

    /// True for every multiplicity the walker descends into.
    pub fn is_traversed(self) -> bool {
        !matches!(self, Multiplicity::Scalar)
    }
}

/// Coarse classification of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Declaration,
    Type,
    Expression,
    Statement,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Declaration,
        Category::Type,
        Category::Expression,
        Category::Statement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Declaration => "declaration",
            Category::Type => "type",
            Category::Expression => "expression",
            Category::Statement => "statement",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Field descriptors
// ============================================================================

/// One declared field of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub multiplicity: Multiplicity,
    /// Whether `new` takes the field as an argument. Optional fields default
    /// to empty, absent, `false` or `0`.
    pub required: bool,
}

/// A scalar field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'n> {
    Text(&'n str),
    Label(Option<&'n str>),
    Count(u32),
    Flag(bool),
}

/// A borrowed field value, tagged with its multiplicity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'n> {
    Scalar(Scalar<'n>),
    Child(&'n Node),
    OptionalChild(Option<&'n Node>),
    Children(&'n [Node]),
}

impl<'n> FieldValue<'n> {
    pub fn multiplicity(&self) -> Multiplicity {
        match self {
            FieldValue::Scalar(_) => Multiplicity::Scalar,
            FieldValue::Child(_) => Multiplicity::Child,
            FieldValue::OptionalChild(_) => Multiplicity::OptionalChild,
            FieldValue::Children(_) => Multiplicity::Children,
        }
    }

    /// The nodes the walker descends into, in order. Empty for scalars and
    /// absent optional children.
    pub fn children(self) -> &'n [Node] {
        match self {
            FieldValue::Scalar(_) | FieldValue::OptionalChild(None) => &[],
            FieldValue::Child(node) | FieldValue::OptionalChild(Some(node)) => {
                std::slice::from_ref(node)
            }
            FieldValue::Children(nodes) => nodes,
        }
    }
}

/// A declared field paired with its current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'n> {
    pub name: &'static str,
    pub value: FieldValue<'n>,
}

// ============================================================================
// Schema trait
// ============================================================================

/// Static description of a concrete node kind.
///
/// Implemented for every kind by the `node!` declaration.
pub trait Schema {
    const KIND: NodeKind;
    const CATEGORY: Category;
    /// Declared fields, in declared order. Excludes `line`.
    const FIELDS: &'static [FieldSpec];

    /// Current values of the declared fields, in declared order.
    fn fields(&self) -> Vec<Field<'_>>;

    fn line(&self) -> u32;
}

/// Maps a Rust field type onto its multiplicity and borrowed value.
pub(crate) trait FieldType {
    const MULTIPLICITY: Multiplicity;

    fn field_value(&self) -> FieldValue<'_>;

    /// Move owned children out onto `pending`, leaving leaves behind.
    fn detach(&mut self, _pending: &mut Vec<Node>) {}
}

impl FieldType for String {
    const MULTIPLICITY: Multiplicity = Multiplicity::Scalar;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Text(self.as_str()))
    }
}

impl FieldType for Option<String> {
    const MULTIPLICITY: Multiplicity = Multiplicity::Scalar;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Label(self.as_deref()))
    }
}

impl FieldType for u32 {
    const MULTIPLICITY: Multiplicity = Multiplicity::Scalar;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Count(*self))
    }
}

impl FieldType for bool {
    const MULTIPLICITY: Multiplicity = Multiplicity::Scalar;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Scalar::Flag(*self))
    }
}

impl FieldType for Box<Node> {
    const MULTIPLICITY: Multiplicity = Multiplicity::Child;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Child(&**self)
    }

    fn detach(&mut self, pending: &mut Vec<Node>) {
        pending.push(mem::replace(&mut **self, Empty::new().into()));
    }
}

impl FieldType for Option<Box<Node>> {
    const MULTIPLICITY: Multiplicity = Multiplicity::OptionalChild;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::OptionalChild(self.as_deref())
    }

    fn detach(&mut self, pending: &mut Vec<Node>) {
        if let Some(child) = self.take() {
            pending.push(*child);
        }
    }
}

impl FieldType for Vec<Node> {
    const MULTIPLICITY: Multiplicity = Multiplicity::Children;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Children(self.as_slice())
    }

    fn detach(&mut self, pending: &mut Vec<Node>) {
        pending.append(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Name;

    #[test]
    fn test_children_of_each_multiplicity() {
        let name = Node::from(Name::new("x"));
        let seq = vec![Node::from(Name::new("a")), Node::from(Name::new("b"))];

        assert!(FieldValue::Scalar(Scalar::Flag(true)).children().is_empty());
        assert!(FieldValue::OptionalChild(None).children().is_empty());
        assert_eq!(FieldValue::Child(&name).children().len(), 1);
        assert_eq!(FieldValue::OptionalChild(Some(&name)).children().len(), 1);
        assert_eq!(FieldValue::Children(seq.as_slice()).children(), seq.as_slice());
    }

    #[test]
    fn test_multiplicity_of_field_types() {
        assert_eq!(<String as FieldType>::MULTIPLICITY, Multiplicity::Scalar);
        assert_eq!(<Box<Node> as FieldType>::MULTIPLICITY, Multiplicity::Child);
        assert_eq!(
            <Option<Box<Node>> as FieldType>::MULTIPLICITY,
            Multiplicity::OptionalChild
        );
        assert_eq!(<Vec<Node> as FieldType>::MULTIPLICITY, Multiplicity::Children);
        assert!(!Multiplicity::Scalar.is_traversed());
        assert!(Multiplicity::OptionalChild.is_traversed());
    }
}
