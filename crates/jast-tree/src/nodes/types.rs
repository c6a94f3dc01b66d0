// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Type references, wildcards and type parameters.

use super::{boxed, Node, DEFAULT_LINE};

node! {
    /// A type reference: `int`, `String[]`, `Map<K, V>`, `Outer<T>.Inner`.
    ///
    /// Primitive types and `void` are a `Type` whose `name` is a [`Name`](super::Name)
    /// holding the keyword.
    pub struct Type: Type {
        name: Box<Node>,
        type_arguments: Vec<Node> = default,
        /// Enclosing type for a member of a parameterized type.
        enclosed_in: Option<Box<Node>> = default,
        dimensions: u32 = default,
    }

    /// `?`, `? extends T` or `? super T`.
    pub struct Wildcard: Type {
        bounds: Vec<Node> = default,
    }

    pub struct WildcardBound: Type {
        r#type as "type": Box<Node>,
        extends: bool = default,
        is_super as "super": bool = default,
    }

    /// A declared type parameter, `T extends A & B`.
    pub struct TypeParameter: Type {
        name: String,
        extends: Vec<Node> = default,
    }
}

impl Type {
    pub fn new(name: impl Into<Node>) -> Self {
        Self {
            name: boxed(name),
            type_arguments: Vec::new(),
            enclosed_in: None,
            dimensions: 0,
            line: DEFAULT_LINE,
        }
    }
}

impl Wildcard {
    pub fn new() -> Self {
        Self {
            bounds: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl Default for Wildcard {
    fn default() -> Self {
        Self::new()
    }
}

impl WildcardBound {
    pub fn new(r#type: impl Into<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            extends: false,
            is_super: false,
            line: DEFAULT_LINE,
        }
    }
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}
