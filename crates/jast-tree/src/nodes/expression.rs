// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expressions.

use super::{boxed, Node, DEFAULT_LINE};

/// Kinds sharing the `operator, lhs, rhs` schema. Each stays a distinct kind
/// with its own hooks.
macro_rules! binary_expressions {
    ($($(#[$meta:meta])* $kind:ident),* $(,)?) => {
        node! {
            $(
                $(#[$meta])*
                pub struct $kind: Expression {
                    operator: String,
                    lhs: Box<Node>,
                    rhs: Box<Node>,
                }
            )*
        }

        $(
            impl $kind {
                pub fn new(
                    operator: impl Into<String>,
                    lhs: impl Into<Node>,
                    rhs: impl Into<Node>,
                ) -> Self {
                    Self {
                        operator: operator.into(),
                        lhs: boxed(lhs),
                        rhs: boxed(rhs),
                        line: DEFAULT_LINE,
                    }
                }
            }
        )*
    };
}

binary_expressions! {
    /// A binary operation not covered by a more specific kind.
    BinaryExpression,
    /// `=` and the compound assignment operators.
    Assignment,
    /// `||`
    ConditionalOr,
    /// `&&`
    ConditionalAnd,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `&`
    And,
    /// `==`, `!=`
    Equality,
    /// `x instanceof T`; `rhs` is the type.
    InstanceOf,
    /// `<`, `>`, `<=`, `>=`
    Relational,
    /// `<<`, `>>`, `>>>`
    Shift,
    /// `+`, `-`
    Additive,
    /// `*`, `/`, `%`
    Multiplicative,
}

node! {
    /// `predicate ? if_true : if_false`
    pub struct Conditional: Expression {
        predicate: Box<Node>,
        if_true: Box<Node>,
        if_false: Box<Node>,
    }

    /// Prefix or postfix unary operation. Postfix operators are written
    /// after an `x` (`"x++"`), prefix ones as is (`"++"`, `"!"`).
    pub struct Unary: Expression {
        sign: String,
        expression: Box<Node>,
    }

    /// `(target) expression`
    pub struct Cast: Expression {
        target: Box<Node>,
        expression: Box<Node>,
    }

    pub struct MethodInvocation: Expression {
        name: String,
        arguments: Vec<Node> = default,
        type_arguments: Vec<Node> = default,
        target: Option<Box<Node>> = default,
    }

    /// `new T(args) { body }`
    pub struct InstanceCreation: Expression {
        r#type as "type": Box<Node>,
        type_arguments: Vec<Node> = default,
        arguments: Vec<Node> = default,
        /// Members of an anonymous class body.
        body: Vec<Node> = default,
        enclosed_in: Option<Box<Node>> = default,
    }

    pub struct FieldAccess: Expression {
        name: String,
        target: Box<Node>,
    }

    pub struct ArrayAccess: Expression {
        index: Box<Node>,
        target: Box<Node>,
    }

    pub struct ArrayCreation: Expression {
        r#type as "type": Box<Node>,
        dimensions: Vec<Node> = default,
        initializer: Option<Box<Node>> = default,
    }

    pub struct ArrayInitializer: Expression {
        elements: Vec<Node> = default,
    }

    /// A literal, kept as written in the source (`"\"a\""`, `"0x1F"`, `"null"`).
    pub struct Literal: Expression {
        value: String,
    }

    /// `T.class`
    pub struct ClassLiteral: Expression {
        r#type as "type": Box<Node>,
    }

    /// A simple or qualified name, dot separated.
    pub struct Name: Expression {
        value: String,
    }
}

impl Conditional {
    pub fn new(
        predicate: impl Into<Node>,
        if_true: impl Into<Node>,
        if_false: impl Into<Node>,
    ) -> Self {
        Self {
            predicate: boxed(predicate),
            if_true: boxed(if_true),
            if_false: boxed(if_false),
            line: DEFAULT_LINE,
        }
    }
}

impl Unary {
    pub fn new(sign: impl Into<String>, expression: impl Into<Node>) -> Self {
        Self {
            sign: sign.into(),
            expression: boxed(expression),
            line: DEFAULT_LINE,
        }
    }
}

impl Cast {
    pub fn new(target: impl Into<Node>, expression: impl Into<Node>) -> Self {
        Self {
            target: boxed(target),
            expression: boxed(expression),
            line: DEFAULT_LINE,
        }
    }
}

impl MethodInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            type_arguments: Vec::new(),
            target: None,
            line: DEFAULT_LINE,
        }
    }
}

impl InstanceCreation {
    pub fn new(r#type: impl Into<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
            body: Vec::new(),
            enclosed_in: None,
            line: DEFAULT_LINE,
        }
    }
}

impl FieldAccess {
    pub fn new(name: impl Into<String>, target: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            target: boxed(target),
            line: DEFAULT_LINE,
        }
    }
}

impl ArrayAccess {
    pub fn new(index: impl Into<Node>, target: impl Into<Node>) -> Self {
        Self {
            index: boxed(index),
            target: boxed(target),
            line: DEFAULT_LINE,
        }
    }
}

impl ArrayCreation {
    pub fn new(r#type: impl Into<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            dimensions: Vec::new(),
            initializer: None,
            line: DEFAULT_LINE,
        }
    }
}

impl ArrayInitializer {
    pub fn new(elements: Vec<Node>) -> Self {
        Self {
            elements,
            line: DEFAULT_LINE,
        }
    }
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line: DEFAULT_LINE,
        }
    }
}

impl ClassLiteral {
    pub fn new(r#type: impl Into<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            line: DEFAULT_LINE,
        }
    }
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            line: DEFAULT_LINE,
        }
    }

    /// Extend a qualified name by one segment: `a.b` + `c` is `a.b.c`.
    pub fn append(&mut self, segment: impl AsRef<str>) {
        if !self.value.is_empty() {
            self.value.push('.');
        }
        self.value.push_str(segment.as_ref());
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{NodeKind, Schema};

    #[test]
    fn test_binary_kinds_share_schema() {
        let shared = BinaryExpression::FIELDS;
        assert_eq!(Additive::FIELDS, shared);
        assert_eq!(ConditionalAnd::FIELDS, shared);
        assert_eq!(InstanceOf::FIELDS, shared);

        let sum = Node::from(Additive::new("+", Name::new("a"), Literal::new("1")));
        assert_eq!(sum.kind(), NodeKind::Additive);
        assert_eq!(
            sum.to_string(),
            r#"Additive(operator="+", lhs=Name(value="a"), rhs=Literal(value="1"))"#
        );
    }

    #[test]
    fn test_binary_kinds_are_distinct() {
        let sum = Node::from(Additive::new("+", Name::new("a"), Name::new("b")));
        let generic = Node::from(BinaryExpression::new("+", Name::new("a"), Name::new("b")));
        assert_ne!(sum, generic);
    }

    #[test]
    fn test_name_append() {
        let mut name = Name::new("java");
        name.append("util");
        name.append(String::from("List"));
        assert_eq!(name.as_ref(), "java.util.List");

        let mut empty = Name::new("");
        empty.append("x");
        assert_eq!(empty.value, "x");
    }

    #[test]
    fn test_equality_ignores_line() {
        let a = Name { line: 3, ..Name::new("x") };
        let b = Name { line: 9, ..Name::new("x") };
        assert_eq!(a, b);
        assert_ne!(a, Name::new("y"));
    }

    #[test]
    fn test_method_invocation_rendering() {
        let call = MethodInvocation {
            target: Some(boxed(Name::new("System.out"))),
            arguments: vec![Literal::new("\"hi\"").into()],
            ..MethodInvocation::new("println")
        };
        assert_eq!(
            call.to_string(),
            concat!(
                r#"MethodInvocation(name="println", arguments=[Literal(value="\"hi\"")], "#,
                r#"type_arguments=[], target=Name(value="System.out"))"#,
            )
        );
    }
}
