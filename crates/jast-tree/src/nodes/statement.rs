// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statements, blocks and the parts of `try` and `switch`.

use super::{boxed, boxed_opt, Node, DEFAULT_LINE};

node! {
    /// The empty statement `;`.
    pub struct Empty: Statement {}

    pub struct Block: Statement {
        statements: Vec<Node> = default,
    }

    /// A local variable declaration. Same schema as
    /// [`FieldDeclaration`](super::FieldDeclaration), different kind.
    pub struct VariableDeclaration: Statement {
        r#type as "type": Box<Node>,
        variable_declarators: Vec<Node>,
        modifiers: Vec<Node> = default,
    }

    pub struct IfThenElse: Statement {
        predicate: Box<Node>,
        if_true: Option<Box<Node>> = default,
        if_false: Option<Box<Node>> = default,
    }

    pub struct While: Statement {
        predicate: Box<Node>,
        body: Option<Box<Node>> = default,
    }

    /// The classic three-clause `for`.
    pub struct For: Statement {
        init: Vec<Node> = default,
        predicate: Option<Box<Node>> = default,
        update: Vec<Node> = default,
        body: Box<Node>,
    }

    /// `for (T variable : iterable) body`
    pub struct ForEach: Statement {
        r#type as "type": Box<Node>,
        variable: Box<Node>,
        iterable: Box<Node>,
        body: Box<Node>,
        modifiers: Vec<Node> = default,
    }

    pub struct Assert: Statement {
        predicate: Box<Node>,
        message: Option<Box<Node>> = default,
    }

    pub struct Switch: Statement {
        expression: Box<Node>,
        switch_cases: Vec<Node> = default,
    }

    /// One group of labels and the statements under them. The `default`
    /// label is a [`Name`](super::Name) with value `"default"`.
    pub struct SwitchCase: Statement {
        cases: Vec<Node>,
        body: Vec<Node> = default,
    }

    pub struct DoWhile: Statement {
        predicate: Box<Node>,
        body: Option<Box<Node>> = default,
    }

    pub struct Continue: Statement {
        label: Option<String> = default,
    }

    pub struct Break: Statement {
        label: Option<String> = default,
    }

    pub struct Return: Statement {
        result: Option<Box<Node>> = default,
    }

    pub struct Synchronized: Statement {
        monitor: Box<Node>,
        body: Box<Node>,
    }

    pub struct Throw: Statement {
        exception: Box<Node>,
    }

    /// `try (resources) block catches finally`
    pub struct Try: Statement {
        block: Box<Node>,
        catches: Vec<Node> = default,
        finally: Option<Box<Node>> = default,
        resources: Vec<Node> = default,
    }

    /// `catch (T1 | T2 variable) block`
    pub struct Catch: Statement {
        variable: Box<Node>,
        modifiers: Vec<Node> = default,
        types: Vec<Node> = default,
        block: Option<Box<Node>> = default,
    }

    /// A try-with-resources declaration.
    pub struct Resource: Statement {
        variable: Box<Node>,
        r#type as "type": Option<Box<Node>> = default,
        modifiers: Vec<Node> = default,
        initializer: Option<Box<Node>> = default,
    }

    /// Explicit `this(...)` or `super(...)` call in a constructor body.
    pub struct ConstructorInvocation: Statement {
        name: String,
        target: Option<Box<Node>> = default,
        type_arguments: Vec<Node> = default,
        arguments: Vec<Node> = default,
    }

    pub struct ExpressionStatement: Statement {
        expression: Box<Node>,
    }
}

impl Empty {
    pub fn new() -> Self {
        Self { line: DEFAULT_LINE }
    }
}

impl Default for Empty {
    fn default() -> Self {
        Self::new()
    }
}

impl Block {
    pub fn new(statements: Vec<Node>) -> Self {
        Self {
            statements,
            line: DEFAULT_LINE,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl VariableDeclaration {
    pub fn new(r#type: impl Into<Node>, variable_declarators: Vec<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            variable_declarators,
            modifiers: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl IfThenElse {
    pub fn new(predicate: impl Into<Node>) -> Self {
        Self {
            predicate: boxed(predicate),
            if_true: None,
            if_false: None,
            line: DEFAULT_LINE,
        }
    }
}

impl While {
    pub fn new(predicate: impl Into<Node>) -> Self {
        Self {
            predicate: boxed(predicate),
            body: None,
            line: DEFAULT_LINE,
        }
    }
}

impl For {
    pub fn new(
        init: Vec<Node>,
        predicate: Option<impl Into<Node>>,
        update: Vec<Node>,
        body: impl Into<Node>,
    ) -> Self {
        Self {
            init,
            predicate: boxed_opt(predicate),
            update,
            body: boxed(body),
            line: DEFAULT_LINE,
        }
    }
}

impl ForEach {
    pub fn new(
        r#type: impl Into<Node>,
        variable: impl Into<Node>,
        iterable: impl Into<Node>,
        body: impl Into<Node>,
    ) -> Self {
        Self {
            r#type: boxed(r#type),
            variable: boxed(variable),
            iterable: boxed(iterable),
            body: boxed(body),
            modifiers: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl Assert {
    pub fn new(predicate: impl Into<Node>) -> Self {
        Self {
            predicate: boxed(predicate),
            message: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Switch {
    pub fn new(expression: impl Into<Node>) -> Self {
        Self {
            expression: boxed(expression),
            switch_cases: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl SwitchCase {
    pub fn new(cases: Vec<Node>) -> Self {
        Self {
            cases,
            body: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl DoWhile {
    pub fn new(predicate: impl Into<Node>) -> Self {
        Self {
            predicate: boxed(predicate),
            body: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Continue {
    pub fn new() -> Self {
        Self {
            label: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Default for Continue {
    fn default() -> Self {
        Self::new()
    }
}

impl Break {
    pub fn new() -> Self {
        Self {
            label: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Default for Break {
    fn default() -> Self {
        Self::new()
    }
}

impl Return {
    pub fn new() -> Self {
        Self {
            result: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Default for Return {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronized {
    pub fn new(monitor: impl Into<Node>, body: impl Into<Node>) -> Self {
        Self {
            monitor: boxed(monitor),
            body: boxed(body),
            line: DEFAULT_LINE,
        }
    }
}

impl Throw {
    pub fn new(exception: impl Into<Node>) -> Self {
        Self {
            exception: boxed(exception),
            line: DEFAULT_LINE,
        }
    }
}

impl Try {
    pub fn new(block: impl Into<Node>) -> Self {
        Self {
            block: boxed(block),
            catches: Vec::new(),
            finally: None,
            resources: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl Catch {
    pub fn new(variable: impl Into<Node>) -> Self {
        Self {
            variable: boxed(variable),
            modifiers: Vec::new(),
            types: Vec::new(),
            block: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Resource {
    pub fn new(variable: impl Into<Node>) -> Self {
        Self {
            variable: boxed(variable),
            r#type: None,
            modifiers: Vec::new(),
            initializer: None,
            line: DEFAULT_LINE,
        }
    }
}

impl ConstructorInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: None,
            type_arguments: Vec::new(),
            arguments: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl ExpressionStatement {
    pub fn new(expression: impl Into<Node>) -> Self {
        Self {
            expression: boxed(expression),
            line: DEFAULT_LINE,
        }
    }
}
