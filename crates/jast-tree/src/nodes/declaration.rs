// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Compilation units, type and member declarations, annotations.

use super::{boxed, Node, DEFAULT_LINE};

node! {
    /// A whole source file.
    pub struct CompilationUnit: Declaration {
        package_declaration: Option<Box<Node>> = default,
        import_declarations: Vec<Node> = default,
        type_declarations: Vec<Node> = default,
    }

    /// `package a.b.c;`
    pub struct PackageDeclaration: Declaration {
        name: Box<Node>,
        modifiers: Vec<Node> = default,
    }

    /// `import [static] a.b.C[.*];`
    pub struct ImportDeclaration: Declaration {
        name: Box<Node>,
        r#static as "static": bool = default,
        on_demand: bool = default,
    }

    /// A `class` declaration.
    pub struct ClassDeclaration: Declaration {
        name: String,
        body: Vec<Node>,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        extends: Option<Box<Node>> = default,
        implements: Vec<Node> = default,
    }

    /// An instance or `static` initializer block inside a class body.
    pub struct ClassInitializer: Declaration {
        block: Box<Node>,
        r#static as "static": bool = default,
    }

    pub struct ConstructorDeclaration: Declaration {
        name: String,
        /// Statements of the constructor body.
        block: Vec<Node>,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        parameters: Vec<Node> = default,
        throws: Option<Box<Node>> = default,
    }

    /// A stray `;` in a class body or at the top level.
    pub struct EmptyDeclaration: Declaration {}

    pub struct FieldDeclaration: Declaration {
        r#type as "type": Box<Node>,
        variable_declarators: Vec<Node>,
        modifiers: Vec<Node> = default,
    }

    /// A method declaration. Abstract and interface methods have an empty
    /// `body` and `abstract` set.
    pub struct MethodDeclaration: Declaration {
        name: String,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        parameters: Vec<Node> = default,
        return_type: Box<Node> = default("crate::nodes::void_return_type"),
        body: Vec<Node> = default,
        r#abstract as "abstract": bool = default,
        /// Array dimensions written after the parameter list (`int f()[]`).
        extended_dims: u32 = default,
        throws: Option<Box<Node>> = default,
    }

    pub struct FormalParameter: Declaration {
        variable: Box<Node>,
        r#type as "type": Box<Node>,
        modifiers: Vec<Node> = default,
        vararg: bool = default,
    }

    /// A declared name with its trailing array dimensions (`x[][]`).
    pub struct Variable: Declaration {
        name: String,
        dimensions: u32 = default,
    }

    pub struct VariableDeclarator: Declaration {
        variable: Box<Node>,
        initializer: Option<Box<Node>> = default,
    }

    pub struct Throws: Declaration {
        types: Vec<Node>,
    }

    pub struct InterfaceDeclaration: Declaration {
        name: String,
        modifiers: Vec<Node> = default,
        extends: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        body: Vec<Node> = default,
    }

    pub struct EnumDeclaration: Declaration {
        name: String,
        implements: Vec<Node> = default,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        body: Vec<Node> = default,
    }

    pub struct EnumConstant: Declaration {
        name: String,
        arguments: Vec<Node> = default,
        modifiers: Vec<Node> = default,
        body: Vec<Node> = default,
    }

    /// `@interface Name { ... }`
    pub struct AnnotationDeclaration: Declaration {
        name: String,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        extends: Option<Box<Node>> = default,
        implements: Vec<Node> = default,
        body: Vec<Node> = default,
    }

    /// An element of an annotation type (`String value() default "";`).
    pub struct AnnotationMethodDeclaration: Declaration {
        name: String,
        r#type as "type": Box<Node>,
        parameters: Vec<Node> = default,
        default: Option<Box<Node>> = default,
        modifiers: Vec<Node> = default,
        type_parameters: Vec<Node> = default,
        extended_dims: u32 = default,
    }

    /// An annotation use: `@Name`, `@Name(value)` or `@Name(a = 1, b = 2)`.
    pub struct Annotation: Declaration {
        name: Box<Node>,
        members: Vec<Node> = default,
        single_member: Option<Box<Node>> = default,
    }

    pub struct AnnotationMember: Declaration {
        name: Box<Node>,
        value: Box<Node>,
    }

    /// A keyword modifier such as `public`, `static` or `final`.
    /// Annotations used as modifiers appear as [`Annotation`] nodes instead.
    pub struct Modifier: Declaration {
        keyword: String,
    }
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self {
            package_declaration: None,
            import_declarations: Vec::new(),
            type_declarations: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl Default for CompilationUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageDeclaration {
    pub fn new(name: impl Into<Node>) -> Self {
        Self {
            name: boxed(name),
            modifiers: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl ImportDeclaration {
    pub fn new(name: impl Into<Node>) -> Self {
        Self {
            name: boxed(name),
            r#static: false,
            on_demand: false,
            line: DEFAULT_LINE,
        }
    }
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, body: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            body,
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            extends: None,
            implements: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl ClassInitializer {
    pub fn new(block: impl Into<Node>) -> Self {
        Self {
            block: boxed(block),
            r#static: false,
            line: DEFAULT_LINE,
        }
    }
}

impl ConstructorDeclaration {
    pub fn new(name: impl Into<String>, block: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            block,
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            throws: None,
            line: DEFAULT_LINE,
        }
    }
}

impl EmptyDeclaration {
    pub fn new() -> Self {
        Self { line: DEFAULT_LINE }
    }
}

impl Default for EmptyDeclaration {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldDeclaration {
    pub fn new(r#type: impl Into<Node>, variable_declarators: Vec<Node>) -> Self {
        Self {
            r#type: boxed(r#type),
            variable_declarators,
            modifiers: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl MethodDeclaration {
    /// A method returning `void` with no parameters and an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: super::void_return_type(),
            body: Vec::new(),
            r#abstract: false,
            extended_dims: 0,
            throws: None,
            line: DEFAULT_LINE,
        }
    }
}

impl FormalParameter {
    pub fn new(variable: impl Into<Node>, r#type: impl Into<Node>) -> Self {
        Self {
            variable: boxed(variable),
            r#type: boxed(r#type),
            modifiers: Vec::new(),
            vararg: false,
            line: DEFAULT_LINE,
        }
    }
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: 0,
            line: DEFAULT_LINE,
        }
    }
}

impl VariableDeclarator {
    pub fn new(variable: impl Into<Node>) -> Self {
        Self {
            variable: boxed(variable),
            initializer: None,
            line: DEFAULT_LINE,
        }
    }
}

impl Throws {
    pub fn new(types: Vec<Node>) -> Self {
        Self {
            types,
            line: DEFAULT_LINE,
        }
    }
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            extends: Vec::new(),
            type_parameters: Vec::new(),
            body: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implements: Vec::new(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            body: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            modifiers: Vec::new(),
            body: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl AnnotationDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            extends: None,
            implements: Vec::new(),
            body: Vec::new(),
            line: DEFAULT_LINE,
        }
    }
}

impl AnnotationMethodDeclaration {
    pub fn new(name: impl Into<String>, r#type: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            r#type: boxed(r#type),
            parameters: Vec::new(),
            default: None,
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            extended_dims: 0,
            line: DEFAULT_LINE,
        }
    }
}

impl Annotation {
    pub fn new(name: impl Into<Node>) -> Self {
        Self {
            name: boxed(name),
            members: Vec::new(),
            single_member: None,
            line: DEFAULT_LINE,
        }
    }
}

impl AnnotationMember {
    pub fn new(name: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self {
            name: boxed(name),
            value: boxed(value),
            line: DEFAULT_LINE,
        }
    }
}

impl Modifier {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            line: DEFAULT_LINE,
        }
    }
}
