// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declarative macros shared by the node model and the visitor.
//!
//! Every concrete kind is declared exactly once through [`node!`], which
//! derives its struct, its static schema, structural equality and its
//! representation from the ordered field list. [`for_each_node_kind!`] is the
//! single list of kinds; the `Node` enum, the `Visitor` trait and the
//! per-kind dispatch are all generated from it.

/// Invoke `$callback!` with the name of every concrete node kind.
///
/// The order here is the order of `Node` variants and of `NodeKind::ALL`.
macro_rules! for_each_node_kind {
    ($callback:ident) => {
        $callback! {
            // Declarations
            CompilationUnit,
            PackageDeclaration,
            ImportDeclaration,
            ClassDeclaration,
            ClassInitializer,
            ConstructorDeclaration,
            EmptyDeclaration,
            FieldDeclaration,
            MethodDeclaration,
            FormalParameter,
            Variable,
            VariableDeclarator,
            Throws,
            InterfaceDeclaration,
            EnumDeclaration,
            EnumConstant,
            AnnotationDeclaration,
            AnnotationMethodDeclaration,
            Annotation,
            AnnotationMember,
            Modifier,
            // Types
            Type,
            Wildcard,
            WildcardBound,
            TypeParameter,
            // Expressions
            BinaryExpression,
            Assignment,
            Conditional,
            ConditionalOr,
            ConditionalAnd,
            Or,
            Xor,
            And,
            Equality,
            InstanceOf,
            Relational,
            Shift,
            Additive,
            Multiplicative,
            Unary,
            Cast,
            MethodInvocation,
            InstanceCreation,
            FieldAccess,
            ArrayAccess,
            ArrayCreation,
            ArrayInitializer,
            Literal,
            ClassLiteral,
            Name,
            // Statements
            Empty,
            Block,
            VariableDeclaration,
            IfThenElse,
            While,
            For,
            ForEach,
            Assert,
            Switch,
            SwitchCase,
            DoWhile,
            Continue,
            Break,
            Return,
            Synchronized,
            Throw,
            Try,
            Catch,
            Resource,
            ConstructorInvocation,
            ExpressionStatement,
        }
    };
}

/// Declared name of a field: the identifier, or the explicit `as "label"`.
macro_rules! field_label {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident $label:literal) => {
        $label
    };
}

/// A field is required unless it carries a `= default` marker.
macro_rules! field_required {
    () => {
        true
    };
    ($default:ident) => {
        false
    };
}

/// Declare one or more node kinds.
///
/// Each field is written in declared order as `name: Type`, optionally
/// renamed with `as "label"` (for Rust keywords) and optionally marked
/// `= default` (or `= default("path")`) when the producer may omit it. The
/// Rust type of a field fixes its multiplicity:
///
/// | Type                | Multiplicity    |
/// |---------------------|-----------------|
/// | `String`, `Option<String>`, `u32`, `bool` | scalar |
/// | `Box<Node>`         | required child  |
/// | `Option<Box<Node>>` | optional child  |
/// | `Vec<Node>`         | child sequence  |
///
/// ```ignore
/// node! {
///     /// A `while` loop.
///     pub struct While: Statement {
///         predicate: Box<Node>,
///         body: Option<Box<Node>> = default,
///     }
/// }
/// ```
macro_rules! node {
    ($(
        $(#[$meta:meta])*
        pub struct $kind:ident : $category:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $label:literal)? : $field_ty:ty
                    $(= $default:ident $(($default_fn:literal))?)?
            ),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
            pub struct $kind {
                $(
                    $(#[$field_meta])*
                    $(#[serde($default $(= $default_fn)?)])?
                    $(#[serde(rename = $label)])?
                    pub $field: $field_ty,
                )*
                /// Source line of the construct; 1 when the producer did not supply one.
                #[serde(default = "crate::nodes::default_line")]
                pub line: u32,
            }

            impl $crate::nodes::Schema for $kind {
                const KIND: $crate::nodes::NodeKind = $crate::nodes::NodeKind::$kind;
                const CATEGORY: $crate::nodes::Category = $crate::nodes::Category::$category;
                const FIELDS: &'static [$crate::nodes::FieldSpec] = &[
                    $(
                        $crate::nodes::FieldSpec {
                            name: field_label!($field $($label)?),
                            multiplicity:
                                <$field_ty as $crate::nodes::FieldType>::MULTIPLICITY,
                            required: field_required!($($default)?),
                        },
                    )*
                ];

                fn fields(&self) -> Vec<$crate::nodes::Field<'_>> {
                    vec![
                        $(
                            $crate::nodes::Field {
                                name: field_label!($field $($label)?),
                                value: $crate::nodes::FieldType::field_value(&self.$field),
                            },
                        )*
                    ]
                }

                fn line(&self) -> u32 {
                    self.line
                }
            }

            impl $kind {
                /// Move every child out onto `pending`.
                pub(crate) fn detach_children(
                    &mut self,
                    _pending: &mut Vec<$crate::nodes::Node>,
                ) {
                    $($crate::nodes::FieldType::detach(&mut self.$field, _pending);)*
                }
            }

            impl PartialEq for $kind {
                fn eq(&self, _other: &Self) -> bool {
                    true $(&& self.$field == _other.$field)*
                }
            }

            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::nodes::repr::write_node(
                        f,
                        <Self as $crate::nodes::Schema>::KIND.name(),
                        &$crate::nodes::Schema::fields(self),
                    )
                }
            }

            impl From<$kind> for $crate::nodes::Node {
                fn from(node: $kind) -> Self {
                    $crate::nodes::Node::$kind(node)
                }
            }
        )*
    };
}
