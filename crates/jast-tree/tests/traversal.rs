// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal order, pruning, `try` handling and hook errors.

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use jast_tree::*;
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// Helpers
// ============================================================================

/// Records every hook as `<phase> <label>`, where the label is the text of a
/// name, literal or variable and the kind of anything else.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    prune: Vec<NodeKind>,
}

fn label(node: &Node) -> String {
    match node {
        Node::Name(name) => name.value.clone(),
        Node::Literal(literal) => literal.value.clone(),
        Node::Variable(variable) => variable.name.clone(),
        other => other.kind().to_string(),
    }
}

impl NodeVisitor for Recorder {
    fn enter(&mut self, node: &Node) -> HookResult<VisitResult> {
        self.events.push(format!("enter {}", label(node)));
        Ok((!self.prune.contains(&node.kind())).into())
    }

    fn leave(&mut self, node: &Node) -> HookResult {
        self.events.push(format!("leave {}", label(node)));
        Ok(())
    }

    fn catch_clause(&mut self, node: &Node) -> HookResult {
        self.events.push(format!("catch {}", label(node)));
        Ok(())
    }
}

fn trace(options: WalkOptions, prune: &[NodeKind], root: &Node) -> Vec<String> {
    let mut recorder = Recorder {
        prune: prune.to_vec(),
        ..Recorder::default()
    };
    Walker::new(options).walk(&mut recorder, root).unwrap();
    recorder.events
}

fn stmt(name: &str) -> Node {
    ExpressionStatement::new(MethodInvocation::new(name)).into()
}

/// `try { a(); b(); } catch (E e) { handle(); } finally { cleanup(); }`
fn try_catch_finally() -> Node {
    Try {
        catches: vec![Catch {
            types: vec![Type::new(Name::new("E")).into()],
            block: Some(Box::new(Block::new(vec![stmt("handle")]).into())),
            ..Catch::new(Variable::new("e"))
        }
        .into()],
        finally: Some(Box::new(Block::new(vec![stmt("cleanup")]).into())),
        ..Try::new(Block::new(vec![stmt("a"), stmt("b")]))
    }
    .into()
}

/// A method body exercising most statement kinds.
fn method_body() -> Node {
    let loop_body = Block::new(vec![
        IfThenElse {
            if_true: Some(Box::new(Continue::new().into())),
            if_false: Some(Box::new(Break::new().into())),
            ..IfThenElse::new(Relational::new("<", Name::new("i"), Literal::new("10")))
        }
        .into(),
        try_catch_finally(),
    ]);
    MethodDeclaration {
        parameters: vec![
            FormalParameter::new(Variable::new("args"), Type::new(Name::new("String"))).into(),
        ],
        body: vec![
            VariableDeclaration::new(
                Type::new(Name::new("int")),
                vec![VariableDeclarator {
                    initializer: Some(Box::new(Literal::new("0").into())),
                    ..VariableDeclarator::new(Variable::new("i"))
                }
                .into()],
            )
            .into(),
            While {
                body: Some(Box::new(loop_body.into())),
                ..While::new(Literal::new("true"))
            }
            .into(),
            Switch {
                switch_cases: vec![SwitchCase {
                    body: vec![Return::new().into()],
                    ..SwitchCase::new(vec![Name::new("default").into()])
                }
                .into()],
                ..Switch::new(Name::new("i"))
            }
            .into(),
        ],
        ..MethodDeclaration::new("main")
    }
    .into()
}

fn recursive(try_traversal: TryTraversal) -> WalkOptions {
    WalkOptions {
        strategy: Strategy::Recursive,
        try_traversal,
    }
}

fn iterative(try_traversal: TryTraversal) -> WalkOptions {
    WalkOptions {
        strategy: Strategy::Iterative,
        try_traversal,
    }
}

// ============================================================================
// Generic traversal
// ============================================================================

#[test]
fn test_required_child_then_sequence_order() {
    // `expression` is a required child declared before the `switch_cases`
    // sequence.
    let root = Node::from(Switch {
        switch_cases: vec![
            SwitchCase::new(vec![Literal::new("1").into()]).into(),
            SwitchCase::new(vec![Literal::new("2").into()]).into(),
        ],
        ..Switch::new(Name::new("a"))
    });
    assert_eq!(
        trace(WalkOptions::default(), &[NodeKind::SwitchCase], &root),
        [
            "enter Switch",
            "enter a",
            "leave a",
            "enter SwitchCase",
            "leave SwitchCase",
            "enter SwitchCase",
            "leave SwitchCase",
            "leave Switch",
        ]
    );
}

#[test]
fn test_pruned_subtree_fires_only_its_own_exit() {
    let root = Node::from(Block::new(vec![
        While {
            body: Some(Box::new(Block::new(vec![stmt("inner")]).into())),
            ..While::new(Name::new("cond"))
        }
        .into(),
        stmt("after"),
    ]));
    let events = trace(WalkOptions::default(), &[NodeKind::While], &root);
    assert_eq!(
        events,
        [
            "enter Block",
            "enter While",
            "leave While",
            "enter ExpressionStatement",
            "enter MethodInvocation",
            "leave MethodInvocation",
            "leave ExpressionStatement",
            "leave Block",
        ]
    );
    assert!(!events.iter().any(|event| event.contains("cond")));
}

#[test]
fn test_absent_optionals_and_scalars_are_skipped() {
    let root = Node::from(IfThenElse::new(Name::new("p")));
    assert_eq!(
        trace(WalkOptions::default(), &[], &root),
        ["enter IfThenElse", "enter p", "leave p", "leave IfThenElse"]
    );
}

// ============================================================================
// Try
// ============================================================================

#[test]
fn test_legacy_try_sequence() {
    assert_eq!(
        trace(WalkOptions::default(), &[], &try_catch_finally()),
        [
            "enter Try",
            // main block statements, the Block itself is not entered
            "enter ExpressionStatement",
            "enter MethodInvocation",
            "leave MethodInvocation",
            "leave ExpressionStatement",
            "enter ExpressionStatement",
            "enter MethodInvocation",
            "leave MethodInvocation",
            "leave ExpressionStatement",
            // one catch hook, no recursion into the clause
            "catch Catch",
            // finally block, walked generically
            "enter Block",
            "enter ExpressionStatement",
            "enter MethodInvocation",
            "leave MethodInvocation",
            "leave ExpressionStatement",
            "leave Block",
        ]
    );
}

#[test]
fn test_legacy_try_pruned() {
    assert_eq!(
        trace(WalkOptions::default(), &[NodeKind::Try, NodeKind::Block], &try_catch_finally()),
        ["enter Try", "catch Catch", "enter Block", "leave Block"]
    );
}

#[test]
fn test_complete_try_sequence() {
    let events = trace(
        recursive(TryTraversal::Complete),
        &[NodeKind::ExpressionStatement],
        &try_catch_finally(),
    );
    assert_eq!(
        events,
        [
            "enter Try",
            "enter Block",
            "enter ExpressionStatement",
            "leave ExpressionStatement",
            "enter ExpressionStatement",
            "leave ExpressionStatement",
            "leave Block",
            "catch Catch",
            "enter Catch",
            "enter e",
            "leave e",
            "enter Type",
            "enter E",
            "leave E",
            "leave Type",
            "enter Block",
            "enter ExpressionStatement",
            "leave ExpressionStatement",
            "leave Block",
            "leave Catch",
            "enter Block",
            "enter ExpressionStatement",
            "leave ExpressionStatement",
            "leave Block",
            "leave Try",
        ]
    );
}

#[test]
fn test_catch_hook_sees_clause_through_typed_visitor() {
    #[derive(Default)]
    struct Handlers {
        caught: Vec<String>,
        left_try: bool,
    }

    impl Visitor for Handlers {
        fn visit_catch(&mut self, node: &Catch) -> HookResult {
            if let Node::Variable(variable) = &*node.variable {
                self.caught.push(variable.name.clone());
            }
            Ok(())
        }

        fn leave_try(&mut self, _node: &Try) -> HookResult {
            self.left_try = true;
            Ok(())
        }
    }

    let mut handlers = Handlers::default();
    walk(&mut handlers, &try_catch_finally()).unwrap();
    assert_eq!(handlers.caught, ["e"]);
    assert!(!handlers.left_try);

    let mut handlers = Handlers::default();
    Walker::new(recursive(TryTraversal::Complete))
        .walk(&mut handlers, &try_catch_finally())
        .unwrap();
    assert_eq!(handlers.caught, ["e"]);
    assert!(handlers.left_try);
}

// ============================================================================
// Strategies
// ============================================================================

#[test]
fn test_iterative_matches_recursive() {
    let trees = [method_body(), try_catch_finally(), stmt("x")];
    let prunes: [&[NodeKind]; 4] = [
        &[],
        &[NodeKind::Try],
        &[NodeKind::Block],
        &[NodeKind::IfThenElse, NodeKind::SwitchCase],
    ];
    for tree in &trees {
        for mode in [TryTraversal::Legacy, TryTraversal::Complete] {
            for prune in prunes {
                assert_eq!(
                    trace(recursive(mode), prune, tree),
                    trace(iterative(mode), prune, tree),
                    "{mode:?} prune={prune:?}"
                );
            }
        }
    }
}

#[test]
fn test_iterative_handles_deep_trees() {
    let mut expr = Node::from(Name::new("x"));
    for _ in 0..100_000 {
        expr = Unary::new("-", expr).into();
    }
    let mut count = 0usize;
    {
        let mut table = HookTable::new();
        table.on_enter(NodeKind::Unary, |_| {
            count += 1;
            Ok(VisitResult::Continue)
        });
        Walker::new(iterative(TryTraversal::Legacy))
            .walk(&mut table, &expr)
            .unwrap();
    }
    assert_eq!(count, 100_000);
    drop(expr);
}

// ============================================================================
// Default visitor and diagnostics
// ============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_info<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_default_visitor_is_silent() {
    let tree = method_body();
    let output = capture_info(|| {
        for options in [recursive(TryTraversal::Legacy), iterative(TryTraversal::Complete)] {
            Walker::new(options)
                .walk(&mut DefaultVisitor::default(), &tree)
                .unwrap();
        }
        walk(&mut HookTable::new(), &tree).unwrap();
    });
    assert_eq!(output, "");
}

#[test]
fn test_verbose_visitor_reports_unimplemented_hooks() {
    let tree = Node::from(Return {
        result: Some(Box::new(Name::new("x").into())),
        ..Return::new()
    });
    let output = capture_info(|| {
        walk(&mut DefaultVisitor { verbose: true }, &tree).unwrap();
    });
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "{output}");
    assert!(lines.iter().all(|line| line.contains("unimplemented hook, ignoring")));
    assert!(lines[0].contains("hook=enter_Return"));
    assert!(lines[1].contains("hook=enter_Name"));
    assert!(lines[1].contains(r#"node=Name(value="x")"#));
    assert!(lines[3].contains("hook=leave_Return"));
}

#[test]
fn test_verbose_table_reports_only_missing_hooks() {
    let tree = Node::from(Return {
        result: Some(Box::new(Name::new("x").into())),
        ..Return::new()
    });
    let output = capture_info(|| {
        let mut table = HookTable::new().verbose(true);
        table
            .on_enter(NodeKind::Return, |_| Ok(VisitResult::Continue))
            .on_leave(NodeKind::Return, |_| Ok(()))
            .on_named("enter_Name", |_| Ok(VisitResult::Continue))
            .unwrap();
        walk(&mut table, &tree).unwrap();
    });
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1, "{output}");
    assert!(lines[0].contains("hook=leave_Name"));
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, PartialEq)]
struct Forbidden(String);

impl fmt::Display for Forbidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call to {} is forbidden", self.0)
    }
}

impl std::error::Error for Forbidden {}

struct Guard {
    seen: Vec<String>,
}

impl Visitor for Guard {
    fn enter_method_invocation(&mut self, node: &MethodInvocation) -> HookResult<VisitResult> {
        if node.name == "exit" {
            return Err(Box::new(Forbidden(node.name.clone())));
        }
        self.seen.push(node.name.clone());
        Ok(VisitResult::Continue)
    }
}

#[test]
fn test_hook_error_stops_walk_unchanged() {
    let tree = Node::from(Block::new(vec![stmt("a"), stmt("exit"), stmt("b")]));
    for strategy in [Strategy::Recursive, Strategy::Iterative] {
        let mut guard = Guard { seen: Vec::new() };
        let options = WalkOptions {
            strategy,
            ..WalkOptions::default()
        };
        let err = Walker::new(options).walk(&mut guard, &tree).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Forbidden>(),
            Some(&Forbidden("exit".to_string()))
        );
        assert_eq!(guard.seen, ["a"]);
    }
}

#[test]
fn test_invalid_hook_names_fail_fast() {
    let mut table = HookTable::new();
    for name in ["visit_Name", "Name", "enter_Lambda", "catch_Try"] {
        let err = table
            .on_named(name, |_| Ok(VisitResult::Continue))
            .unwrap_err();
        assert!(matches!(err, TreeError::InvalidHookName { .. }), "{name}");
    }
    assert!("exit_Name".parse::<Hook>().is_err());
    assert_eq!(
        "leave_Name".parse::<Hook>().unwrap(),
        Hook {
            phase: Phase::Leave,
            kind: NodeKind::Name
        }
    );
}
