//! CLI command implementations.
//!
//! Each `run_*` function takes already-parsed inputs and returns the text to
//! print, so the commands can be exercised without spawning the binary.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use jast_tree::{
    Category, HookResult, Multiplicity, Node, NodeKind, NodeVisitor, Strategy, TryTraversal,
    VisitResult, WalkOptions, Walker,
};

use crate::error::JastError;
use crate::output::{KindSchema, SchemaResponse, StatsResponse, SCHEMA_VERSION};

// ============================================================================
// Input
// ============================================================================

/// Load a tree serialized as JSON (externally tagged, see `jast_tree::Node`).
///
/// Nesting depth is unbounded: the deserializer grows its stack on demand
/// instead of stopping at serde_json's default recursion limit.
pub fn load_tree(path: &Path) -> Result<Node, JastError> {
    let shown = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => JastError::FileNotFound {
            path: shown.clone(),
        },
        _ => JastError::Io {
            path: shown.clone(),
            source,
        },
    })?;
    let tree = parse_tree(&text).map_err(|err| JastError::MalformedTree {
        path: shown.clone(),
        message: err.to_string(),
    })?;
    debug!(path = %shown, root = %tree.kind(), "loaded tree");
    Ok(tree)
}

fn parse_tree(text: &str) -> serde_json::Result<Node> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let tree = Node::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(tree)
}

// ============================================================================
// dump
// ============================================================================

/// Render a tree as its representation, or as pretty JSON.
pub fn run_dump(tree: &Node, json: bool) -> Result<String, JastError> {
    if json {
        Ok(serde_json::to_string_pretty(tree)?)
    } else {
        Ok(tree.to_string())
    }
}

// ============================================================================
// schema
// ============================================================================

/// Describe the declared fields of one kind, or of every kind.
pub fn run_schema(kind: Option<&str>, json: bool) -> Result<String, JastError> {
    let kinds: Vec<NodeKind> = match kind {
        Some(name) => vec![NodeKind::from_name(name)
            .ok_or_else(|| JastError::invalid_args(format!("unknown node kind '{name}'")))?],
        None => NodeKind::ALL.to_vec(),
    };

    if json {
        let response = SchemaResponse::new(kinds.into_iter().map(KindSchema::of).collect());
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let mut out = String::new();
    for kind in kinds {
        let _ = writeln!(out, "{kind} ({})", kind.category());
        for spec in kind.fields() {
            let optional = match (spec.required, spec.multiplicity) {
                (true, _) | (false, Multiplicity::OptionalChild) => "",
                (false, _) => ", optional",
            };
            let _ = writeln!(out, "  {}: {}{optional}", spec.name, spec.multiplicity.name());
        }
    }
    Ok(out)
}

// ============================================================================
// trace
// ============================================================================

/// Records every hook event as an indented line.
struct Tracer {
    lines: Vec<String>,
    depth: usize,
    try_traversal: TryTraversal,
    verbose: bool,
}

impl Tracer {
    fn push(&mut self, hook: &str, node: &Node) {
        let mut line = format!("{}{hook} (line {})", "  ".repeat(self.depth), node.line());
        if self.verbose {
            let _ = write!(line, " {node}");
        }
        self.lines.push(line);
    }
}

impl NodeVisitor for Tracer {
    fn enter(&mut self, node: &Node) -> HookResult<VisitResult> {
        self.push(&format!("enter_{}", node.kind()), node);
        // A legacy `try` is never left, so its parts print at its own depth.
        let legacy_try =
            node.kind() == NodeKind::Try && self.try_traversal == TryTraversal::Legacy;
        if !legacy_try {
            self.depth += 1;
        }
        Ok(VisitResult::Continue)
    }

    fn leave(&mut self, node: &Node) -> HookResult {
        self.depth = self.depth.saturating_sub(1);
        self.push(&format!("leave_{}", node.kind()), node);
        Ok(())
    }

    fn catch_clause(&mut self, node: &Node) -> HookResult {
        self.push("catch_Catch", node);
        Ok(())
    }
}

/// List every hook the walker fires over `tree`, one per line.
pub fn run_trace(tree: &Node, options: WalkOptions, verbose: bool) -> Result<String, JastError> {
    let mut tracer = Tracer {
        lines: Vec::new(),
        depth: 0,
        try_traversal: options.try_traversal,
        verbose,
    };
    Walker::new(options).walk(&mut tracer, tree)?;
    info!(events = tracer.lines.len(), "trace complete");
    let mut out = tracer.lines.join("\n");
    out.push('\n');
    Ok(out)
}

// ============================================================================
// stats
// ============================================================================

/// Counts nodes per kind and tracks nesting depth.
#[derive(Default)]
struct KindCounter {
    kinds: BTreeMap<NodeKind, usize>,
    depth: usize,
    max_depth: usize,
}

impl NodeVisitor for KindCounter {
    fn enter(&mut self, node: &Node) -> HookResult<VisitResult> {
        *self.kinds.entry(node.kind()).or_default() += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(VisitResult::Continue)
    }

    fn leave(&mut self, _node: &Node) -> HookResult {
        self.depth -= 1;
        Ok(())
    }

    fn catch_clause(&mut self, _node: &Node) -> HookResult {
        Ok(())
    }
}

/// Count the nodes of a tree per kind and per category.
///
/// Every node is counted, including the parts of `try` statements that the
/// legacy traversal skips. The walk is iterative, so depth is not limited by
/// the thread's stack.
pub fn stats(tree: &Node) -> Result<StatsResponse, JastError> {
    let mut counter = KindCounter::default();
    let options = WalkOptions {
        strategy: Strategy::Iterative,
        try_traversal: TryTraversal::Complete,
    };
    Walker::new(options).walk(&mut counter, tree)?;

    let mut categories: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|&category| (category, 0)).collect();
    for (kind, count) in &counter.kinds {
        *categories.entry(kind.category()).or_default() += count;
    }
    Ok(StatsResponse {
        status: "ok".to_string(),
        schema_version: SCHEMA_VERSION.to_string(),
        total: counter.kinds.values().sum(),
        max_depth: counter.max_depth,
        categories,
        kinds: counter.kinds,
    })
}

/// Render [`stats`] as text or pretty JSON.
pub fn run_stats(tree: &Node, json: bool) -> Result<String, JastError> {
    let stats = stats(tree)?;
    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }
    let mut out = String::new();
    let _ = writeln!(out, "nodes: {}", stats.total);
    let _ = writeln!(out, "max depth: {}", stats.max_depth);
    for (category, count) in &stats.categories {
        let _ = writeln!(out, "{category}: {count}");
    }
    for (kind, count) in &stats.kinds {
        let _ = writeln!(out, "  {kind}: {count}");
    }
    Ok(out)
}
